// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for the product gallery.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use scroll_timeline::SceneCatalog;
use support::{cleanup, click, create_mount_point};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

use vayyar_site::components::product_gallery::ProductGallery;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[function_component(Wrapper)]
fn wrapper() -> Html {
    let products = SceneCatalog::home().unwrap().products;
    html! { <ProductGallery {products} /> }
}

#[wasm_bindgen_test]
async fn first_product_is_selected_initially() {
    let products = SceneCatalog::home().unwrap().products;

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let cards = mount.query_selector_all(".product-card").unwrap();
    assert_eq!(cards.length() as usize, products.len());

    let detail = mount.query_selector(".product-detail h3").unwrap().unwrap();
    assert_eq!(detail.text_content().unwrap_or_default(), products[0].name);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn clicking_a_card_shows_its_details() {
    let products = SceneCatalog::home().unwrap().products;

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    click(&mount, ".product-card:nth-child(2)");
    sleep(Duration::ZERO).await;

    let active = mount.query_selector(".product-card.active").unwrap().unwrap();
    assert!(active
        .text_content()
        .unwrap_or_default()
        .contains(&products[1].name));

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains(&products[1].tagline));

    cleanup(&mount);
}
