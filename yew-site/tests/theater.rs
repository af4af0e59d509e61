// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Tests for theater mode dimming.
//
// While one section is focused, every other video-bearing section on the
// page carries the `dimmed` class.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use scroll_timeline::SceneCatalog;
use support::{cleanup, create_mount_point, has};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

use vayyar_site::components::scrolly_section::ScrollySection;
use vayyar_site::components::scrub_hero::ScrubHero;
use vayyar_site::components::tablet_demo::TabletSection;
use vayyar_site::context::TheaterCtx;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq)]
struct PageProps {
    focused: Option<String>,
}

#[function_component(Page)]
fn page(props: &PageProps) -> Html {
    let catalog = SceneCatalog::home().unwrap();
    let initial = props.focused.clone();
    let theater: TheaterCtx = use_state(move || initial);
    html! {
        <ContextProvider<TheaterCtx> context={theater}>
            <ScrubHero src="/videos/hero.mp4" product_src="/videos/product.mp4" />
            <TabletSection tablet={catalog.tablets[0].clone()} />
            { for catalog.sections.iter().map(|section| html! {
                <ScrollySection key={section.id.clone()} config={section.clone()} />
            }) }
        </ContextProvider<TheaterCtx>>
    }
}

#[wasm_bindgen_test]
async fn nothing_dims_without_a_focused_video() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! { <Page focused={None::<String>} /> }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    assert!(!has(&mount, ".dimmed"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn every_other_video_dims_in_theater_mode() {
    let focused = SceneCatalog::home().unwrap().sections[0].id.clone();

    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        let focused = SceneCatalog::home().unwrap().sections[0].id.clone();
        html! { <Page focused={Some(focused)} /> }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    assert!(has(&mount, ".scrub-hero.dimmed"));
    assert!(has(&mount, ".tablet-section.dimmed"));

    let own = mount
        .query_selector(&format!("#{focused}"))
        .unwrap()
        .expect("focused section should render");
    assert!(!own.class_list().contains("dimmed"), "focused video must not dim");

    let sections = mount.query_selector_all(".scrolly-section").unwrap();
    let dimmed = mount.query_selector_all(".scrolly-section.dimmed").unwrap();
    assert_eq!(dimmed.length(), sections.length() - 1);

    cleanup(&mount);
}
