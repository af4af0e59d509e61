// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for the contact form.
//
// Checks the rendered fields, the hidden honeypot and client-side
// validation. Nothing here reaches the network: every submission is
// rejected before the request is built.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{cleanup, click, create_mount_point, has, type_into};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

use vayyar_site::components::contact_form::ContactFormView;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[function_component(Wrapper)]
fn wrapper() -> Html {
    html! { <ContactFormView page_name="Test" /> }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn form_renders_every_field() {
    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    for name in ["firstName", "lastName", "email", "company", "jobTitle", "phone", "message"] {
        assert!(
            has(&mount, &format!("[name=\"{name}\"]")),
            "missing field {name}"
        );
    }
    assert!(has(&mount, ".contact-submit"));
    assert!(!has(&mount, ".contact-banner"), "no banner before submitting");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn honeypot_is_hidden_from_people() {
    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let honeypot = mount
        .query_selector(".contact-honeypot")
        .unwrap()
        .expect("honeypot wrapper should render");
    assert_eq!(honeypot.get_attribute("aria-hidden").as_deref(), Some("true"));

    let input = mount
        .query_selector("[name=\"website\"]")
        .unwrap()
        .expect("honeypot input should render");
    assert_eq!(input.get_attribute("tabindex").as_deref(), Some("-1"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn empty_submit_shows_validation_error() {
    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    click(&mount, ".contact-submit");
    sleep(Duration::ZERO).await;

    let banner = mount
        .query_selector(".contact-banner.error")
        .unwrap()
        .expect("validation error banner should render");
    assert_eq!(
        banner.text_content().unwrap_or_default(),
        "First name is required."
    );

    let button = mount.query_selector(".contact-submit").unwrap().unwrap();
    assert_eq!(button.text_content().unwrap_or_default(), "Send message");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn typed_values_reach_validation() {
    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    type_into(&mount, "[name=\"firstName\"]", "Ada");
    type_into(&mount, "[name=\"lastName\"]", "Lovelace");
    type_into(&mount, "[name=\"email\"]", "a@b@c.com");
    type_into(&mount, "[name=\"message\"]", "Please call me back.");
    sleep(Duration::ZERO).await;

    click(&mount, ".contact-submit");
    sleep(Duration::ZERO).await;

    let banner = mount
        .query_selector(".contact-banner.error")
        .unwrap()
        .expect("validation error banner should render");
    assert_eq!(
        banner.text_content().unwrap_or_default(),
        "Please enter a valid email address."
    );

    let message = mount
        .query_selector("[name=\"message\"]")
        .unwrap()
        .unwrap()
        .unchecked_into::<web_sys::HtmlTextAreaElement>();
    assert_eq!(message.value(), "Please call me back.");

    cleanup(&mount);
}
