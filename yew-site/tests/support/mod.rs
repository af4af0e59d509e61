// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for site component tests.
//
// Provides mount/cleanup helpers plus runtime-config and localStorage
// setup so individual test files stay focused on assertions.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use wasm_bindgen::JsCast;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Click the first element matching `selector` inside `mount`.
pub fn click(mount: &web_sys::Element, selector: &str) {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .unchecked_into::<web_sys::HtmlElement>()
        .click();
}

/// Set the value of an `<input>` or `<textarea>` and fire a bubbling `input`
/// event, as typing would.
pub fn type_into(mount: &web_sys::Element, selector: &str, value: &str) {
    let element = mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"));
    if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
        input.set_value(value);
    } else {
        element
            .unchecked_ref::<web_sys::HtmlTextAreaElement>()
            .set_value(value);
    }
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    let event = web_sys::Event::new_with_event_init_dict("input", &init).unwrap();
    element.dispatch_event(&event).unwrap();
}

pub fn has(mount: &web_sys::Element, selector: &str) -> bool {
    mount.query_selector(selector).unwrap().is_some()
}

// ---------------------------------------------------------------------------
// Runtime config injection
// ---------------------------------------------------------------------------

/// Inject a `window.__APP_CONFIG` with every `RuntimeConfig` field set.
pub fn inject_app_config() {
    let config = js_sys::Object::new();
    let set = |key: &str, val: &wasm_bindgen::JsValue| {
        js_sys::Reflect::set(&config, &key.into(), val).unwrap();
    };
    set("contactEndpoint", &"http://test:8080/api/hubspot/contact".into());
    set("storageBucket", &"test-bucket.appspot.com".into());
    set("defaultVideoSrc", &"/videos/test-hero.mp4".into());
    set("productVideoSrc", &"/videos/test-product.mp4".into());

    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}

// ---------------------------------------------------------------------------
// localStorage
// ---------------------------------------------------------------------------

pub fn local_storage() -> web_sys::Storage {
    gloo_utils::window().local_storage().unwrap().unwrap()
}

pub fn clear_local_storage() {
    local_storage().clear().unwrap();
}
