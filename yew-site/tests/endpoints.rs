// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Tests for resolving HTTP endpoints against the page origin.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

use wasm_bindgen_test::*;

use vayyar_site::api::{absolute_url, resolve_endpoint};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn relative_endpoint_joins_origin() {
    let url = resolve_endpoint("https://care.example", "/api/hubspot/contact").unwrap();
    assert_eq!(url.as_str(), "https://care.example/api/hubspot/contact");
}

#[wasm_bindgen_test]
fn absolute_endpoint_passes_through() {
    let url = resolve_endpoint("https://care.example", "http://test:8080/api/hubspot/contact")
        .unwrap();
    assert_eq!(url.as_str(), "http://test:8080/api/hubspot/contact");
}

#[wasm_bindgen_test]
fn malformed_endpoint_is_an_error() {
    assert!(resolve_endpoint("https://care.example", "https://exa mple.com/x").is_err());
    assert!(resolve_endpoint("", "/api/hubspot/contact").is_err());
}

#[wasm_bindgen_test]
fn page_origin_is_used_in_the_browser() {
    let origin = gloo_utils::window().location().origin().unwrap();
    let url = absolute_url("/api/hubspot/contact").unwrap();
    assert_eq!(url.as_str(), format!("{origin}/api/hubspot/contact"));
}
