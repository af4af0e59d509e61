/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Runtime configuration read from `window.__APP_CONFIG`.

use log::warn;
use scroll_timeline::contact::CONTACT_ENDPOINT;
use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;

pub const DEFAULT_VIDEO_SRC: &str = "/videos/home-hero.mp4";
pub const PRODUCT_VIDEO_SRC: &str = "/videos/product-only.mp4";
pub const DEFAULT_STORAGE_BUCKET: &str = "vayyar-care-demo.appspot.com";

fn default_contact_endpoint() -> String {
    CONTACT_ENDPOINT.to_string()
}

fn default_storage_bucket() -> String {
    DEFAULT_STORAGE_BUCKET.to_string()
}

fn default_video_src() -> String {
    DEFAULT_VIDEO_SRC.to_string()
}

fn default_product_video_src() -> String {
    PRODUCT_VIDEO_SRC.to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "contactEndpoint")]
    #[serde(default = "default_contact_endpoint")]
    pub contact_endpoint: String,
    #[serde(rename = "storageBucket")]
    #[serde(default = "default_storage_bucket")]
    pub storage_bucket: String,
    #[serde(rename = "defaultVideoSrc")]
    #[serde(default = "default_video_src")]
    pub default_video_src: String,
    #[serde(rename = "productVideoSrc")]
    #[serde(default = "default_product_video_src")]
    pub product_video_src: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            contact_endpoint: default_contact_endpoint(),
            storage_bucket: default_storage_bucket(),
            default_video_src: default_video_src(),
            product_video_src: default_product_video_src(),
        }
    }
}

pub fn app_config() -> Result<RuntimeConfig, String> {
    let win = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err("Runtime configuration not found (window.__APP_CONFIG missing)".to_string());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

/// Runtime config, falling back to built-in defaults.
pub fn runtime_config() -> RuntimeConfig {
    app_config().unwrap_or_else(|e| {
        warn!("{e}; using defaults");
        RuntimeConfig::default()
    })
}

pub fn contact_endpoint() -> String {
    runtime_config().contact_endpoint
}

pub fn storage_bucket() -> String {
    runtime_config().storage_bucket
}
