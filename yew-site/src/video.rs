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

//! `<video>` element binding for the timeline engine.

use log::warn;
use scroll_timeline::video::VideoSurface;
use scroll_timeline::TimelineError;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlVideoElement;

pub(crate) fn js_error(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// A DOM video element driven through [`VideoSurface`].
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlVideo {
    element: HtmlVideoElement,
    scene_start: f64,
}

impl HtmlVideo {
    pub fn new(element: HtmlVideoElement) -> Self {
        Self {
            element,
            scene_start: 0.0,
        }
    }

    /// Where to park the video if an asynchronous `play()` is rejected.
    pub fn with_scene_start(mut self, scene_start: f64) -> Self {
        self.scene_start = scene_start;
        self
    }

    pub fn element(&self) -> &HtmlVideoElement {
        &self.element
    }

    pub fn is_paused(&self) -> bool {
        self.element.paused()
    }
}

impl VideoSurface for HtmlVideo {
    fn play(&self) -> scroll_timeline::Result<()> {
        let promise = self
            .element
            .play()
            .map_err(|e| TimelineError::Video(js_error(&e)))?;
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                warn!("play() rejected: {}", js_error(&e));
                scroll_timeline::video::recover_to_start(&this, this.scene_start);
            }
        });
        Ok(())
    }

    fn pause(&self) {
        if let Err(e) = self.element.pause() {
            warn!("pause() failed: {}", js_error(&e));
        }
    }

    fn load(&self) {
        self.element.load();
    }

    fn current_time(&self) -> f64 {
        self.element.current_time()
    }

    fn set_current_time(&self, seconds: f64) -> scroll_timeline::Result<()> {
        if !seconds.is_finite() {
            return Err(TimelineError::Video(format!("cannot seek to {seconds}")));
        }
        self.element.set_current_time(seconds);
        Ok(())
    }

    fn duration(&self) -> f64 {
        self.element.duration()
    }

    fn set_src(&self, src: &str) {
        self.element.set_src(src);
    }
}
