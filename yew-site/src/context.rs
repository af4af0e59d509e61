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

//! Context providers for the application
//!
//! Shared state reached through Yew's `ContextProvider`: the active video
//! source and the theater-mode focus.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use scroll_timeline::store::{KeyValueStore, VideoConfig};
use scroll_timeline::TimelineError;
use yew::prelude::*;

// -----------------------------------------------------------------------------
// Local-storage adapter
// -----------------------------------------------------------------------------

/// [`KeyValueStore`] over `window.localStorage`. Storage being unavailable
/// (private mode, sandboxed iframe) reads as empty.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalStorageStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&mut self, key: &str, value: &str) -> scroll_timeline::Result<()> {
        let storage = local_storage()
            .ok_or_else(|| TimelineError::Store("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| TimelineError::Store(format!("{e:?}")))
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

// -----------------------------------------------------------------------------
// Video config context
// -----------------------------------------------------------------------------

struct VideoConfigInner {
    config: VideoConfig<LocalStorageStore>,
    subscribers: Vec<(usize, Callback<String>)>,
    next_subscriber_id: usize,
}

/// The active `videoSrc`, shared by every video-bearing component.
///
/// Components subscribe to be told when an upload or reset swaps the source.
#[derive(Clone)]
pub struct VideoConfigCtx {
    inner: Rc<RefCell<VideoConfigInner>>,
}

impl PartialEq for VideoConfigCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl VideoConfigCtx {
    pub fn new(default_src: &str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(VideoConfigInner {
                config: VideoConfig::new(LocalStorageStore, default_src),
                subscribers: Vec::new(),
                next_subscriber_id: 0,
            })),
        }
    }

    pub fn video_src(&self) -> String {
        self.inner.borrow().config.video_src().to_string()
    }

    pub fn default_src(&self) -> String {
        self.inner.borrow().config.default_src().to_string()
    }

    pub fn is_custom(&self) -> bool {
        self.inner.borrow().config.is_custom()
    }

    /// Subscribe to source changes. Returns subscription ID for unsubscribing.
    pub fn subscribe(&self, callback: Callback<String>) -> usize {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_subscriber_id;
        inner.next_subscriber_id += 1;
        inner.subscribers.push((id, callback));
        id
    }

    pub fn unsubscribe(&self, id: usize) {
        self.inner
            .borrow_mut()
            .subscribers
            .retain(|(sub_id, _)| *sub_id != id);
    }

    pub fn set_custom(&self, url: &str) -> Result<(), TimelineError> {
        self.inner.borrow_mut().config.set_custom(url)?;
        self.notify();
        Ok(())
    }

    pub fn reset(&self) {
        self.inner.borrow_mut().config.reset();
        self.notify();
    }

    fn notify(&self) {
        let (src, subscribers) = {
            let inner = self.inner.borrow();
            (
                inner.config.video_src().to_string(),
                inner.subscribers.clone(),
            )
        };
        // Notify outside of borrow
        for (_, callback) in subscribers {
            callback.emit(src.clone());
        }
    }
}

/// Current video source that re-renders the caller on change.
#[hook]
pub fn use_video_src() -> String {
    let ctx = use_context::<VideoConfigCtx>();
    let src = use_state(|| {
        ctx.as_ref()
            .map(VideoConfigCtx::video_src)
            .unwrap_or_else(|| crate::constants::DEFAULT_VIDEO_SRC.to_string())
    });
    {
        let src = src.clone();
        use_effect_with(ctx, move |ctx| {
            let subscription = ctx.clone().map(|ctx| {
                let id = ctx.subscribe(Callback::from(move |next: String| src.set(next)));
                (ctx, id)
            });
            if subscription.is_none() {
                warn!("VideoConfigCtx missing; using the default video source");
            }
            move || {
                if let Some((ctx, id)) = subscription {
                    ctx.unsubscribe(id);
                }
            }
        });
    }
    (*src).clone()
}

// -----------------------------------------------------------------------------
// Theater mode
// -----------------------------------------------------------------------------

/// Id of the video currently shown in theater mode, if any. Every other page
/// video dims while it is set.
pub type TheaterCtx = UseStateHandle<Option<String>>;

/// Whether a video owned by `own_id` should dim: theater mode is showing some
/// other video. Pass `None` for videos that can never be focused.
#[hook]
pub fn use_theater_dimmed(own_id: Option<AttrValue>) -> bool {
    let theater = use_context::<TheaterCtx>();
    theater
        .and_then(|focused| (*focused).clone())
        .is_some_and(|focused| own_id.as_deref() != Some(focused.as_str()))
}
