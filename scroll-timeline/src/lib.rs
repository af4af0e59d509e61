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

//! # scroll-timeline
//!
//! Scroll-progress to media-timeline synchronization for scroll-driven
//! product pages. Maps a scroll position onto a video's `currentTime`, a set
//! of derived animation values (typing effects, fades, chat bubbles, alert
//! banners) and section transitions with enter/leave hysteresis.
//!
//! Nothing here touches the DOM. A host binds the engine to scroll events,
//! animation frames and video elements through [`video::VideoSurface`] and
//! [`store::KeyValueStore`].

pub mod animation;
pub mod catalog;
pub mod contact;
pub mod error;
pub mod progress;
pub mod sampler;
pub mod scene;
pub mod smoothing;
pub mod store;
pub mod tablet;
pub mod timeline;
pub mod transition;
pub mod upload;
pub mod video;

pub use animation::{AnimationFrame, Animator, Latch, SceneScript, Threshold};
pub use catalog::SceneCatalog;
pub use error::{Result, TimelineError};
pub use sampler::{ScrollSample, ScrollSampler};
pub use scene::{Scene, SceneId, SceneTiming};
pub use store::{KeyValueStore, MemoryStore, VideoConfig};
pub use tablet::TabletScene;
pub use timeline::TimelineMapper;
pub use transition::{Command, IntersectionTracker, ScrubPin, SectionController, SectionKind};
pub use video::VideoSurface;
