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

use thiserror::Error;

/// Result type for timeline operations
pub type Result<T> = std::result::Result<T, TimelineError>;

/// Errors that can occur while configuring or driving a scroll timeline
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimelineError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("No timing configured for scene {0}")]
    MissingTiming(u32),

    #[error("Scene index {index} out of range ({count} scenes)")]
    SceneOutOfRange { index: usize, count: usize },

    #[error("Video error: {0}")]
    Video(String),

    #[error("Storage error: {0}")]
    Store(String),

    #[error("Invalid video source: {0}")]
    InvalidSource(String),
}

impl From<serde_json::Error> for TimelineError {
    fn from(err: serde_json::Error) -> Self {
        TimelineError::InvalidConfig(err.to_string())
    }
}
