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

//! Active video source, persisted across sessions.
//!
//! [`VideoConfig`] owns the current `videoSrc`. It starts from the persisted
//! custom upload URL when one exists and from the default path otherwise.

use std::collections::HashMap;

use log::{info, warn};
use url::Url;

use crate::error::{Result, TimelineError};

/// Storage key holding the URL of a custom uploaded video.
pub const CUSTOM_VIDEO_KEY: &str = "vayyar_custom_video";

/// Minimal string key-value persistence, e.g. browser `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Custom sources must be absolute http(s) URLs with a host. Returns the
/// parsed URL.
pub fn validate_source(url: &str) -> Result<Url> {
    let url = url.trim();
    let parsed = Url::parse(url)
        .map_err(|e| TimelineError::InvalidSource(format!("{url}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(TimelineError::InvalidSource(format!("not an http(s) URL: {url}")));
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(TimelineError::InvalidSource(format!("missing host: {url}")));
    }
    Ok(parsed)
}

/// The active video source plus its persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoConfig<S: KeyValueStore> {
    store: S,
    default_src: String,
    video_src: String,
}

impl<S: KeyValueStore> VideoConfig<S> {
    /// Load from `store`. A persisted value that is not a valid URL is
    /// dropped and the default is used.
    pub fn new(mut store: S, default_src: impl Into<String>) -> Self {
        let default_src = default_src.into();
        let video_src = match store.get(CUSTOM_VIDEO_KEY) {
            Some(url) if validate_source(&url).is_ok() => url,
            Some(url) => {
                warn!("Ignoring persisted video source {url:?}");
                store.remove(CUSTOM_VIDEO_KEY);
                default_src.clone()
            }
            None => default_src.clone(),
        };
        Self {
            store,
            default_src,
            video_src,
        }
    }

    pub fn video_src(&self) -> &str {
        &self.video_src
    }

    pub fn default_src(&self) -> &str {
        &self.default_src
    }

    pub fn is_custom(&self) -> bool {
        self.video_src != self.default_src
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Switch to an uploaded video and persist it.
    pub fn set_custom(&mut self, url: &str) -> Result<()> {
        let parsed = validate_source(url)?;
        let url = parsed.as_str();
        self.store.set(CUSTOM_VIDEO_KEY, url)?;
        self.video_src = url.to_string();
        info!("Video source set to {url}");
        Ok(())
    }

    /// Restore the default source and forget the custom one.
    pub fn reset(&mut self) {
        self.store.remove(CUSTOM_VIDEO_KEY);
        self.video_src = self.default_src.clone();
        info!("Video source reset to {}", self.default_src);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: &str = "/videos/home-hero.mp4";
    const UPLOADED: &str =
        "https://firebasestorage.googleapis.com/v0/b/demo/o/videos%2Fvideo_1.mp4?alt=media&token=t";

    #[test]
    fn test_starts_from_default() {
        let config = VideoConfig::new(MemoryStore::new(), DEFAULT);
        assert_eq!(config.video_src(), DEFAULT);
        assert!(!config.is_custom());
    }

    #[test]
    fn test_starts_from_persisted_upload() {
        let mut store = MemoryStore::new();
        store.set(CUSTOM_VIDEO_KEY, UPLOADED).unwrap();
        let config = VideoConfig::new(store, DEFAULT);
        assert_eq!(config.video_src(), UPLOADED);
        assert!(config.is_custom());
    }

    #[test]
    fn test_set_then_reset_restores_default() {
        let mut config = VideoConfig::new(MemoryStore::new(), DEFAULT);
        config.set_custom(UPLOADED).unwrap();
        assert_eq!(config.store().get(CUSTOM_VIDEO_KEY).as_deref(), Some(UPLOADED));

        config.reset();
        assert_eq!(config.video_src(), DEFAULT);
        assert_eq!(config.store().get(CUSTOM_VIDEO_KEY), None);
    }

    #[test]
    fn test_rejects_relative_source() {
        let mut config = VideoConfig::new(MemoryStore::new(), DEFAULT);
        assert!(matches!(
            config.set_custom("videos/x.mp4"),
            Err(TimelineError::InvalidSource(_))
        ));
        assert_eq!(config.video_src(), DEFAULT);
    }

    #[test]
    fn test_rejects_malformed_urls() {
        let mut config = VideoConfig::new(MemoryStore::new(), DEFAULT);
        for bad in [
            "https://exa mple.com/x.mp4",
            "https://?",
            "https://",
            "ftp://example.com/x.mp4",
            "javascript:alert(1)",
        ] {
            assert!(
                matches!(config.set_custom(bad), Err(TimelineError::InvalidSource(_))),
                "{bad} accepted"
            );
        }
        assert_eq!(config.video_src(), DEFAULT);
        assert_eq!(config.store().get(CUSTOM_VIDEO_KEY), None);
    }

    #[test]
    fn test_persists_trimmed_url() {
        let mut config = VideoConfig::new(MemoryStore::new(), DEFAULT);
        config.set_custom(&format!("  {UPLOADED}\n")).unwrap();
        assert_eq!(config.video_src(), UPLOADED);
        assert_eq!(config.store().get(CUSTOM_VIDEO_KEY).as_deref(), Some(UPLOADED));
    }

    #[test]
    fn test_drops_garbage_persisted_value() {
        let mut store = MemoryStore::new();
        store.set(CUSTOM_VIDEO_KEY, "javascript:alert(1)").unwrap();
        let config = VideoConfig::new(store, DEFAULT);
        assert_eq!(config.video_src(), DEFAULT);
        assert_eq!(config.store().get(CUSTOM_VIDEO_KEY), None);
    }
}
