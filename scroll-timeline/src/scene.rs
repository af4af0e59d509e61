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

//! Static scene and scene-timing records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifier of a scene as written in the scene configuration.
pub type SceneId = u32;

/// One step of the scroll-driven story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub scene: SceneId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub content: Vec<String>,
    /// Text replacing the description once scene progress (percent) reaches the key.
    #[serde(default)]
    pub percentage_text: BTreeMap<u32, String>,
    /// Scene progress (percent) at which the callout appears.
    #[serde(default)]
    pub callout_display_percentage: f64,
}

impl Scene {
    /// Text to show at `progress` percent through this scene.
    pub fn text_at(&self, progress: f64) -> &str {
        self.percentage_text
            .iter()
            .rev()
            .find(|(percent, _)| f64::from(**percent) <= progress)
            .map(|(_, text)| text.as_str())
            .unwrap_or(self.description.as_str())
    }

    pub fn callout_visible(&self, progress: f64) -> bool {
        progress >= self.callout_display_percentage
    }
}

/// A video time pinned to a scroll percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkpoint {
    pub video_time: f64,
}

/// How a scene maps onto the video timeline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneTiming {
    pub scene: SceneId,
    /// Video time (seconds) at which the scene starts.
    #[serde(default)]
    pub video_time: Option<f64>,
    /// Scroll percentage within the scene -> video time.
    #[serde(default)]
    pub scrolling_percentage: BTreeMap<u32, Checkpoint>,
}

impl SceneTiming {
    pub fn at(scene: SceneId, video_time: f64) -> Self {
        Self {
            scene,
            video_time: Some(video_time),
            scrolling_percentage: BTreeMap::new(),
        }
    }

    pub fn with_checkpoint(mut self, percent: u32, video_time: f64) -> Self {
        self.scrolling_percentage
            .insert(percent, Checkpoint { video_time });
        self
    }

    pub fn has_checkpoints(&self) -> bool {
        !self.scrolling_percentage.is_empty()
    }

    /// Checkpoints as sorted `(percent, seconds)` pairs.
    pub fn checkpoints(&self) -> Vec<(f64, f64)> {
        self.scrolling_percentage
            .iter()
            .map(|(percent, checkpoint)| (f64::from(*percent), checkpoint.video_time))
            .collect()
    }

    /// Declared start time, falling back to the first checkpoint.
    pub fn start_time(&self) -> Option<f64> {
        self.video_time.or_else(|| {
            self.scrolling_percentage
                .values()
                .next()
                .map(|checkpoint| checkpoint.video_time)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        let mut percentage_text = BTreeMap::new();
        percentage_text.insert(30, "Detects a fall".to_string());
        percentage_text.insert(70, "Alerts family".to_string());
        Scene {
            scene: 1,
            title: "Fall detection".to_string(),
            description: "Always on".to_string(),
            content: vec![],
            percentage_text,
            callout_display_percentage: 50.0,
        }
    }

    #[test]
    fn test_text_at_progress() {
        let scene = scene();
        assert_eq!(scene.text_at(0.0), "Always on");
        assert_eq!(scene.text_at(30.0), "Detects a fall");
        assert_eq!(scene.text_at(69.9), "Detects a fall");
        assert_eq!(scene.text_at(100.0), "Alerts family");
    }

    #[test]
    fn test_callout_visibility() {
        let scene = scene();
        assert!(!scene.callout_visible(49.0));
        assert!(scene.callout_visible(50.0));
    }

    #[test]
    fn test_timing_json_shape() {
        let json = r#"{ "scene": 2, "scrollingPercentage": { "0": { "videoTime": 4.0 }, "50": { "videoTime": 6.5 } } }"#;
        let timing: SceneTiming = serde_json::from_str(json).unwrap();
        assert_eq!(timing.video_time, None);
        assert_eq!(timing.checkpoints(), vec![(0.0, 4.0), (50.0, 6.5)]);
        assert_eq!(timing.start_time(), Some(4.0));
    }
}
