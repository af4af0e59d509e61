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

//! Scroll sampler: raw scroll offset -> bounded page progress and scene index.

use crate::progress::{clamp01, clamp_percent};

/// Snapshot of where the reader is inside a stack of full-viewport scenes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    /// Page progress in percent, `0.0..=100.0`.
    pub progress: f64,
    /// Index of the scene currently filling the viewport.
    pub scene_index: usize,
    /// Progress through the current scene, `0.0..=1.0`.
    pub sub_scroll_progress: f64,
}

impl ScrollSample {
    /// Build a sample from an externally supplied page progress (percent),
    /// as used when a parent section drives the scenes instead of the window.
    pub fn from_progress(progress: f64, scene_count: usize) -> Self {
        let scene_count = scene_count.max(1);
        let progress = clamp_percent(progress);
        let position = progress / 100.0 * scene_count as f64;
        let scene_index = (position.floor() as usize).min(scene_count - 1);
        let sub_scroll_progress = clamp01(position - scene_index as f64);
        Self {
            progress,
            scene_index,
            sub_scroll_progress,
        }
    }
}

/// Converts window scroll state into [`ScrollSample`]s for a fixed scene count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollSampler {
    scene_count: usize,
}

impl ScrollSampler {
    pub fn new(scene_count: usize) -> Self {
        Self {
            scene_count: scene_count.max(1),
        }
    }

    pub fn scene_count(&self) -> usize {
        self.scene_count
    }

    /// Total scrollable height of the scene stack in pixels.
    pub fn total_height(&self, viewport_height: f64) -> f64 {
        self.scene_count as f64 * viewport_height.max(0.0)
    }

    /// Sample the scroll position.
    ///
    /// With a single scene the page has no scrollable distance beyond the
    /// viewport, so page progress follows the scene's own sub-progress.
    pub fn sample(&self, scroll_y: f64, viewport_height: f64) -> ScrollSample {
        if viewport_height.is_nan() || viewport_height <= 0.0 || !scroll_y.is_finite() {
            return ScrollSample {
                progress: 0.0,
                scene_index: 0,
                sub_scroll_progress: 0.0,
            };
        }

        let scroll_y = scroll_y.max(0.0);
        let last = self.scene_count - 1;
        let scene_index = ((scroll_y / viewport_height).floor() as usize).min(last);
        let sub_scroll_progress =
            clamp01((scroll_y - scene_index as f64 * viewport_height) / viewport_height);

        let scrollable = self.total_height(viewport_height) - viewport_height;
        let progress = if scrollable > 0.0 {
            clamp_percent(scroll_y / scrollable * 100.0)
        } else {
            clamp_percent(sub_scroll_progress * 100.0)
        };

        ScrollSample {
            progress,
            scene_index,
            sub_scroll_progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_start_of_page() {
        let sampler = ScrollSampler::new(4);
        let sample = sampler.sample(0.0, 800.0);
        assert_eq!(sample.progress, 0.0);
        assert_eq!(sample.scene_index, 0);
        assert_eq!(sample.sub_scroll_progress, 0.0);
    }

    #[test]
    fn test_sample_mid_scene() {
        let sampler = ScrollSampler::new(4);
        // 1.5 viewports down: scene 1, halfway through it
        let sample = sampler.sample(1200.0, 800.0);
        assert_eq!(sample.scene_index, 1);
        assert!((sample.sub_scroll_progress - 0.5).abs() < 1e-9);
        // scrollable = 4*800 - 800 = 2400
        assert!((sample.progress - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_scene_index_clamped_to_last() {
        let sampler = ScrollSampler::new(3);
        let sample = sampler.sample(10_000.0, 800.0);
        assert_eq!(sample.scene_index, 2);
        assert_eq!(sample.sub_scroll_progress, 1.0);
        assert_eq!(sample.progress, 100.0);
    }

    #[test]
    fn test_single_scene_has_no_division_by_zero() {
        let sampler = ScrollSampler::new(1);
        let sample = sampler.sample(400.0, 800.0);
        assert!(sample.progress.is_finite());
        assert_eq!(sample.scene_index, 0);
        assert!((sample.progress - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_viewport_and_negative_scroll() {
        let sampler = ScrollSampler::new(3);
        assert_eq!(sampler.sample(100.0, 0.0).progress, 0.0);
        let sample = sampler.sample(-50.0, 800.0);
        assert_eq!(sample.scene_index, 0);
        assert_eq!(sample.progress, 0.0);
    }

    #[test]
    fn test_from_external_progress() {
        let sample = ScrollSample::from_progress(62.5, 4);
        assert_eq!(sample.scene_index, 2);
        assert!((sample.sub_scroll_progress - 0.5).abs() < 1e-9);

        let end = ScrollSample::from_progress(100.0, 4);
        assert_eq!(end.scene_index, 3);
        assert_eq!(end.sub_scroll_progress, 1.0);

        let clamped = ScrollSample::from_progress(-10.0, 0);
        assert_eq!(clamped.scene_index, 0);
        assert_eq!(clamped.progress, 0.0);
    }
}
