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

//! Timeline mapper: scene index + sub-scroll progress -> video `currentTime`.
//!
//! Two strategies are supported, chosen per scene:
//!
//! * **Checkpoints** when the scene declares `scrollingPercentage`: video time
//!   is interpolated between the checkpoints bracketing the scroll percentage.
//! * **Scene boundary** otherwise: video time runs linearly from the scene's
//!   start time to the next scene's start time (or the video duration for the
//!   last scene).
//!
//! Every result is clamped to `[0, duration]`. A scene without a timing entry
//! yields `None`, meaning "do not seek".

use log::warn;

use crate::progress::{clamp01, clamp_time, lerp};
use crate::sampler::ScrollSample;
use crate::scene::SceneTiming;

/// Interpolation strategy selected for a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Checkpoints,
    SceneBoundary,
}

/// Interpolate over sorted `(percent, seconds)` checkpoints.
///
/// An exact match returns the checkpoint's time. Outside the configured range
/// the nearest checkpoint is used. Returns `None` for an empty table or a NaN
/// percentage.
pub fn interpolate_checkpoints(points: &[(f64, f64)], percent: f64) -> Option<f64> {
    let lower = points.iter().rev().find(|(p, _)| *p <= percent);
    let upper = points.iter().find(|(p, _)| *p >= percent);

    match (lower, upper) {
        (Some(&(lower_pct, lower_time)), Some(&(upper_pct, upper_time))) => {
            if upper_pct == lower_pct {
                Some(lower_time)
            } else {
                let factor = (percent - lower_pct) / (upper_pct - lower_pct);
                Some(lerp(lower_time, upper_time, factor))
            }
        }
        (Some(&(_, time)), None) | (None, Some(&(_, time))) => Some(time),
        (None, None) => None,
    }
}

/// Maps scroll positions to video times for an ordered list of scene timings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimelineMapper {
    timings: Vec<SceneTiming>,
}

impl TimelineMapper {
    /// `timings[i]` must describe the scene at index `i`.
    pub fn new(timings: Vec<SceneTiming>) -> Self {
        Self { timings }
    }

    pub fn scene_count(&self) -> usize {
        self.timings.len()
    }

    pub fn timing(&self, scene_index: usize) -> Option<&SceneTiming> {
        self.timings.get(scene_index)
    }

    pub fn strategy(&self, scene_index: usize) -> Option<Strategy> {
        self.timings.get(scene_index).map(|timing| {
            if timing.has_checkpoints() {
                Strategy::Checkpoints
            } else {
                Strategy::SceneBoundary
            }
        })
    }

    /// Start time of the scene, used as the seek target on enter and as the
    /// fallback position after a failed seek.
    pub fn scene_start(&self, scene_index: usize) -> Option<f64> {
        self.timings.get(scene_index).and_then(SceneTiming::start_time)
    }

    /// Target video time for `sub_progress` (0-1) through scene `scene_index`.
    ///
    /// Returns `None` (and logs) when the scene has no usable timing; the
    /// caller should leave the video where it is.
    pub fn target_time(&self, scene_index: usize, sub_progress: f64, duration: f64) -> Option<f64> {
        let Some(timing) = self.timings.get(scene_index) else {
            warn!(
                "No timing configured for scene index {scene_index} ({} timings)",
                self.timings.len()
            );
            return None;
        };

        let sub_progress = clamp01(sub_progress);
        let start = timing.start_time();

        let raw = if timing.has_checkpoints() {
            interpolate_checkpoints(&timing.checkpoints(), sub_progress * 100.0)
        } else {
            let Some(scene_start) = timing.video_time else {
                warn!("Scene {} has neither videoTime nor checkpoints", timing.scene);
                return None;
            };
            let scene_end = self
                .timings
                .get(scene_index + 1)
                .and_then(SceneTiming::start_time)
                .unwrap_or(duration);
            Some(lerp(scene_start, scene_end, sub_progress))
        };

        let time = match raw {
            Some(time) if time.is_finite() => time,
            _ => start.unwrap_or(0.0),
        };
        Some(clamp_time(time, duration))
    }

    /// Target video time for a page-level progress value in percent.
    pub fn time_for_progress(&self, progress: f64, duration: f64) -> Option<f64> {
        self.time_for_sample(&ScrollSample::from_progress(progress, self.timings.len()), duration)
    }

    pub fn time_for_sample(&self, sample: &ScrollSample, duration: f64) -> Option<f64> {
        self.target_time(sample.scene_index, sample.sub_scroll_progress, duration)
    }
}
