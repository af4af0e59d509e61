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

//! Per-frame smoothing steps driven by an animation-frame loop.

/// Frames between committed progress updates in [`ProgressSmoother`].
pub const COMMIT_EVERY_FRAMES: u32 = 8;

/// Eased "chase" scroll: each frame moves a fixed fraction of the remaining
/// distance toward the target, snapping once close enough.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothScroll {
    current: f64,
    target: f64,
    smoothness: f64,
    snap_distance: f64,
}

impl SmoothScroll {
    pub const DEFAULT_SMOOTHNESS: f64 = 0.1;
    pub const DEFAULT_SNAP_DISTANCE: f64 = 0.5;

    pub fn new(position: f64) -> Self {
        Self::with_smoothness(position, Self::DEFAULT_SMOOTHNESS)
    }

    /// `smoothness` is clamped to `(0, 1]`; 1 jumps straight to the target.
    pub fn with_smoothness(position: f64, smoothness: f64) -> Self {
        let smoothness = if smoothness.is_finite() && smoothness > 0.0 {
            smoothness.min(1.0)
        } else {
            Self::DEFAULT_SMOOTHNESS
        };
        Self {
            current: position,
            target: position,
            smoothness,
            snap_distance: Self::DEFAULT_SNAP_DISTANCE,
        }
    }

    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Jump without easing, e.g. after a programmatic scroll.
    pub fn jump_to(&mut self, position: f64) {
        if position.is_finite() {
            self.current = position;
            self.target = position;
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// Advance one frame and return the new position.
    pub fn step(&mut self) -> f64 {
        let delta = self.target - self.current;
        if delta.abs() <= self.snap_distance {
            self.current = self.target;
        } else {
            self.current += delta * self.smoothness;
        }
        self.current
    }
}

/// Exponentially smoothed playback progress with throttled commits.
///
/// Sampling runs every frame; only every [`COMMIT_EVERY_FRAMES`]th frame
/// returns a value, which bounds how often the UI re-renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSmoother {
    smoothed: Option<f64>,
    alpha: f64,
    frame: u32,
    commit_every: u32,
}

impl Default for ProgressSmoother {
    fn default() -> Self {
        Self::new(0.2)
    }
}

impl ProgressSmoother {
    /// `alpha` is the weight of the newest sample, clamped to `(0, 1]`.
    pub fn new(alpha: f64) -> Self {
        let alpha = if alpha.is_finite() && alpha > 0.0 {
            alpha.min(1.0)
        } else {
            0.2
        };
        Self {
            smoothed: None,
            alpha,
            frame: 0,
            commit_every: COMMIT_EVERY_FRAMES,
        }
    }

    pub fn smoothed(&self) -> Option<f64> {
        self.smoothed
    }

    /// Feed one frame's `currentTime` and `duration`. Returns the smoothed
    /// progress (`0.0..=1.0`) on commit frames, `None` otherwise.
    pub fn sample(&mut self, current_time: f64, duration: f64) -> Option<f64> {
        if duration.is_finite() && duration > 0.0 && current_time.is_finite() {
            let raw = (current_time / duration).clamp(0.0, 1.0);
            let next = match self.smoothed {
                Some(previous) => previous + (raw - previous) * self.alpha,
                None => raw,
            };
            self.smoothed = Some(next);
        }

        self.frame = self.frame.wrapping_add(1);
        if self.frame % self.commit_every == 0 {
            self.smoothed
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.smoothed = None;
        self.frame = 0;
    }
}
