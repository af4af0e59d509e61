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

//! Progress arithmetic shared by the sampler, mapper and animator.
//!
//! Page progress is expressed in percent (`0.0..=100.0`); per-scene
//! sub-progress and fades are expressed as fractions (`0.0..=1.0`).

/// Lower bound of page progress, in percent.
pub const PROGRESS_MIN: f64 = 0.0;

/// Upper bound of page progress, in percent.
pub const PROGRESS_MAX: f64 = 100.0;

/// Clamp a percentage into `[0, 100]`. NaN maps to 0.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return PROGRESS_MIN;
    }
    value.clamp(PROGRESS_MIN, PROGRESS_MAX)
}

/// Clamp a fraction into `[0, 1]`. NaN maps to 0.
pub fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Position of `progress` inside `[start, end]` as a clamped fraction.
///
/// A degenerate window (`end <= start`) behaves as a step at `end`.
pub fn window_fraction(progress: f64, start: f64, end: f64) -> f64 {
    let span = end - start;
    if span <= 0.0 || !span.is_finite() {
        return if progress >= end { 1.0 } else { 0.0 };
    }
    clamp01((progress - start) / span)
}

/// Linear interpolation between `a` and `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Clamp a playback time to `[0, duration]`.
///
/// Before metadata has loaded the duration is NaN (or infinite for live
/// streams); in that case only the lower bound applies.
pub fn clamp_time(time: f64, duration: f64) -> f64 {
    let time = if time.is_finite() { time } else { 0.0 };
    if duration.is_finite() && duration >= 0.0 {
        time.clamp(0.0, duration)
    } else {
        time.max(0.0)
    }
}
