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

//! The video element contract and command execution against it.

use std::cell::{Cell, RefCell};

use log::warn;

use crate::error::{Result, TimelineError};
use crate::progress::clamp_time;
use crate::transition::{Command, ScrubUpdate};

/// Anything that plays seekable video: a native `<video>` element or a
/// streaming player exposing the same surface.
pub trait VideoSurface {
    fn play(&self) -> Result<()>;
    fn pause(&self);
    fn load(&self);
    /// Current playback position in seconds.
    fn current_time(&self) -> f64;
    fn set_current_time(&self, seconds: f64) -> Result<()>;
    /// Duration in seconds; NaN until metadata is available.
    fn duration(&self) -> f64;
    fn set_src(&self, src: &str);
}

/// Seek to `time`, clamped to the video's duration. Returns the time used.
pub fn seek<V: VideoSurface + ?Sized>(video: &V, time: f64) -> Result<f64> {
    let target = clamp_time(time, video.duration());
    video.set_current_time(target)?;
    Ok(target)
}

/// Leave the video paused at the scene start after a failed operation.
pub fn recover_to_start<V: VideoSurface + ?Sized>(video: &V, scene_start: f64) {
    video.pause();
    if let Err(e) = seek(video, scene_start) {
        warn!("Could not rewind video to scene start {scene_start}s: {e}");
    }
}

/// Execute the video commands of a transition. Overlay commands are left to
/// the caller. On the first failure the video is parked at `scene_start` and
/// the error is returned for logging.
pub fn apply_commands<V: VideoSurface + ?Sized>(
    video: &V,
    commands: &[Command],
    scene_start: f64,
) -> Result<()> {
    for command in commands {
        let outcome = match *command {
            Command::SeekTo(time) => seek(video, time).map(|_| ()),
            Command::Play => video.play(),
            Command::Pause => {
                video.pause();
                Ok(())
            }
            Command::FadeOverlayIn | Command::FadeOverlayOut => Ok(()),
        };
        if let Err(e) = outcome {
            warn!("Video command {command:?} failed: {e}");
            recover_to_start(video, scene_start);
            return Err(e);
        }
    }
    Ok(())
}

/// Swap the source and restart loading, keeping the play state.
pub fn swap_source<V: VideoSurface + ?Sized>(video: &V, src: &str, resume: bool) -> Result<()> {
    if src.is_empty() {
        return Err(TimelineError::InvalidSource("empty source".to_string()));
    }
    video.set_src(src);
    video.load();
    if resume {
        video.play()?;
    }
    Ok(())
}

/// Drive a scrubbed video from one pin update: swap to `swap_src` on the
/// update that crosses the swap point, otherwise seek. A failed seek leaves
/// the video paused at the start.
pub fn apply_scrub<V: VideoSurface + ?Sized>(
    video: &V,
    update: &ScrubUpdate,
    swap_src: &str,
) -> Result<()> {
    if update.swap_source {
        return swap_source(video, swap_src, false);
    }
    if let Err(e) = seek(video, update.time) {
        recover_to_start(video, 0.0);
        return Err(e);
    }
    Ok(())
}

/// In-memory [`VideoSurface`] that records calls. Used by tests and by
/// non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryVideo {
    time: Cell<f64>,
    duration: Cell<f64>,
    playing: Cell<bool>,
    fail_play: Cell<bool>,
    fail_next_seek: Cell<bool>,
    src: RefCell<String>,
    loads: Cell<u32>,
}

impl MemoryVideo {
    pub fn new(duration: f64) -> Self {
        let video = Self::default();
        video.duration.set(duration);
        video
    }

    pub fn is_playing(&self) -> bool {
        self.playing.get()
    }

    pub fn src(&self) -> String {
        self.src.borrow().clone()
    }

    pub fn loads(&self) -> u32 {
        self.loads.get()
    }

    /// Make subsequent `play()` calls fail, like an autoplay rejection.
    pub fn reject_play(&self, reject: bool) {
        self.fail_play.set(reject);
    }

    /// Make the next seek fail, like a seek on a source that failed to load.
    pub fn reject_next_seek(&self) {
        self.fail_next_seek.set(true);
    }
}

impl VideoSurface for MemoryVideo {
    fn play(&self) -> Result<()> {
        if self.fail_play.get() {
            return Err(TimelineError::Video("play() was rejected".to_string()));
        }
        self.playing.set(true);
        Ok(())
    }

    fn pause(&self) {
        self.playing.set(false);
    }

    fn load(&self) {
        self.loads.set(self.loads.get() + 1);
    }

    fn current_time(&self) -> f64 {
        self.time.get()
    }

    fn set_current_time(&self, seconds: f64) -> Result<()> {
        if self.fail_next_seek.replace(false) {
            return Err(TimelineError::Video("seek was rejected".to_string()));
        }
        if !seconds.is_finite() {
            return Err(TimelineError::Video(format!("cannot seek to {seconds}")));
        }
        self.time.set(seconds);
        Ok(())
    }

    fn duration(&self) -> f64 {
        self.duration.get()
    }

    fn set_src(&self, src: &str) {
        *self.src.borrow_mut() = src.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seek_is_clamped() {
        let video = MemoryVideo::new(20.0);
        assert_eq!(seek(&video, 25.0).unwrap(), 20.0);
        assert_eq!(video.current_time(), 20.0);
        assert_eq!(seek(&video, -3.0).unwrap(), 0.0);
    }

    #[test]
    fn test_apply_enter_commands() {
        let video = MemoryVideo::new(20.0);
        apply_commands(&video, &[Command::SeekTo(4.0), Command::Play], 4.0).unwrap();
        assert_eq!(video.current_time(), 4.0);
        assert!(video.is_playing());
        apply_commands(&video, &[Command::Pause, Command::FadeOverlayOut], 4.0).unwrap();
        assert!(!video.is_playing());
    }

    #[test]
    fn test_failed_play_parks_at_scene_start() {
        let video = MemoryVideo::new(20.0);
        video.set_current_time(9.0).unwrap();
        video.reject_play(true);
        let result = apply_commands(&video, &[Command::SeekTo(6.0), Command::Play], 6.0);
        assert!(result.is_err());
        assert!(!video.is_playing());
        assert_eq!(video.current_time(), 6.0);
    }

    #[test]
    fn test_swap_source_reloads() {
        let video = MemoryVideo::new(20.0);
        swap_source(&video, "/videos/product-only.mp4", true).unwrap();
        assert_eq!(video.src(), "/videos/product-only.mp4");
        assert_eq!(video.loads(), 1);
        assert!(video.is_playing());
        assert!(swap_source(&video, "", false).is_err());
    }

    #[test]
    fn test_scrub_follows_pin_and_swaps_once() {
        let video = MemoryVideo::new(10.0);
        let mut pin = crate::transition::ScrubPin::new(10.0, 800.0);

        apply_scrub(&video, &pin.update(500.0), "/videos/product-only.mp4").unwrap();
        assert_eq!(video.current_time(), 5.0);
        assert_eq!(video.loads(), 0);

        apply_scrub(&video, &pin.update(950.0), "/videos/product-only.mp4").unwrap();
        assert_eq!(video.src(), "/videos/product-only.mp4");
        assert_eq!(video.loads(), 1);
    }

    #[test]
    fn test_failed_scrub_parks_at_start() {
        let video = MemoryVideo::new(10.0);
        video.play().unwrap();
        video.set_current_time(4.0).unwrap();
        video.reject_next_seek();

        let mut pin = crate::transition::ScrubPin::new(10.0, 800.0);
        assert!(apply_scrub(&video, &pin.update(600.0), "/videos/product-only.mp4").is_err());
        assert!(!video.is_playing());
        assert_eq!(video.current_time(), 0.0);
    }
}
