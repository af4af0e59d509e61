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

//! Scene/section transition controller.
//!
//! Each observed section moves between [`Phase::Before`], [`Phase::InView`]
//! and [`Phase::After`] on scroll-trigger events. Transitions emit
//! [`Command`]s for the section's video; the binding layer executes them.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::animation::Latch;
use crate::progress::clamp01;

/// Kind of video section, which decides what happens when it scrolls away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    /// One-shot clip: pauses when scrolled out of view.
    Video,
    /// Looping background clip: keeps playing regardless.
    ScrollyVideo,
    /// Looping clip pinned under a text overlay that fades with scroll.
    ScrollyVideoFixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Before,
    InView,
    After,
}

/// Scroll-trigger callback kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    Enter,
    Leave,
    EnterBack,
    LeaveBack,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    SeekTo(f64),
    Play,
    Pause,
    FadeOverlayIn,
    FadeOverlayOut,
}

/// Hysteresis state machine for one section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionController {
    kind: SectionKind,
    start_time: f64,
    phase: Phase,
    playing: bool,
}

impl SectionController {
    pub fn new(kind: SectionKind, start_time: f64) -> Self {
        Self {
            kind,
            start_time,
            phase: Phase::Before,
            playing: false,
        }
    }

    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Apply a trigger event. Events that do not fit the current phase are
    /// ignored and yield no commands.
    pub fn handle(&mut self, event: TriggerEvent) -> Vec<Command> {
        match (self.phase, event) {
            (Phase::Before, TriggerEvent::Enter) => {
                self.phase = Phase::InView;
                self.playing = true;
                let mut commands = vec![Command::SeekTo(self.start_time), Command::Play];
                if self.kind == SectionKind::ScrollyVideoFixed {
                    commands.push(Command::FadeOverlayIn);
                }
                commands
            }
            (Phase::InView, TriggerEvent::Leave) => {
                self.phase = Phase::After;
                self.leave_commands()
            }
            (Phase::InView, TriggerEvent::LeaveBack) => {
                self.phase = Phase::Before;
                self.leave_commands()
            }
            (Phase::After, TriggerEvent::EnterBack) => {
                self.phase = Phase::InView;
                self.resume_commands()
            }
            (phase, event) => {
                debug!("Ignoring {event:?} while {phase:?} ({:?})", self.kind);
                Vec::new()
            }
        }
    }

    fn leave_commands(&mut self) -> Vec<Command> {
        match self.kind {
            SectionKind::Video => {
                self.playing = false;
                vec![Command::Pause]
            }
            SectionKind::ScrollyVideo => Vec::new(),
            SectionKind::ScrollyVideoFixed => vec![Command::FadeOverlayOut],
        }
    }

    fn resume_commands(&mut self) -> Vec<Command> {
        match self.kind {
            SectionKind::Video => {
                self.playing = true;
                vec![Command::Play]
            }
            SectionKind::ScrollyVideo if !self.playing => {
                self.playing = true;
                vec![Command::Play]
            }
            SectionKind::ScrollyVideo => Vec::new(),
            SectionKind::ScrollyVideoFixed => vec![Command::FadeOverlayIn],
        }
    }
}

/// Turns raw viewport-intersection observations into trigger events.
///
/// `top` is the element's top edge relative to the viewport top: a negative
/// value means the element sits (at least partly) above the viewport.
///
/// The first observation settles the initial state from where the page
/// loaded: a visible section yields `Enter`, and a section already scrolled
/// past yields `Enter` followed by `Leave`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntersectionTracker {
    visible: Option<bool>,
}

impl IntersectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, is_intersecting: bool, top: f64) -> Vec<TriggerEvent> {
        let Some(was_visible) = self.visible.replace(is_intersecting) else {
            return match (is_intersecting, top < 0.0) {
                (true, _) => vec![TriggerEvent::Enter],
                (false, true) => vec![TriggerEvent::Enter, TriggerEvent::Leave],
                (false, false) => Vec::new(),
            };
        };
        let event = match (was_visible, is_intersecting) {
            (false, true) if top >= 0.0 => TriggerEvent::Enter,
            (false, true) => TriggerEvent::EnterBack,
            (true, false) if top < 0.0 => TriggerEvent::Leave,
            (true, false) => TriggerEvent::LeaveBack,
            _ => return Vec::new(),
        };
        vec![event]
    }
}

/// Scrub progress past which the alternate clip is swapped in.
pub const SOURCE_SWAP_PROGRESS: f64 = 0.9;

/// Output of one scrub-pin update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubUpdate {
    /// Scrub progress, `0.0..=1.0`.
    pub progress: f64,
    /// Video time to seek to.
    pub time: f64,
    /// True on the single update that crosses the swap point.
    pub swap_source: bool,
}

/// Pinned hero section whose scroll distance scrubs the video 1:1.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrubPin {
    duration: f64,
    distance: f64,
    swapped: Latch,
}

impl ScrubPin {
    /// Pin distance is `max(duration * 100, viewport_height)` pixels.
    pub fn new(duration: f64, viewport_height: f64) -> Self {
        let duration = if duration.is_finite() && duration > 0.0 {
            duration
        } else {
            0.0
        };
        Self {
            duration,
            distance: pin_distance(duration, viewport_height),
            swapped: Latch::new(),
        }
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn has_swapped(&self) -> bool {
        self.swapped.is_set()
    }

    /// `scrolled` is the distance (px) scrolled since the pin started.
    pub fn update(&mut self, scrolled: f64) -> ScrubUpdate {
        let progress = if self.distance > 0.0 {
            clamp01(scrolled / self.distance)
        } else {
            0.0
        };
        let swap_source = progress > SOURCE_SWAP_PROGRESS && self.swapped.set();
        ScrubUpdate {
            progress,
            time: progress * self.duration,
            swap_source,
        }
    }

    /// Re-measure after metadata or viewport changes; keeps the swap latch.
    pub fn resize(&mut self, duration: f64, viewport_height: f64) {
        let swapped = self.swapped;
        *self = Self::new(duration, viewport_height);
        self.swapped = swapped;
    }
}

pub fn pin_distance(duration: f64, viewport_height: f64) -> f64 {
    let by_duration = if duration.is_finite() { duration * 100.0 } else { 0.0 };
    by_duration.max(viewport_height.max(0.0))
}
