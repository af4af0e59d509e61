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

//! Animation state machine.
//!
//! A [`SceneScript`] is a declarative table of rules evaluated against page
//! progress. Evaluation is pure: the same progress always yields the same
//! [`AnimationFrame`]. The only state lives in [`Latch`]es owned by an
//! [`Animator`]; a latch is set once its trigger is reached and stays set when
//! the reader scrolls back, until the animator is reset on remount.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::progress::{clamp_percent, window_fraction};

/// Progress condition for a flag or latch.
///
/// Deserializes from a bare number (`"show": 40`) or a pair (`"show": [40, 60]`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Threshold {
    /// On once progress is at or past the value.
    At(f64),
    /// On while progress is inside the inclusive range.
    Window(f64, f64),
}

impl Threshold {
    pub fn is_active(&self, progress: f64) -> bool {
        match *self {
            Threshold::At(at) => progress >= at,
            Threshold::Window(start, end) => progress >= start && progress <= end,
        }
    }

    fn start(&self) -> f64 {
        match *self {
            Threshold::At(at) => at,
            Threshold::Window(start, _) => start,
        }
    }

    /// True when moving from `from` to `to` jumped over the whole window
    /// without sampling inside it.
    fn crossed(&self, from: f64, to: f64) -> bool {
        match *self {
            Threshold::At(_) => false,
            Threshold::Window(start, end) => from < start && to > end,
        }
    }
}

/// One derived value of a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rule {
    /// Boolean visibility flag.
    Flag { name: String, threshold: Threshold },
    /// Prefix of `text` revealed between `start` and `end`.
    Typed {
        name: String,
        text: String,
        start: f64,
        end: f64,
    },
    /// Fraction `0..=1` of the way from `start` to `end`.
    Fade { name: String, start: f64, end: f64 },
}

impl Rule {
    pub fn name(&self) -> &str {
        match self {
            Rule::Flag { name, .. } | Rule::Typed { name, .. } | Rule::Fade { name, .. } => name,
        }
    }

    fn window(&self) -> Option<(f64, f64)> {
        match *self {
            Rule::Flag {
                threshold: Threshold::Window(start, end),
                ..
            }
            | Rule::Typed { start, end, .. }
            | Rule::Fade { start, end, .. } => Some((start, end)),
            Rule::Flag { .. } => None,
        }
    }

    fn evaluate(&self, progress: f64) -> Value {
        match self {
            Rule::Flag { threshold, .. } => Value::Flag(threshold.is_active(progress)),
            Rule::Typed {
                text, start, end, ..
            } => Value::Text(typed_prefix(text, progress, *start, *end).to_string()),
            Rule::Fade { start, end, .. } => Value::Fade(window_fraction(progress, *start, *end)),
        }
    }
}

/// A one-way flag set by reaching `trigger`. While set, every flag named in
/// `suppresses` is forced off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatchRule {
    pub name: String,
    pub trigger: Threshold,
    #[serde(default)]
    pub suppresses: Vec<String>,
}

/// Number of characters of a `len`-character text revealed at `progress`.
pub fn typed_len(len: usize, progress: f64, start: f64, end: f64) -> usize {
    let fraction = window_fraction(progress, start, end);
    ((fraction * len as f64).floor() as usize).min(len)
}

/// Prefix of `text` revealed at `progress` for a typing effect over `[start, end]`.
pub fn typed_prefix(text: &str, progress: f64, start: f64, end: f64) -> &str {
    let count = typed_len(text.chars().count(), progress, start, end);
    match text.char_indices().nth(count) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Flag(bool),
    Text(String),
    Fade(f64),
}

/// Values derived for one progress sample.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationFrame {
    progress: f64,
    values: BTreeMap<String, Value>,
}

impl AnimationFrame {
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Boolean flag; unknown names and non-flag values read as `false`.
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(Value::Flag(true)))
    }

    pub fn text(&self, name: &str) -> &str {
        match self.values.get(name) {
            Some(Value::Text(text)) => text,
            _ => "",
        }
    }

    pub fn fade(&self, name: &str) -> f64 {
        match self.values.get(name) {
            Some(Value::Fade(fraction)) => *fraction,
            _ => 0.0,
        }
    }

    pub fn fade_percent(&self, name: &str) -> f64 {
        self.fade(name) * 100.0
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    fn set(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }
}

/// Declarative rule table for one scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneScript {
    #[serde(default)]
    pub rules: Vec<Rule>,
    #[serde(default)]
    pub latches: Vec<LatchRule>,
}

impl SceneScript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flag(mut self, name: &str, threshold: Threshold) -> Self {
        self.rules.push(Rule::Flag {
            name: name.to_string(),
            threshold,
        });
        self
    }

    pub fn typed(mut self, name: &str, text: &str, start: f64, end: f64) -> Self {
        self.rules.push(Rule::Typed {
            name: name.to_string(),
            text: text.to_string(),
            start,
            end,
        });
        self
    }

    pub fn fade(mut self, name: &str, start: f64, end: f64) -> Self {
        self.rules.push(Rule::Fade {
            name: name.to_string(),
            start,
            end,
        });
        self
    }

    pub fn latch(mut self, name: &str, trigger: Threshold, suppresses: &[&str]) -> Self {
        self.latches.push(LatchRule {
            name: name.to_string(),
            trigger,
            suppresses: suppresses.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    /// Pure evaluation of the rules, ignoring latches.
    pub fn evaluate(&self, progress: f64) -> AnimationFrame {
        let progress = clamp_percent(progress);
        let mut frame = AnimationFrame {
            progress,
            values: BTreeMap::new(),
        };
        for rule in &self.rules {
            frame.set(rule.name(), rule.evaluate(progress));
        }
        frame
    }

    /// Rules whose window ends before it starts.
    pub fn inverted_windows(&self) -> Vec<String> {
        self.rules
            .iter()
            .filter_map(|rule| match rule.window() {
                Some((start, end)) if end < start => Some(format!(
                    "{}: window [{start}, {end}] ends before it starts",
                    rule.name()
                )),
                _ => None,
            })
            .collect()
    }
}

/// One-way flag. Once set it stays set until [`Latch::reset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Latch {
    set: bool,
}

impl Latch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the latch; returns `true` only on the call that set it.
    pub fn set(&mut self) -> bool {
        let newly_set = !self.set;
        self.set = true;
        newly_set
    }

    pub fn is_set(&self) -> bool {
        self.set
    }

    pub fn reset(&mut self) {
        self.set = false;
    }
}

/// Evaluates a [`SceneScript`] while holding its latch state for one mount.
#[derive(Debug, Clone)]
pub struct Animator {
    script: SceneScript,
    latches: Vec<Latch>,
    last_progress: Option<f64>,
}

impl Animator {
    pub fn new(script: SceneScript) -> Self {
        let latches = vec![Latch::new(); script.latches.len()];
        Self {
            script,
            latches,
            last_progress: None,
        }
    }

    pub fn script(&self) -> &SceneScript {
        &self.script
    }

    pub fn is_latched(&self, name: &str) -> bool {
        self.script
            .latches
            .iter()
            .zip(&self.latches)
            .any(|(rule, latch)| rule.name == name && latch.is_set())
    }

    /// Advance latches to `progress` and derive the frame.
    pub fn update(&mut self, progress: f64) -> AnimationFrame {
        let progress = clamp_percent(progress);

        for (rule, latch) in self.script.latches.iter().zip(self.latches.iter_mut()) {
            let reached = rule.trigger.is_active(progress)
                || self
                    .last_progress
                    .is_some_and(|last| rule.trigger.crossed(last, progress));
            if reached && latch.set() {
                log::debug!(
                    "Latch '{}' set at {progress:.1}% (trigger starts at {})",
                    rule.name,
                    rule.trigger.start()
                );
            }
        }
        self.last_progress = Some(progress);

        let mut frame = self.script.evaluate(progress);
        for (rule, latch) in self.script.latches.iter().zip(&self.latches) {
            frame.set(&rule.name, Value::Flag(latch.is_set()));
            if latch.is_set() {
                for suppressed in &rule.suppresses {
                    frame.set(suppressed, Value::Flag(false));
                }
            }
        }
        frame
    }

    /// Forget latch state, as on remount.
    pub fn reset(&mut self) {
        for latch in &mut self.latches {
            latch.reset();
        }
        self.last_progress = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_json_forms() {
        let at: Threshold = serde_json::from_str("40").unwrap();
        let window: Threshold = serde_json::from_str("[83, 84]").unwrap();
        assert_eq!(at, Threshold::At(40.0));
        assert_eq!(window, Threshold::Window(83.0, 84.0));
        assert!(window.is_active(83.5));
        assert!(!window.is_active(84.5));
    }

    #[test]
    fn test_typed_prefix_reveal() {
        let text = "Is Mom okay?";
        assert_eq!(typed_prefix(text, 10.0, 10.0, 20.0), "");
        assert_eq!(typed_prefix(text, 15.0, 10.0, 20.0), "Is Mom");
        assert_eq!(typed_prefix(text, 20.0, 10.0, 20.0), text);
        assert_eq!(typed_prefix(text, 99.0, 10.0, 20.0), text);
    }

    #[test]
    fn test_typed_prefix_is_char_safe() {
        let text = "Grüße";
        assert_eq!(typed_prefix(text, 60.0, 0.0, 100.0), "Grü");
    }

    #[test]
    fn test_typed_len_monotone_and_complete_at_end() {
        let len = 37;
        let mut previous = 0;
        let mut p = 0.0;
        while p <= 100.0 {
            let current = typed_len(len, p, 12.0, 31.0);
            assert!(current >= previous, "prefix shrank at {p}");
            if p >= 31.0 {
                assert_eq!(current, len);
            } else {
                assert!(current < len, "full text before end at {p}");
            }
            previous = current;
            p += 0.25;
        }
    }

    #[test]
    fn test_frame_accessors() {
        let script = SceneScript::new()
            .flag("show_bubble", Threshold::At(10.0))
            .flag("show_dots", Threshold::Window(20.0, 30.0))
            .fade("list_fade", 65.0, 85.0);
        let frame = script.evaluate(25.0);
        assert!(frame.flag("show_bubble"));
        assert!(frame.flag("show_dots"));
        assert_eq!(frame.fade("list_fade"), 0.0);
        assert!(!frame.flag("unknown"));
        assert_eq!(frame.text("show_bubble"), "");
    }

    #[test]
    fn test_latch_survives_scroll_back() {
        let script = SceneScript::new()
            .flag("show_alert", Threshold::At(70.0))
            .latch("alert_resolved", Threshold::Window(83.0, 84.0), &[]);
        let mut animator = Animator::new(script);

        assert!(!animator.update(80.0).flag("alert_resolved"));
        assert!(animator.update(83.5).flag("alert_resolved"));
        let back = animator.update(10.0);
        assert!(back.flag("alert_resolved"));
        assert!(!back.flag("show_alert"));

        animator.reset();
        assert!(!animator.update(10.0).flag("alert_resolved"));
    }

    #[test]
    fn test_latch_fires_when_window_skipped() {
        let script = SceneScript::new().latch("alert_resolved", Threshold::Window(83.0, 84.0), &[]);
        let mut animator = Animator::new(script);
        animator.update(80.0);
        assert!(animator.update(92.0).flag("alert_resolved"));
    }

    #[test]
    fn test_latch_not_fired_on_first_sample_past_window() {
        let script = SceneScript::new().latch("alert_resolved", Threshold::Window(83.0, 84.0), &[]);
        let mut animator = Animator::new(script);
        assert!(!animator.update(92.0).flag("alert_resolved"));
    }

    #[test]
    fn test_latch_suppresses_flag() {
        let script = SceneScript::new()
            .flag("typing_indicator", Threshold::Window(10.0, 30.0))
            .latch("send_clicked", Threshold::At(30.0), &["typing_indicator"]);
        let mut animator = Animator::new(script);
        assert!(animator.update(20.0).flag("typing_indicator"));
        animator.update(35.0);
        let frame = animator.update(20.0);
        assert!(frame.flag("send_clicked"));
        assert!(!frame.flag("typing_indicator"));
        assert!(animator.is_latched("send_clicked"));
    }

    #[test]
    fn test_inverted_windows_reported() {
        let script = SceneScript::new()
            .fade("ok", 10.0, 20.0)
            .typed("backwards", "hello", 50.0, 40.0);
        let issues = script.inverted_windows();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].starts_with("backwards"));
    }

    #[test]
    fn test_script_from_json() {
        let json = r#"{
            "rules": [
                { "kind": "flag", "name": "show_chart", "threshold": 55 },
                { "kind": "typed", "name": "query", "text": "hi", "start": 0, "end": 10 },
                { "kind": "fade", "name": "list", "start": 65, "end": 85 }
            ],
            "latches": [ { "name": "resolved", "trigger": [83, 84] } ]
        }"#;
        let script: SceneScript = serde_json::from_str(json).unwrap();
        assert_eq!(script.rules.len(), 3);
        assert_eq!(script.latches[0].trigger, Threshold::Window(83.0, 84.0));
    }
}
