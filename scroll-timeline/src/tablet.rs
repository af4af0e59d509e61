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

//! Parameterized chat-tablet demo scenes.
//!
//! Every demo scene follows the same choreography: a question is typed into
//! the tablet, the send button is "clicked", a loading indicator runs, the
//! answer types out, and the scene transitions to its content (chart, fall
//! alert, summary list). [`TabletScene`] holds the per-scene text and
//! thresholds and compiles them into a [`SceneScript`].

use serde::{Deserialize, Serialize};

use crate::animation::{Animator, SceneScript, Threshold};
use crate::scene::SceneId;

pub const SHOW_QUERY_BUBBLE: &str = "show_query_bubble";
pub const TYPED_QUERY: &str = "typed_query";
pub const TYPING_INDICATOR: &str = "typing_indicator";
pub const SEND_CLICKED: &str = "send_clicked";
pub const SHOW_LOADING: &str = "show_loading";
pub const SHOW_RESPONSE: &str = "show_response";
pub const TYPED_RESPONSE: &str = "typed_response";
pub const TRANSITION_OUT: &str = "transition_out";
pub const SHOW_CONTENT: &str = "show_content";
pub const SHOW_CHART: &str = "show_chart";
pub const SHOW_ALERT: &str = "show_alert";
pub const ALERT_RESOLVED: &str = "alert_resolved";
pub const LIST_FADE: &str = "list_fade";

/// Progress thresholds (percent) of the tablet choreography.
///
/// Expected order is `start <= complete <= response_start <= transition_start
/// <= content_transition`; see [`TabletThresholds::ordering_issues`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabletThresholds {
    pub start: f64,
    pub complete: f64,
    pub response_start: f64,
    pub transition_start: f64,
    pub content_transition: f64,
}

impl TabletThresholds {
    /// Describe every adjacent pair that is out of order. Nothing is rejected.
    pub fn ordering_issues(&self) -> Vec<String> {
        let named = [
            ("start", self.start),
            ("complete", self.complete),
            ("responseStart", self.response_start),
            ("transitionStart", self.transition_start),
            ("contentTransition", self.content_transition),
        ];
        named
            .windows(2)
            .filter(|pair| pair[0].1 > pair[1].1)
            .map(|pair| {
                format!(
                    "{} ({}) is after {} ({})",
                    pair[0].0, pair[0].1, pair[1].0, pair[1].1
                )
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallAlert {
    pub show_at: f64,
    /// Once progress reaches this window the alert is marked resolved for good.
    pub resolve_window: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryList {
    pub items: Vec<String>,
    pub list_start: f64,
    pub list_complete: f64,
}

/// Configuration of one tablet demo scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabletScene {
    pub scene: SceneId,
    pub query: String,
    pub response: String,
    pub thresholds: TabletThresholds,
    #[serde(default)]
    pub chart_at: Option<f64>,
    #[serde(default)]
    pub fall_alert: Option<FallAlert>,
    #[serde(default)]
    pub summary: Option<SummaryList>,
}

impl TabletScene {
    pub fn script(&self) -> SceneScript {
        let t = self.thresholds;
        let mut script = SceneScript::new()
            .flag(SHOW_QUERY_BUBBLE, Threshold::At(t.start))
            .typed(TYPED_QUERY, &self.query, t.start, t.complete)
            .flag(TYPING_INDICATOR, Threshold::Window(t.start, t.complete))
            .latch(SEND_CLICKED, Threshold::At(t.complete), &[TYPING_INDICATOR])
            .flag(SHOW_LOADING, Threshold::Window(t.complete, t.response_start))
            .flag(SHOW_RESPONSE, Threshold::At(t.response_start))
            .typed(TYPED_RESPONSE, &self.response, t.response_start, t.transition_start)
            .fade(TRANSITION_OUT, t.transition_start, t.content_transition)
            .flag(SHOW_CONTENT, Threshold::At(t.content_transition));

        if let Some(chart_at) = self.chart_at {
            script = script.flag(SHOW_CHART, Threshold::At(chart_at));
        }
        if let Some(alert) = self.fall_alert {
            let [start, end] = alert.resolve_window;
            script = script
                .flag(SHOW_ALERT, Threshold::At(alert.show_at))
                .latch(ALERT_RESOLVED, Threshold::Window(start, end), &[]);
        }
        if let Some(summary) = &self.summary {
            script = script.fade(LIST_FADE, summary.list_start, summary.list_complete);
        }
        script
    }

    pub fn animator(&self) -> Animator {
        Animator::new(self.script())
    }

    /// Configuration hazards worth a warning: out-of-order thresholds and
    /// inverted windows.
    pub fn config_issues(&self) -> Vec<String> {
        let mut issues = self.thresholds.ordering_issues();
        issues.extend(self.script().inverted_windows());
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert_scene() -> TabletScene {
        TabletScene {
            scene: 4,
            query: "Did Dad get up last night?".to_string(),
            response: "Yes, twice. Both times he returned to bed.".to_string(),
            thresholds: TabletThresholds {
                start: 5.0,
                complete: 20.0,
                response_start: 30.0,
                transition_start: 55.0,
                content_transition: 65.0,
            },
            chart_at: Some(60.0),
            fall_alert: Some(FallAlert {
                show_at: 70.0,
                resolve_window: [83.0, 84.0],
            }),
            summary: Some(SummaryList {
                items: vec!["Slept 7h".to_string()],
                list_start: 65.0,
                list_complete: 85.0,
            }),
        }
    }

    #[test]
    fn test_nothing_visible_at_zero() {
        let frame = alert_scene().animator().update(0.0);
        assert!(!frame.flag(SHOW_QUERY_BUBBLE));
        assert!(!frame.flag(SHOW_RESPONSE));
        assert!(!frame.flag(SHOW_LOADING));
        assert!(!frame.flag(SHOW_ALERT));
        assert_eq!(frame.text(TYPED_QUERY), "");
    }

    #[test]
    fn test_typing_then_send_then_response() {
        let mut animator = alert_scene().animator();

        let typing = animator.update(12.5);
        assert!(typing.flag(SHOW_QUERY_BUBBLE));
        assert!(typing.flag(TYPING_INDICATOR));
        assert_eq!(typing.text(TYPED_QUERY), "Did Dad get u");

        let loading = animator.update(25.0);
        assert!(loading.flag(SEND_CLICKED));
        assert!(loading.flag(SHOW_LOADING));
        assert!(!loading.flag(SHOW_RESPONSE));

        let answered = animator.update(55.0);
        assert!(answered.flag(SHOW_RESPONSE));
        assert_eq!(answered.text(TYPED_RESPONSE), "Yes, twice. Both times he returned to bed.");

        // scrolling back into the typing window keeps the indicator off
        let back = animator.update(12.5);
        assert!(!back.flag(TYPING_INDICATOR));
        assert!(back.flag(SEND_CLICKED));
    }

    #[test]
    fn test_summary_list_fade_starts_at_zero() {
        let frame = alert_scene().animator().update(65.0);
        assert_eq!(frame.fade_percent(LIST_FADE), 0.0);
        let frame = alert_scene().animator().update(75.0);
        assert_eq!(frame.fade_percent(LIST_FADE), 50.0);
    }

    #[test]
    fn test_alert_resolution_is_one_way() {
        let mut animator = alert_scene().animator();
        assert!(animator.update(72.0).flag(SHOW_ALERT));
        assert!(!animator.update(82.0).flag(ALERT_RESOLVED));
        assert!(animator.update(83.2).flag(ALERT_RESOLVED));
        for p in [90.0, 84.5, 60.0, 20.0, 0.0] {
            assert!(animator.update(p).flag(ALERT_RESOLVED), "reverted at {p}");
        }
    }

    #[test]
    fn test_everything_shown_at_end() {
        let frame = alert_scene().animator().update(100.0);
        for name in [
            SHOW_QUERY_BUBBLE,
            SHOW_RESPONSE,
            SHOW_CONTENT,
            SHOW_CHART,
            SHOW_ALERT,
        ] {
            assert!(frame.flag(name), "{name} should be on at 100%");
        }
        assert_eq!(frame.fade(TRANSITION_OUT), 1.0);
        assert_eq!(frame.fade(LIST_FADE), 1.0);
    }

    #[test]
    fn test_ordering_issues_reported_not_enforced() {
        let mut scene = alert_scene();
        assert!(scene.config_issues().is_empty());

        scene.thresholds.response_start = 10.0;
        let issues = scene.config_issues();
        assert!(issues.iter().any(|issue| issue.contains("responseStart")));
        // still evaluates
        let frame = scene.animator().update(15.0);
        assert!(frame.flag(SHOW_RESPONSE));
    }
}
