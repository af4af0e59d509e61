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

//! Scroll-driven chat tablet mockup.
//!
//! One component renders every demo scene; the scene's text and thresholds
//! come from its [`TabletScene`] configuration.

use log::warn;
use scroll_timeline::animation::AnimationFrame;
use scroll_timeline::tablet::{
    TabletScene, ALERT_RESOLVED, LIST_FADE, SEND_CLICKED, SHOW_ALERT, SHOW_CHART, SHOW_CONTENT,
    SHOW_LOADING, SHOW_QUERY_BUBBLE, SHOW_RESPONSE, TRANSITION_OUT, TYPED_QUERY, TYPED_RESPONSE,
    TYPING_INDICATOR,
};
use scroll_timeline::Scene;
use yew::prelude::*;

use crate::context::use_theater_dimmed;
use crate::hooks::use_element_scroll;

const SLEEP_CHART_HOURS: [(&str, u8); 7] = [
    ("Mon", 72),
    ("Tue", 65),
    ("Wed", 80),
    ("Thu", 58),
    ("Fri", 76),
    ("Sat", 84),
    ("Sun", 70),
];

#[derive(Properties, Debug, PartialEq)]
pub struct TabletDemoProps {
    pub scene: TabletScene,
    /// Scene progress in percent.
    pub progress: f64,
}

#[function_component(TabletDemo)]
pub fn tablet_demo(props: &TabletDemoProps) -> Html {
    // Latches live as long as this mount.
    let animator = use_mut_ref(|| props.scene.animator());

    use_effect_with(props.scene.clone(), |scene| {
        for issue in scene.config_issues() {
            warn!("Tablet scene {}: {issue}", scene.scene);
        }
        || ()
    });

    let frame = animator.borrow_mut().update(props.progress);
    let chat_opacity = 1.0 - frame.fade(TRANSITION_OUT);

    html! {
        <div class="tablet-demo" data-scene={props.scene.scene.to_string()}>
            <div class="tablet-frame">
                <div class="tablet-screen">
                    if chat_opacity > 0.0 {
                        <div class="tablet-chat" style={format!("opacity: {chat_opacity:.3};")}>
                            { chat(&frame) }
                        </div>
                    }
                    if frame.flag(SHOW_CONTENT) {
                        <div class="tablet-content">
                            { content(&props.scene, &frame) }
                        </div>
                    }
                </div>
            </div>
        </div>
    }
}

fn chat(frame: &AnimationFrame) -> Html {
    let send_clicked = frame.flag(SEND_CLICKED);
    html! {
        <>
            if frame.flag(SHOW_QUERY_BUBBLE) {
                <div class="chat-bubble chat-query">
                    { frame.text(TYPED_QUERY) }
                    if frame.flag(TYPING_INDICATOR) {
                        <span class="typing-caret">{"|"}</span>
                    }
                </div>
            }
            if frame.flag(SHOW_LOADING) {
                <div class="chat-loading" aria-label="Thinking">
                    <span class="dot"></span>
                    <span class="dot"></span>
                    <span class="dot"></span>
                </div>
            }
            if frame.flag(SHOW_RESPONSE) {
                <div class="chat-bubble chat-response">{ frame.text(TYPED_RESPONSE) }</div>
            }
            <div class="chat-input">
                <span class="chat-input-placeholder">{"Ask about your loved one..."}</span>
                <button class={classes!("chat-send", send_clicked.then_some("clicked"))} tabindex="-1">
                    {"Send"}
                </button>
            </div>
        </>
    }
}

fn content(scene: &TabletScene, frame: &AnimationFrame) -> Html {
    let chart = scene.chart_at.is_some() && frame.flag(SHOW_CHART);
    let alert = scene.fall_alert.is_some() && frame.flag(SHOW_ALERT);
    let resolved = frame.flag(ALERT_RESOLVED);

    html! {
        <>
            if chart {
                <div class="sleep-chart">
                    { for SLEEP_CHART_HOURS.iter().map(|(day, height)| html! {
                        <div class="sleep-bar" style={format!("height: {height}%;")}>
                            <span class="sleep-bar-label">{ *day }</span>
                        </div>
                    }) }
                </div>
            }
            if alert {
                <div class={classes!("fall-alert", resolved.then_some("resolved"))}>
                    if resolved {
                        <span class="fall-alert-title">{"Resolved"}</span>
                        <span class="fall-alert-body">{"Caregiver responded. Dad is back in bed."}</span>
                    } else {
                        <span class="fall-alert-title">{"Fall detected"}</span>
                        <span class="fall-alert-body">{"Bathroom, 2:40 AM"}</span>
                    }
                </div>
            }
            if let Some(summary) = &scene.summary {
                <ul class="summary-list" style={format!("opacity: {:.3};", frame.fade(LIST_FADE))}>
                    { for summary.items.iter().map(|item| html! { <li>{ item }</li> }) }
                </ul>
            }
        </>
    }
}

#[derive(Properties, Debug, PartialEq)]
pub struct TabletSectionProps {
    pub tablet: TabletScene,
    #[prop_or_default]
    pub scene: Option<Scene>,
}

/// Tall scroll track with the tablet pinned while the reader scrolls through.
#[function_component(TabletSection)]
pub fn tablet_section(props: &TabletSectionProps) -> Html {
    let track = use_node_ref();
    let scroll = use_element_scroll(track.clone());
    let progress = scroll.progress();
    let dimmed = use_theater_dimmed(None);

    html! {
        <section
            class={classes!("tablet-section", dimmed.then_some("dimmed"))}
            ref={track}
            style="height: 400vh;"
        >
            <div class="tablet-sticky">
                if let Some(scene) = &props.scene {
                    <div class="tablet-copy">
                        <h2>{ &scene.title }</h2>
                        <p>{ scene.text_at(progress) }</p>
                    </div>
                }
                <TabletDemo scene={props.tablet.clone()} {progress} />
            </div>
        </section>
    }
}
