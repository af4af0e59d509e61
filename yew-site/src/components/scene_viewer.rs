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

//! Scroll story: a pinned video whose playhead follows the reader through a
//! stack of full-viewport scenes.

use std::rc::Rc;

use log::warn;
use scroll_timeline::sampler::{ScrollSample, ScrollSampler};
use scroll_timeline::smoothing::SmoothScroll;
use scroll_timeline::transition::TriggerEvent;
use scroll_timeline::video::{recover_to_start, seek, VideoSurface};
use scroll_timeline::SceneCatalog;
use web_sys::{Element, HtmlVideoElement};
use yew::prelude::*;

use crate::context::{use_theater_dimmed, use_video_src};
use crate::hooks::{use_animation_frame, use_intersection, viewport_height};
use crate::video::HtmlVideo;

#[derive(Properties, PartialEq)]
pub struct SceneViewerProps {
    pub catalog: Rc<SceneCatalog>,
}

#[function_component(SceneViewer)]
pub fn scene_viewer(props: &SceneViewerProps) -> Html {
    let track = use_node_ref();
    let video_ref = use_node_ref();
    let src = use_video_src();
    let scene_count = props.catalog.scenes.len();

    let mapper = use_memo(props.catalog.clone(), |catalog| catalog.mapper());
    let smooth = use_mut_ref(|| SmoothScroll::new(0.0));
    let last_sample = use_mut_ref(|| None::<ScrollSample>);
    let sample = use_state(|| ScrollSample::from_progress(0.0, scene_count));
    let active = use_state(|| false);
    let dimmed = use_theater_dimmed(None);

    {
        let active = active.clone();
        use_intersection(
            track.clone(),
            Callback::from(move |event: TriggerEvent| {
                active.set(matches!(event, TriggerEvent::Enter | TriggerEvent::EnterBack));
            }),
        );
    }

    let on_frame = {
        let track = track.clone();
        let video_ref = video_ref.clone();
        let mapper = mapper.clone();
        let sample = sample.clone();
        let sampler = ScrollSampler::new(scene_count);
        Callback::from(move |_timestamp: f64| {
            let Some(element) = track.cast::<Element>() else {
                return;
            };
            let offset = -element.get_bounding_client_rect().top();
            let position = {
                let mut smooth = smooth.borrow_mut();
                smooth.set_target(offset.max(0.0));
                if smooth.is_settled() && last_sample.borrow().is_some() {
                    return;
                }
                smooth.step()
            };

            let next = sampler.sample(position, viewport_height());
            if last_sample.borrow().as_ref() == Some(&next) {
                return;
            }
            *last_sample.borrow_mut() = Some(next);
            sample.set(next);

            let Some(element) = video_ref.cast::<HtmlVideoElement>() else {
                return;
            };
            let video = HtmlVideo::new(element);
            if let Some(time) = mapper.time_for_sample(&next, video.duration()) {
                if let Err(e) = seek(&video, time) {
                    warn!("Seek to {time}s failed: {e}");
                    recover_to_start(&video, mapper.scene_start(next.scene_index).unwrap_or(0.0));
                }
            }
        })
    };
    use_animation_frame(*active, on_frame);

    let on_video_error = {
        let video_ref = video_ref.clone();
        let mapper = mapper.clone();
        let scene_index = sample.scene_index;
        Callback::from(move |_: Event| {
            warn!("Story video failed to load");
            if let Some(element) = video_ref.cast::<HtmlVideoElement>() {
                let video = HtmlVideo::new(element);
                recover_to_start(&video, mapper.scene_start(scene_index).unwrap_or(0.0));
            }
        })
    };

    let scene = props.catalog.scenes.get(sample.scene_index);
    let scene_progress = sample.sub_scroll_progress * 100.0;

    html! {
        <section
            class={classes!("scene-viewer", dimmed.then_some("dimmed"))}
            ref={track}
            style={format!("height: {}vh;", scene_count * 100)}
        >
            <div class="scene-sticky">
                <video
                    ref={video_ref}
                    class="scene-video"
                    src={src}
                    muted=true
                    playsinline=true
                    preload="auto"
                    onerror={on_video_error}
                />
                if let Some(scene) = scene {
                    <div class="scene-copy" data-scene={scene.scene.to_string()}>
                        <h2 class="scene-title">{ &scene.title }</h2>
                        <p class="scene-text">{ scene.text_at(scene_progress) }</p>
                        if !scene.content.is_empty() {
                            <ul class="scene-content">
                                { for scene.content.iter().map(|item| html! { <li>{ item }</li> }) }
                            </ul>
                        }
                        if scene.callout_visible(scene_progress) {
                            <div class="scene-callout">{ &scene.description }</div>
                        }
                    </div>
                }
                <div class="scene-progress" style={format!("width: {:.2}%;", sample.progress)} />
                <ol class="scene-dots">
                    { for (0..scene_count).map(|index| html! {
                        <li class={classes!("scene-dot", (index == sample.scene_index).then_some("active"))} />
                    }) }
                </ol>
            </div>
        </section>
    }
}
