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

//! Theater mode: one video full-bleed while every other page video dims.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use scroll_timeline::smoothing::ProgressSmoother;
use scroll_timeline::video::VideoSurface;
use wasm_bindgen::JsCast;
use web_sys::{HtmlVideoElement, KeyboardEvent};
use yew::prelude::*;

use crate::hooks::use_animation_frame;
use crate::video::HtmlVideo;

#[derive(Properties, Debug, PartialEq)]
pub struct TheaterOverlayProps {
    pub src: AttrValue,
    #[prop_or_default]
    pub title: AttrValue,
    pub on_close: Callback<()>,
}

#[function_component(TheaterOverlay)]
pub fn theater_overlay(props: &TheaterOverlayProps) -> Html {
    let video_ref = use_node_ref();
    let progress = use_state(|| 0.0_f64);
    let smoother = use_mut_ref(ProgressSmoother::default);

    {
        let on_close = props.on_close.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "keydown", move |event| {
                    if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                        if event.key() == "Escape" {
                            on_close.emit(());
                        }
                    }
                })
            });
            move || drop(listener)
        });
    }

    let on_frame = {
        let video_ref = video_ref.clone();
        let progress = progress.clone();
        let smoother: Rc<RefCell<ProgressSmoother>> = smoother.clone();
        Callback::from(move |_timestamp: f64| {
            if let Some(element) = video_ref.cast::<HtmlVideoElement>() {
                let video = HtmlVideo::new(element);
                let committed = smoother
                    .borrow_mut()
                    .sample(video.current_time(), video.duration());
                if let Some(value) = committed {
                    progress.set(value);
                }
            }
        })
    };
    use_animation_frame(true, on_frame);

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="theater-overlay" role="dialog" aria-label={props.title.clone()}>
            <video
                ref={video_ref}
                class="theater-video"
                src={props.src.clone()}
                autoplay=true
                playsinline=true
                controls=true
            />
            <div class="theater-progress">
                <div class="theater-progress-bar" style={format!("width: {:.1}%;", *progress * 100.0)} />
            </div>
            <button class="theater-close" onclick={on_close_click} aria-label="Close">{"×"}</button>
        </div>
    }
}
