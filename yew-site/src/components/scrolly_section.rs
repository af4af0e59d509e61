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

//! Video sections that react to entering and leaving the viewport.

use log::warn;
use scroll_timeline::catalog::SectionConfig;
use scroll_timeline::transition::{Command, SectionController, SectionKind, TriggerEvent};
use scroll_timeline::video::apply_commands;
use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::context::{use_theater_dimmed, TheaterCtx};
use crate::hooks::use_intersection;
use crate::video::HtmlVideo;

#[derive(Properties, Debug, PartialEq)]
pub struct ScrollySectionProps {
    pub config: SectionConfig,
}

#[function_component(ScrollySection)]
pub fn scrolly_section(props: &ScrollySectionProps) -> Html {
    let config = &props.config;
    let section = use_node_ref();
    let video_ref = use_node_ref();
    let controller = use_mut_ref(|| SectionController::new(config.kind, config.start_time));
    let overlay_visible = use_state(|| false);
    let theater = use_context::<TheaterCtx>();

    {
        let video_ref = video_ref.clone();
        let overlay_visible = overlay_visible.clone();
        let start_time = config.start_time;
        let id = config.id.clone();
        use_intersection(
            section.clone(),
            Callback::from(move |event: TriggerEvent| {
                let commands = controller.borrow_mut().handle(event);
                for command in &commands {
                    match command {
                        Command::FadeOverlayIn => overlay_visible.set(true),
                        Command::FadeOverlayOut => overlay_visible.set(false),
                        _ => {}
                    }
                }
                if let Some(element) = video_ref.cast::<HtmlVideoElement>() {
                    let video = HtmlVideo::new(element).with_scene_start(start_time);
                    if let Err(e) = apply_commands(&video, &commands, start_time) {
                        warn!("Section {id}: {e}");
                    }
                }
            }),
        );
    }

    let dimmed = use_theater_dimmed(Some(AttrValue::from(config.id.clone())));

    let on_theater = theater.clone().map(|theater| {
        let id = config.id.clone();
        Callback::from(move |_: MouseEvent| theater.set(Some(id.clone())))
    });

    let looping = config.kind != SectionKind::Video;
    let kind_class = match config.kind {
        SectionKind::Video => "section-video",
        SectionKind::ScrollyVideo => "section-scrolly",
        SectionKind::ScrollyVideoFixed => "section-scrolly-fixed",
    };

    html! {
        <section
            id={config.id.clone()}
            ref={section}
            class={classes!("scrolly-section", kind_class, dimmed.then_some("dimmed"))}
        >
            <video
                ref={video_ref}
                class="scrolly-video"
                src={config.src.clone()}
                muted=true
                playsinline=true
                loop={looping}
                preload="metadata"
            />
            <div class={classes!(
                "scrolly-overlay",
                (config.kind != SectionKind::ScrollyVideoFixed || *overlay_visible).then_some("visible"),
            )}>
                <h2>{ &config.title }</h2>
                <p>{ &config.body }</p>
                if let Some(onclick) = on_theater {
                    <button class="theater-open" {onclick}>{"Watch full screen"}</button>
                }
            </div>
        </section>
    }
}
