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

//! Pinned hero whose scroll distance scrubs the video frame by frame.
//!
//! Past 90% of the pin the product-only clip is swapped in, once per mount.

use log::{info, warn};
use scroll_timeline::transition::{pin_distance, ScrubPin};
use scroll_timeline::video::{apply_scrub, VideoSurface};
use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::context::use_theater_dimmed;
use crate::hooks::{use_element_scroll, viewport_height};
use crate::video::HtmlVideo;

#[derive(Properties, Debug, PartialEq)]
pub struct ScrubHeroProps {
    pub src: AttrValue,
    pub product_src: AttrValue,
    #[prop_or_default]
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: AttrValue,
}

#[function_component(ScrubHero)]
pub fn scrub_hero(props: &ScrubHeroProps) -> Html {
    let section = use_node_ref();
    let video_ref = use_node_ref();
    let pin = use_mut_ref(|| ScrubPin::new(0.0, viewport_height()));
    let distance = use_state(|| pin.borrow().distance());
    let scroll = use_element_scroll(section.clone());
    let dimmed = use_theater_dimmed(None);

    let on_metadata = {
        let pin = pin.clone();
        let distance = distance.clone();
        let video_ref = video_ref.clone();
        Callback::from(move |_: Event| {
            if let Some(element) = video_ref.cast::<HtmlVideoElement>() {
                let video = HtmlVideo::new(element);
                let mut pin = pin.borrow_mut();
                pin.resize(video.duration(), viewport_height());
                distance.set(pin.distance());
                info!(
                    "Scrub hero ready: {:.1}s over {:.0}px",
                    pin.duration(),
                    pin.distance()
                );
            }
        })
    };

    {
        let pin = pin.clone();
        let distance = distance.clone();
        let video_ref = video_ref.clone();
        let product_src = props.product_src.clone();
        use_effect_with(scroll, move |scroll| {
            let mut pin = pin.borrow_mut();
            let expected = pin_distance(pin.duration(), scroll.viewport_height);
            if (expected - pin.distance()).abs() > 0.5 {
                let duration = pin.duration();
                pin.resize(duration, scroll.viewport_height);
                distance.set(pin.distance());
            }

            let update = pin.update(scroll.offset);
            if let Some(element) = video_ref.cast::<HtmlVideoElement>() {
                let video = HtmlVideo::new(element);
                if update.swap_source {
                    info!("Swapping hero to {product_src}");
                }
                if let Err(e) = apply_scrub(&video, &update, &product_src) {
                    warn!("Hero scrub failed: {e}");
                }
            }
            || ()
        });
    }

    html! {
        <section
            class={classes!("scrub-hero", dimmed.then_some("dimmed"))}
            ref={section}
            style={format!("height: calc({:.0}px + 100vh);", *distance)}
        >
            <div class="scrub-sticky">
                <video
                    ref={video_ref}
                    class="scrub-video"
                    src={props.src.clone()}
                    muted=true
                    playsinline=true
                    preload="auto"
                    onloadedmetadata={on_metadata}
                />
                <div class="scrub-copy">
                    <h1>{ props.title.clone() }</h1>
                    <p>{ props.subtitle.clone() }</p>
                </div>
            </div>
        </section>
    }
}
