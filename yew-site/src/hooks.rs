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

//! Browser hooks feeding the timeline engine: element scroll offsets,
//! intersection events and animation-frame loops.
//!
//! Every listener, observer and frame handle is owned by the effect that
//! created it and released in the effect's cleanup.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use log::warn;
use scroll_timeline::transition::{IntersectionTracker, TriggerEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Scroll position of an element relative to the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElementScroll {
    /// Pixels scrolled past the element's top edge (negative before it).
    pub offset: f64,
    /// Rendered height of the element.
    pub height: f64,
    pub viewport_height: f64,
}

impl ElementScroll {
    fn measure(element: &Element) -> Self {
        let rect = element.get_bounding_client_rect();
        Self {
            offset: -rect.top(),
            height: rect.height(),
            viewport_height: viewport_height(),
        }
    }

    /// Progress (percent) through a tall element whose sticky child fills
    /// the viewport: 0 when its top reaches the viewport top, 100 when its
    /// bottom reaches the viewport bottom.
    pub fn progress(&self) -> f64 {
        let scrollable = self.height - self.viewport_height;
        if scrollable <= 0.0 {
            return if self.offset >= 0.0 { 100.0 } else { 0.0 };
        }
        scroll_timeline::progress::clamp_percent(self.offset / scrollable * 100.0)
    }
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Track where `node` sits in the viewport. Scroll and resize events are
/// coalesced to one measurement per animation frame.
#[hook]
pub fn use_element_scroll(node: NodeRef) -> ElementScroll {
    let scroll = use_state(ElementScroll::default);
    {
        let scroll = scroll.clone();
        use_effect_with(node, move |node| {
            let pending: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));
            let measure = {
                let node = node.clone();
                let scroll = scroll.clone();
                move || {
                    if let Some(element) = node.cast::<Element>() {
                        let next = ElementScroll::measure(&element);
                        if *scroll != next {
                            scroll.set(next);
                        }
                    }
                }
            };
            measure();

            let schedule = {
                let pending = pending.clone();
                move |_: &Event| {
                    if pending.borrow().is_some() {
                        return;
                    }
                    let measure = measure.clone();
                    let slot = pending.clone();
                    let handle = request_animation_frame(move |_| {
                        slot.borrow_mut().take();
                        measure();
                    });
                    *pending.borrow_mut() = Some(handle);
                }
            };

            let listeners = web_sys::window().map(|window| {
                let on_resize = schedule.clone();
                [
                    EventListener::new(&window, "scroll", schedule),
                    EventListener::new(&window, "resize", on_resize),
                ]
            });

            move || {
                drop(listeners);
                pending.borrow_mut().take();
            }
        });
    }
    *scroll
}

/// Emit enter/leave/enter-back/leave-back for `node` as it crosses the
/// viewport.
#[hook]
pub fn use_intersection(node: NodeRef, on_event: Callback<TriggerEvent>) {
    use_effect_with(node, move |node| {
        let tracker = Rc::new(RefCell::new(IntersectionTracker::new()));
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let top = entry.bounding_client_rect().top();
                let events = tracker.borrow_mut().observe(entry.is_intersecting(), top);
                for event in events {
                    on_event.emit(event);
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&0.0.into());
        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => Some(observer),
            Err(e) => {
                warn!("IntersectionObserver unavailable: {}", crate::video::js_error(&e));
                None
            }
        };
        if let (Some(observer), Some(element)) = (&observer, node.cast::<Element>()) {
            observer.observe(&element);
        }

        move || {
            if let Some(observer) = observer {
                observer.disconnect();
            }
            drop(callback);
        }
    });
}

/// Run `on_frame` once per animation frame while `active` is true.
#[hook]
pub fn use_animation_frame(active: bool, on_frame: Callback<f64>) {
    use_effect_with(active, move |active| {
        let slot: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));
        if *active {
            schedule_frame(slot.clone(), on_frame);
        }
        move || {
            slot.borrow_mut().take();
        }
    });
}

fn schedule_frame(slot: Rc<RefCell<Option<AnimationFrame>>>, on_frame: Callback<f64>) {
    let next = slot.clone();
    let handle = request_animation_frame(move |timestamp| {
        next.borrow_mut().take();
        on_frame.emit(timestamp);
        schedule_frame(next, on_frame);
    });
    *slot.borrow_mut() = Some(handle);
}
