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

//! Contact form relayed to the CRM endpoint.

use log::info;
use scroll_timeline::contact::ContactForm;
use web_sys::{
    Element, HtmlInputElement, HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};
use yew::prelude::*;

use crate::api::submit_contact;
use crate::constants::contact_endpoint;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

#[derive(Properties, Debug, PartialEq)]
pub struct ContactFormViewProps {
    /// Page name reported with the submission.
    #[prop_or(AttrValue::from("Contact"))]
    pub page_name: AttrValue,
}

fn input_value(event: &InputEvent) -> String {
    if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
        return input.value();
    }
    event
        .target_dyn_into::<HtmlTextAreaElement>()
        .map(|area| area.value())
        .unwrap_or_default()
}

fn bind(
    form: &UseStateHandle<ContactForm>,
    apply: fn(&mut ContactForm, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |event: InputEvent| {
        let mut next = (*form).clone();
        apply(&mut next, input_value(&event));
        form.set(next);
    })
}

fn page_uri() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

#[function_component(ContactFormView)]
pub fn contact_form_view(props: &ContactFormViewProps) -> Html {
    let form = use_state(ContactForm::default);
    let state = use_state(SubmitState::default);
    let banner = use_node_ref();

    {
        let banner = banner.clone();
        use_effect_with((*state).clone(), move |state| {
            if matches!(state, SubmitState::Success | SubmitState::Error(_)) {
                if let Some(element) = banner.cast::<Element>() {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Center);
                    element.scroll_into_view_with_scroll_into_view_options(&options);
                }
            }
            || ()
        });
    }

    let onsubmit = {
        let form = form.clone();
        let state = state.clone();
        let page_name = props.page_name.to_string();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *state == SubmitState::Submitting {
                return;
            }
            if form.is_bot() {
                info!("Dropping submission with honeypot filled");
                state.set(SubmitState::Success);
                return;
            }
            let submission = match (*form).clone().into_submission(page_uri(), page_name.clone()) {
                Ok(submission) => submission,
                Err(e) => {
                    state.set(SubmitState::Error(e.to_string()));
                    return;
                }
            };
            state.set(SubmitState::Submitting);
            let form = form.clone();
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match submit_contact(&contact_endpoint(), &submission).await {
                    Ok(()) => {
                        form.set(ContactForm::default());
                        state.set(SubmitState::Success);
                    }
                    Err(e) => state.set(SubmitState::Error(e.to_string())),
                }
            });
        })
    };

    let submitting = *state == SubmitState::Submitting;

    html! {
        <form class="contact-form" {onsubmit} novalidate=true>
            <div ref={banner} class="contact-banner-anchor">
                {
                    match &*state {
                        SubmitState::Success => html! {
                            <div class="contact-banner success" role="status">
                                {"Thank you! We'll be in touch shortly."}
                            </div>
                        },
                        SubmitState::Error(message) => html! {
                            <div class="contact-banner error" role="alert">{ message }</div>
                        },
                        _ => html! {},
                    }
                }
            </div>
            <div class="contact-row">
                <label>
                    {"First name*"}
                    <input name="firstName" type="text" value={form.first_name.clone()}
                        oninput={bind(&form, |f, v| f.first_name = v)} />
                </label>
                <label>
                    {"Last name*"}
                    <input name="lastName" type="text" value={form.last_name.clone()}
                        oninput={bind(&form, |f, v| f.last_name = v)} />
                </label>
            </div>
            <label>
                {"Email*"}
                <input name="email" type="email" value={form.email.clone()}
                    oninput={bind(&form, |f, v| f.email = v)} />
            </label>
            <div class="contact-row">
                <label>
                    {"Company"}
                    <input name="company" type="text" value={form.company.clone()}
                        oninput={bind(&form, |f, v| f.company = v)} />
                </label>
                <label>
                    {"Job title"}
                    <input name="jobTitle" type="text" value={form.job_title.clone()}
                        oninput={bind(&form, |f, v| f.job_title = v)} />
                </label>
            </div>
            <label>
                {"Phone"}
                <input name="phone" type="tel" value={form.phone.clone()}
                    oninput={bind(&form, |f, v| f.phone = v)} />
            </label>
            <label>
                {"Message"}
                <textarea name="message" value={form.message.clone()}
                    oninput={bind(&form, |f, v| f.message = v)} />
            </label>
            <div class="contact-honeypot" aria-hidden="true">
                <label>
                    {"Website"}
                    <input name="website" type="text" tabindex="-1" autocomplete="off"
                        value={form.website.clone()}
                        oninput={bind(&form, |f, v| f.website = v)} />
                </label>
            </div>
            <button class="contact-submit" type="submit" disabled={submitting}>
                { if submitting { "Sending..." } else { "Send message" } }
            </button>
        </form>
    }
}
