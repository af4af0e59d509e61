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

use yew::prelude::*;

use crate::components::contact_form::ContactFormView;

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    html! {
        <main class="contact-page">
            <h1>{"Talk to our team"}</h1>
            <p>{"Tell us about your community or family and we'll show you how touchless monitoring can help."}</p>
            <ContactFormView page_name="Contact" />
        </main>
    }
}
