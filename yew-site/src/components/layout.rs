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

//! Site header and footer.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::routing::Route;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="site-header">
            <Link<Route> to={Route::Home} classes="site-logo">{"Vayyar Care"}</Link<Route>>
            <nav class="site-nav">
                <a href="/#products">{"Products"}</a>
                <Link<Route> to={Route::Contact} classes="nav-cta">{"Contact us"}</Link<Route>>
            </nav>
        </header>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-links">
                <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
                <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                <a href="/#products">{"Products"}</a>
            </div>
            <p class="footer-note">
                {"Touchless monitoring for senior living. No cameras, no wearables."}
            </p>
        </footer>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page does not exist."}</p>
            <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
        </section>
    }
}
