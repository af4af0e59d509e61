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
use yew_router::prelude::*;

use crate::components::layout::{Footer, Header, NotFound};
use crate::constants::runtime_config;
use crate::context::{TheaterCtx, VideoConfigCtx};
use crate::pages::contact::ContactPage;
use crate::pages::home::Home;
use crate::pages::video_admin::VideoAdminPage;
use crate::routing::Route;

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Contact => html! { <ContactPage /> },
        Route::VideoAdmin => html! { <VideoAdminPage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let video_config = use_memo((), |_| {
        VideoConfigCtx::new(&runtime_config().default_video_src)
    });
    let theater: TheaterCtx = use_state(|| None);

    html! {
        <ContextProvider<VideoConfigCtx> context={(*video_config).clone()}>
            <ContextProvider<TheaterCtx> context={theater}>
                <BrowserRouter>
                    <Header />
                    <Switch<Route> render={switch} />
                    <Footer />
                </BrowserRouter>
            </ContextProvider<TheaterCtx>>
        </ContextProvider<VideoConfigCtx>>
    }
}
