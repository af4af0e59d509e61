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

use crate::components::video_upload::VideoUpload;

#[function_component(VideoAdminPage)]
pub fn video_admin_page() -> Html {
    html! {
        <main class="video-admin-page">
            <h1>{"Demo video"}</h1>
            <p>{"Upload a video to replace the story video on the home page, or restore the default."}</p>
            <VideoUpload />
        </main>
    }
}
