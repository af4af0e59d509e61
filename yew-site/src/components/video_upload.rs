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

//! Upload or reset the demo video shown across the site.

use log::warn;
use scroll_timeline::upload::{UploadError, UploadStatus};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::upload_video;
use crate::constants::storage_bucket;
use crate::context::{use_video_src, VideoConfigCtx};

#[function_component(VideoUpload)]
pub fn video_upload() -> Html {
    let ctx = use_context::<VideoConfigCtx>();
    let video_src = use_video_src();
    let status = use_state(UploadStatus::default);

    let Some(ctx) = ctx else {
        return html! {
            <div class="video-upload error">{"Video configuration is unavailable."}</div>
        };
    };

    let onchange = {
        let ctx = ctx.clone();
        let status = status.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            input.set_value("");
            status.set(UploadStatus::Uploading(0));

            let ctx = ctx.clone();
            let status = status.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let on_progress = {
                    let status = status.clone();
                    Callback::from(move |percent: u8| status.set(UploadStatus::Uploading(percent)))
                };
                let result = upload_video(&storage_bucket(), file, on_progress)
                    .await
                    .and_then(|url| {
                        ctx.set_custom(&url)
                            .map(|_| url)
                            .map_err(|e| UploadError::MalformedResponse(e.to_string()))
                    });
                match result {
                    Ok(url) => status.set(UploadStatus::Complete(url)),
                    Err(e) => {
                        warn!("Video upload failed: {e}");
                        status.set(UploadStatus::Failed(e));
                    }
                }
            });
        })
    };

    let on_reset = {
        let ctx = ctx.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            ctx.reset();
            status.set(UploadStatus::Idle);
        })
    };

    let busy = status.is_busy();
    let percent = match *status {
        UploadStatus::Uploading(percent) => Some(percent),
        _ => None,
    };
    let status_class = match *status {
        UploadStatus::Failed(_) => "error",
        UploadStatus::Complete(_) => "success",
        _ => "",
    };

    html! {
        <div class="video-upload">
            <p class="video-upload-current">
                {"Current video: "}
                <code>{ video_src.clone() }</code>
                if ctx.is_custom() {
                    <span class="badge">{"custom"}</span>
                }
            </p>
            <label class={classes!("btn", busy.then_some("disabled"))}>
                {"Choose video"}
                <input type="file" accept="video/*" disabled={busy} {onchange} hidden=true />
            </label>
            if let Some(percent) = percent {
                <progress class="video-upload-progress" max="100" value={percent.to_string()} />
            }
            <p class={classes!("video-upload-status", status_class)}>{ status.status_text() }</p>
            <button class="btn btn-secondary video-reset" onclick={on_reset} disabled={busy || !ctx.is_custom()}>
                {"Reset to default video"}
            </button>
        </div>
    }
}
