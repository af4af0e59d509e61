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

//! HTTP calls: contact-form relay and demo-video upload.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use log::{info, warn};
use scroll_timeline::contact::{evaluate_response, ContactError, ContactSubmission};
use scroll_timeline::upload::{
    is_video_mime, object_path, parse_upload_response, upload_url, StorageErrorCode,
    UploadError, UploadProgress,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{File, ProgressEvent, XmlHttpRequest};
use url::Url;
use yew::Callback;

use crate::video::js_error;

/// Resolve `endpoint` against `origin`. Absolute endpoints pass through.
pub fn resolve_endpoint(origin: &str, endpoint: &str) -> Result<Url, url::ParseError> {
    match Url::parse(endpoint) {
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(origin)?.join(endpoint),
        parsed => parsed,
    }
}

/// Resolve a site-relative endpoint against the page origin. `reqwest` on
/// wasm only accepts absolute URLs.
pub fn absolute_url(endpoint: &str) -> Result<Url, url::ParseError> {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    resolve_endpoint(&origin, endpoint)
}

pub async fn submit_contact(
    endpoint: &str,
    submission: &ContactSubmission,
) -> Result<(), ContactError> {
    let url = absolute_url(endpoint)
        .map_err(|e| ContactError::Network(format!("Invalid endpoint {endpoint}: {e}")))?;
    info!("Submitting contact form for {}", submission.page_name);

    let response = reqwest::Client::new()
        .post(url)
        .json(submission)
        .send()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| ContactError::Network(format!("Failed to read response: {e}")))?;
    evaluate_response(status, &body).inspect_err(|e| warn!("Contact submission failed: {e}"))
}

#[derive(Debug, Clone, Copy)]
enum Settled {
    Loaded,
    Failed,
    Aborted,
}

fn now_ms() -> u64 {
    web_time::SystemTime::now()
        .duration_since(web_time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}

/// Upload a video file and return its public download URL.
///
/// `on_progress` receives whole percentages as bytes are sent.
pub async fn upload_video(
    bucket: &str,
    file: File,
    on_progress: Callback<u8>,
) -> Result<String, UploadError> {
    if !is_video_mime(&file.type_()) {
        return Err(UploadError::NotAVideo(file.type_()));
    }

    let path = object_path(now_ms(), &file.name());
    let url = upload_url(bucket, &path);
    info!("Uploading {} ({} bytes) to {path}", file.name(), file.size());

    let xhr = XmlHttpRequest::new()
        .map_err(|e| UploadError::storage(StorageErrorCode::Unknown, js_error(&e)))?;
    xhr.open_with_async("POST", &url, true)
        .map_err(|e| UploadError::storage(StorageErrorCode::Unknown, js_error(&e)))?;
    xhr.set_request_header("Content-Type", &file.type_())
        .map_err(|e| UploadError::storage(StorageErrorCode::Unknown, js_error(&e)))?;

    let on_upload_progress = Closure::<dyn FnMut(ProgressEvent)>::new(move |e: ProgressEvent| {
        if e.length_computable() {
            let progress = UploadProgress::new(e.loaded() as u64, e.total() as u64);
            on_progress.emit(progress.percent());
        }
    });
    let upload = xhr
        .upload()
        .map_err(|e| UploadError::storage(StorageErrorCode::Unknown, js_error(&e)))?;
    upload.set_onprogress(Some(on_upload_progress.as_ref().unchecked_ref()));

    let (sender, receiver) = oneshot::channel::<Settled>();
    let sender = Rc::new(RefCell::new(Some(sender)));
    let settle = |outcome: Settled| {
        let sender = sender.clone();
        Closure::<dyn FnMut()>::new(move || {
            if let Some(sender) = sender.borrow_mut().take() {
                let _ = sender.send(outcome);
            }
        })
    };
    let on_load = settle(Settled::Loaded);
    let on_error = settle(Settled::Failed);
    let on_abort = settle(Settled::Aborted);
    xhr.set_onload(Some(on_load.as_ref().unchecked_ref()));
    xhr.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    xhr.set_onabort(Some(on_abort.as_ref().unchecked_ref()));

    xhr.send_with_opt_blob(Some(&*file))
        .map_err(|e| UploadError::storage(StorageErrorCode::Unknown, js_error(&e)))?;

    let outcome = receiver.await.unwrap_or(Settled::Aborted);
    upload.set_onprogress(None);
    xhr.set_onload(None);
    xhr.set_onerror(None);
    xhr.set_onabort(None);

    match outcome {
        Settled::Loaded => {}
        Settled::Failed => {
            return Err(UploadError::storage(
                StorageErrorCode::RetryLimitExceeded,
                "network error",
            ))
        }
        Settled::Aborted => {
            return Err(UploadError::storage(StorageErrorCode::Canceled, "request aborted"))
        }
    }
    let status = xhr.status().unwrap_or(0);
    let body = xhr.response_text().ok().flatten().unwrap_or_default();
    let result = parse_upload_response(bucket, status, &body);
    match &result {
        Ok(download_url) => info!("Upload finished: {download_url}"),
        Err(e) => warn!("Upload failed ({}): {e:?}", e.code().as_code()),
    }
    result
}
