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

//! Demo-video upload to object storage.
//!
//! The browser performs the transfer; this module owns naming, URL building,
//! progress accounting, response parsing and the mapping of storage failures
//! to the messages shown to the uploader.

use serde::Deserialize;
use thiserror::Error;

/// Object-storage REST base.
pub const STORAGE_API_BASE: &str = "https://firebasestorage.googleapis.com/v0/b";

/// Folder receiving uploaded videos.
pub const VIDEO_FOLDER: &str = "videos";

const DEFAULT_EXTENSION: &str = "mp4";

/// Fixed failure codes reported by the storage provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorCode {
    Unauthorized,
    Canceled,
    QuotaExceeded,
    InvalidChecksum,
    RetryLimitExceeded,
    Unknown,
}

impl StorageErrorCode {
    /// Parse a provider code such as `storage/unauthorized`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "storage/unauthorized" => StorageErrorCode::Unauthorized,
            "storage/canceled" => StorageErrorCode::Canceled,
            "storage/quota-exceeded" => StorageErrorCode::QuotaExceeded,
            "storage/invalid-checksum" => StorageErrorCode::InvalidChecksum,
            "storage/retry-limit-exceeded" => StorageErrorCode::RetryLimitExceeded,
            _ => StorageErrorCode::Unknown,
        }
    }

    /// Classify a failed HTTP response. Status `0` is an aborted request.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            0 => StorageErrorCode::Canceled,
            401 | 403 => StorageErrorCode::Unauthorized,
            402 | 413 | 429 | 507 => StorageErrorCode::QuotaExceeded,
            409 | 422 => StorageErrorCode::InvalidChecksum,
            408 | 503 | 504 => StorageErrorCode::RetryLimitExceeded,
            _ => StorageErrorCode::Unknown,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            StorageErrorCode::Unauthorized => "storage/unauthorized",
            StorageErrorCode::Canceled => "storage/canceled",
            StorageErrorCode::QuotaExceeded => "storage/quota-exceeded",
            StorageErrorCode::InvalidChecksum => "storage/invalid-checksum",
            StorageErrorCode::RetryLimitExceeded => "storage/retry-limit-exceeded",
            StorageErrorCode::Unknown => "storage/unknown",
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            StorageErrorCode::Unauthorized => {
                "Upload failed: you don't have permission to upload videos."
            }
            StorageErrorCode::Canceled => "Upload was canceled.",
            StorageErrorCode::QuotaExceeded => "Upload failed: storage quota exceeded.",
            StorageErrorCode::InvalidChecksum => {
                "Upload failed: the file was corrupted in transit. Please try again."
            }
            StorageErrorCode::RetryLimitExceeded => {
                "Upload failed: the connection timed out. Please try again."
            }
            StorageErrorCode::Unknown => "Upload failed: an unknown error occurred.",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UploadError {
    #[error("Please choose a video file (got {0})")]
    NotAVideo(String),

    #[error("{}", .code.user_message())]
    Storage {
        code: StorageErrorCode,
        detail: String,
    },

    #[error("Upload finished but the storage response was unreadable: {0}")]
    MalformedResponse(String),
}

impl UploadError {
    pub fn storage(code: StorageErrorCode, detail: impl Into<String>) -> Self {
        UploadError::Storage {
            code,
            detail: detail.into(),
        }
    }

    pub fn code(&self) -> StorageErrorCode {
        match self {
            UploadError::Storage { code, .. } => *code,
            _ => StorageErrorCode::Unknown,
        }
    }
}

pub fn is_video_mime(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("video/")
}

/// Lower-cased extension of `file_name`, or `mp4` when it has none.
pub fn file_extension(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty()
                && !ext.is_empty()
                && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            ext.to_ascii_lowercase()
        }
        _ => DEFAULT_EXTENSION.to_string(),
    }
}

/// Storage path for an upload: `videos/video_<timestamp>.<ext>`.
pub fn object_path(timestamp_ms: u64, file_name: &str) -> String {
    format!(
        "{VIDEO_FOLDER}/video_{timestamp_ms}.{}",
        file_extension(file_name)
    )
}

pub fn upload_url(bucket: &str, path: &str) -> String {
    format!(
        "{STORAGE_API_BASE}/{bucket}/o?uploadType=media&name={}",
        urlencoding::encode(path)
    )
}

/// Public download URL of an uploaded object.
pub fn download_url(bucket: &str, path: &str, token: &str) -> String {
    format!(
        "{STORAGE_API_BASE}/{bucket}/o/{}?alt=media&token={}",
        urlencoding::encode(path),
        urlencoding::encode(token)
    )
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ObjectMetadata {
    name: String,
    #[serde(default)]
    download_tokens: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Turn the upload response into the public download URL, or the failure
/// it reports.
pub fn parse_upload_response(bucket: &str, status: u16, body: &str) -> Result<String, UploadError> {
    if !(200..300).contains(&status) {
        let detail = serde_json::from_str::<ErrorEnvelope>(body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| body.to_string());
        return Err(UploadError::storage(
            StorageErrorCode::from_http_status(status),
            format!("HTTP {status}: {detail}"),
        ));
    }

    let metadata: ObjectMetadata = serde_json::from_str(body)
        .map_err(|e| UploadError::MalformedResponse(e.to_string()))?;
    let token = metadata
        .download_tokens
        .as_deref()
        .and_then(|tokens| tokens.split(',').next())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| UploadError::MalformedResponse("missing downloadTokens".to_string()))?;
    Ok(download_url(bucket, &metadata.name, token))
}

/// Bytes transferred so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UploadProgress {
    pub loaded: u64,
    pub total: u64,
}

impl UploadProgress {
    pub fn new(loaded: u64, total: u64) -> Self {
        Self { loaded, total }
    }

    /// Whole percent, `0..=100`. Unknown totals report 0.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let percent = self.loaded.min(self.total) as f64 / self.total as f64 * 100.0;
        percent.floor() as u8
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading(u8),
    Complete(String),
    Failed(UploadError),
}

impl UploadStatus {
    pub fn is_busy(&self) -> bool {
        matches!(self, UploadStatus::Uploading(_))
    }

    pub fn status_text(&self) -> String {
        match self {
            UploadStatus::Idle => String::new(),
            UploadStatus::Uploading(percent) => format!("Uploading... {percent}%"),
            UploadStatus::Complete(_) => "Upload complete! The new video is now live.".to_string(),
            UploadStatus::Failed(error) => error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_path_keeps_extension() {
        assert_eq!(object_path(1700000000000, "Demo Clip.MOV"), "videos/video_1700000000000.mov");
        assert_eq!(object_path(5, "clip"), "videos/video_5.mp4");
        assert_eq!(object_path(5, ".hidden"), "videos/video_5.mp4");
        assert_eq!(object_path(5, "a.b?c"), "videos/video_5.mp4");
    }

    #[test]
    fn test_urls_encode_path() {
        assert_eq!(
            upload_url("demo.appspot.com", "videos/video_5.mp4"),
            "https://firebasestorage.googleapis.com/v0/b/demo.appspot.com/o?uploadType=media&name=videos%2Fvideo_5.mp4"
        );
        assert_eq!(
            download_url("demo.appspot.com", "videos/video_5.mp4", "abc"),
            "https://firebasestorage.googleapis.com/v0/b/demo.appspot.com/o/videos%2Fvideo_5.mp4?alt=media&token=abc"
        );
    }

    #[test]
    fn test_error_classification() {
        assert_eq!(
            StorageErrorCode::from_code("storage/quota-exceeded"),
            StorageErrorCode::QuotaExceeded
        );
        assert_eq!(StorageErrorCode::from_code("storage/bogus"), StorageErrorCode::Unknown);
        assert_eq!(StorageErrorCode::from_http_status(403), StorageErrorCode::Unauthorized);
        assert_eq!(StorageErrorCode::from_http_status(0), StorageErrorCode::Canceled);
        assert_eq!(StorageErrorCode::from_http_status(500), StorageErrorCode::Unknown);
        for code in [
            StorageErrorCode::Unauthorized,
            StorageErrorCode::Canceled,
            StorageErrorCode::QuotaExceeded,
            StorageErrorCode::InvalidChecksum,
            StorageErrorCode::RetryLimitExceeded,
            StorageErrorCode::Unknown,
        ] {
            assert_eq!(StorageErrorCode::from_code(code.as_code()), code);
        }
    }

    #[test]
    fn test_parse_success_response() {
        let body = r#"{"name":"videos/video_5.mp4","bucket":"demo","downloadTokens":"tok1,tok2"}"#;
        assert_eq!(
            parse_upload_response("demo", 200, body).unwrap(),
            "https://firebasestorage.googleapis.com/v0/b/demo/o/videos%2Fvideo_5.mp4?alt=media&token=tok1"
        );
    }

    #[test]
    fn test_parse_failure_response() {
        let body = r#"{"error":{"code":403,"message":"Permission denied."}}"#;
        let error = parse_upload_response("demo", 403, body).unwrap_err();
        assert_eq!(error.code(), StorageErrorCode::Unauthorized);
        assert_eq!(error.to_string(), StorageErrorCode::Unauthorized.user_message());

        let error = parse_upload_response("demo", 200, r#"{"name":"x"}"#).unwrap_err();
        assert!(matches!(error, UploadError::MalformedResponse(_)));
    }

    #[test]
    fn test_progress_and_status_text() {
        assert_eq!(UploadProgress::new(0, 0).percent(), 0);
        assert_eq!(UploadProgress::new(512, 1024).percent(), 50);
        assert_eq!(UploadProgress::new(2048, 1024).percent(), 100);
        assert_eq!(UploadStatus::Uploading(42).status_text(), "Uploading... 42%");
        assert!(UploadStatus::Uploading(1).is_busy());
        assert!(!UploadStatus::Idle.is_busy());
    }

    #[test]
    fn test_video_mime() {
        assert!(is_video_mime("video/mp4"));
        assert!(is_video_mime("Video/QuickTime"));
        assert!(!is_video_mime("image/png"));
    }
}
