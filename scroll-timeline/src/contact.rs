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

//! Contact form submission.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Endpoint that relays submissions to the CRM.
pub const CONTACT_ENDPOINT: &str = "/api/hubspot/contact";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContactError {
    #[error("{0}")]
    Validation(String),

    #[error("Could not reach the server. Please check your connection and try again.")]
    Network(String),

    #[error("Submission failed ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("{0}")]
    Rejected(String),
}

/// Fields typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
    /// Hidden field; humans leave it empty.
    #[serde(default)]
    pub website: String,
}

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$").unwrap()
});

fn looks_like_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

impl ContactForm {
    pub fn is_bot(&self) -> bool {
        !self.website.trim().is_empty()
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        let required = [
            ("First name", &self.first_name),
            ("Last name", &self.last_name),
            ("Email", &self.email),
        ];
        if let Some((label, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ContactError::Validation(format!("{label} is required.")));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::Validation(
                "Please enter a valid email address.".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate and attach page metadata.
    pub fn into_submission(
        self,
        page_uri: impl Into<String>,
        page_name: impl Into<String>,
    ) -> Result<ContactSubmission, ContactError> {
        self.validate()?;
        Ok(ContactSubmission {
            form: self,
            page_uri: page_uri.into(),
            page_name: page_name.into(),
        })
    }
}

/// JSON body posted to [`CONTACT_ENDPOINT`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[serde(flatten)]
    pub form: ContactForm,
    pub page_uri: String,
    pub page_name: String,
}

#[derive(Debug, Deserialize)]
struct ResponseBody {
    #[serde(default)]
    error: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
}

fn error_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Object(map) => map
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
        other => other.to_string(),
    }
}

/// Success is a 2xx status whose JSON body (if any) has no `error` field.
pub fn evaluate_response(status: u16, body: &str) -> Result<(), ContactError> {
    let parsed = serde_json::from_str::<ResponseBody>(body).ok();
    let reported = parsed
        .as_ref()
        .and_then(|body| body.error.as_ref())
        .filter(|error| !error.is_null())
        .map(error_text);

    if !(200..300).contains(&status) {
        let message = reported
            .or_else(|| parsed.and_then(|body| body.message))
            .unwrap_or_else(|| "Something went wrong. Please try again.".to_string());
        return Err(ContactError::Server { status, message });
    }
    match reported {
        Some(message) => Err(ContactError::Rejected(message)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            company: "Care Co".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validation() {
        assert!(form().validate().is_ok());

        let mut missing = form();
        missing.last_name = "  ".to_string();
        assert_eq!(
            missing.validate(),
            Err(ContactError::Validation("Last name is required.".to_string()))
        );

        for bad in [
            "ada",
            "ada@",
            "@x.com",
            "ada@example",
            "ada @x.com",
            "a@b@c.com",
            "ada@.example.com",
            "ada@example..com",
        ] {
            let mut f = form();
            f.email = bad.to_string();
            assert!(f.validate().is_err(), "{bad} accepted");
        }

        for good in ["ada.lovelace+care@example.co.uk", "a_b@sub-domain.example.org"] {
            let mut f = form();
            f.email = good.to_string();
            assert!(f.validate().is_ok(), "{good} rejected");
        }
    }

    #[test]
    fn test_submission_json_shape() {
        let submission = form().into_submission("https://example.com/contact", "Contact").unwrap();
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["jobTitle"], "");
        assert_eq!(json["website"], "");
        assert_eq!(json["pageUri"], "https://example.com/contact");
        assert_eq!(json["pageName"], "Contact");
    }

    #[test]
    fn test_honeypot() {
        let mut f = form();
        assert!(!f.is_bot());
        f.website = "http://spam".to_string();
        assert!(f.is_bot());
    }

    #[test]
    fn test_evaluate_response() {
        assert_eq!(evaluate_response(200, r#"{"success":true}"#), Ok(()));
        assert_eq!(evaluate_response(204, ""), Ok(()));
        assert_eq!(evaluate_response(200, r#"{"error":null}"#), Ok(()));
        assert_eq!(
            evaluate_response(200, r#"{"error":"Invalid email"}"#),
            Err(ContactError::Rejected("Invalid email".to_string()))
        );
        assert_eq!(
            evaluate_response(500, r#"{"error":{"message":"HubSpot down"}}"#),
            Err(ContactError::Server {
                status: 500,
                message: "HubSpot down".to_string()
            })
        );
        assert!(matches!(
            evaluate_response(502, "<html>bad gateway</html>"),
            Err(ContactError::Server { status: 502, .. })
        ));
    }
}
