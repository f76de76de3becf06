// SPDX-License-Identifier: MPL-2.0
//! Error taxonomy for backend calls.
//!
//! Mirrors the recovery policy of the screens: every variant is surfaced
//! locally as a toast (or inline placeholder) and never propagates further.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The entity does not exist (HTTP 404).
    NotFound,
    /// Any other non-2xx response. `message` carries the server-provided
    /// explanation when one could be extracted from the body.
    Status { status: u16, message: Option<String> },
    /// The request never produced a response (connect, timeout, DNS).
    Transport(String),
    /// The response arrived but its body could not be decoded.
    Decode(String),
    /// The configured base URL or service prefix is not a valid URL.
    InvalidBaseUrl(String),
}

impl Error {
    /// Builds an error from a non-success response.
    ///
    /// 404 becomes [`Error::NotFound`]; anything else keeps the status code
    /// plus the most useful message the body offers (structured `message`
    /// field, then `error` field, then the raw body).
    pub fn from_response_parts(status: u16, body: &str) -> Self {
        if status == 404 {
            return Error::NotFound;
        }
        Error::Status {
            status,
            message: extract_message(body),
        }
    }

    /// The server-provided reason to show the user, if any.
    ///
    /// Transport and decode failures carry no server message; callers fall
    /// back to a generic localized notification for those.
    pub fn reason(&self) -> Option<String> {
        match self {
            Error::Status { message, .. } => message.clone(),
            _ => None,
        }
    }
}

/// Extracts a display message from an error response body, in priority
/// order: structured `message` field, structured `error` field, raw body.
fn extract_message(body: &str) -> Option<String> {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for field in ["message", "error"] {
            if let Some(text) = value.get(field).and_then(serde_json::Value::as_str) {
                if !text.trim().is_empty() {
                    return Some(text.trim().to_string());
                }
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound => write!(f, "Not found"),
            Error::Status {
                status,
                message: Some(message),
            } => write!(f, "HTTP {status}: {message}"),
            Error::Status {
                status,
                message: None,
            } => write!(f, "HTTP {status}"),
            Error::Transport(e) => write!(f, "Transport error: {e}"),
            Error::Decode(e) => write!(f, "Decode error: {e}"),
            Error::InvalidBaseUrl(url) => write!(f, "Invalid base URL: {url}"),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Decode(err.to_string())
        } else {
            Error::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_404_maps_to_not_found() {
        assert_eq!(Error::from_response_parts(404, ""), Error::NotFound);
        assert_eq!(
            Error::from_response_parts(404, r#"{"message":"gone"}"#),
            Error::NotFound
        );
    }

    #[test]
    fn structured_message_field_takes_priority() {
        let err = Error::from_response_parts(500, r#"{"message":"db down","error":"oops"}"#);
        assert_eq!(err.reason().as_deref(), Some("db down"));
    }

    #[test]
    fn error_field_used_when_message_absent() {
        let err = Error::from_response_parts(500, r#"{"error":"oops"}"#);
        assert_eq!(err.reason().as_deref(), Some("oops"));
    }

    #[test]
    fn raw_body_used_when_not_json() {
        let err = Error::from_response_parts(502, "Bad Gateway");
        assert_eq!(err.reason().as_deref(), Some("Bad Gateway"));
    }

    #[test]
    fn empty_body_yields_no_reason() {
        let err = Error::from_response_parts(500, "  \n");
        assert_eq!(err.reason(), None);
    }

    #[test]
    fn transport_errors_carry_no_server_reason() {
        let err = Error::Transport("connection refused".to_string());
        assert_eq!(err.reason(), None);
    }

    #[test]
    fn display_includes_status_and_message() {
        let err = Error::from_response_parts(500, r#"{"message":"db down"}"#);
        assert_eq!(format!("{err}"), "HTTP 500: db down");
    }
}
