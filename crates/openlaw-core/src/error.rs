//! Error types for the OpenLaw client.
//!
//! This module provides a unified error type with explicit variants for
//! transport failures, server-reported payloads, login interruption, input
//! validation, response decoding and download persistence.

use std::fmt;
use thiserror::Error;

use crate::http::{Headers, ResponseBody};

/// The unified error type for OpenLaw client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The transport failed, or the server answered with a non-success status.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A failed read call whose response carried a server payload.
    #[error("server error: {0}")]
    Server(#[from] ServerError),

    /// Login did not produce a response.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Input validation errors (bad API root, unsendable header).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// A successful response body did not decode to the requested type.
    #[error("failed to decode response: {message}")]
    Decode { message: String },

    /// The download capability failed to persist a file.
    #[error("failed to save '{name}': {message}")]
    Save { name: String, message: String },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode {
            message: err.to_string(),
        }
    }
}

impl Error {
    /// Returns the HTTP status attached to this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport(TransportError::Status { status, .. }) => Some(*status),
            Error::Server(err) => Some(err.status),
            _ => None,
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Generic HTTP error (request building, body read, redirect loop).
    #[error("HTTP error: {message}")]
    Http { message: String },

    /// The server answered with a non-success status.
    #[error("HTTP {status}")]
    Status {
        status: u16,
        headers: Headers,
        payload: Option<ResponseBody>,
    },
}

impl TransportError {
    /// Returns the response body the server sent along with a failure status.
    pub fn payload(&self) -> Option<&ResponseBody> {
        match self {
            TransportError::Status { payload, .. } => payload.as_ref(),
            _ => None,
        }
    }

    /// Returns the response headers of a failure status, if a response arrived.
    pub fn headers(&self) -> Option<&Headers> {
        match self {
            TransportError::Status { headers, .. } => Some(headers),
            _ => None,
        }
    }
}

/// A server-supplied error payload surfaced from a failed read call.
#[derive(Debug, Clone)]
pub struct ServerError {
    /// HTTP status code.
    pub status: u16,
    /// The body the server sent with the failure.
    pub payload: ResponseBody,
}

impl ServerError {
    /// Create a new server error.
    pub fn new(status: u16, payload: ResponseBody) -> Self {
        Self { status, payload }
    }

    /// Decode the payload as JSON, if it is JSON.
    pub fn json(&self) -> Option<serde_json::Value> {
        serde_json::from_slice(self.payload.as_bytes()).ok()
    }

    /// Returns the payload as text, replacing invalid UTF-8.
    pub fn message(&self) -> String {
        self.payload.to_text_lossy().into_owned()
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        let message = self.message();
        let message = message.trim();
        if !message.is_empty() {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ServerError {}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The login task panicked or was aborted before producing a response.
    #[error("login interrupted: {reason}")]
    LoginInterrupted { reason: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API root URL.
    #[error("invalid API root '{value}': {reason}")]
    ApiRoot { value: String, reason: String },

    /// A header name or value that cannot be sent over HTTP.
    #[error("invalid header '{name}': {reason}")]
    Header { name: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_display_includes_payload() {
        let err = ServerError::new(404, ResponseBody::Text("template not found".into()));
        assert_eq!(err.to_string(), "HTTP 404: template not found");
    }

    #[test]
    fn server_error_display_without_payload_text() {
        let err = ServerError::new(500, ResponseBody::Text("  ".into()));
        assert_eq!(err.to_string(), "HTTP 500");
    }

    #[test]
    fn server_error_json_payload() {
        let err = ServerError::new(
            400,
            ResponseBody::Text(r#"{"error":"bad keyword"}"#.into()),
        );
        assert_eq!(err.json().unwrap()["error"], "bad keyword");
    }

    #[test]
    fn status_is_exposed_for_status_failures() {
        let err: Error = TransportError::Status {
            status: 401,
            headers: Headers::new(),
            payload: None,
        }
        .into();
        assert_eq!(err.status(), Some(401));

        let err: Error = TransportError::Timeout {
            message: "deadline".into(),
        }
        .into();
        assert_eq!(err.status(), None);
    }
}
