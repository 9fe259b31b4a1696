//! A single API call, before the pipeline resolves it.

use crate::endpoint::{CallKind, Endpoint, ResponseKind};
use crate::http::Headers;
use crate::types::Params;

/// An API call: the endpoint plus everything the caller supplies.
///
/// The pipeline adds the session token, the default content type and basic
/// auth when it turns a `Call` into a transport request.
#[derive(Debug, Clone)]
pub struct Call {
    endpoint: Endpoint,
    params: Params,
    body: Option<String>,
    headers: Headers,
}

impl Call {
    /// Create a call with no parameters.
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            params: Params::new(),
            body: None,
            headers: Headers::new(),
        }
    }

    /// Set the parameters: the query string of a read, the form body of a write.
    #[must_use]
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Send a raw body instead of the form-encoded parameters.
    ///
    /// Only meaningful for write calls.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>, content_type: &str) -> Self {
        self.body = Some(body.into());
        self.headers.insert("content-type", content_type);
        self
    }

    /// Add a caller-supplied header.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn call_kind(&self) -> CallKind {
        self.endpoint.call_kind()
    }

    pub fn response_kind(&self) -> ResponseKind {
        self.endpoint.response_kind()
    }

    /// The encoded body of a write call: the raw body if one was set,
    /// otherwise the form-encoded parameters.
    pub fn encoded_body(&self) -> String {
        match &self.body {
            Some(body) => body.clone(),
            None => self.params.to_form_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_defaults_to_form_params() {
        let call = Call::new(Endpoint::Login).with_params(
            Params::new()
                .with("userId", "jane@openlaw.io")
                .with("password", "pw"),
        );
        assert_eq!(call.encoded_body(), "userId=jane%40openlaw.io&password=pw");
        assert!(call.headers().is_empty());
    }

    #[test]
    fn raw_body_sets_content_type() {
        let call = Call::new(Endpoint::UploadContract)
            .with_body(r#"{"title":"NDA"}"#, "text/plain;charset=UTF-8");
        assert_eq!(call.encoded_body(), r#"{"title":"NDA"}"#);
        assert_eq!(
            call.headers().get("Content-Type"),
            Some("text/plain;charset=UTF-8")
        );
    }
}
