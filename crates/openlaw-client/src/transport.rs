//! `reqwest`-backed transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use tracing::{instrument, trace};

use openlaw_core::error::TransportError;
use openlaw_core::{
    ApiResponse, CallKind, Headers, ResponseBody, ResponseKind, Result, Transport,
    TransportRequest,
};

/// HTTP transport over a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with no request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self> {
        let client = Self::builder().build().map_err(transport_error)?;
        Ok(Self { client })
    }

    /// Create a transport that gives up on requests after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Self::builder()
            .timeout(timeout)
            .build()
            .map_err(transport_error)?;
        Ok(Self { client })
    }

    /// Wrap an existing `reqwest` client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn builder() -> reqwest::ClientBuilder {
        reqwest::Client::builder()
            .user_agent(concat!("openlaw-client/", env!("CARGO_PKG_VERSION")))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, request), fields(url = %request.url))]
    async fn execute(
        &self,
        request: TransportRequest,
    ) -> std::result::Result<ApiResponse, TransportError> {
        let mut builder = match request.call_kind {
            CallKind::Read => self.client.get(request.url),
            CallKind::Write => self.client.post(request.url),
        };

        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }
        if let Some(auth) = &request.basic_auth {
            builder = builder.basic_auth(auth.username(), Some(auth.password()));
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();
        let headers = collect_headers(response.headers());
        trace!(status = %status, "HTTP response");

        let body = match request.response_kind {
            ResponseKind::Bytes => {
                ResponseBody::Bytes(response.bytes().await.map_err(transport_error)?.to_vec())
            }
            ResponseKind::Decoded => {
                ResponseBody::Text(response.text().await.map_err(transport_error)?)
            }
        };

        if status.is_success() {
            Ok(ApiResponse {
                status: status.as_u16(),
                headers,
                body,
            })
        } else {
            Err(TransportError::Status {
                status: status.as_u16(),
                headers,
                payload: (!body.is_empty()).then_some(body),
            })
        }
    }
}

/// Headers whose values are not valid visible ASCII are skipped.
fn collect_headers(map: &HeaderMap) -> Headers {
    map.iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str(), value.to_string()))
        })
        .collect()
}

fn transport_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout {
            message: err.to_string(),
        }
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    }
}
