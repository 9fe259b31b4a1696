//! Values exchanged with a [`Transport`](crate::Transport).

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::de::DeserializeOwned;
use url::Url;

use crate::config::BasicAuth;
use crate::disposition;
use crate::endpoint::{CallKind, ResponseKind};
use crate::error::Error;

/// Header carrying the session token, in both directions.
pub const SESSION_TOKEN_HEADER: &str = "openlaw_jwt";

/// Header carrying the suggested filename of a binary download.
pub const CONTENT_DISPOSITION: &str = "content-disposition";

/// Request content type header.
pub const CONTENT_TYPE: &str = "content-type";

/// Headers whose values never appear in Debug output.
const REDACTED_HEADERS: &[&str] = &[SESSION_TOKEN_HEADER, "authorization", "cookie"];

/// A case-insensitive header map.
///
/// Names are stored lower-cased; a later insert of the same name replaces the
/// earlier value.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Headers(BTreeMap<String, String>);

impl Headers {
    /// Create an empty header map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a header, replacing any existing value with the same name.
    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.0
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
    }

    /// Returns the value of a header, matching the name case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    /// Returns true if a header with this name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(&name.to_ascii_lowercase())
    }

    /// Iterate over `(name, value)` pairs, names lower-cased.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

impl fmt::Debug for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.iter().map(|(name, value)| {
                if REDACTED_HEADERS.contains(&name.as_str()) {
                    (name.as_str(), "[REDACTED]")
                } else {
                    (name.as_str(), value.as_str())
                }
            }))
            .finish()
    }
}

/// A response body, either decoded text or an opaque byte stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    Text(String),
    Bytes(Vec<u8>),
}

impl ResponseBody {
    /// Returns the raw bytes of the body.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            ResponseBody::Text(text) => text.as_bytes(),
            ResponseBody::Bytes(bytes) => bytes,
        }
    }

    /// Consume the body into its raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            ResponseBody::Text(text) => text.into_bytes(),
            ResponseBody::Bytes(bytes) => bytes,
        }
    }

    /// Returns the body as text, replacing invalid UTF-8 sequences.
    pub fn to_text_lossy(&self) -> Cow<'_, str> {
        match self {
            ResponseBody::Text(text) => Cow::Borrowed(text),
            ResponseBody::Bytes(bytes) => String::from_utf8_lossy(bytes),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// Returns true if the body was received as an opaque byte stream.
    pub fn is_binary(&self) -> bool {
        matches!(self, ResponseBody::Bytes(_))
    }
}

/// A request handed to the transport, fully resolved by the pipeline.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// GET for reads, POST for writes.
    pub call_kind: CallKind,
    /// Absolute URL including any query string.
    pub url: Url,
    /// Encoded request body for write calls.
    pub body: Option<String>,
    /// Outbound headers, session token included.
    pub headers: Headers,
    /// Basic-auth credentials from the client configuration.
    pub basic_auth: Option<BasicAuth>,
    /// How the transport should treat the response body.
    pub response_kind: ResponseKind,
}

/// A successful response from the API.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: Headers,
    /// Response body.
    pub body: ResponseBody,
}

impl ApiResponse {
    /// Returns the value of a response header.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Returns the session token the server attached to this response, if any.
    pub fn session_token(&self) -> Option<&str> {
        self.header(SESSION_TOKEN_HEADER)
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        Ok(serde_json::from_slice(self.body.as_bytes())?)
    }

    /// Returns the body as text.
    pub fn text(&self) -> Result<String, Error> {
        match &self.body {
            ResponseBody::Text(text) => Ok(text.clone()),
            ResponseBody::Bytes(bytes) => {
                String::from_utf8(bytes.clone()).map_err(|e| Error::Decode {
                    message: e.to_string(),
                })
            }
        }
    }

    /// Returns the raw body bytes.
    pub fn bytes(&self) -> &[u8] {
        self.body.as_bytes()
    }

    /// Returns the filename suggested by `content-disposition`, or the
    /// placeholder name when the header is missing or has no filename.
    pub fn suggested_filename(&self) -> String {
        disposition::suggested_filename(self.header(CONTENT_DISPOSITION))
    }
}
