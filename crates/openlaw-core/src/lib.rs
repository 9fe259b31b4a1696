//! openlaw-core - Core types and traits for the OpenLaw API client.
//!
//! This crate is transport-agnostic: it defines the endpoint catalog, the
//! request/response values that cross the [`Transport`] seam, and the
//! [`FileSaver`] capability used by download operations.

pub mod call;
pub mod config;
pub mod credentials;
pub mod disposition;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod tokens;
pub mod traits;
pub mod types;

pub use call::Call;
pub use config::{BasicAuth, ClientConfig};
pub use credentials::Credentials;
pub use endpoint::{CallKind, Endpoint, ResponseKind};
pub use error::Error;
pub use http::{ApiResponse, Headers, ResponseBody, SESSION_TOKEN_HEADER, TransportRequest};
pub use tokens::SessionToken;
pub use traits::{FileSaver, Transport};
pub use types::{ApiRoot, Params, Template};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
