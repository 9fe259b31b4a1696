//! Transport trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::http::{ApiResponse, TransportRequest};

/// A generic HTTP client capability.
///
/// Implementations perform exactly one request per call: no retries, no
/// redirects to other hosts beyond what the underlying client does, and no
/// timeout unless configured. Non-success statuses are reported as
/// [`TransportError::Status`] carrying the response headers and body.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute a request.
    async fn execute(
        &self,
        request: TransportRequest,
    ) -> std::result::Result<ApiResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(
        &self,
        request: TransportRequest,
    ) -> std::result::Result<ApiResponse, TransportError> {
        (**self).execute(request).await
    }
}
