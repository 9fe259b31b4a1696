//! Endpoint wrappers.
//!
//! Each wrapper builds an [`Endpoint`](openlaw_core::Endpoint) and its
//! parameters, dispatches it through the pipeline and post-processes the
//! response. They are split by area; all are inherent methods of
//! [`ApiClient`](crate::ApiClient).

mod contracts;
mod downloads;
mod lookup;
mod signature;
mod templates;
mod users;

use openlaw_core::{ApiResponse, Result};

/// Content type of raw text and JSON upload bodies.
const TEXT_CONTENT_TYPE: &str = "text/plain;charset=UTF-8";

/// Decode a body that carries a single string, JSON-quoted or bare.
fn string_data(response: &ApiResponse) -> Result<String> {
    match serde_json::from_slice::<String>(response.bytes()) {
        Ok(value) => Ok(value),
        Err(_) => response.text(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openlaw_core::{Headers, ResponseBody};

    fn response(body: &str) -> ApiResponse {
        ApiResponse {
            status: 200,
            headers: Headers::new(),
            body: ResponseBody::Text(body.to_string()),
        }
    }

    #[test]
    fn string_data_accepts_json_string() {
        assert_eq!(string_data(&response(r#""c-42""#)).unwrap(), "c-42");
    }

    #[test]
    fn string_data_accepts_bare_text() {
        assert_eq!(string_data(&response("c-42")).unwrap(), "c-42");
    }
}
