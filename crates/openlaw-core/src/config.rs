//! Client configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::types::ApiRoot;

/// HTTP basic-auth credentials attached to every request.
///
/// Used when the API sits behind a gateway that requires them, independent
/// of the session token.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicAuth {
    username: String,
    password: String,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Configuration of an API client: the server root and optional basic auth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub root: ApiRoot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<BasicAuth>,
}

impl ClientConfig {
    /// Create a configuration without basic auth.
    pub fn new(root: ApiRoot) -> Self {
        Self { root, auth: None }
    }

    /// Create a configuration from a root URL string.
    pub fn from_root(root: impl AsRef<str>) -> Result<Self> {
        Ok(Self::new(ApiRoot::new(root)?))
    }

    /// Attach basic-auth credentials.
    #[must_use]
    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.auth = Some(BasicAuth::new(username, password));
        self
    }
}

impl From<ApiRoot> for ClientConfig {
    fn from(root: ApiRoot) -> Self {
        Self::new(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_root_has_no_auth() {
        let config = ClientConfig::from_root("https://lib.openlaw.io").unwrap();
        assert!(config.auth.is_none());
    }

    #[test]
    fn from_root_rejects_invalid_url() {
        assert!(ClientConfig::from_root("not a url").is_err());
    }

    #[test]
    fn deserializes_with_auth() {
        let config: ClientConfig = serde_json::from_value(serde_json::json!({
            "root": "https://lib.openlaw.io",
            "auth": {"username": "a", "password": "b"}
        }))
        .unwrap();
        let auth = config.auth.unwrap();
        assert_eq!(auth.username(), "a");
        assert_eq!(auth.password(), "b");
    }

    #[test]
    fn basic_auth_hides_password_in_debug() {
        let config = ClientConfig::from_root("https://lib.openlaw.io")
            .unwrap()
            .with_basic_auth("gateway", "s3cret");
        let debug = format!("{:?}", config);
        assert!(debug.contains("gateway"));
        assert!(!debug.contains("s3cret"));
    }
}
