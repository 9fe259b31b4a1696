//! API root URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::endpoint::Endpoint;
use crate::error::{Error, InvalidInputError};

/// A validated API root URL.
///
/// The root is the base every endpoint path is appended to, for example
/// `https://lib.openlaw.io/api/v1`. It must be an absolute `http` or `https`
/// URL with a host. A trailing slash is normalized away.
///
/// # Example
///
/// ```
/// use openlaw_core::{ApiRoot, Endpoint};
///
/// let root = ApiRoot::new("https://lib.openlaw.io/api/v1/").unwrap();
/// let url = root.endpoint_url(&Endpoint::ContractRaw("abc".into())).unwrap();
/// assert_eq!(url.as_str(), "https://lib.openlaw.io/api/v1/contract/raw/abc");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiRoot(Url);

impl ApiRoot {
    /// Create a new API root from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or is not an absolute
    /// `http`/`https` URL with a host.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let mut url = Url::parse(s).map_err(|e| InvalidInputError::ApiRoot {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        // Normalize: drop the trailing empty segment, query and fragment
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
        }
        url.set_query(None);
        url.set_fragment(None);

        Ok(Self(url))
    }

    /// Build the absolute URL of an endpoint, percent-encoding each segment.
    pub fn endpoint_url(&self, endpoint: &Endpoint) -> Result<Url, Error> {
        let mut url = self.0.clone();
        url.path_segments_mut()
            .map_err(|()| InvalidInputError::ApiRoot {
                value: self.0.to_string(),
                reason: "cannot be a base URL".to_string(),
            })?
            .pop_if_empty()
            .extend(endpoint.path_segments());
        Ok(url)
    }

    /// Returns the root as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ApiRoot {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        if !matches!(url.scheme(), "http" | "https") {
            return Err(InvalidInputError::ApiRoot {
                value: original.to_string(),
                reason: "must use http or https".to_string(),
            }
            .into());
        }

        if url.host_str().is_none_or(str::is_empty) {
            return Err(InvalidInputError::ApiRoot {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ApiRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApiRoot {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiRoot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiRoot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ApiRoot::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ApiRoot {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let root = ApiRoot::new("https://lib.openlaw.io").unwrap();
        assert_eq!(root.host(), Some("lib.openlaw.io"));
    }

    #[test]
    fn valid_plain_http() {
        let root = ApiRoot::new("http://openlaw.internal:9000").unwrap();
        assert_eq!(root.host(), Some("openlaw.internal"));
    }

    #[test]
    fn endpoint_url_on_bare_host() {
        let root = ApiRoot::new("https://lib.openlaw.io").unwrap();
        let url = root.endpoint_url(&Endpoint::Login).unwrap();
        assert_eq!(url.as_str(), "https://lib.openlaw.io/app/login");
    }

    #[test]
    fn endpoint_url_keeps_root_path() {
        let root = ApiRoot::new("https://lib.openlaw.io/api/").unwrap();
        let url = root.endpoint_url(&Endpoint::SearchTemplates).unwrap();
        assert_eq!(url.as_str(), "https://lib.openlaw.io/api/templates/search");
    }

    #[test]
    fn endpoint_url_encodes_segments() {
        let root = ApiRoot::new("https://lib.openlaw.io").unwrap();
        let url = root
            .endpoint_url(&Endpoint::TemplateRawVersion {
                title: "Sale Agreement/EU".into(),
                version: "2".into(),
            })
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://lib.openlaw.io/template/raw/Sale%20Agreement%2FEU/2"
        );
    }

    #[test]
    fn query_and_fragment_are_dropped() {
        let root = ApiRoot::new("https://lib.openlaw.io/api?x=1#top").unwrap();
        let url = root.endpoint_url(&Endpoint::Network).unwrap();
        assert_eq!(url.as_str(), "https://lib.openlaw.io/api/network");
    }

    #[test]
    fn invalid_scheme() {
        assert!(ApiRoot::new("ftp://lib.openlaw.io").is_err());
        assert!(ApiRoot::new("file:///tmp/openlaw").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(ApiRoot::new("/app/login").is_err());
    }

    #[test]
    fn serde_round_trip_validates() {
        let root: ApiRoot = serde_json::from_str(r#""https://lib.openlaw.io""#).unwrap();
        assert_eq!(root.host(), Some("lib.openlaw.io"));
        assert!(serde_json::from_str::<ApiRoot>(r#""mailto:x@y""#).is_err());
    }
}
