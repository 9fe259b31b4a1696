//! Request parameters.

use std::fmt;

use url::Url;
use url::form_urlencoded;

/// Ordered request parameters.
///
/// Encoded as the query string of read calls and as the form-url-encoded
/// body of write calls. Absent optional values are skipped entirely, and a
/// key may repeat to express a list.
///
/// # Example
///
/// ```
/// use openlaw_core::Params;
///
/// let params = Params::new()
///     .with("keyword", "sale")
///     .with("page", 1)
///     .with_opt("accessToken", None::<&str>)
///     .with_all("editEmails", ["a@x.io", "b@x.io"]);
/// assert_eq!(
///     params.to_form_string(),
///     "keyword=sale&page=1&editEmails=a%40x.io&editEmails=b%40x.io"
/// );
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn with(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.0.push((key.into(), value.to_string()));
        self
    }

    /// Append a parameter only when a value is present.
    pub fn with_opt<V: fmt::Display>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    /// Append one parameter per value under the same key.
    pub fn with_all<I>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let key = key.into();
        for value in values {
            self.0.push((key.clone(), value.to_string()));
        }
        self
    }

    /// Returns the first value recorded for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encode as `application/x-www-form-urlencoded`.
    pub fn to_form_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }

    /// Append the parameters to the query string of `url`.
    pub fn append_to(&self, url: &mut Url) {
        if !self.is_empty() {
            url.query_pairs_mut().extend_pairs(self.iter());
        }
    }
}

// Keys only: parameter values include passwords and access tokens.
impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.iter().map(|(k, _)| k))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_absent_optional_values() {
        let params = Params::new()
            .with("fullName", "Jane Doe")
            .with_opt("accessToken", None::<String>);
        assert_eq!(params.len(), 1);
        assert_eq!(params.to_form_string(), "fullName=Jane+Doe");
    }

    #[test]
    fn keeps_present_optional_values() {
        let params = Params::new().with_opt("accessToken", Some("tok"));
        assert_eq!(params.get("accessToken"), Some("tok"));
    }

    #[test]
    fn empty_params_leave_url_untouched() {
        let mut url = Url::parse("https://lib.openlaw.io/network").unwrap();
        Params::new().append_to(&mut url);
        assert_eq!(url.as_str(), "https://lib.openlaw.io/network");
    }

    #[test]
    fn appends_query_string() {
        let mut url = Url::parse("https://lib.openlaw.io/templates/search").unwrap();
        Params::new()
            .with("keyword", "nda & lease")
            .with("page", 1)
            .with("pageSize", 10)
            .append_to(&mut url);
        assert_eq!(
            url.query(),
            Some("keyword=nda+%26+lease&page=1&pageSize=10")
        );
    }

    #[test]
    fn debug_hides_values() {
        let params = Params::new()
            .with("userId", "alice")
            .with("password", "hunter2");
        let debug = format!("{:?}", params);
        assert!(debug.contains("password"));
        assert!(!debug.contains("hunter2"));
    }
}
