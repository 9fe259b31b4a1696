//! Template model.

use serde::{Deserialize, Serialize};

/// A stored template revision, as returned by the template version listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    pub title: String,
    pub version: String,
    pub index: u64,
    pub creator_id: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    #[serde(default)]
    pub compiled_template: serde_json::Value,
    #[serde(default)]
    pub structured_document: serde_json::Value,
}
