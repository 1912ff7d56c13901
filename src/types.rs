use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Account identity summary from the identity endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub collection_count: u64,
    pub wantlist_count: u64,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FolderEntry {
    pub id: i64,
    pub count: i64,
    pub name: String,
    pub resource_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FolderSummary {
    pub count: u64,
    pub folders: Vec<FolderEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListEntry {
    pub name: String,
    pub id: i64,
    pub uri: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListSummary {
    pub count: u64,
    pub lists: Vec<ListEntry>,
}

/// Marketplace valuation of the collection (min/median/max).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionValue {
    pub min: f64,
    pub median: f64,
    pub max: f64,
    pub currency: String,
}

/// Display fields for one sampled release. Each field is independently
/// absence-safe; consumers never branch on missing nested structures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RandomRecordData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cat_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub released: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RandomRecord {
    /// Composed as `"<primary artist> - <title>"` with placeholder fallbacks.
    pub title: String,
    pub data: RandomRecordData,
}

/// Availability probe result from the service root endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiStatus {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hello: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,
    pub statistics: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiStatus {
    pub fn unavailable(error: Option<String>) -> Self {
        Self {
            available: false,
            hello: None,
            api_version: None,
            documentation_url: None,
            statistics: Value::Object(Default::default()),
            error,
        }
    }
}
