use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of a story's activity feed.
///
/// The service does not commit to a shape for `changes`, `primary_resources`,
/// `project` and `performed_by`, so they stay as raw JSON. Callers that need
/// structure can run `serde_json::from_value` on the branch they care about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub guid: String,
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub project_version: u64,
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub message: String,
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub highlight: String,
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub changes: Vec<Value>,
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub primary_resources: Vec<Value>,
    pub project: Value,
    pub performed_by: Value,
    pub occurred_at: Option<DateTime<Utc>>,
}
