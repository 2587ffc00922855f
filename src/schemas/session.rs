//! Session schema - The active-session sidecar

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Currently focused epic and task, as recorded by the session tooling
///
/// Each field is read on its own; a field of the wrong type is dropped
/// without affecting the other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SessionState {
    #[serde(default, deserialize_with = "lenient_string")]
    pub current_epic: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub current_task: Option<String>,
}

/// Strings pass through, numbers and booleans are stringified, anything else is unset.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}
