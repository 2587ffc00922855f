//! Index schema - The project index written by the DOH indexer

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::BucketKind;

/// Field added to every item handed back to a caller
pub const ITEM_TYPE_FIELD: &str = "item_type";

/// A single tracked item.
///
/// Items are free-form objects; only `status` has meaning to the query tools.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item {
    fields: Map<String, Value>,
}

impl Item {
    /// Create an item from its raw fields
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Item { fields }
    }

    /// The `status` field, if present and a string
    pub fn status(&self) -> Option<&str> {
        self.fields.get("status").and_then(Value::as_str)
    }

    /// Look up an arbitrary field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// All fields in document order
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Return a new Item tagged with the bucket it was resolved from
    pub fn with_item_type(mut self, bucket: BucketKind) -> Self {
        self.fields.insert(
            ITEM_TYPE_FIELD.to_string(),
            Value::String(bucket.as_str().to_string()),
        );
        self
    }
}

/// Items of one bucket keyed by id
pub type Bucket = BTreeMap<String, Item>;

/// The `items` object: one map per bucket
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Items {
    #[serde(default, deserialize_with = "null_as_default")]
    pub tasks: Bucket,

    #[serde(default, deserialize_with = "null_as_default")]
    pub epics: Bucket,

    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Bucket,

    #[serde(default, deserialize_with = "null_as_default")]
    pub prds: Bucket,
}

impl Items {
    /// Borrow the bucket for a kind
    pub fn bucket(&self, kind: BucketKind) -> &Bucket {
        match kind {
            BucketKind::Tasks => &self.tasks,
            BucketKind::Epics => &self.epics,
            BucketKind::Features => &self.features,
            BucketKind::Prds => &self.prds,
        }
    }
}

/// Id allocation counters
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Counters {
    #[serde(default)]
    pub next_id: Option<u64>,
}

/// Project-level metadata
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub project_name: Option<String>,

    /// ISO 8601 timestamp of the last index update
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Root document of `.doh/project-index.json`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProjectIndex {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Items,

    #[serde(default, deserialize_with = "null_as_default")]
    pub counters: Counters,

    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: Metadata,
}

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_full_index() {
        let index: ProjectIndex = serde_json::from_value(json!({
            "items": {
                "tasks": {"T1": {"status": "pending", "title": "Write docs"}},
                "epics": {"E1": {"title": "Docs"}},
                "features": {},
                "prds": {"P1": {"title": "Spec"}}
            },
            "counters": {"next_id": 42},
            "metadata": {"project_name": "demo", "updated_at": "2026-01-02T03:04:05Z"},
            "version": "1.0"
        }))
        .unwrap();

        assert_eq!(index.items.tasks.len(), 1);
        assert_eq!(index.items.epics.len(), 1);
        assert!(index.items.features.is_empty());
        assert_eq!(index.items.prds.len(), 1);
        assert_eq!(index.counters.next_id, Some(42));
        assert_eq!(index.metadata.project_name.as_deref(), Some("demo"));
        assert_eq!(index.items.tasks["T1"].status(), Some("pending"));
    }

    #[test]
    fn test_parse_empty_object() {
        let index: ProjectIndex = serde_json::from_str("{}").unwrap();
        assert_eq!(index, ProjectIndex::default());
    }

    #[test]
    fn test_null_sections_are_empty() {
        let index: ProjectIndex =
            serde_json::from_str(r#"{"items":{"tasks":null},"metadata":null}"#).unwrap();
        assert!(index.items.tasks.is_empty());
        assert_eq!(index.metadata, Metadata::default());
    }

    #[test]
    fn test_shape_violations_fail() {
        assert!(serde_json::from_str::<ProjectIndex>("[]").is_err());
        assert!(serde_json::from_str::<ProjectIndex>(r#"{"items":[]}"#).is_err());
        assert!(serde_json::from_str::<ProjectIndex>(r#"{"items":{"tasks":"T1"}}"#).is_err());
        assert!(serde_json::from_str::<ProjectIndex>(r#"{"items":{"tasks":{"T1":5}}}"#).is_err());
        assert!(serde_json::from_str::<ProjectIndex>(r#"{"counters":{"next_id":-1}}"#).is_err());
    }

    #[test]
    fn test_item_status_non_string() {
        let item: Item = serde_json::from_str(r#"{"status": 3}"#).unwrap();
        assert_eq!(item.status(), None);
        assert_eq!(item.get("status"), Some(&json!(3)));
    }

    #[test]
    fn test_with_item_type_appends_last() {
        let item: Item = serde_json::from_str(r#"{"status":"pending","title":"x"}"#).unwrap();
        let tagged = item.clone().with_item_type(BucketKind::Tasks);

        let keys: Vec<&str> = tagged.fields().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["status", "title", "item_type"]);
        assert_eq!(tagged.get(ITEM_TYPE_FIELD), Some(&json!("tasks")));
        // original untouched
        assert_eq!(item.get(ITEM_TYPE_FIELD), None);
    }
}
