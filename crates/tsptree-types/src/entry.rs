use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Parent id used by entries that hang directly off the root.
pub const ROOT_PARENT_ID: i64 = -1;

/// Flat, parent-referencing record as returned by a trace server.
///
/// Keys other than `id`, `parentId`/`parent_id` and `labels` are kept in
/// `others`, in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,

    #[serde(
        alias = "parentId",
        default = "root_parent_id",
        deserialize_with = "deserialize_parent_id"
    )]
    pub parent_id: i64,

    #[serde(default)]
    pub labels: Vec<String>,

    #[serde(flatten)]
    pub others: Map<String, Value>,
}

impl Entry {
    pub fn new(id: i64, parent_id: i64, labels: Vec<String>) -> Self {
        Self {
            id,
            parent_id,
            labels,
            others: Map::new(),
        }
    }

    /// Builder-style helper for attaching an auxiliary field.
    pub fn with_other(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.others.insert(key.into(), value.into());
        self
    }

    pub fn is_root_level(&self) -> bool {
        self.parent_id == ROOT_PARENT_ID
    }

    /// Auxiliary pairs as `" (key, value)"` fragments, concatenated in mapping order.
    pub fn others_display(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.others {
            out.push_str(&format!(" ({}, {})", key, display_value(value)));
        }
        out
    }
}

/// Column header metadata for tabular output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    #[serde(alias = "name")]
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

impl Descriptor {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tooltip: None,
        }
    }
}

fn root_parent_id() -> i64 {
    ROOT_PARENT_ID
}

fn deserialize_parent_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(ROOT_PARENT_ID))
}

// Strings print bare; everything else uses its JSON form.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_parent_id_defaults_to_root() {
        let entry: Entry = serde_json::from_value(json!({"id": 4, "labels": ["A"]})).unwrap();
        assert_eq!(entry.parent_id, ROOT_PARENT_ID);
        assert!(entry.is_root_level());
        assert!(entry.others.is_empty());
    }

    #[test]
    fn test_null_parent_id_defaults_to_root() {
        let entry: Entry =
            serde_json::from_value(json!({"id": 4, "parentId": null, "labels": ["A"]})).unwrap();
        assert_eq!(entry.parent_id, ROOT_PARENT_ID);
    }

    #[test]
    fn test_camel_case_parent_id_is_accepted() {
        let entry: Entry =
            serde_json::from_value(json!({"id": 5, "parentId": 4, "labels": ["B"]})).unwrap();
        assert_eq!(entry.parent_id, 4);
    }

    #[test]
    fn test_unknown_keys_land_in_others_in_order() {
        let entry: Entry = serde_json::from_value(json!({
            "id": 1,
            "parent_id": -1,
            "labels": ["thread"],
            "style": "bold",
            "hasData": true,
            "start": 42
        }))
        .unwrap();

        let keys: Vec<_> = entry.others.keys().cloned().collect();
        assert_eq!(keys, vec!["style", "hasData", "start"]);
        assert_eq!(
            entry.others_display(),
            " (style, bold) (hasData, true) (start, 42)"
        );
    }

    #[test]
    fn test_non_string_others_print_as_json() {
        let entry = Entry::new(1, -1, vec!["A".to_string()])
            .with_other("ok", false)
            .with_other("end", Value::Null)
            .with_other("span", json!({"a": 1}))
            .with_other("tags", json!(["x", 2]));
        assert_eq!(
            entry.others_display(),
            r#" (ok, false) (end, null) (span, {"a":1}) (tags, ["x",2])"#
        );
    }

    #[test]
    fn test_others_display_empty() {
        let entry = Entry::new(1, -1, vec!["A".to_string()]);
        assert_eq!(entry.others_display(), "");
    }

    #[test]
    fn test_descriptor_accepts_name_alias() {
        let descriptor: Descriptor =
            serde_json::from_value(json!({"name": "Process", "tooltip": "pid"})).unwrap();
        assert_eq!(descriptor.text, "Process");
        assert_eq!(descriptor.tooltip.as_deref(), Some("pid"));
    }
}
