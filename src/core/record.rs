use crate::core::key::Key;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reserved parent spelling that marks a top-level node.
pub const ROOT_SENTINEL: &str = "root";

/// Parent reference carried by every record: another record's key, or the
/// sentinel for a top-level node.
///
/// Conversion from [Key] folds the sentinel string into [Parent::Root], so
/// the check happens once at the type boundary (including deserialization)
/// rather than at every traversal step. Integer keys are never the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Key", into = "Key")]
pub enum Parent {
    Root,
    Id(Key),
}

impl Parent {
    pub fn is_root(&self) -> bool {
        matches!(self, Parent::Root)
    }
}

impl From<Key> for Parent {
    fn from(key: Key) -> Self {
        match key {
            Key::Str(ref s) if s == ROOT_SENTINEL => Parent::Root,
            other => Parent::Id(other),
        }
    }
}

impl From<Parent> for Key {
    fn from(parent: Parent) -> Self {
        match parent {
            Parent::Root => Key::Str(ROOT_SENTINEL.to_string()),
            Parent::Id(key) => key,
        }
    }
}

impl From<i64> for Parent {
    fn from(v: i64) -> Self {
        Parent::Id(Key::Int(v))
    }
}

impl From<i32> for Parent {
    fn from(v: i32) -> Self {
        Parent::Id(Key::from(v))
    }
}

impl From<&str> for Parent {
    fn from(v: &str) -> Self {
        Key::from(v).into()
    }
}

impl From<String> for Parent {
    fn from(v: String) -> Self {
        Key::from(v).into()
    }
}

/// Flat input/output unit of the index.
///
/// `kind` is opaque caller payload, carried through unexamined; it
/// serializes under the original field name `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: Key,
    pub parent: Parent,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<Value>,
}

impl Record {
    pub fn new(id: impl Into<Key>, parent: impl Into<Parent>) -> Self {
        Record {
            id: id.into(),
            parent: parent.into(),
            kind: None,
        }
    }

    pub fn with_kind(id: impl Into<Key>, parent: impl Into<Parent>, kind: Value) -> Self {
        Record {
            id: id.into(),
            parent: parent.into(),
            kind: Some(kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sentinel_folds_to_root() {
        assert_eq!(Parent::from(Key::from("root")), Parent::Root);
        assert_eq!(Parent::from("root"), Parent::Root);
        assert_eq!(Parent::from(1), Parent::Id(Key::Int(1)));
        assert_eq!(Parent::from("rooted"), Parent::Id(Key::from("rooted")));
        assert!(Parent::Root.is_root());
        assert!(!Parent::from(1).is_root());
    }

    #[test]
    fn test_parent_round_trips_through_key() {
        let key: Key = Parent::Root.into();
        assert_eq!(key, Key::from("root"));
        assert_eq!(Parent::from(key), Parent::Root);
    }

    #[test]
    fn test_record_constructors() {
        let plain = Record::new(2, 1);
        assert_eq!(plain.id, Key::Int(2));
        assert_eq!(plain.parent, Parent::Id(Key::Int(1)));
        assert_eq!(plain.kind, None);

        let tagged = Record::with_kind("a", "root", json!("test"));
        assert_eq!(tagged.parent, Parent::Root);
        assert_eq!(tagged.kind, Some(json!("test")));
    }

    #[test]
    fn test_record_serde_shape() {
        let record: Record = serde_json::from_str(r#"{"id":2,"parent":1,"type":"test"}"#).unwrap();
        assert_eq!(record, Record::with_kind(2, 1, json!("test")));

        let root: Record = serde_json::from_str(r#"{"id":1,"parent":"root"}"#).unwrap();
        assert_eq!(root, Record::new(1, Parent::Root));
        assert_eq!(
            serde_json::to_string(&root).unwrap(),
            r#"{"id":1,"parent":"root"}"#
        );
    }

    #[test]
    fn test_payload_passes_through_unexamined() {
        let record: Record =
            serde_json::from_str(r#"{"id":"n1","parent":"root","type":{"tag":[1,2]}}"#).unwrap();
        assert_eq!(record.kind, Some(json!({"tag": [1, 2]})));

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["type"], json!({"tag": [1, 2]}));
    }
}
