use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifier of a record, supplied either as an integer or a string.
///
/// Lookups treat both spellings of the same identifier as one key:
/// `Key::Int(1)` and `Key::Str("1")` address the same node. Equality and
/// hashing therefore go through the canonical string form rather than the
/// variant shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    /// Canonical string form used for all comparisons and map lookups.
    ///
    /// Borrows for string keys, allocates only for integer keys.
    pub fn canonical(&self) -> Cow<'_, str> {
        match self {
            Key::Int(v) => Cow::Owned(v.to_string()),
            Key::Str(s) => Cow::Borrowed(s.as_str()),
        }
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl From<i64> for Key {
    fn from(v: i64) -> Self {
        Key::Int(v)
    }
}

impl From<i32> for Key {
    fn from(v: i32) -> Self {
        Key::Int(v.into())
    }
}

impl From<&str> for Key {
    fn from(v: &str) -> Self {
        Key::Str(v.to_string())
    }
}

impl From<String> for Key {
    fn from(v: String) -> Self {
        Key::Str(v)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_form() {
        assert_eq!(Key::Int(42).canonical(), "42");
        assert_eq!(Key::Str("42".to_string()).canonical(), "42");
        assert_eq!(Key::Int(-7).canonical(), "-7");
        assert_eq!(Key::Str("leaf".to_string()).canonical(), "leaf");
    }

    #[test]
    fn test_spellings_are_equal() {
        assert_eq!(Key::Int(1), Key::Str("1".to_string()));
        assert_eq!(Key::from(1), Key::from("1"));
        assert_ne!(Key::Int(1), Key::Int(2));
        assert_ne!(Key::Str("a".to_string()), Key::Str("b".to_string()));
    }

    #[test]
    fn test_spellings_hash_together() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Key::Int(42));
        set.insert(Key::Str("node".to_string()));

        assert!(set.contains(&Key::Str("42".to_string())));
        assert!(set.contains(&Key::Str("node".to_string())));
        assert!(!set.contains(&Key::Int(43)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Key::Int(5).to_string(), "5");
        assert_eq!(Key::from("alpha").to_string(), "alpha");
    }

    #[test]
    fn test_serde_untagged() {
        let int_key: Key = serde_json::from_str("3").unwrap();
        let str_key: Key = serde_json::from_str("\"3\"").unwrap();
        assert_eq!(int_key, Key::Int(3));
        assert_eq!(str_key, Key::Str("3".to_string()));

        assert_eq!(serde_json::to_string(&Key::Int(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&str_key).unwrap(), "\"3\"");
    }
}
