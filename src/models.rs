//! Frontend Models
//!
//! Plain transport/export shapes of the bookmark tree.

use serde::{Deserialize, Serialize};

/// A single bookmark as exported or carried in a drag payload.
/// Legacy payloads use the abbreviated `n`/`u` field names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookmarkRecord {
    #[serde(alias = "n")]
    pub name: String,
    #[serde(alias = "u", default)]
    pub url: String,
}

impl BookmarkRecord {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A category with its bookmarks, nesting mirrors the tree
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookmarkCategoryRecord {
    #[serde(alias = "cn")]
    pub name: String,
    #[serde(alias = "b", default)]
    pub bookmarks: Vec<BookmarkRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_names() {
        let json = r#"{"name":"Work","bookmarks":[{"name":"Docs","url":"http://x"}]}"#;
        let record: BookmarkCategoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Work");
        assert_eq!(record.bookmarks, vec![BookmarkRecord::new("Docs", "http://x")]);
    }

    #[test]
    fn test_decode_abbreviated_names() {
        let json = r#"{"cn":"Work","b":[{"n":"Docs","u":"http://x"}]}"#;
        let record: BookmarkCategoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Work");
        assert_eq!(record.bookmarks[0].url, "http://x");
    }

    #[test]
    fn test_missing_url_is_empty() {
        let record: BookmarkRecord = serde_json::from_str(r#"{"name":"Bare"}"#).unwrap();
        assert_eq!(record.url, "");
    }

    #[test]
    fn test_export_uses_full_names() {
        let record = BookmarkCategoryRecord {
            name: "Work".to_string(),
            bookmarks: vec![BookmarkRecord::new("Docs", "http://x")],
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "Work", "bookmarks": [{"name": "Docs", "url": "http://x"}]})
        );
    }
}
