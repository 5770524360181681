//! Tree Configuration

use crate::editor::DEFAULT_LINK;
use crate::models::BookmarkCategoryRecord;

/// Bookmarks shown on first load
const SEED_JSON: &str = include_str!("../assets/bookmarks.json");

/// Query flag that opens the tree read-only
const VIEW_ONLY_FLAG: &str = "view";

#[derive(Debug, Clone, PartialEq)]
pub struct TreeConfig {
    pub is_editing: bool,
    /// Url given to bookmarks saved with a blank link
    pub default_link: String,
    /// Placeholder text of a freshly added bookmark
    pub new_bookmark_name: String,
    pub new_category_name: String,
    pub seed: Vec<BookmarkCategoryRecord>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        let seed = parse_seed(SEED_JSON).unwrap_or_else(|e| {
            log::warn!("[CONFIG] Bad seed bookmarks: {}", e);
            Vec::new()
        });
        Self {
            is_editing: true,
            default_link: DEFAULT_LINK.to_string(),
            new_bookmark_name: "new bookmark".to_string(),
            new_category_name: "new category".to_string(),
            seed,
        }
    }
}

impl TreeConfig {
    /// Config for the given `location.search` string
    pub fn with_query(query: &str) -> Self {
        let view_only = query
            .trim_start_matches('?')
            .split('&')
            .any(|pair| pair.split('=').next() == Some(VIEW_ONLY_FLAG));
        Self {
            is_editing: !view_only,
            ..Self::default()
        }
    }

    pub fn from_location() -> Self {
        let query = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::with_query(&query)
    }
}

pub fn parse_seed(json: &str) -> Result<Vec<BookmarkCategoryRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_parses() {
        let config = TreeConfig::default();
        assert!(!config.seed.is_empty());
        assert_eq!(config.default_link, "#");
        assert!(config.is_editing);
    }

    #[test]
    fn test_view_flag_disables_editing() {
        assert!(!TreeConfig::with_query("?view").is_editing);
        assert!(!TreeConfig::with_query("?lang=en&view=1").is_editing);
        assert!(TreeConfig::with_query("?preview").is_editing);
        assert!(TreeConfig::with_query("").is_editing);
    }
}
