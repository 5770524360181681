//! Node Identifiers
//!
//! Ids double as DOM element ids, so they render as `category-<n>` and
//! `bookmark-<n>`. They come from an injected `IdMint` rather than a global.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookmarkId(pub u32);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "category-{}", self.0)
    }
}

impl fmt::Display for BookmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bookmark-{}", self.0)
    }
}

impl CategoryId {
    /// DOM id of the category's title element
    pub fn header_id(&self) -> String {
        format!("{}-header", self)
    }

    /// Parse either the category id or its header id
    pub fn parse(dom_id: &str) -> Option<Self> {
        let rest = dom_id.strip_prefix("category-")?;
        let rest = rest.strip_suffix("-header").unwrap_or(rest);
        rest.parse().ok().map(CategoryId)
    }
}

impl BookmarkId {
    pub fn parse(dom_id: &str) -> Option<Self> {
        dom_id.strip_prefix("bookmark-")?.parse().ok().map(BookmarkId)
    }
}

/// Monotonic id generator. Clones share one counter, ids are unique per mint.
#[derive(Debug, Clone, Default)]
pub struct IdMint {
    next: Arc<AtomicU32>,
}

impl IdMint {
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(&self) -> u32 {
        self.next.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn category(&self) -> CategoryId {
        CategoryId(self.bump())
    }

    pub fn bookmark(&self) -> BookmarkId {
        BookmarkId(self.bump())
    }
}
