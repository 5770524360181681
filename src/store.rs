//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::TreeResult;
use crate::events::TreeUpdateEvent;
use crate::ids::CategoryId;
use crate::models::BookmarkCategoryRecord;
use crate::tree::{BookmarkTree, TreeColumnCategory, TreeItem};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The whole bookmark column
    pub tree: BookmarkTree,
}

impl AppState {
    pub fn new(tree: BookmarkTree) -> Self {
        Self { tree }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a category-level event to the tree
pub fn store_apply_category_update(store: &AppStore, event: TreeUpdateEvent<TreeColumnCategory>) -> TreeResult<()> {
    store.tree().write().on_category_update(event)
}

/// Apply a bookmark-level event to the category that owns the bookmark
pub fn store_apply_bookmark_update(
    store: &AppStore,
    category: CategoryId,
    event: TreeUpdateEvent<TreeItem>,
) -> TreeResult<()> {
    store.tree().write().on_bookmark_update(category, event)
}

/// Run a mutation on one category by ID
pub fn store_update_category<R>(
    store: &AppStore,
    category: CategoryId,
    f: impl FnOnce(&mut TreeColumnCategory) -> R,
) -> TreeResult<R> {
    let field = store.tree();
    let mut tree = field.write();
    Ok(f(tree.category_mut(category)?))
}

/// Append an empty category
pub fn store_add_category(store: &AppStore, name: &str) -> CategoryId {
    store.tree().write().add_category(name)
}

/// Read the tree, tracked
pub fn store_read<R>(store: &AppStore, f: impl FnOnce(&BookmarkTree) -> R) -> R {
    f(&store.tree().read())
}

/// Read the tree without subscribing
pub fn store_read_untracked<R>(store: &AppStore, f: impl FnOnce(&BookmarkTree) -> R) -> R {
    f(&store.tree().read_untracked())
}

/// Snapshot of one category, without tracking
pub fn store_category(store: &AppStore, category: CategoryId) -> Option<TreeColumnCategory> {
    store.tree().read_untracked().category(category).cloned()
}

/// Exported tree, tracked
pub fn store_export(store: &AppStore) -> Vec<BookmarkCategoryRecord> {
    store.tree().read().export()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::EditResult;
    use crate::error::TreeError;
    use crate::ids::IdMint;
    use crate::models::BookmarkRecord;

    fn seeded_store() -> AppStore {
        let records = vec![BookmarkCategoryRecord {
            name: "Work".to_string(),
            bookmarks: vec![BookmarkRecord::new("Docs", "http://x")],
        }];
        Store::new(AppState::new(BookmarkTree::from_records(&records, true, IdMint::new())))
    }

    #[test]
    fn test_update_category_writes_through() {
        let owner = Owner::new();
        owner.with(|| {
            let store = seeded_store();
            let work = store_read_untracked(&store, |t| t.category_ids()[0]);
            let ids = store_read_untracked(&store, |t| t.ids().clone());
            let result = EditResult {
                text: "New".to_string(),
                link: String::new(),
            };

            let added = store_update_category(&store, work, |c| c.commit_new_bookmark(&result, "#", &ids));
            assert!(added.is_ok());
            assert_eq!(
                store_export(&store)[0].bookmarks,
                vec![BookmarkRecord::new("Docs", "http://x"), BookmarkRecord::new("New", "#")]
            );
        });
    }

    #[test]
    fn test_update_missing_category_leaves_tree() {
        let owner = Owner::new();
        owner.with(|| {
            let store = seeded_store();
            let before = store_export(&store);
            let ghost = CategoryId(999);

            let result = store_update_category(&store, ghost, |c| c.bookmarks.clear());
            assert!(matches!(result, Err(TreeError::CategoryNotFound(id)) if id == ghost));
            assert_eq!(store_export(&store), before);
        });
    }
}
