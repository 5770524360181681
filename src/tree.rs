//! Bookmark Tree Model
//!
//! Categories own their bookmarks, the tree owns its categories. Vector
//! order is display order; the views render these vectors as-is.
//! Every mutation arrives as a `TreeUpdateEvent` from the child that changed.

use crate::components::EditTarget;
use crate::drag::DragPayload;
use crate::editor::{EditResult, EditorFinishEvent, FinishKind};
use crate::error::{TreeError, TreeResult};
use crate::events::TreeUpdateEvent;
use crate::ids::{BookmarkId, CategoryId, IdMint};
use crate::models::{BookmarkCategoryRecord, BookmarkRecord};

/// A bookmark leaf
#[derive(Debug, Clone, PartialEq)]
pub struct TreeItem {
    pub id: BookmarkId,
    pub name: String,
    pub url: String,
}

impl TreeItem {
    pub fn new(record: &BookmarkRecord, ids: &IdMint) -> Self {
        Self {
            id: ids.bookmark(),
            name: record.name.clone(),
            url: record.url.clone(),
        }
    }

    pub fn export(&self) -> BookmarkRecord {
        BookmarkRecord::new(self.name.clone(), self.url.clone())
    }

    /// Copy of this item carrying the editor's result
    pub fn edited(&self, result: &EditResult) -> Self {
        Self {
            id: self.id,
            name: result.text.clone(),
            url: result.link.clone(),
        }
    }

    /// Outcome of this row's editor. Cancel leaves the row untouched.
    pub fn editor_finished(&self, event: &EditorFinishEvent) -> Option<TreeUpdateEvent<TreeItem>> {
        match event.kind {
            FinishKind::Save => Some(TreeUpdateEvent::Save {
                updated: self.edited(&event.edit_result),
            }),
            FinishKind::Delete => Some(TreeUpdateEvent::Delete { updated: self.clone() }),
            FinishKind::Close => None,
        }
    }

    /// A payload dropped onto this row. Only bookmarks land on rows.
    pub fn drop_payload(&self, payload: DragPayload, ids: &IdMint) -> Option<TreeUpdateEvent<TreeItem>> {
        match payload {
            DragPayload::Bookmark(record) => Some(TreeUpdateEvent::Add {
                updated: self.clone(),
                new_object: TreeItem::new(&record, ids),
            }),
            DragPayload::Category(_) => None,
        }
    }
}

/// A named category column and its ordered bookmarks
#[derive(Debug, Clone, PartialEq)]
pub struct TreeColumnCategory {
    pub id: CategoryId,
    pub name: String,
    pub bookmarks: Vec<TreeItem>,
    pub is_editing: bool,
}

impl TreeColumnCategory {
    pub fn new(record: &BookmarkCategoryRecord, is_editing: bool, ids: &IdMint) -> Self {
        Self {
            id: ids.category(),
            name: record.name.clone(),
            bookmarks: record.bookmarks.iter().map(|b| TreeItem::new(b, ids)).collect(),
            is_editing,
        }
    }

    pub fn export(&self) -> BookmarkCategoryRecord {
        BookmarkCategoryRecord {
            name: self.name.clone(),
            bookmarks: self.bookmarks.iter().map(TreeItem::export).collect(),
        }
    }

    pub fn bookmark(&self, id: BookmarkId) -> Option<&TreeItem> {
        self.bookmarks.iter().find(|b| b.id == id)
    }

    fn position(&self, id: BookmarkId) -> TreeResult<usize> {
        self.bookmarks
            .iter()
            .position(|b| b.id == id)
            .ok_or(TreeError::BookmarkNotFound(id))
    }

    /// Copy of this category with a new title
    pub fn renamed(&self, name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..self.clone()
        }
    }

    /// Outcome of the title editor. Cancel leaves the category untouched.
    pub fn title_finished(&self, event: &EditorFinishEvent) -> Option<TreeUpdateEvent<TreeColumnCategory>> {
        match event.kind {
            FinishKind::Save => Some(TreeUpdateEvent::Save {
                updated: self.renamed(&event.edit_result.text),
            }),
            FinishKind::Delete => Some(TreeUpdateEvent::Delete { updated: self.clone() }),
            FinishKind::Close => None,
        }
    }

    /// Outcome of the add-bookmark editor; only a save appends
    pub fn add_finished(&mut self, event: &EditorFinishEvent, default_link: &str, ids: &IdMint) -> Option<BookmarkId> {
        match event.kind {
            FinishKind::Save => Some(self.commit_new_bookmark(&event.edit_result, default_link, ids)),
            FinishKind::Close | FinishKind::Delete => None,
        }
    }

    /// Commit the add-bookmark editor; a blank link falls back to `default_link`
    pub fn commit_new_bookmark(&mut self, result: &EditResult, default_link: &str, ids: &IdMint) -> BookmarkId {
        let url = if result.link.trim().is_empty() {
            default_link.to_string()
        } else {
            result.link.clone()
        };
        let item = TreeItem::new(&BookmarkRecord::new(result.text.clone(), url), ids);
        let id = item.id;
        self.bookmarks.push(item);
        id
    }

    /// Apply a change reported by one of this category's bookmarks
    pub fn on_bookmark_update(&mut self, event: TreeUpdateEvent<TreeItem>) -> TreeResult<()> {
        match event {
            TreeUpdateEvent::Save { updated } => {
                let index = self.position(updated.id)?;
                self.bookmarks[index] = updated;
            }
            TreeUpdateEvent::Delete { updated } => {
                let index = self.position(updated.id)?;
                self.bookmarks.remove(index);
            }
            TreeUpdateEvent::Add { updated, new_object } => {
                let index = self.position(updated.id)?;
                self.bookmarks.insert(index + 1, new_object);
            }
        }
        Ok(())
    }

    /// A payload dropped onto the category itself.
    ///
    /// Bookmarks are prepended here. A category becomes an `Add` event for
    /// the owner, which places it before this one.
    pub fn drop_payload(&mut self, payload: DragPayload, ids: &IdMint) -> Option<TreeUpdateEvent<TreeColumnCategory>> {
        match payload {
            DragPayload::Bookmark(record) => {
                self.bookmarks.insert(0, TreeItem::new(&record, ids));
                None
            }
            DragPayload::Category(record) => Some(TreeUpdateEvent::Add {
                updated: self.clone(),
                new_object: TreeColumnCategory::new(&record, self.is_editing, ids),
            }),
        }
    }
}

/// The ordered column of categories
#[derive(Debug, Clone, Default)]
pub struct BookmarkTree {
    categories: Vec<TreeColumnCategory>,
    is_editing: bool,
    ids: IdMint,
}

impl BookmarkTree {
    pub fn from_records(records: &[BookmarkCategoryRecord], is_editing: bool, ids: IdMint) -> Self {
        let categories = records
            .iter()
            .map(|r| TreeColumnCategory::new(r, is_editing, &ids))
            .collect();
        Self {
            categories,
            is_editing,
            ids,
        }
    }

    pub fn export(&self) -> Vec<BookmarkCategoryRecord> {
        self.categories.iter().map(TreeColumnCategory::export).collect()
    }

    pub fn ids(&self) -> &IdMint {
        &self.ids
    }

    pub fn categories(&self) -> &[TreeColumnCategory] {
        &self.categories
    }

    pub fn category_ids(&self) -> Vec<CategoryId> {
        self.categories.iter().map(|c| c.id).collect()
    }

    pub fn category(&self, id: CategoryId) -> Option<&TreeColumnCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn category_mut(&mut self, id: CategoryId) -> TreeResult<&mut TreeColumnCategory> {
        self.categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(TreeError::CategoryNotFound(id))
    }

    fn position(&self, id: CategoryId) -> TreeResult<usize> {
        self.categories
            .iter()
            .position(|c| c.id == id)
            .ok_or(TreeError::CategoryNotFound(id))
    }

    /// Apply a change reported by one of the categories
    pub fn on_category_update(&mut self, event: TreeUpdateEvent<TreeColumnCategory>) -> TreeResult<()> {
        match event {
            TreeUpdateEvent::Save { updated } => {
                let index = self.position(updated.id)?;
                self.categories[index] = updated;
            }
            TreeUpdateEvent::Delete { updated } => {
                let index = self.position(updated.id)?;
                self.categories.remove(index);
            }
            TreeUpdateEvent::Add { updated, new_object } => {
                let index = self.position(updated.id)?;
                self.categories.insert(index, new_object);
            }
        }
        Ok(())
    }

    /// Route a bookmark change to the category that owns it
    pub fn on_bookmark_update(&mut self, category: CategoryId, event: TreeUpdateEvent<TreeItem>) -> TreeResult<()> {
        self.category_mut(category)?.on_bookmark_update(event)
    }

    pub fn add_category(&mut self, name: &str) -> CategoryId {
        let record = BookmarkCategoryRecord {
            name: name.to_string(),
            bookmarks: Vec::new(),
        };
        let category = TreeColumnCategory::new(&record, self.is_editing, &self.ids);
        let id = category.id;
        self.categories.push(category);
        id
    }

    /// Resolve a DOM id (`category-<n>-header` or `bookmark-<n>`) to what an editor should show
    pub fn edit_target(&self, dom_id: &str) -> TreeResult<EditTarget> {
        let not_found = || TreeError::EditTargetNotFound(dom_id.to_string());

        if let Some(id) = BookmarkId::parse(dom_id) {
            let item = self
                .categories
                .iter()
                .find_map(|c| c.bookmark(id))
                .ok_or_else(not_found)?;
            return Ok(EditTarget {
                id: dom_id.to_string(),
                name: item.name.clone(),
                url: Some(item.url.clone()),
            });
        }

        let id = CategoryId::parse(dom_id).ok_or_else(not_found)?;
        let category = self.category(id).ok_or_else(not_found)?;
        Ok(EditTarget {
            id: dom_id.to_string(),
            name: category.name.clone(),
            url: None,
        })
    }
}
