//! UI Components
//!
//! Reusable Leptos components.

mod button;
mod toolbar;
mod editor;
mod editor_target;
mod tree_item;
mod tree_column_category;
mod bookmark_tree_view;

pub use button::Button;
pub use toolbar::Toolbar;
pub use editor::Editor;
pub use editor_target::EditTarget;
pub use tree_item::TreeItemRow;
pub use tree_column_category::TreeColumnCategoryView;
pub use bookmark_tree_view::BookmarkTreeView;
