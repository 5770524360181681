//! Tree Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos_dragdrop::{create_dnd_signals, DndSignals};

use crate::config::TreeConfig;

/// Tree-wide signals and settings provided via context
#[derive(Clone, Copy)]
pub struct TreeContext {
    /// Whether rows can be edited and dragged
    pub is_editing: bool,
    /// Drag state shared by every category and row
    pub dnd: DndSignals,
    config: StoredValue<TreeConfig>,
}

impl TreeContext {
    pub fn new(config: TreeConfig) -> Self {
        Self {
            is_editing: config.is_editing,
            dnd: create_dnd_signals(),
            config: StoredValue::new(config),
        }
    }

    pub fn default_link(&self) -> String {
        self.config.with_value(|c| c.default_link.clone())
    }

    pub fn new_bookmark_name(&self) -> String {
        self.config.with_value(|c| c.new_bookmark_name.clone())
    }

    pub fn new_category_name(&self) -> String {
        self.config.with_value(|c| c.new_category_name.clone())
    }

    /// A click right after a drag belongs to the drag, not to the title
    pub fn drag_just_ended(&self) -> bool {
        self.dnd.drag_just_ended_read.get_untracked()
    }
}

/// Get the tree context
pub fn use_tree_context() -> TreeContext {
    expect_context::<TreeContext>()
}
