//! Tree Update Events
//!
//! Typed messages a node sends upward to its owner.

/// A change of `updated`, reported to whoever owns it
#[derive(Debug, Clone, PartialEq)]
pub enum TreeUpdateEvent<T> {
    /// `updated` carries the new content; the owner replaces its copy
    Save { updated: T },
    /// `updated` is gone; the owner drops it
    Delete { updated: T },
    /// `new_object` was dropped onto `updated`
    Add { updated: T, new_object: T },
}

impl<T> TreeUpdateEvent<T> {
    pub fn kind(&self) -> &'static str {
        match self {
            TreeUpdateEvent::Save { .. } => "save",
            TreeUpdateEvent::Delete { .. } => "delete",
            TreeUpdateEvent::Add { .. } => "add",
        }
    }

    pub fn updated(&self) -> &T {
        match self {
            TreeUpdateEvent::Save { updated }
            | TreeUpdateEvent::Delete { updated }
            | TreeUpdateEvent::Add { updated, .. } => updated,
        }
    }
}
