//! Tree Errors

use thiserror::Error;

use crate::ids::{BookmarkId, CategoryId};

pub type TreeResult<T> = Result<T, TreeError>;

/// Failures of tree mutation and editor setup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("edit target not found: {0}")]
    EditTargetNotFound(String),
    #[error("malformed drag payload: {0}")]
    MalformedPayload(String),
    #[error("category not found: {0}")]
    CategoryNotFound(CategoryId),
    #[error("bookmark not found: {0}")]
    BookmarkNotFound(BookmarkId),
}
