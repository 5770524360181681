//! Edit Target Type
//!
//! The node an inline editor opens over.

/// What the editor shows and where it comes from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditTarget {
    /// DOM id of the replaced element
    pub id: String,
    pub name: String,
    /// `None` for targets without a link (category titles)
    pub url: Option<String>,
}
