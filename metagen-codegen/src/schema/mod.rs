//! Views over a compiled schema.
//!
//! - [`ContainmentTree`] - accessor families arranged by containment
//! - [`ContainmentTreeDisplay`] - declarative tree formatting
//! - [`SchemaSummary`] - counts for reports

mod display;
mod summary;
mod tree;

pub use display::{ContainmentTreeDisplay, DisplayStyle};
pub use summary::SchemaSummary;
pub use tree::{ContainmentTree, TreeNode};
