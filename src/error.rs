//! Errors surfaced by this crate.

use thiserror::Error;

/// Everything that can go wrong when talking to a [`Tree`][crate::Tree].
///
/// Note that the tree operations themselves don't fail: inserting a duplicate key or erasing a
/// missing one just reports `false`. The only fallible step is turning untrusted input into
/// something the tree understands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The requested traversal order doesn't exist.
    #[error("order not supported: {0:?}")]
    UnsupportedOrder(String),
}

/// Shorthand for results carrying a [`TreeError`].
pub type TreeResult<T> = Result<T, TreeError>;
