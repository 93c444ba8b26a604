//! Error kinds reported by tree operations.
//!
//! All conditions here are local and recoverable: they are returned to the
//! immediate caller, never retried internally, and no operation that can
//! fail leaves the tree half-mutated (presence is checked before any link
//! is touched).

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// `min`, `max`, or `pop*` was requested on a tree with no nodes.
    #[error("operation requires a non-empty tree")]
    EmptyCollection,

    /// Remove-or-fail on an absent key, or `successor` of the maximum /
    /// `predecessor` of the minimum.
    #[error("key not found in tree")]
    KeyNotFound,

    /// A caller-supplied node index does not belong to this tree.
    #[error("node does not belong to this tree")]
    InvalidNode,
}
