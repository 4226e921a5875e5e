//! Errors raised while building an element tree.

use htmlgen_types::TagKind;
use thiserror::Error;

/// Structural misuse and lookup misses on an element tree.
///
/// A failing operation leaves the tree exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElementError {
    #[error("cannot add element - <{tag}> is not a container")]
    NotAContainer { tag: TagKind },
    #[error("cannot add empty element group")]
    EmptyGroup,
    #[error("no child element with given id exists: {0}")]
    IdNotFound(String),
    #[error("bounds error at pos: {index} (element has {len} children)")]
    IndexOutOfBounds { index: usize, len: usize },
}
