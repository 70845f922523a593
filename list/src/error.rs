use thiserror::Error;

/// Errors returned by list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The handle was issued by another list, was removed, or predates a `clear`.
    #[error("list: node is not linked into this list")]
    ForeignNode,
}
