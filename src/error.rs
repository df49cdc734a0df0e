use thiserror::Error;

use crate::item::TodoId;

/// Errors returned by [`TodoState`](crate::state::TodoState) operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// An operation referenced an id that has to exist but does not
    #[error("no todo item with id {0}")]
    NotFound(TodoId),

    /// The operation needs an active edit session
    #[error("illegal state: {0}")]
    IllegalState(String),
}

/// Result type for todo state operations
pub type TodoResult<T> = Result<T, TodoError>;
