//! Pane error types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PaneError {
    #[error("Pane not found: {0}")]
    NotFound(String),

    #[error("Duplicate pane identifier: {0}")]
    DuplicateIdentifier(String),

    #[error("Invalid pane identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("A settings window needs at least one pane")]
    Empty,

    #[error("Cannot remove the last pane")]
    CannotRemoveLastPane,
}
