//! Switching error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwitchError {
    #[error("Pane not found: {0}")]
    PaneNotFound(String),

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Pane error: {0}")]
    Pane(#[from] prefs_panes::PaneError),

    #[error("Storage error: {0}")]
    Storage(#[from] prefs_storage::StorageError),
}
