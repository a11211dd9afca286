//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] prefs_storage::StorageError),

    #[error("Pane error: {0}")]
    Pane(#[from] prefs_panes::PaneError),

    #[error("Switch error: {0}")]
    Switch(#[from] prefs_switcher::SwitchError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
