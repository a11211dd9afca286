//! Prefs Storage Layer
//!
//! Key-value persistence for settings window state: the last active pane
//! and the window frame. Backed by SQLite, with an in-memory fallback for
//! hosts where the database cannot be opened.

mod database;
mod error;
mod keys;
mod memory;
mod migrations;
mod store;

pub use database::Database;
pub use error::StorageError;
pub use keys::StorageKeys;
pub use memory::MemoryStore;
pub use store::PreferenceStore;

pub type Result<T> = std::result::Result<T, StorageError>;
