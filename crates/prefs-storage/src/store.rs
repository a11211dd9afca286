//! Key-value store abstraction
//!
//! The settings window only needs string keys and string values. Anything
//! structured (window frames) is serialized by the caller.

use crate::Result;

/// Host-provided key-value store.
///
/// Implementations must be usable from the UI thread without blocking for
/// long; failures are reported, never panicked on, so callers can degrade to
/// defaults.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}
