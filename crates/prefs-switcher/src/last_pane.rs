//! Last active pane persistence
//!
//! Read once when the window restores its initial pane, written every time
//! an activation settles. Nothing else touches the key.

use std::sync::Arc;

use prefs_panes::PaneIdentifier;
use prefs_storage::{PreferenceStore, StorageKeys};

use crate::Result;

pub struct LastActivePaneStore {
    store: Arc<dyn PreferenceStore>,
    key: String,
}

impl LastActivePaneStore {
    pub fn new(store: Arc<dyn PreferenceStore>, keys: &StorageKeys) -> Self {
        Self {
            store,
            key: keys.selected_pane(),
        }
    }

    /// Persisted pane, if any. A failing store reads as "nothing persisted".
    pub fn load(&self) -> Option<PaneIdentifier> {
        match self.store.get(&self.key) {
            Ok(value) => value
                .filter(|v| !v.trim().is_empty())
                .map(PaneIdentifier::from),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read last active pane");
                None
            }
        }
    }

    pub fn save(&self, pane: &PaneIdentifier) -> Result<()> {
        self.store.set(&self.key, pane.as_str())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prefs_storage::{Database, MemoryStore, StorageError};

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> prefs_storage::Result<Option<String>> {
            Err(StorageError::Unavailable("offline".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> prefs_storage::Result<()> {
            Err(StorageError::Unavailable("offline".to_string()))
        }

        fn remove(&self, _key: &str) -> prefs_storage::Result<()> {
            Err(StorageError::Unavailable("offline".to_string()))
        }
    }

    #[test]
    fn test_save_and_load() {
        let store = LastActivePaneStore::new(
            Arc::new(Database::open_in_memory().unwrap()),
            &StorageKeys::new("app"),
        );
        assert_eq!(store.load(), None);

        store.save(&"advanced".into()).unwrap();
        assert_eq!(store.load(), Some(PaneIdentifier::new("advanced")));
    }

    #[test]
    fn test_namespaces_are_isolated() {
        let shared = Arc::new(MemoryStore::new());
        let app = LastActivePaneStore::new(shared.clone(), &StorageKeys::new("app"));
        let plugin = LastActivePaneStore::new(shared, &StorageKeys::new("plugin"));

        app.save(&"general".into()).unwrap();
        plugin.save(&"filters".into()).unwrap();

        assert_eq!(app.load(), Some(PaneIdentifier::new("general")));
        assert_eq!(plugin.load(), Some(PaneIdentifier::new("filters")));
    }

    #[test]
    fn test_broken_store_reads_as_empty() {
        let store = LastActivePaneStore::new(Arc::new(BrokenStore), &StorageKeys::default());
        assert_eq!(store.load(), None);
        assert!(store.save(&"general".into()).is_err());
    }
}
