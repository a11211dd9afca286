//! Namespaced persistence keys
//!
//! Every settings window persists under its own namespace so that two
//! independent windows (say, app settings and a plugin's settings) never
//! overwrite each other's state.

use serde::{Deserialize, Serialize};

pub const DEFAULT_NAMESPACE: &str = "prefs.settings-window";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageKeys {
    namespace: String,
}

impl StorageKeys {
    pub fn new(namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        let namespace = namespace.trim().trim_end_matches('.').to_string();

        if namespace.is_empty() {
            return Self::default();
        }

        Self { namespace }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Key holding the identifier of the last active pane
    pub fn selected_pane(&self) -> String {
        format!("{}.selected-pane", self.namespace)
    }

    /// Key holding the serialized window frame
    pub fn window_frame(&self) -> String {
        format!("{}.frame", self.namespace)
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_namespaced() {
        let keys = StorageKeys::new("com.example.app");
        assert_eq!(keys.selected_pane(), "com.example.app.selected-pane");
        assert_eq!(keys.window_frame(), "com.example.app.frame");
    }

    #[test]
    fn test_distinct_namespaces_do_not_collide() {
        let app = StorageKeys::new("app");
        let plugin = StorageKeys::new("plugin");
        assert_ne!(app.selected_pane(), plugin.selected_pane());
        assert_ne!(app.window_frame(), plugin.window_frame());
    }

    #[test]
    fn test_blank_namespace_uses_default() {
        let keys = StorageKeys::new("  ");
        assert_eq!(keys.namespace(), DEFAULT_NAMESPACE);

        let trimmed = StorageKeys::new("app.");
        assert_eq!(trimmed.namespace(), "app");
    }
}
