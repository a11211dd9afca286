//! Window frame autosave
//!
//! Stores where the settings window was on screen so it reopens in the same
//! place. The frame is kept as JSON under the window's namespaced key.

use std::sync::Arc;

use prefs_panes::Frame;
use prefs_storage::{PreferenceStore, StorageKeys};

use crate::Result;

pub struct WindowFrameStore {
    store: Arc<dyn PreferenceStore>,
    key: String,
}

impl WindowFrameStore {
    pub fn new(store: Arc<dyn PreferenceStore>, keys: &StorageKeys) -> Self {
        Self {
            store,
            key: keys.window_frame(),
        }
    }

    /// Persisted frame, if any. Unreadable or malformed entries read as none.
    pub fn load(&self) -> Option<Frame> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read window frame");
                return None;
            }
        };

        match serde_json::from_str::<Frame>(&raw) {
            Ok(frame) if frame.size.width > 0.0 && frame.size.height > 0.0 => Some(frame),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Ignoring malformed window frame");
                None
            }
        }
    }

    pub fn save(&self, frame: &Frame) -> Result<()> {
        let json = serde_json::to_string(frame)?;
        self.store.set(&self.key, &json)?;
        tracing::debug!(key = %self.key, "Saved window frame");
        Ok(())
    }
}
