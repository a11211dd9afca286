//! Prefs Core
//!
//! A single window hosting several settings panes. The window remembers the
//! last pane the user looked at and where it was on screen, switches panes
//! through a toolbar or a segmented control, and resizes itself smoothly
//! between panes of different sizes.
//!
//! The native toolkit is reached only through [`NativeWindow`]; the host
//! forwards navigation input, frame changes and animation completions back
//! into [`SettingsWindow`].

mod config;
mod error;
mod frame;
mod responder;
mod shell;

pub use config::Config;
pub use error::CoreError;
pub use frame::WindowFrameStore;
pub use responder::ResponderTarget;
pub use shell::{SettingsWindow, SettingsWindowOptions};

// Re-export the building blocks hosts need
pub use prefs_panes::{
    ActionResponder, ContentView, Frame, Icon, PaneConvertible, PaneDescriptor, PaneError,
    PaneIdentifier, PaneRegistry, Point, SettingsPane, Size, StaticView,
};
pub use prefs_storage::{Database, MemoryStore, PreferenceStore, StorageError, StorageKeys};
pub use prefs_switcher::{
    ActivationOutcome, ActivationState, HeadlessWindow, NativeWindow, NavigationEvent, Segment,
    Style, SwitchError, SwitchPhase, ToolbarItem, Transition,
};

use std::sync::Arc;

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}

/// Open the persistent store named by `config`.
///
/// A store that cannot be opened is not fatal: state simply is not kept
/// across launches.
pub fn open_store(config: &Config) -> Arc<dyn PreferenceStore> {
    match Database::open(&config.database_path) {
        Ok(db) => Arc::new(db),
        Err(e) => {
            tracing::warn!(
                path = %config.database_path.display(),
                error = %e,
                "Settings store unavailable, falling back to memory"
            );
            Arc::new(MemoryStore::new())
        }
    }
}
