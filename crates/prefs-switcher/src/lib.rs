//! Prefs Pane Switching
//!
//! The tab switch engine owns which pane is active, lazily builds pane
//! views, resizes the window between panes of different sizes, and
//! remembers the last active pane. Navigation adapters translate toolbar
//! clicks or segment selections into activation requests.
//!
//! ```text
//! Empty
//!   ↓ first activation (immediate)
//! Idle(active) ──activate──→ Transitioning(from, to)
//!   ↑                              │ completion
//!   └──────────────────────────────┘
//! ```

mod engine;
mod error;
mod headless;
mod last_pane;
mod navigation;
mod state;
mod window;

pub use engine::{ActivationOutcome, EngineOptions, TabSwitchEngine, DEFAULT_ANIMATION_DURATION};
pub use error::SwitchError;
pub use headless::{HeadlessWindow, PendingTransition, TITLE_BAR_HEIGHT};
pub use last_pane::LastActivePaneStore;
pub use navigation::{
    adapter_for, toolbar_visible, NavigationAdapter, NavigationEvent, SegmentedAdapter, Style,
    ToolbarAdapter,
};
pub use state::{ActivationState, SwitchPhase};
pub use window::{NativeWindow, Segment, ToolbarItem, Transition};

pub type Result<T> = std::result::Result<T, SwitchError>;
