//! Prefs Panes
//!
//! A settings window hosts several independently authored panes. Each pane
//! is described by a [`PaneDescriptor`]: identity, title, icon and a factory
//! that builds its content view on demand. Descriptors live in an ordered
//! [`PaneRegistry`] whose order is the display order.

mod error;
mod geometry;
mod pane;
mod registry;
mod view;

pub use error::PaneError;
pub use geometry::{Frame, Point, Size};
pub use pane::{Icon, PaneConvertible, PaneDescriptor, PaneIdentifier, SettingsPane};
pub use registry::PaneRegistry;
pub use view::{ActionResponder, ContentView, StaticView};

pub type Result<T> = std::result::Result<T, PaneError>;
