//! Pane content views
//!
//! The content of a pane is opaque to the settings window. All it needs is
//! the size the pane would like to be shown at, and a way to ask whether
//! the pane handles a menu/keyboard action.

use std::any::Any;
use std::collections::HashSet;

use crate::geometry::Size;

/// Something that can answer "do you handle this action?"
pub trait ActionResponder {
    fn responds_to(&self, action: &str) -> bool;
}

/// Content view of a single pane.
///
/// Implementors are built by the pane's factory the first time the pane is
/// shown and cached until explicitly discarded.
pub trait ContentView: Any {
    /// Size the pane's content wants; the window is resized to fit it.
    fn preferred_size(&self) -> Size;

    /// Whether the pane itself handles `action`.
    fn responds_to(&self, _action: &str) -> bool {
        false
    }

    /// Nested responder consulted after the pane itself declines.
    fn supplemental_responder(&self) -> Option<&dyn ActionResponder> {
        None
    }

    /// Downcast support for hosts that need the concrete view back.
    fn as_any(&self) -> &dyn Any;
}

/// A fixed-size view with a label. Backs [`crate::SettingsPane`].
#[derive(Debug, Clone, Default)]
pub struct StaticView {
    pub label: String,
    pub size: Size,
    actions: HashSet<String>,
}

impl StaticView {
    pub fn new(label: impl Into<String>, size: Size) -> Self {
        Self {
            label: label.into(),
            size,
            actions: HashSet::new(),
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.actions.insert(action.into());
        self
    }
}

impl ContentView for StaticView {
    fn preferred_size(&self) -> Size {
        self.size
    }

    fn responds_to(&self, action: &str) -> bool {
        self.actions.contains(action)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_view() {
        let view = StaticView::new("General", Size::new(480.0, 320.0)).with_action("reset");

        assert_eq!(view.preferred_size(), Size::new(480.0, 320.0));
        assert!(view.responds_to("reset"));
        assert!(!view.responds_to("copy"));
        assert!(view.supplemental_responder().is_none());

        let any = view.as_any();
        let concrete = any.downcast_ref::<StaticView>().unwrap();
        assert_eq!(concrete.label, "General");
    }
}
