//! Pane descriptors
//!
//! A descriptor is fixed once built. Its content view is not: the factory
//! runs lazily, the first time the pane is activated.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geometry::Size;
use crate::view::{ContentView, StaticView};

/// Stable name of a pane within one settings window.
///
/// Persisted across launches, so it should not change between app versions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaneIdentifier(String);

impl PaneIdentifier {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaneIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PaneIdentifier {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PaneIdentifier {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Opaque image handle: an asset or symbol name the toolkit resolves.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Icon(String);

impl Icon {
    pub fn named(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

pub type ViewFactory = Box<dyn Fn() -> Box<dyn ContentView>>;

pub struct PaneDescriptor {
    identifier: PaneIdentifier,
    title: String,
    icon: Icon,
    make_view: ViewFactory,
}

impl PaneDescriptor {
    pub fn new<F>(
        identifier: impl Into<PaneIdentifier>,
        title: impl Into<String>,
        icon: Icon,
        make_view: F,
    ) -> Self
    where
        F: Fn() -> Box<dyn ContentView> + 'static,
    {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            icon,
            make_view: Box::new(make_view),
        }
    }

    pub fn identifier(&self) -> &PaneIdentifier {
        &self.identifier
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> &Icon {
        &self.icon
    }

    /// Build a fresh content view. Callers cache the result.
    pub fn make_view(&self) -> Box<dyn ContentView> {
        tracing::debug!(pane = %self.identifier, "Instantiating pane view");
        (self.make_view)()
    }
}

impl fmt::Debug for PaneDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaneDescriptor")
            .field("identifier", &self.identifier)
            .field("title", &self.title)
            .field("icon", &self.icon)
            .finish_non_exhaustive()
    }
}

/// Lightweight pane descriptions that can be turned into a full descriptor.
///
/// Converted once, when the window's registry is built.
pub trait PaneConvertible {
    fn into_pane_descriptor(self) -> PaneDescriptor;
}

impl PaneConvertible for PaneDescriptor {
    fn into_pane_descriptor(self) -> PaneDescriptor {
        self
    }
}

/// Declarative pane: a title, an icon and a fixed content size.
#[derive(Debug, Clone)]
pub struct SettingsPane {
    pub identifier: PaneIdentifier,
    pub title: String,
    pub icon: Icon,
    pub content_size: Size,
    pub actions: Vec<String>,
}

impl SettingsPane {
    pub fn new(identifier: impl Into<PaneIdentifier>, title: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            icon: Icon::default(),
            content_size: Size::new(480.0, 320.0),
            actions: Vec::new(),
        }
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    pub fn content_size(mut self, width: f64, height: f64) -> Self {
        self.content_size = Size::new(width, height);
        self
    }

    pub fn handles(mut self, action: impl Into<String>) -> Self {
        self.actions.push(action.into());
        self
    }
}

impl PaneConvertible for SettingsPane {
    fn into_pane_descriptor(self) -> PaneDescriptor {
        let SettingsPane {
            identifier,
            title,
            icon,
            content_size,
            actions,
        } = self;

        let label = title.clone();
        PaneDescriptor::new(identifier, title, icon, move || {
            let view = actions
                .iter()
                .fold(StaticView::new(label.clone(), content_size), |view, action| {
                    view.with_action(action.clone())
                });
            Box::new(view) as Box<dyn ContentView>
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_descriptor_factory_is_lazy() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);

        let descriptor = PaneDescriptor::new("general", "General", Icon::named("gear"), move || {
            counter.set(counter.get() + 1);
            Box::new(StaticView::new("General", Size::new(100.0, 100.0))) as Box<dyn ContentView>
        });

        assert_eq!(calls.get(), 0);
        let view = descriptor.make_view();
        assert_eq!(calls.get(), 1);
        assert_eq!(view.preferred_size(), Size::new(100.0, 100.0));
    }

    #[test]
    fn test_settings_pane_conversion() {
        let descriptor = SettingsPane::new("advanced", "Advanced")
            .icon(Icon::named("gearshape.2"))
            .content_size(600.0, 200.0)
            .handles("resetAll")
            .into_pane_descriptor();

        assert_eq!(descriptor.identifier().as_str(), "advanced");
        assert_eq!(descriptor.title(), "Advanced");
        assert_eq!(descriptor.icon().name(), "gearshape.2");

        let view = descriptor.make_view();
        assert_eq!(view.preferred_size(), Size::new(600.0, 200.0));
        assert!(view.responds_to("resetAll"));
    }

    #[test]
    fn test_identifier_serializes_as_plain_string() {
        let id = PaneIdentifier::new("general");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"general\"");
        assert_eq!(id.to_string(), "general");
    }
}
