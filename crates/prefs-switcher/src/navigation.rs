//! Navigation adapters
//!
//! Two ways to pick a pane: a toolbar with one item per pane, or a single
//! segmented control. Either way the adapter only turns user input into a
//! "please activate pane X" request and mirrors the engine's selection
//! back into the chrome. It never owns panes.

use serde::{Deserialize, Serialize};

use prefs_panes::{PaneIdentifier, PaneRegistry};

use crate::window::{NativeWindow, Segment, ToolbarItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    #[default]
    ToolbarItems,
    SegmentedControl,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::ToolbarItems => "toolbar-items",
            Style::SegmentedControl => "segmented-control",
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "toolbar-items" | "toolbar" => Ok(Style::ToolbarItems),
            "segmented-control" | "segmented" => Ok(Style::SegmentedControl),
            _ => Err(format!("Unknown style: {}", s)),
        }
    }
}

/// Raw input from the navigation chrome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    ToolbarItemClicked(PaneIdentifier),
    SegmentSelected(usize),
}

pub trait NavigationAdapter {
    fn style(&self) -> Style;

    /// Build the chrome for the registry's current panes
    fn install(&mut self, registry: &PaneRegistry, window: &mut dyn NativeWindow);

    /// Mirror an engine-driven selection. Must not produce an activation
    /// request when the toolkit echoes the change back.
    fn reflect_selection(
        &mut self,
        registry: &PaneRegistry,
        index: usize,
        window: &mut dyn NativeWindow,
    );

    /// Translate user input into an activation request
    fn handle_event(
        &mut self,
        registry: &PaneRegistry,
        event: &NavigationEvent,
    ) -> Option<PaneIdentifier>;

    fn title_visible(&self, pane_count: usize) -> bool;
}

/// Toolbar is hidden only when the policy asks for it and there is nothing
/// to switch between.
pub fn toolbar_visible(hides_for_single_pane: bool, pane_count: usize) -> bool {
    !hides_for_single_pane || pane_count > 1
}

pub fn adapter_for(style: Style) -> Box<dyn NavigationAdapter> {
    match style {
        Style::ToolbarItems => Box::new(ToolbarAdapter::default()),
        Style::SegmentedControl => Box::new(SegmentedAdapter::default()),
    }
}

#[derive(Debug, Default)]
pub struct ToolbarAdapter {
    items: Vec<ToolbarItem>,
    selected: Option<PaneIdentifier>,
    /// Selection we pushed into the toolbar and may hear back about
    echo: Option<PaneIdentifier>,
}

impl ToolbarAdapter {
    pub fn items(&self) -> &[ToolbarItem] {
        &self.items
    }

    pub fn selected(&self) -> Option<&PaneIdentifier> {
        self.selected.as_ref()
    }
}

impl NavigationAdapter for ToolbarAdapter {
    fn style(&self) -> Style {
        Style::ToolbarItems
    }

    fn install(&mut self, registry: &PaneRegistry, window: &mut dyn NativeWindow) {
        self.items = registry
            .iter()
            .map(|pane| ToolbarItem {
                identifier: pane.identifier().clone(),
                title: pane.title().to_string(),
                icon: pane.icon().clone(),
            })
            .collect();
        window.set_toolbar_items(&self.items);

        self.selected = self.selected.take().filter(|id| registry.contains(id));
        if let Some(selected) = &self.selected {
            self.echo = Some(selected.clone());
            window.select_toolbar_item(selected);
        }

        tracing::debug!(item_count = self.items.len(), "Installed toolbar items");
    }

    fn reflect_selection(
        &mut self,
        registry: &PaneRegistry,
        index: usize,
        window: &mut dyn NativeWindow,
    ) {
        let Some(pane) = registry.get_index(index) else {
            return;
        };

        let identifier = pane.identifier().clone();
        window.select_toolbar_item(&identifier);
        self.echo = Some(identifier.clone());
        self.selected = Some(identifier);
    }

    fn handle_event(
        &mut self,
        _registry: &PaneRegistry,
        event: &NavigationEvent,
    ) -> Option<PaneIdentifier> {
        match event {
            NavigationEvent::ToolbarItemClicked(identifier) => {
                if self.echo.take().as_ref() == Some(identifier) {
                    tracing::trace!(pane = %identifier, "Ignoring echoed toolbar selection");
                    return None;
                }
                Some(identifier.clone())
            }
            NavigationEvent::SegmentSelected(index) => {
                tracing::debug!(index, "Segment event ignored by toolbar navigation");
                None
            }
        }
    }

    fn title_visible(&self, _pane_count: usize) -> bool {
        true
    }
}

#[derive(Debug, Default)]
pub struct SegmentedAdapter {
    segments: Vec<Segment>,
    selected: Option<usize>,
    echo: Option<usize>,
}

impl SegmentedAdapter {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
}

impl NavigationAdapter for SegmentedAdapter {
    fn style(&self) -> Style {
        Style::SegmentedControl
    }

    fn install(&mut self, registry: &PaneRegistry, window: &mut dyn NativeWindow) {
        // Remember the selected pane by identity, indices shift on rebuild
        let previous = self
            .selected
            .and_then(|index| self.segments.get(index))
            .map(|segment| segment.identifier.clone());

        self.segments = registry
            .iter()
            .map(|pane| Segment {
                identifier: pane.identifier().clone(),
                title: pane.title().to_string(),
            })
            .collect();
        window.set_segments(&self.segments);

        self.selected = previous.and_then(|id| registry.index_of(&id));
        if let Some(index) = self.selected {
            self.echo = Some(index);
            window.select_segment(index);
        }

        tracing::debug!(segment_count = self.segments.len(), "Installed segmented control");
    }

    fn reflect_selection(
        &mut self,
        _registry: &PaneRegistry,
        index: usize,
        window: &mut dyn NativeWindow,
    ) {
        if index >= self.segments.len() {
            return;
        }

        window.select_segment(index);
        self.echo = Some(index);
        self.selected = Some(index);
    }

    fn handle_event(
        &mut self,
        registry: &PaneRegistry,
        event: &NavigationEvent,
    ) -> Option<PaneIdentifier> {
        match event {
            NavigationEvent::SegmentSelected(index) => {
                if self.echo.take() == Some(*index) {
                    tracing::trace!(index, "Ignoring echoed segment selection");
                    return None;
                }

                match registry.get_index(*index) {
                    Some(pane) => Some(pane.identifier().clone()),
                    None => {
                        tracing::warn!(index, "Segment index out of range");
                        None
                    }
                }
            }
            NavigationEvent::ToolbarItemClicked(identifier) => {
                tracing::debug!(pane = %identifier, "Toolbar event ignored by segmented navigation");
                None
            }
        }
    }

    /// With a single pane there is no segment label to identify it, so the
    /// window title takes over.
    fn title_visible(&self, pane_count: usize) -> bool {
        pane_count <= 1
    }
}
