//! Native window seam
//!
//! Everything the switching logic needs from the host toolkit. Keeping this
//! narrow is what lets the engine run headless in tests.

use std::time::Duration;

use serde::Serialize;

use prefs_panes::{ContentView, Frame, Icon, PaneIdentifier, Size};

/// One selectable toolbar item per pane
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolbarItem {
    pub identifier: PaneIdentifier,
    pub title: String,
    pub icon: Icon,
}

/// One segment of the segmented control per pane
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub identifier: PaneIdentifier,
    pub title: String,
}

/// An animated pane switch handed to the toolkit.
///
/// The toolkit swaps in `view` (cross-fading when asked to), animates the
/// window to `target_frame` over `duration`, and then reports completion
/// back with the same `generation`.
pub struct Transition<'a> {
    pub pane: &'a PaneIdentifier,
    pub view: &'a dyn ContentView,
    pub target_frame: Frame,
    pub duration: Duration,
    pub crossfade: bool,
    pub generation: u64,
}

pub trait NativeWindow {
    fn frame(&self) -> Frame;

    fn set_frame(&mut self, frame: Frame);

    /// Size of the content area, excluding title bar and toolbar
    fn content_size(&self) -> Size;

    fn center(&mut self);

    fn set_title(&mut self, title: &str);

    fn set_title_visible(&mut self, visible: bool);

    fn set_toolbar_visible(&mut self, visible: bool);

    fn set_toolbar_items(&mut self, items: &[ToolbarItem]);

    fn select_toolbar_item(&mut self, identifier: &PaneIdentifier);

    fn set_segments(&mut self, segments: &[Segment]);

    fn select_segment(&mut self, index: usize);

    /// Swap the content without animation
    fn set_content(&mut self, pane: &PaneIdentifier, view: &dyn ContentView);

    fn begin_transition(&mut self, transition: Transition<'_>);

    fn set_interaction_enabled(&mut self, enabled: bool);

    /// Show the window and bring it to the front
    fn present(&mut self);

    /// Bring the whole application to the foreground
    fn activate_app(&mut self);
}
