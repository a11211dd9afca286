//! Headless window
//!
//! A [`NativeWindow`] that keeps everything in memory. Used by tests and by
//! hosts without a display. Animations are recorded rather than run; the
//! frame jumps straight to its final value and the caller reports
//! completion using the recorded generation.

use std::time::Duration;

use prefs_panes::{ContentView, Frame, PaneIdentifier, Size};

use crate::window::{NativeWindow, Segment, ToolbarItem, Transition};

/// Height the headless window reserves above the content area
pub const TITLE_BAR_HEIGHT: f64 = 28.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PendingTransition {
    pub pane: PaneIdentifier,
    pub target_frame: Frame,
    pub duration: Duration,
    pub crossfade: bool,
    pub generation: u64,
}

#[derive(Debug, Clone)]
pub struct HeadlessWindow {
    screen: Frame,
    frame: Frame,
    title: String,
    title_visible: bool,
    toolbar_visible: bool,
    toolbar_items: Vec<ToolbarItem>,
    selected_toolbar_item: Option<PaneIdentifier>,
    segments: Vec<Segment>,
    selected_segment: Option<usize>,
    content: Option<PaneIdentifier>,
    content_history: Vec<PaneIdentifier>,
    transitions: Vec<PendingTransition>,
    interaction_enabled: bool,
    visible: bool,
    app_activations: usize,
    center_count: usize,
}

impl HeadlessWindow {
    pub fn new(screen: Frame) -> Self {
        Self {
            screen,
            frame: Frame::new(0.0, 0.0, 0.0, TITLE_BAR_HEIGHT),
            title: String::new(),
            title_visible: true,
            toolbar_visible: true,
            toolbar_items: Vec::new(),
            selected_toolbar_item: None,
            segments: Vec::new(),
            selected_segment: None,
            content: None,
            content_history: Vec::new(),
            transitions: Vec::new(),
            interaction_enabled: true,
            visible: false,
            app_activations: 0,
            center_count: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_title_visible(&self) -> bool {
        self.title_visible
    }

    pub fn is_toolbar_visible(&self) -> bool {
        self.toolbar_visible
    }

    pub fn toolbar_items(&self) -> &[ToolbarItem] {
        &self.toolbar_items
    }

    pub fn selected_toolbar_item(&self) -> Option<&PaneIdentifier> {
        self.selected_toolbar_item.as_ref()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn selected_segment(&self) -> Option<usize> {
        self.selected_segment
    }

    /// Pane whose content is in the window
    pub fn content(&self) -> Option<&PaneIdentifier> {
        self.content.as_ref()
    }

    /// Every pane swapped in, in order
    pub fn content_history(&self) -> &[PaneIdentifier] {
        &self.content_history
    }

    pub fn transitions(&self) -> &[PendingTransition] {
        &self.transitions
    }

    pub fn last_transition(&self) -> Option<&PendingTransition> {
        self.transitions.last()
    }

    pub fn is_interaction_enabled(&self) -> bool {
        self.interaction_enabled
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn app_activations(&self) -> usize {
        self.app_activations
    }

    pub fn center_count(&self) -> usize {
        self.center_count
    }

    fn swap_content(&mut self, pane: &PaneIdentifier) {
        self.content = Some(pane.clone());
        self.content_history.push(pane.clone());
    }
}

impl Default for HeadlessWindow {
    fn default() -> Self {
        Self::new(Frame::new(0.0, 0.0, 1440.0, 900.0))
    }
}

impl NativeWindow for HeadlessWindow {
    fn frame(&self) -> Frame {
        self.frame
    }

    fn set_frame(&mut self, frame: Frame) {
        self.frame = frame;
    }

    fn content_size(&self) -> Size {
        Size::new(
            self.frame.size.width,
            (self.frame.size.height - TITLE_BAR_HEIGHT).max(0.0),
        )
    }

    fn center(&mut self) {
        self.frame = Frame::centered_in(self.screen, self.frame.size);
        self.center_count += 1;
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_title_visible(&mut self, visible: bool) {
        self.title_visible = visible;
    }

    fn set_toolbar_visible(&mut self, visible: bool) {
        self.toolbar_visible = visible;
    }

    fn set_toolbar_items(&mut self, items: &[ToolbarItem]) {
        self.toolbar_items = items.to_vec();
        self.selected_toolbar_item = None;
    }

    fn select_toolbar_item(&mut self, identifier: &PaneIdentifier) {
        self.selected_toolbar_item = Some(identifier.clone());
    }

    fn set_segments(&mut self, segments: &[Segment]) {
        self.segments = segments.to_vec();
        self.selected_segment = None;
    }

    fn select_segment(&mut self, index: usize) {
        self.selected_segment = Some(index);
    }

    fn set_content(&mut self, pane: &PaneIdentifier, _view: &dyn ContentView) {
        self.swap_content(pane);
    }

    fn begin_transition(&mut self, transition: Transition<'_>) {
        self.swap_content(transition.pane);
        self.frame = transition.target_frame;
        self.transitions.push(PendingTransition {
            pane: transition.pane.clone(),
            target_frame: transition.target_frame,
            duration: transition.duration,
            crossfade: transition.crossfade,
            generation: transition.generation,
        });
    }

    fn set_interaction_enabled(&mut self, enabled: bool) {
        self.interaction_enabled = enabled;
    }

    fn present(&mut self) {
        self.visible = true;
    }

    fn activate_app(&mut self) {
        self.app_activations += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prefs_panes::StaticView;

    #[test]
    fn test_content_size_excludes_title_bar() {
        let mut window = HeadlessWindow::default();
        window.set_frame(Frame::new(0.0, 0.0, 500.0, 328.0));
        assert_eq!(window.content_size(), Size::new(500.0, 300.0));
    }

    #[test]
    fn test_center() {
        let mut window = HeadlessWindow::new(Frame::new(0.0, 0.0, 1000.0, 1000.0));
        window.set_frame(Frame::new(0.0, 0.0, 200.0, 100.0));
        window.center();
        assert_eq!(window.frame(), Frame::new(400.0, 450.0, 200.0, 100.0));
        assert_eq!(window.center_count(), 1);
    }

    #[test]
    fn test_transition_is_recorded() {
        let mut window = HeadlessWindow::default();
        let pane = PaneIdentifier::new("general");
        let view = StaticView::new("General", Size::new(10.0, 10.0));

        window.begin_transition(Transition {
            pane: &pane,
            view: &view,
            target_frame: Frame::new(0.0, 0.0, 10.0, 38.0),
            duration: Duration::from_millis(250),
            crossfade: true,
            generation: 7,
        });

        assert_eq!(window.content(), Some(&pane));
        assert_eq!(window.frame().size, Size::new(10.0, 38.0));
        assert_eq!(window.last_transition().unwrap().generation, 7);
    }
}
