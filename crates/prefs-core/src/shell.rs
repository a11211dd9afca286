//! Settings window shell
//!
//! Ties a pane registry, a navigation style and the switch engine to one
//! native window. All host input (navigation clicks, frame changes,
//! animation completions) enters through here.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use prefs_panes::{Frame, PaneConvertible, PaneDescriptor, PaneIdentifier, PaneRegistry};
use prefs_storage::{PreferenceStore, StorageKeys};
use prefs_switcher::{
    adapter_for, toolbar_visible, ActivationOutcome, ActivationState, EngineOptions,
    LastActivePaneStore, NativeWindow, NavigationAdapter, NavigationEvent, Style, SwitchError,
    TabSwitchEngine,
};

use crate::config::Config;
use crate::frame::WindowFrameStore;
use crate::responder::{ResponderChain, ResponderTarget};
use crate::Result;

#[derive(Debug, Clone)]
pub struct SettingsWindowOptions {
    pub style: Style,
    pub animated: bool,
    pub hides_toolbar_for_single_pane: bool,
    /// Used for the title when there is a single pane
    pub app_name: String,
    pub animation_duration: Duration,
    pub keys: StorageKeys,
}

impl SettingsWindowOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            app_name: config.app_name.clone(),
            animation_duration: config.animation_duration(),
            keys: config.keys(),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Default for SettingsWindowOptions {
    fn default() -> Self {
        Self {
            style: Style::default(),
            animated: true,
            hides_toolbar_for_single_pane: true,
            app_name: "Prefs".to_string(),
            animation_duration: prefs_switcher::DEFAULT_ANIMATION_DURATION,
            keys: StorageKeys::default(),
        }
    }
}

/// A window hosting several settings panes
pub struct SettingsWindow<W: NativeWindow> {
    /// Native window
    window: W,
    /// Panes in display order
    registry: PaneRegistry,
    /// Active pane, view cache and transitions
    engine: TabSwitchEngine,
    /// Toolbar or segmented control
    navigation: Box<dyn NavigationAdapter>,
    options: SettingsWindowOptions,
    frames: WindowFrameStore,
    /// No frame was persisted; center once the first pane sized the window
    needs_centering: bool,
    /// Actions the window itself handles, ahead of any pane
    window_actions: HashSet<String>,
}

impl<W: NativeWindow> SettingsWindow<W> {
    /// Build the window around `panes`.
    ///
    /// # Panics
    ///
    /// Panics if `panes` is empty.
    pub fn new(
        panes: Vec<PaneDescriptor>,
        options: SettingsWindowOptions,
        window: W,
        store: Arc<dyn PreferenceStore>,
    ) -> Result<Self> {
        assert!(!panes.is_empty(), "A settings window needs at least one pane");

        let registry = PaneRegistry::new(panes)?;
        let engine = TabSwitchEngine::new(
            LastActivePaneStore::new(store.clone(), &options.keys),
            EngineOptions {
                animated: options.animated,
                animation_duration: options.animation_duration,
                ..EngineOptions::default()
            },
        );
        let frames = WindowFrameStore::new(store, &options.keys);

        let mut shell = Self {
            window,
            registry,
            engine,
            navigation: adapter_for(options.style),
            options,
            frames,
            needs_centering: false,
            window_actions: HashSet::new(),
        };

        match shell.frames.load() {
            Some(frame) => shell.window.set_frame(frame),
            None => shell.needs_centering = true,
        }

        shell.refresh_chrome();

        tracing::info!(
            panes = shell.registry.len(),
            style = %shell.options.style,
            namespace = shell.options.keys.namespace(),
            "Settings window created"
        );

        Ok(shell)
    }

    pub fn from_convertible<I, P>(
        panes: I,
        options: SettingsWindowOptions,
        window: W,
        store: Arc<dyn PreferenceStore>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: PaneConvertible,
    {
        let panes = panes
            .into_iter()
            .map(PaneConvertible::into_pane_descriptor)
            .collect();
        Self::new(panes, options, window, store)
    }

    // === Showing and switching ===

    /// Show the window.
    ///
    /// With a pane, that pane is shown without animation. Without one, the
    /// last pane the user looked at is restored (first show only).
    pub fn show(&mut self, pane: Option<&PaneIdentifier>, force_activate_app: bool) -> Result<()> {
        let outcome = match pane {
            Some(identifier) => {
                match self
                    .engine
                    .activate(&self.registry, &mut self.window, identifier, false)
                {
                    Ok(outcome) => outcome,
                    Err(SwitchError::PaneNotFound(_)) => {
                        tracing::warn!(pane = %identifier, "Cannot show unknown pane");
                        self.engine
                            .restore_initial_tab(&self.registry, &mut self.window)?
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            None => self
                .engine
                .restore_initial_tab(&self.registry, &mut self.window)?,
        };

        if self.needs_centering && self.engine.active_pane().is_some() {
            self.window.center();
            self.needs_centering = false;
        }

        self.handle_outcome(&outcome);

        self.window.present();
        if force_activate_app {
            self.window.activate_app();
        }

        Ok(())
    }

    /// Switch panes as if the user had picked `identifier`
    pub fn activate_pane(&mut self, identifier: &PaneIdentifier) -> Result<ActivationOutcome> {
        let outcome = self
            .engine
            .activate(&self.registry, &mut self.window, identifier, true)?;
        self.handle_outcome(&outcome);
        Ok(outcome)
    }

    /// Route toolbar or segmented control input. Echoes of our own
    /// selection changes yield `None`.
    pub fn handle_navigation_event(
        &mut self,
        event: &NavigationEvent,
    ) -> Result<Option<ActivationOutcome>> {
        match self.navigation.handle_event(&self.registry, event) {
            Some(identifier) => self.activate_pane(&identifier).map(Some),
            None => Ok(None),
        }
    }

    /// The host finished animating transition `generation`
    pub fn transition_finished(&mut self, generation: u64) -> Result<Option<ActivationOutcome>> {
        let outcome = self
            .engine
            .complete_transition(&self.registry, &mut self.window, generation)?;
        if let Some(outcome) = &outcome {
            self.handle_outcome(outcome);
        }
        Ok(outcome)
    }

    /// The user moved or resized the window
    pub fn window_frame_changed(&mut self, frame: Frame) {
        if self.engine.is_transitioning() {
            // The settled frame is written when the transition completes
            tracing::trace!("Deferring frame save until transition settles");
            return;
        }
        self.save_frame(&frame);
    }

    // === Responder chain ===

    pub fn register_window_action(&mut self, action: impl Into<String>) {
        self.window_actions.insert(action.into());
    }

    /// First responder for `action`: the window, then the pane on screen,
    /// then that pane's supplemental responder.
    pub fn target_for_action(&self, action: &str) -> Option<ResponderTarget> {
        ResponderChain::new(&self.window_actions, self.engine.displayed_view())
            .target_for_action(action)
    }

    // === Pane management ===

    pub fn add_pane(&mut self, pane: impl PaneConvertible) -> Result<()> {
        let descriptor = pane.into_pane_descriptor();
        let identifier = descriptor.identifier().clone();
        self.registry.append(descriptor)?;
        self.refresh_chrome();
        tracing::info!(pane = %identifier, panes = self.registry.len(), "Added pane");
        Ok(())
    }

    /// Remove a pane. If it was on screen, another pane is shown at once.
    pub fn remove_pane(&mut self, identifier: &PaneIdentifier) -> Result<Option<ActivationOutcome>> {
        self.registry.remove(identifier)?;
        let outcome = self
            .engine
            .pane_removed(&self.registry, &mut self.window, identifier)?;
        self.refresh_chrome();
        if let Some(outcome) = &outcome {
            self.handle_outcome(outcome);
        }
        tracing::info!(pane = %identifier, panes = self.registry.len(), "Removed pane");
        Ok(outcome)
    }

    pub fn discard_view(&mut self, identifier: &PaneIdentifier) -> bool {
        self.engine.discard_view(identifier)
    }

    // === Policies ===

    pub fn set_hides_toolbar_for_single_pane(&mut self, hides: bool) {
        self.options.hides_toolbar_for_single_pane = hides;
        self.apply_chrome_policy();
    }

    pub fn set_animated(&mut self, animated: bool) {
        self.options.animated = animated;
        self.engine.set_animated(animated);
    }

    // === Accessors ===

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    pub fn registry(&self) -> &PaneRegistry {
        &self.registry
    }

    pub fn state(&self) -> ActivationState {
        self.engine.state()
    }

    pub fn active_pane(&self) -> Option<&PaneIdentifier> {
        self.engine.active_pane()
    }

    pub fn is_transitioning(&self) -> bool {
        self.engine.is_transitioning()
    }

    pub fn is_view_loaded(&self, identifier: &PaneIdentifier) -> bool {
        self.engine.is_view_loaded(identifier)
    }

    pub fn style(&self) -> Style {
        self.navigation.style()
    }

    pub fn options(&self) -> &SettingsWindowOptions {
        &self.options
    }

    fn handle_outcome(&mut self, outcome: &ActivationOutcome) {
        match outcome {
            ActivationOutcome::Activated { index, .. } => {
                self.navigation
                    .reflect_selection(&self.registry, *index, &mut self.window);
                self.update_title();
                self.window.set_interaction_enabled(true);
                self.save_frame(&self.window.frame());
            }
            ActivationOutcome::Transitioning { .. } => {
                self.window.set_interaction_enabled(false);
            }
            ActivationOutcome::Queued { .. } | ActivationOutcome::Unchanged => {}
        }
    }

    fn refresh_chrome(&mut self) {
        self.navigation.install(&self.registry, &mut self.window);
        self.apply_chrome_policy();
    }

    fn apply_chrome_policy(&mut self) {
        let count = self.registry.len();
        self.window.set_toolbar_visible(toolbar_visible(
            self.options.hides_toolbar_for_single_pane,
            count,
        ));
        self.window
            .set_title_visible(self.navigation.title_visible(count));
        self.update_title();
    }

    fn update_title(&mut self) {
        let active = self
            .engine
            .active_pane()
            .and_then(|identifier| self.registry.get(identifier));

        let title = match active {
            Some(pane) if self.registry.len() > 1 => pane.title().to_string(),
            _ => format!("{} Settings", self.options.app_name),
        };
        self.window.set_title(&title);
    }

    fn save_frame(&self, frame: &Frame) {
        if let Err(e) = self.frames.save(frame) {
            tracing::warn!(error = %e, "Failed to persist window frame");
        }
    }
}
