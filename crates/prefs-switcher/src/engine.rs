//! Tab Switch Engine
//!
//! Owns the active pane and the cached pane views. Activations are
//! serialized: while an animated switch is in flight, further requests
//! collapse into a single pending target (last one wins) that is applied,
//! without animation, as soon as the in-flight switch completes.
//!
//! Completion is reported by the host with the generation that was handed
//! to [`NativeWindow::begin_transition`]. A completion whose generation no
//! longer matches is stale and ignored.

use std::collections::HashMap;
use std::time::Duration;

use prefs_panes::{ContentView, PaneDescriptor, PaneIdentifier, PaneRegistry, Size};

use crate::error::SwitchError;
use crate::last_pane::LastActivePaneStore;
use crate::state::{ActivationState, SwitchPhase};
use crate::window::{NativeWindow, Transition};
use crate::Result;

pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    pub animated: bool,
    pub animation_duration: Duration,
    pub crossfade: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            animated: true,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            crossfade: true,
        }
    }
}

/// What an activation request led to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivationOutcome {
    /// The pane is shown and recorded as active
    Activated { pane: PaneIdentifier, index: usize },
    /// An animated switch started; completion must be reported
    Transitioning { to: PaneIdentifier, generation: u64 },
    /// Parked behind the in-flight switch
    Queued { pending: PaneIdentifier },
    /// Nothing to do
    Unchanged,
}

pub struct TabSwitchEngine {
    phase: SwitchPhase,
    pending: Option<PaneIdentifier>,
    generation: u64,
    options: EngineOptions,
    views: HashMap<PaneIdentifier, Box<dyn ContentView>>,
    last_pane: LastActivePaneStore,
}

impl TabSwitchEngine {
    pub fn new(last_pane: LastActivePaneStore, options: EngineOptions) -> Self {
        Self {
            phase: SwitchPhase::Empty,
            pending: None,
            generation: 0,
            options,
            views: HashMap::new(),
            last_pane,
        }
    }

    /// Activate a pane by identifier.
    ///
    /// `animated` is ANDed with the engine's own animation flag; explicit
    /// navigation passes `false` so it feels instantaneous.
    pub fn activate(
        &mut self,
        registry: &PaneRegistry,
        window: &mut dyn NativeWindow,
        identifier: &PaneIdentifier,
        animated: bool,
    ) -> Result<ActivationOutcome> {
        let Some((index, descriptor)) = registry.find(identifier) else {
            tracing::warn!(pane = %identifier, "Activation requested for unknown pane");
            return Err(SwitchError::PaneNotFound(identifier.to_string()));
        };

        match &self.phase {
            SwitchPhase::Transitioning { to, .. } => {
                tracing::debug!(
                    pending = %identifier,
                    in_flight = %to,
                    "Coalescing activation behind in-flight transition"
                );
                self.pending = Some(identifier.clone());
                return Ok(ActivationOutcome::Queued {
                    pending: identifier.clone(),
                });
            }
            SwitchPhase::Idle { active } if active == identifier => {
                return Ok(ActivationOutcome::Unchanged);
            }
            _ => {}
        }

        let target_size = self.ensure_view(descriptor);
        let delta = target_size.delta_from(window.content_size());

        match self.phase.active().cloned() {
            Some(from) if animated && self.options.animated && !delta.is_zero() => {
                self.begin_transition(window, from, identifier, delta)
            }
            _ => self.display_immediately(window, identifier, index, delta),
        }
    }

    /// Show the persisted pane, or the first pane when nothing usable was
    /// persisted. Only has an effect before anything has been shown.
    pub fn restore_initial_tab(
        &mut self,
        registry: &PaneRegistry,
        window: &mut dyn NativeWindow,
    ) -> Result<ActivationOutcome> {
        if self.phase != SwitchPhase::Empty {
            return Ok(ActivationOutcome::Unchanged);
        }

        let first = registry.first().identifier().clone();
        let target = match self.last_pane.load() {
            Some(persisted) if registry.contains(&persisted) => persisted,
            Some(stale) => {
                tracing::info!(
                    pane = %stale,
                    fallback = %first,
                    "Persisted pane no longer exists, showing first pane"
                );
                first
            }
            None => first,
        };

        self.activate(registry, window, &target, false)
    }

    /// Called by the host when the animation for `generation` has finished.
    ///
    /// Returns `None` for stale completions.
    pub fn complete_transition(
        &mut self,
        registry: &PaneRegistry,
        window: &mut dyn NativeWindow,
        generation: u64,
    ) -> Result<Option<ActivationOutcome>> {
        let reached = match &self.phase {
            SwitchPhase::Transitioning {
                to,
                generation: current,
                ..
            } if *current == generation => to.clone(),
            _ => {
                tracing::debug!(generation, "Ignoring stale transition completion");
                return Ok(None);
            }
        };

        let pending = self.pending.take().filter(|p| *p != reached);
        if let Some(next) = pending {
            if registry.contains(&next) {
                // The reached pane is never settled; jump straight on
                self.set_phase(SwitchPhase::Idle {
                    active: reached.clone(),
                })?;
                tracing::debug!(from = %reached, to = %next, "Applying coalesced activation");
                return self.activate(registry, window, &next, false).map(Some);
            }
            tracing::warn!(pane = %next, "Dropping pending activation for removed pane");
        }

        let index = registry
            .index_of(&reached)
            .ok_or_else(|| SwitchError::PaneNotFound(reached.to_string()))?;
        self.settle(reached, index).map(Some)
    }

    /// React to a pane having been removed from `registry`.
    ///
    /// If the removed pane was shown (or being animated to) the in-flight
    /// generation is invalidated and the pending target, or else the first
    /// remaining pane, is shown immediately.
    pub fn pane_removed(
        &mut self,
        registry: &PaneRegistry,
        window: &mut dyn NativeWindow,
        removed: &PaneIdentifier,
    ) -> Result<Option<ActivationOutcome>> {
        self.views.remove(removed);
        if self.pending.as_ref() == Some(removed) {
            self.pending = None;
        }

        if self.phase.displayed() != Some(removed) {
            return Ok(None);
        }

        self.generation += 1;
        self.set_phase(SwitchPhase::Empty)?;

        let target = self
            .pending
            .take()
            .filter(|p| registry.contains(p))
            .unwrap_or_else(|| registry.first().identifier().clone());

        tracing::info!(removed = %removed, fallback = %target, "Shown pane was removed");

        self.activate(registry, window, &target, false).map(Some)
    }

    /// Drop a cached view so its factory runs again on next activation.
    /// The view currently on screen cannot be discarded.
    pub fn discard_view(&mut self, identifier: &PaneIdentifier) -> bool {
        if self.phase.displayed() == Some(identifier) {
            return false;
        }
        self.views.remove(identifier).is_some()
    }

    pub fn phase(&self) -> &SwitchPhase {
        &self.phase
    }

    pub fn state(&self) -> ActivationState {
        ActivationState {
            active_pane: self.phase.active().cloned(),
            is_animated: self.options.animated,
            is_in_transition: self.phase.is_transitioning(),
        }
    }

    pub fn active_pane(&self) -> Option<&PaneIdentifier> {
        self.phase.active()
    }

    pub fn pending(&self) -> Option<&PaneIdentifier> {
        self.pending.as_ref()
    }

    /// View currently in the window
    pub fn displayed_view(&self) -> Option<(&PaneIdentifier, &dyn ContentView)> {
        let pane = self.phase.displayed()?;
        self.views.get(pane).map(|view| (pane, view.as_ref()))
    }

    pub fn is_view_loaded(&self, identifier: &PaneIdentifier) -> bool {
        self.views.contains_key(identifier)
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase.is_transitioning()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_animated(&self) -> bool {
        self.options.animated
    }

    pub fn set_animated(&mut self, animated: bool) {
        self.options.animated = animated;
    }

    fn ensure_view(&mut self, descriptor: &PaneDescriptor) -> Size {
        self.views
            .entry(descriptor.identifier().clone())
            .or_insert_with(|| descriptor.make_view())
            .preferred_size()
    }

    fn begin_transition(
        &mut self,
        window: &mut dyn NativeWindow,
        from: PaneIdentifier,
        to: &PaneIdentifier,
        delta: Size,
    ) -> Result<ActivationOutcome> {
        self.generation += 1;
        let generation = self.generation;
        let target_frame = window.frame().resized_by(delta);

        self.set_phase(SwitchPhase::Transitioning {
            from: from.clone(),
            to: to.clone(),
            generation,
        })?;

        if let Some(view) = self.views.get(to) {
            window.begin_transition(Transition {
                pane: to,
                view: view.as_ref(),
                target_frame,
                duration: self.options.animation_duration,
                crossfade: self.options.crossfade,
                generation,
            });
        }

        tracing::debug!(from = %from, to = %to, generation, "Started pane transition");

        Ok(ActivationOutcome::Transitioning {
            to: to.clone(),
            generation,
        })
    }

    fn display_immediately(
        &mut self,
        window: &mut dyn NativeWindow,
        identifier: &PaneIdentifier,
        index: usize,
        delta: Size,
    ) -> Result<ActivationOutcome> {
        let target_frame = window.frame().resized_by(delta);

        if let Some(view) = self.views.get(identifier) {
            window.set_content(identifier, view.as_ref());
        }
        window.set_frame(target_frame);

        self.settle(identifier.clone(), index)
    }

    fn settle(&mut self, pane: PaneIdentifier, index: usize) -> Result<ActivationOutcome> {
        self.set_phase(SwitchPhase::Idle {
            active: pane.clone(),
        })?;
        self.pending = None;

        if let Err(e) = self.last_pane.save(&pane) {
            tracing::warn!(pane = %pane, error = %e, "Failed to persist last active pane");
        }

        tracing::info!(pane = %pane, index, "Activated pane");

        Ok(ActivationOutcome::Activated { pane, index })
    }

    fn set_phase(&mut self, next: SwitchPhase) -> Result<()> {
        if !self.phase.can_transition_to(&next) {
            return Err(SwitchError::InvalidTransition {
                from: self.phase.to_string(),
                to: next.to_string(),
            });
        }

        tracing::trace!(from = %self.phase, to = %next, "Switch phase change");
        self.phase = next;
        Ok(())
    }
}
