//! Switching state machine

use serde::Serialize;

use prefs_panes::PaneIdentifier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchPhase {
    /// Nothing shown yet
    Empty,
    /// A pane is shown and no animation is running
    Idle { active: PaneIdentifier },
    /// The window is animating from one pane to another
    Transitioning {
        from: PaneIdentifier,
        to: PaneIdentifier,
        generation: u64,
    },
}

impl SwitchPhase {
    /// Check if transition to another phase is valid
    pub fn can_transition_to(&self, target: &SwitchPhase) -> bool {
        match (self, target) {
            // The first pane is always displayed without animation
            (SwitchPhase::Empty, SwitchPhase::Idle { .. }) => true,
            (SwitchPhase::Idle { .. }, SwitchPhase::Idle { .. }) => true,
            (SwitchPhase::Idle { .. }, SwitchPhase::Transitioning { .. }) => true,
            (SwitchPhase::Transitioning { .. }, SwitchPhase::Idle { .. }) => true,
            // Reset after the shown pane was removed
            (SwitchPhase::Idle { .. }, SwitchPhase::Empty) => true,
            (SwitchPhase::Transitioning { .. }, SwitchPhase::Empty) => true,
            (SwitchPhase::Empty, SwitchPhase::Empty) => true,
            // No overlapping animations
            _ => false,
        }
    }

    /// Pane recorded as active. During a transition this is still the pane
    /// being left; the active pane only changes once the transition settles.
    pub fn active(&self) -> Option<&PaneIdentifier> {
        match self {
            SwitchPhase::Empty => None,
            SwitchPhase::Idle { active } => Some(active),
            SwitchPhase::Transitioning { from, .. } => Some(from),
        }
    }

    /// Pane whose content is currently in the window
    pub fn displayed(&self) -> Option<&PaneIdentifier> {
        match self {
            SwitchPhase::Empty => None,
            SwitchPhase::Idle { active } => Some(active),
            SwitchPhase::Transitioning { to, .. } => Some(to),
        }
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self, SwitchPhase::Transitioning { .. })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SwitchPhase::Empty => "empty",
            SwitchPhase::Idle { .. } => "idle",
            SwitchPhase::Transitioning { .. } => "transitioning",
        }
    }
}

impl std::fmt::Display for SwitchPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snapshot of the engine's activation state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivationState {
    pub active_pane: Option<PaneIdentifier>,
    pub is_animated: bool,
    pub is_in_transition: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle(id: &str) -> SwitchPhase {
        SwitchPhase::Idle {
            active: PaneIdentifier::new(id),
        }
    }

    fn transitioning(from: &str, to: &str) -> SwitchPhase {
        SwitchPhase::Transitioning {
            from: PaneIdentifier::new(from),
            to: PaneIdentifier::new(to),
            generation: 1,
        }
    }

    #[test]
    fn test_valid_transitions() {
        assert!(SwitchPhase::Empty.can_transition_to(&idle("a")));
        assert!(idle("a").can_transition_to(&idle("b")));
        assert!(idle("a").can_transition_to(&transitioning("a", "b")));
        assert!(transitioning("a", "b").can_transition_to(&idle("b")));
        assert!(transitioning("a", "b").can_transition_to(&SwitchPhase::Empty));
    }

    #[test]
    fn test_invalid_transitions() {
        // First display never animates
        assert!(!SwitchPhase::Empty.can_transition_to(&transitioning("a", "b")));
        // No overlapping animations
        assert!(!transitioning("a", "b").can_transition_to(&transitioning("b", "c")));
    }

    #[test]
    fn test_active_and_displayed() {
        let phase = transitioning("a", "b");
        assert_eq!(phase.active().map(PaneIdentifier::as_str), Some("a"));
        assert_eq!(phase.displayed().map(PaneIdentifier::as_str), Some("b"));
        assert!(phase.is_transitioning());

        assert_eq!(SwitchPhase::Empty.active(), None);
        assert_eq!(idle("a").to_string(), "idle");
    }
}
