//! Action routing
//!
//! When the host asks "who handles this action?", providers are consulted
//! in a fixed order: the settings window itself, then the pane on screen,
//! then that pane's supplemental responder. The first one that answers wins.

use std::collections::HashSet;

use prefs_panes::{ActionResponder, ContentView, PaneIdentifier};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponderTarget {
    Window,
    Pane(PaneIdentifier),
    PaneDelegate(PaneIdentifier),
}

enum Provider<'a> {
    Window(&'a HashSet<String>),
    Pane(&'a PaneIdentifier, &'a dyn ContentView),
    Delegate(&'a PaneIdentifier, &'a dyn ActionResponder),
}

impl Provider<'_> {
    fn answer(&self, action: &str) -> Option<ResponderTarget> {
        match self {
            Provider::Window(actions) => actions
                .contains(action)
                .then_some(ResponderTarget::Window),
            Provider::Pane(pane, view) => view
                .responds_to(action)
                .then(|| ResponderTarget::Pane((*pane).clone())),
            Provider::Delegate(pane, responder) => responder
                .responds_to(action)
                .then(|| ResponderTarget::PaneDelegate((*pane).clone())),
        }
    }
}

pub(crate) struct ResponderChain<'a> {
    providers: Vec<Provider<'a>>,
}

impl<'a> ResponderChain<'a> {
    pub(crate) fn new(
        window_actions: &'a HashSet<String>,
        displayed: Option<(&'a PaneIdentifier, &'a dyn ContentView)>,
    ) -> Self {
        let mut providers = vec![Provider::Window(window_actions)];

        if let Some((pane, view)) = displayed {
            providers.push(Provider::Pane(pane, view));
            if let Some(delegate) = view.supplemental_responder() {
                providers.push(Provider::Delegate(pane, delegate));
            }
        }

        Self { providers }
    }

    pub(crate) fn target_for_action(&self, action: &str) -> Option<ResponderTarget> {
        self.providers
            .iter()
            .find_map(|provider| provider.answer(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prefs_panes::{Size, StaticView};
    use std::any::Any;

    struct Clipboard;

    impl ActionResponder for Clipboard {
        fn responds_to(&self, action: &str) -> bool {
            action == "copy" || action == "paste"
        }
    }

    struct EditorPane {
        delegate: Clipboard,
    }

    impl ContentView for EditorPane {
        fn preferred_size(&self) -> Size {
            Size::new(400.0, 300.0)
        }

        fn responds_to(&self, action: &str) -> bool {
            action == "paste"
        }

        fn supplemental_responder(&self) -> Option<&dyn ActionResponder> {
            Some(&self.delegate)
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_chain_order() {
        let window_actions: HashSet<String> = ["close".to_string()].into_iter().collect();
        let pane = PaneIdentifier::new("editor");
        let view = EditorPane { delegate: Clipboard };
        let chain = ResponderChain::new(&window_actions, Some((&pane, &view)));

        assert_eq!(chain.target_for_action("close"), Some(ResponderTarget::Window));
        // The pane answers before its delegate
        assert_eq!(
            chain.target_for_action("paste"),
            Some(ResponderTarget::Pane(pane.clone()))
        );
        assert_eq!(
            chain.target_for_action("copy"),
            Some(ResponderTarget::PaneDelegate(pane.clone()))
        );
        assert_eq!(chain.target_for_action("print"), None);
    }

    #[test]
    fn test_chain_without_pane() {
        let window_actions = HashSet::new();
        let chain = ResponderChain::new(&window_actions, None);
        assert_eq!(chain.target_for_action("copy"), None);
    }

    #[test]
    fn test_pane_without_delegate() {
        let window_actions = HashSet::new();
        let pane = PaneIdentifier::new("general");
        let view = StaticView::new("General", Size::new(1.0, 1.0)).with_action("reset");
        let chain = ResponderChain::new(&window_actions, Some((&pane, &view)));

        assert_eq!(
            chain.target_for_action("reset"),
            Some(ResponderTarget::Pane(pane))
        );
    }
}
