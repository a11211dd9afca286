//! Panes shown by the demo window

use std::any::Any;

use prefs_core::{
    ActionResponder, ContentView, Icon, PaneConvertible, PaneDescriptor, SettingsPane, Size,
};

/// Text field helper that can copy and paste on behalf of its pane
struct FieldEditor;

impl ActionResponder for FieldEditor {
    fn responds_to(&self, action: &str) -> bool {
        matches!(action, "copy" | "paste" | "select-all")
    }
}

struct AdvancedView {
    editor: FieldEditor,
}

impl ContentView for AdvancedView {
    fn preferred_size(&self) -> Size {
        Size::new(480.0, 460.0)
    }

    fn responds_to(&self, action: &str) -> bool {
        action == "reset-advanced"
    }

    fn supplemental_responder(&self) -> Option<&dyn ActionResponder> {
        Some(&self.editor)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub fn all() -> Vec<PaneDescriptor> {
    vec![
        SettingsPane::new("general", "General")
            .icon(Icon::named("gearshape"))
            .content_size(480.0, 280.0)
            .handles("reset-general")
            .into_pane_descriptor(),
        PaneDescriptor::new("advanced", "Advanced", Icon::named("slider.horizontal.3"), || {
            Box::new(AdvancedView {
                editor: FieldEditor,
            })
        }),
    ]
}
