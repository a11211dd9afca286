//! Prefs demo
//!
//! Drives a settings window against the headless toolkit: shows it,
//! switches panes the way a toolbar click would, and prints the resulting
//! state. Run it twice to see the last pane and frame restored.
//!
//! Set `PREFS_CONFIG` to a JSON file to override the defaults.

mod panes;

use anyhow::Context;

use prefs_core::{
    ActivationOutcome, Config, HeadlessWindow, NavigationEvent, PaneIdentifier, SettingsWindow,
    SettingsWindowOptions,
};

fn load_config() -> anyhow::Result<Config> {
    match std::env::var("PREFS_CONFIG") {
        Ok(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config file {}", path))?;
            Ok(Config::from_json(&json)?)
        }
        Err(_) => Ok(Config::default()),
    }
}

fn main() -> anyhow::Result<()> {
    prefs_core::init_logging();

    let config = load_config()?;
    let store = prefs_core::open_store(&config);

    let mut window = SettingsWindow::new(
        panes::all(),
        SettingsWindowOptions::from_config(&config),
        HeadlessWindow::default(),
        store,
    )?;
    window.register_window_action("close");

    window.show(None, true)?;
    tracing::info!(pane = ?window.active_pane(), "Settings window shown");

    // Click whichever pane is not showing
    let next = window
        .registry()
        .iter()
        .map(|pane| pane.identifier().clone())
        .find(|identifier| Some(identifier) != window.active_pane())
        .unwrap_or_else(|| PaneIdentifier::new("general"));

    let click = NavigationEvent::ToolbarItemClicked(next);
    if let Some(ActivationOutcome::Transitioning { generation, .. }) =
        window.handle_navigation_event(&click)?
    {
        // The headless window finishes animations immediately
        window.transition_finished(generation)?;
    }

    for action in ["close", "reset-advanced", "paste", "print"] {
        tracing::info!(
            action,
            target = ?window.target_for_action(action),
            "Responder lookup"
        );
    }

    let state = serde_json::to_string_pretty(&window.state())?;
    println!("{}", state);
    println!("title: {}", window.window().title());

    Ok(())
}
