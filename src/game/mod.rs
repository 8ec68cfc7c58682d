//! Game composition root.
//!
//! Provides two public configuration functions:
//! - `configure_full`: includes DefaultPlugins (window/render) + game plugins.
//! - `configure_headless`: minimal configuration for integration tests.

use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins;

pub fn run() -> AppExit {
    App::new().add_plugins(configure_full).run()
}

/// Full configuration for `cargo run`.
pub fn configure_full(app: &mut App) {
    app.init_resource::<Tunables>();
    let tunables = app.world().resource::<Tunables>().clone();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: tunables.title.clone(),
            resolution: WindowResolution::new(tunables.screen.x, tunables.screen.y),
            resizable: false,
            ..default()
        }),
        ..default()
    }));

    configure_game(app);
    plugins::register_render(app);
}

/// Headless configuration for integration tests.
///
/// Notes:
/// - Do NOT add DefaultPlugins.
/// - Do NOT add render-only plugins (Firefly/camera/HUD).
pub fn configure_headless(app: &mut App) {
    configure_game(app);
}

/// Configuration shared by both full and headless apps.
fn configure_game(app: &mut App) {
    app.init_state::<GameState>();
    plugins::register_gameplay(app);
}
