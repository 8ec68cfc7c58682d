//! Feature plugins.

use bevy::prelude::*;

pub mod core;
pub mod enemies;
pub mod fx;
pub mod player;

// Render-only
pub mod camera;
pub mod lighting;
pub mod ui;
pub mod world;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    fx::plugin(app);
    player::plugin(app);
    enemies::plugin(app);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    world::plugin(app);
    camera::plugin(app);
    lighting::plugin(app);
    ui::plugin(app);
}
