//! Camera plugin (render-only).
//!
//! The camera sits at the world origin, which is the centre of the
//! playfield, and only ever moves by the screen-shake offset.

use bevy::prelude::*;
use bevy_firefly::prelude::*;

use crate::common::layers::Layer;
use crate::common::state::GameState;
use crate::plugins::fx::ShakeTarget;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Running), spawn_camera);
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        ShakeTarget,
        FireflyConfig::default(),
        Transform::from_xyz(0.0, 0.0, Layer::Camera.z()),
    ));
}
