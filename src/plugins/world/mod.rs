//! World plugin: the playfield backdrop (render-only).

use bevy::prelude::*;

use crate::common::body::screen_to_world;
use crate::common::layers::Layer;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;

const TILE: i32 = 50;

#[derive(Component, Debug, Clone, Copy)]
pub struct BackdropTile;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Running), spawn_backdrop);
}

/// Cover the playfield with a subtle checkerboard of solid-colour sprites.
fn spawn_backdrop(mut commands: Commands, tunables: Res<Tunables>) {
    let cols = (tunables.screen.x as i32 + TILE - 1) / TILE;
    let rows = (tunables.screen.y as i32 + TILE - 1) / TILE;

    (0..rows)
        .flat_map(|y| (0..cols).map(move |x| (x, y)))
        .for_each(|(x, y)| {
            let min = IVec2::new(x * TILE, y * TILE);
            let rect = IRect::from_corners(min, min + IVec2::splat(TILE));
            let world_pos = screen_to_world(rect, tunables.screen).extend(Layer::Backdrop.z());

            let color = if (x + y) % 2 == 0 {
                Color::srgb(0.14, 0.14, 0.16)
            } else {
                Color::srgb(0.12, 0.12, 0.14)
            };

            commands.spawn((
                BackdropTile,
                Sprite::from_color(color, Vec2::splat(TILE as f32)),
                Transform::from_translation(world_pos),
            ));
        });
}
