//! Lighting plugin (Firefly) (render-only).
//!
//! The player carries a lamp that turns red while knocked back and shrinks
//! away during the death slide. Every enemy blocks light.

use bevy::prelude::*;
use bevy_firefly::prelude::*;

use crate::common::body::{Body, screen_to_world};
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::enemies::Enemy;
use crate::plugins::player::{Player, PlayerState};

const LAMP_RANGE: f32 = 900.0;
const LAMP_COLOR: Color = Color::srgb(1.0, 0.9, 0.75);
const HURT_COLOR: Color = Color::srgb(1.0, 0.35, 0.3);

#[derive(Component)]
pub struct PlayerLamp;

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(OnEnter(GameState::Running), spawn_lamp)
        .add_systems(PostUpdate, (carry_lamp, attach_enemy_occluders));
}

fn spawn_lamp(mut commands: Commands) {
    commands.spawn((
        Name::new("PlayerLamp"),
        PlayerLamp,
        PointLight2d {
            color: LAMP_COLOR,
            radius: LAMP_RANGE,
            ..default()
        },
        Transform::default(),
    ));
}

/// Colour and range of the lamp for a given player state.
fn lamp_for(state: PlayerState, death_frames: u32) -> (Color, f32) {
    match state {
        PlayerState::Normal => (LAMP_COLOR, LAMP_RANGE),
        PlayerState::Hit { .. } => (HURT_COLOR, LAMP_RANGE),
        PlayerState::Dead { frames_left } => {
            let t = frames_left as f32 / death_frames.max(1) as f32;
            (HURT_COLOR, LAMP_RANGE * t.clamp(0.0, 1.0))
        }
    }
}

fn carry_lamp(
    tunables: Res<Tunables>,
    q_player: Query<(&Body, &PlayerState), With<Player>>,
    mut q_lamp: Query<(&mut Transform, &mut PointLight2d), With<PlayerLamp>>,
) {
    let Ok((body, state)) = q_player.single() else {
        return;
    };
    let Ok((mut tf, mut light)) = q_lamp.single_mut() else {
        return;
    };

    let pos = screen_to_world(body.rect(), tunables.screen);
    tf.translation.x = pos.x;
    tf.translation.y = pos.y;

    let (color, range) = lamp_for(*state, tunables.death_frames);
    light.color = color;
    light.radius = range;
}

/// Enemies block light with a circle inscribed in their sprite.
fn attach_enemy_occluders(mut commands: Commands, q: Query<(Entity, &Enemy), Added<Enemy>>) {
    for (e, enemy) in &q {
        let size = enemy.kind.stats().size;
        let radius = size.x.min(size.y) as f32 * 0.5;
        commands.entity(e).insert(Occluder2d::circle(radius));
    }
}
