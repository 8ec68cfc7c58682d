//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `combat_dodge::game::configure_headless` to install gameplay plugins.
//!
//! Tests drive the simulation one frame at a time with `frame` instead of
//! relying on wall-clock time to trigger `FixedUpdate`.

#![allow(dead_code)]

use bevy::input::InputPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::state::state::StateTransition;

use combat_dodge::common::body::Body;
use combat_dodge::common::tunables::Tunables;
use combat_dodge::plugins::enemies::{Enemy, EnemyKind, PendingDespawn};
use combat_dodge::plugins::player::Player;

pub fn app_headless() -> App {
    app_with(Tunables::default())
}

pub fn app_with(tunables: Tunables) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, InputPlugin));
    app.insert_resource(Tunables {
        rng_seed: Some(0x5EED),
        ..tunables
    });

    combat_dodge::game::configure_headless(&mut app);

    // Startup + initial OnEnter(Running).
    app.update();
    app
}

/// One simulation frame: phase transition, input sampling, fixed step, cleanup.
pub fn frame(app: &mut App) {
    let world = app.world_mut();
    world.run_schedule(StateTransition);
    world.run_schedule(Update);
    world.run_schedule(FixedUpdate);
    world.run_schedule(PostUpdate);
}

pub fn frames(app: &mut App, n: usize) {
    for _ in 0..n {
        frame(app);
    }
}

pub fn player(app: &mut App) -> Entity {
    app.world_mut()
        .query_filtered::<Entity, With<Player>>()
        .single(app.world())
        .expect("exactly one player")
}

pub fn spawn_enemy(app: &mut App, kind: EnemyKind, pos: Vec2, id: u64) -> Entity {
    app.world_mut()
        .spawn((Enemy::new(kind, id), Body::new(pos, kind.stats().size)))
        .id()
}

/// Enemies still in play (not marked for removal).
pub fn live_enemies(app: &mut App) -> Vec<(Enemy, Body)> {
    app.world_mut()
        .query_filtered::<(&Enemy, &Body), Without<PendingDespawn>>()
        .iter(app.world())
        .map(|(e, b)| (e.clone(), *b))
        .collect()
}
