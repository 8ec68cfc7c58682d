//! Test helpers.
//!
//! Systems that use `Commands` enqueue structural changes. We call `world.flush()`
//! after running so queued commands are applied before assertions.

use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

use crate::common::rng::GameRng;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::fx::ScreenShake;
use crate::plugins::player::Scoreboard;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// A world holding every resource the simulation systems read.
pub fn sim_world() -> World {
    let mut world = World::new();
    let tunables = Tunables::default();
    world.insert_resource(Scoreboard::new(tunables.starting_lives));
    world.insert_resource(tunables);
    world.insert_resource(GameRng::from_seed(Some(7)));
    world.insert_resource(ScreenShake::default());
    world.insert_resource(State::new(GameState::Running));
    world.init_resource::<NextState<GameState>>();
    world
}
