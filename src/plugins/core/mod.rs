//! Core plugin: shared resources, the fixed timestep and frame ordering.

use bevy::prelude::*;

use crate::common::rng::GameRng;
use crate::common::state::StepSet;
use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    // Callers may insert their own Tunables before the game plugins.
    app.init_resource::<Tunables>();
    let tunables = app.world().resource::<Tunables>().clone();

    app.insert_resource(Time::<Fixed>::from_hz(tunables.fixed_hz));
    app.insert_resource(GameRng::from_seed(tunables.rng_seed));
    app.insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)));

    app.configure_sets(
        FixedUpdate,
        (
            StepSet::Player,
            StepSet::Enemies,
            StepSet::Spawner,
            StepSet::Aftermath,
        )
            .chain(),
    );
}
