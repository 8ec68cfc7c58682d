//! Global state machine and fixed-step ordering.

use bevy::prelude::*;

/// Game phase. There is no way back from `GameOver`: the app exits once the
/// player's death animation has played out.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Running,
    GameOver,
}

/// Order of one simulation frame inside `FixedUpdate`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepSet {
    /// Input, attack swing, integration, body collision.
    Player,
    /// Speed ramp, movement, rotation, death/escape rules.
    Enemies,
    Spawner,
    /// Phase checks, death animation, shake countdown.
    Aftermath,
}
