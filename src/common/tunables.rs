//! Tunable gameplay constants.
//!
//! All timers are counted in fixed-step frames (60 per second), all distances in
//! screen pixels with the origin at the top-left corner and y pointing down.

use bevy::prelude::*;

/// Shake request: how long and how far the camera jitters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShakePreset {
    pub frames: u32,
    pub intensity: f32,
}

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub title: String,
    pub screen: UVec2,
    pub fixed_hz: f64,

    pub player_size: IVec2,
    pub player_start: Vec2,
    /// Velocity added per frame while a direction key is held.
    pub player_speed: f32,
    /// Velocity multiplier applied every frame.
    pub damping: f32,
    pub swing_frames: u32,
    pub hitbox_size: IVec2,
    pub hit_frames: u32,
    pub death_frames: u32,
    pub knockback: Vec2,
    pub starting_lives: u32,

    pub spawn_interval: u32,
    pub enemy_hit_stun: u32,
    /// Degrees per frame for kinds that spin.
    pub rotation_step: f32,
    /// An enemy that leaves the left edge costs the player a life.
    pub escape_costs_life: bool,

    pub swing_shake: ShakePreset,
    pub player_hit_shake: ShakePreset,
    pub escape_shake: ShakePreset,
    pub death_shake: ShakePreset,

    pub rng_seed: Option<u64>,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            title: "Combat & Dodge".into(),
            screen: UVec2::new(1000, 800),
            fixed_hz: 60.0,

            player_size: IVec2::new(48, 48),
            player_start: Vec2::new(100.0, 376.0),
            player_speed: 3.0,
            damping: 0.65,
            swing_frames: 15,
            hitbox_size: IVec2::new(40, 24),
            hit_frames: 30,
            death_frames: 120,
            knockback: Vec2::new(-18.0, 0.0),
            starting_lives: 3,

            spawn_interval: 200,
            enemy_hit_stun: 10,
            rotation_step: 5.0,
            escape_costs_life: true,

            swing_shake: ShakePreset { frames: 8, intensity: 4.0 },
            player_hit_shake: ShakePreset { frames: 20, intensity: 10.0 },
            escape_shake: ShakePreset { frames: 12, intensity: 6.0 },
            death_shake: ShakePreset { frames: 2, intensity: 8.0 },

            rng_seed: None,
        }
    }
}
