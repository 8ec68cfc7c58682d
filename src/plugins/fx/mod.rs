//! Screen shake.
//!
//! Producers (attack hits, player hits, escapes, the death animation) write
//! intent into `ScreenShake`. The fixed step counts it down; `apply_shake` is
//! the only writer of the camera offset.
//!
//! The camera never moves otherwise, so we remove last frame's offset before
//! applying the new one to keep the camera from drifting.

use bevy::prelude::*;
use rand::Rng;

use crate::common::rng::GameRng;
use crate::common::state::StepSet;
use crate::common::tunables::ShakePreset;

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct ScreenShake {
    frames_left: u32,
    intensity: f32,
}

impl ScreenShake {
    /// Start (or extend) a shake. A weaker request never cuts a stronger
    /// one short.
    pub fn trigger(&mut self, preset: ShakePreset) {
        self.frames_left = self.frames_left.max(preset.frames);
        self.intensity = self.intensity.max(preset.intensity);
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.frames_left > 0
    }

    #[inline]
    pub fn frames_left(&self) -> u32 {
        self.frames_left
    }

    #[inline]
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    fn tick(&mut self) {
        self.frames_left = self.frames_left.saturating_sub(1);
        if self.frames_left == 0 {
            self.intensity = 0.0;
        }
    }

    /// Random offset within `[-intensity, intensity]` on both axes.
    pub fn sample_offset(&self, rng: &mut impl Rng) -> Vec2 {
        if !self.is_active() || self.intensity <= 0.0 {
            return Vec2::ZERO;
        }
        let i = self.intensity;
        Vec2::new(rng.random_range(-i..=i), rng.random_range(-i..=i))
    }
}

/// Offset currently applied to the camera.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct ShakeOffset(pub Vec2);

/// Marker for the camera that receives the shake.
#[derive(Component, Debug, Clone, Copy)]
pub struct ShakeTarget;

pub fn plugin(app: &mut App) {
    app.insert_resource(ScreenShake::default());
    app.insert_resource(ShakeOffset::default());

    app.add_systems(FixedUpdate, tick_shake.in_set(StepSet::Aftermath));
    app.add_systems(PostUpdate, apply_shake.before(TransformSystems::Propagate));
}

fn tick_shake(mut shake: ResMut<ScreenShake>) {
    shake.tick();
}

fn apply_shake(
    shake: Res<ScreenShake>,
    mut rng: ResMut<GameRng>,
    mut applied: ResMut<ShakeOffset>,
    mut q_cam: Query<&mut Transform, With<ShakeTarget>>,
) {
    let offset = shake.sample_offset(&mut rng.0);

    for mut tf in &mut q_cam {
        tf.translation.x += offset.x - applied.0.x;
        tf.translation.y += offset.y - applied.0.y;
    }
    applied.0 = offset;
}
