//! The single random source of the game (spawn kind, spawn height, shake).

use bevy::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Resource, Debug, Clone)]
pub struct GameRng(pub SmallRng);

impl GameRng {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(SmallRng::seed_from_u64(seed)),
            None => Self(SmallRng::from_os_rng()),
        }
    }
}
