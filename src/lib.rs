//! Combat & Dodge: a fixed-step 2D arcade game on Bevy.
//!
//! `game` builds the app, `common` holds shared types (bodies, tunables,
//! phases, rng) and `plugins` one folder per gameplay or render concern.

pub mod common;
pub mod game;
pub mod plugins;
