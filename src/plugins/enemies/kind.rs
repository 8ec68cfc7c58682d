//! Enemy type table.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    /// Spinning asteroid.
    Normal,
    Speedster,
    Giant,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindStats {
    /// Added to the current speed every frame.
    pub base_speed: f32,
    pub speed_cap: f32,
    pub health: i32,
    pub score: u32,
    pub size: IVec2,
    pub rotates: bool,
    pub color: Color,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Normal, EnemyKind::Speedster, EnemyKind::Giant];

    pub const fn stats(self) -> KindStats {
        match self {
            EnemyKind::Normal => KindStats {
                base_speed: 0.75,
                speed_cap: 3.0,
                health: 2,
                score: 1,
                size: IVec2::new(48, 48),
                rotates: true,
                color: Color::srgb(0.6, 0.55, 0.5),
            },
            EnemyKind::Speedster => KindStats {
                base_speed: 1.0,
                speed_cap: 5.0,
                health: 1,
                score: 2,
                size: IVec2::new(40, 28),
                rotates: false,
                color: Color::srgb(0.95, 0.8, 0.2),
            },
            EnemyKind::Giant => KindStats {
                base_speed: 0.25,
                speed_cap: 1.5,
                health: 4,
                score: 4,
                size: IVec2::new(96, 96),
                rotates: false,
                color: Color::srgb(0.9, 0.25, 0.25),
            },
        }
    }
}
