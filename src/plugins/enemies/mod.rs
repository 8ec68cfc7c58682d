//! Enemies plugin: spawning, the launch ramp, spin, hit-stun and the two ways
//! out (killed or escaped off the left edge).
//!
//! ---------------------------
//! HOW THIS IS DESIGNED (ECS)
//! ---------------------------
//! 1) FACTS live in components/resources:
//!    - `Enemy` (kind, speed, health, hit-stun, angle, spawn id) and `Body`
//!      (float position + pixel size) describe gameplay reality.
//!    - `Spawner` is the spawn countdown, `Scoreboard` the score and lives.
//!
//! 2) RULES mutate facts in one place per frame:
//!    - the player step (elsewhere) applies swing hits via `Enemy::take_hit`.
//!    - `step_enemies` ramps, moves, spins and decides removals.
//!
//! 3) PRESENTATION is derived from facts:
//!    - sprite colour/rotation from `Enemy::look`.
//!
//! Removal is never immediate: the fixed step marks `PendingDespawn` and every
//! rule skips marked enemies; `despawn_marked_enemies` compacts in PostUpdate.

use bevy::prelude::*;
use rand::Rng;

use crate::common::body::{Body, screen_to_world};
use crate::common::layers::Layer;
use crate::common::rng::GameRng;
use crate::common::state::{GameState, StepSet};
use crate::common::tunables::Tunables;
use crate::plugins::fx::ScreenShake;
use crate::plugins::player::Scoreboard;

mod kind;

pub use kind::{EnemyKind, KindStats};

// -----------------------------------------------------------------------------
// Components
// -----------------------------------------------------------------------------

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Enemy {
    pub kind: EnemyKind,
    /// Pixels per frame toward the left edge. Can go negative after a stagger.
    pub speed: f32,
    pub health: i32,
    pub hit_stun: u32,
    /// Degrees, in `[0, 360)`.
    pub angle: f32,
    /// Order of creation; the lowest id wins ties between overlapping targets.
    pub spawn_id: u64,
}

/// How an enemy should be drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyLook {
    pub flashed: bool,
    /// Rotation in degrees for kinds that spin.
    pub angle: Option<f32>,
}

impl Enemy {
    pub fn new(kind: EnemyKind, spawn_id: u64) -> Self {
        Self {
            kind,
            speed: 0.0,
            health: kind.stats().health,
            hit_stun: 0,
            angle: 0.0,
            spawn_id,
        }
    }

    /// Alive enemies take swing hits and hurt the player. Dead ones only
    /// finish their hit flash before being removed.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// One point of damage plus the stagger: `speed - speed * 3`. This can
    /// reverse the enemy for a few frames.
    pub fn take_hit(&mut self, stun_frames: u32) {
        self.health -= 1;
        self.speed -= self.speed * 3.0;
        self.hit_stun = stun_frames;
    }

    /// Speed ramp, spin and hit-stun countdown for one frame.
    pub fn advance(&mut self, rotation_step: f32) {
        let stats = self.kind.stats();
        self.speed = (self.speed + stats.base_speed).min(stats.speed_cap);

        if stats.rotates {
            self.angle = (self.angle + rotation_step).rem_euclid(360.0);
        }

        if self.hit_stun > 0 {
            self.hit_stun -= 1;
        }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.health <= 0 && self.hit_stun == 0
    }

    pub fn look(&self) -> EnemyLook {
        EnemyLook {
            flashed: self.hit_stun > 0,
            angle: self.kind.stats().rotates.then_some(self.angle),
        }
    }
}

/// Marker: enemy should be removed from the world.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingDespawn;

// -----------------------------------------------------------------------------
// Spawner
// -----------------------------------------------------------------------------

#[derive(Resource, Debug, Clone)]
pub struct Spawner {
    remaining: u32,
    interval: u32,
    next_id: u64,
}

impl Spawner {
    pub fn new(interval: u32) -> Self {
        Self {
            remaining: interval,
            interval,
            next_id: 0,
        }
    }

    #[inline]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn set_remaining(&mut self, frames: u32) {
        self.remaining = frames;
    }

    /// Count down one frame. Returns `true` when an enemy is due; the
    /// countdown is then back at its maximum.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.remaining = self.interval;
            return true;
        }
        false
    }

    pub fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

// -----------------------------------------------------------------------------
// Plugin wiring
// -----------------------------------------------------------------------------

/// Register enemy systems.
///
/// Schedules:
/// - FixedUpdate: enemies step in both phases; the spawner only while the
///   player still has lives.
/// - PostUpdate: sprites and structural cleanup.
pub fn plugin(app: &mut App) {
    let interval = app.world().resource::<Tunables>().spawn_interval;
    app.insert_resource(Spawner::new(interval));

    app.add_systems(FixedUpdate, step_enemies.in_set(StepSet::Enemies));
    app.add_systems(
        FixedUpdate,
        tick_spawner
            .in_set(StepSet::Spawner)
            .run_if(in_state(GameState::Running)),
    );

    app.add_systems(PostUpdate, (sync_enemy_sprites, despawn_marked_enemies));
}

// -----------------------------------------------------------------------------
// Spawn
// -----------------------------------------------------------------------------

pub fn spawn_enemy(
    commands: &mut Commands,
    tunables: &Tunables,
    kind: EnemyKind,
    pos: Vec2,
    spawn_id: u64,
) -> Entity {
    let stats = kind.stats();
    let body = Body::new(pos, stats.size);

    commands
        .spawn((
            Name::new(format!("{kind:?}#{spawn_id}")),
            Enemy::new(kind, spawn_id),
            body,
            Sprite {
                color: stats.color,
                custom_size: Some(stats.size.as_vec2()),
                ..default()
            },
            Transform::from_translation(
                screen_to_world(body.rect(), tunables.screen).extend(Layer::Enemy.z()),
            ),
        ))
        .id()
}

/// Spawn one enemy of a random kind at the right edge when the countdown expires.
pub fn tick_spawner(
    mut commands: Commands,
    tunables: Res<Tunables>,
    board: Res<Scoreboard>,
    mut spawner: ResMut<Spawner>,
    mut rng: ResMut<GameRng>,
) {
    if board.is_out() || !spawner.tick() {
        return;
    }

    let kind = EnemyKind::ALL[rng.0.random_range(0..EnemyKind::ALL.len())];
    let y = rng.0.random_range(0..tunables.screen.y) as f32;
    let pos = Vec2::new(tunables.screen.x as f32, y);
    let id = spawner.take_id();

    spawn_enemy(&mut commands, &tunables, kind, pos, id);
    debug!("spawned {kind:?}#{id} at y={y}");
}

// -----------------------------------------------------------------------------
// Rules
// -----------------------------------------------------------------------------

/// Move every live enemy and apply the removal rules.
///
/// - killed: health <= 0 once hit-stun has run out; awards the kind's score.
/// - escaped: right edge left of the playfield; costs a life unless the enemy
///   was still stunned or the game is already lost.
pub fn step_enemies(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut board: ResMut<Scoreboard>,
    mut shake: ResMut<ScreenShake>,
    mut q: Query<(Entity, &mut Enemy, &mut Body), Without<PendingDespawn>>,
) {
    for (e, mut enemy, mut body) in &mut q {
        let stunned = enemy.hit_stun > 0;

        enemy.advance(tunables.rotation_step);
        body.pos.x -= enemy.speed;

        if enemy.is_finished() {
            board.score += enemy.kind.stats().score;
            commands.entity(e).insert(PendingDespawn);
            debug!("{:?}#{} destroyed, score {}", enemy.kind, enemy.spawn_id, board.score);
            continue;
        }

        if body.rect().max.x < 0 {
            commands.entity(e).insert(PendingDespawn);

            if tunables.escape_costs_life && !stunned && !board.is_out() {
                if board.lose_life() {
                    info!("last life lost to an escaping {:?}", enemy.kind);
                }
                shake.trigger(tunables.escape_shake);
                debug!("{:?}#{} escaped, {} lives left", enemy.kind, enemy.spawn_id, board.lives);
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Presentation
// -----------------------------------------------------------------------------

/// How far the hit flash pushes the base colour toward white.
const FLASH_MIX: f32 = 0.75;

fn sync_enemy_sprites(
    tunables: Res<Tunables>,
    mut q: Query<(&Enemy, &Body, &mut Sprite, &mut Transform), Without<PendingDespawn>>,
) {
    for (enemy, body, mut sprite, mut tf) in &mut q {
        let pos = screen_to_world(body.rect(), tunables.screen);
        tf.translation.x = pos.x;
        tf.translation.y = pos.y;

        let look = enemy.look();
        if let Some(angle) = look.angle {
            tf.rotation = Quat::from_rotation_z(angle.to_radians());
        }

        let base = enemy.kind.stats().color;
        sprite.color = if look.flashed {
            let mut c = base.to_srgba();
            c.red += (1.0 - c.red) * FLASH_MIX;
            c.green += (1.0 - c.green) * FLASH_MIX;
            c.blue += (1.0 - c.blue) * FLASH_MIX;
            c.into()
        } else {
            base
        };
    }
}

// -----------------------------------------------------------------------------
// Cleanup (PostUpdate)
// -----------------------------------------------------------------------------

/// Despawn enemies marked for removal.
pub fn despawn_marked_enemies(mut commands: Commands, q: Query<Entity, With<PendingDespawn>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}

#[cfg(test)]
mod tests;
