//! Player plugin.
//!
//! Pipeline:
//! - Update: sample input, write `PlayerInput` resource
//! - FixedUpdate (`StepSet::Player`): input -> attack swing -> damping ->
//!   integration -> body collision
//! - FixedUpdate (`StepSet::Aftermath`): game-over check while running, death
//!   animation once the game is over
//! - PostUpdate: derive sprite transform/colour from the simulation
//!
//! The player is spawned once and never despawned. Being hit or dying only
//! changes its `PlayerState`.

use bevy::prelude::*;

use crate::common::body::{Body, overlaps, screen_to_world};
use crate::common::layers::Layer;
use crate::common::state::{GameState, StepSet};
use crate::common::tunables::Tunables;
use crate::plugins::enemies::{Enemy, PendingDespawn};
use crate::plugins::fx::ScreenShake;

mod attack;

pub use attack::{Attack, hitbox_for};

#[derive(Component, Debug, Clone, Copy)]
pub struct Player;

/// Velocity in pixels per frame. Never set directly by input; input adds to
/// it and damping bleeds it off.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct Velocity(pub Vec2);

/// Player sub-state. Input is only read in `Normal`.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    #[default]
    Normal,
    /// Knocked back and invulnerable.
    Hit { frames_left: u32 },
    /// Out of lives; the app exits when the timer runs out.
    Dead { frames_left: u32 },
}

/// Marker for the sprite that shows the live attack hitbox.
#[derive(Component, Debug, Clone, Copy)]
pub struct SwingSprite;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    pub score: u32,
    pub lives: u32,
}

impl Scoreboard {
    pub fn new(lives: u32) -> Self {
        Self { score: 0, lives }
    }

    /// Remove one life. Returns `true` if this was the last one. The phase
    /// switch itself reads `is_out` in the game-over check.
    pub fn lose_life(&mut self) -> bool {
        let before = self.lives;
        self.lives = self.lives.saturating_sub(1);
        before == 1
    }

    #[inline]
    pub fn is_out(&self) -> bool {
        self.lives == 0
    }
}

/// Held keys for the current frame.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct PlayerInput {
    /// Each axis is -1, 0 or 1 (opposite keys cancel), screen space (y down).
    pub axis: Vec2,
    pub attack: bool,
}

pub fn plugin(app: &mut App) {
    let lives = app.world().resource::<Tunables>().starting_lives;

    app.insert_resource(PlayerInput::default())
        .insert_resource(Scoreboard::new(lives))
        .add_systems(OnEnter(GameState::Running), spawn)
        .add_systems(OnEnter(GameState::GameOver), announce_game_over)
        .add_systems(Update, gather_input)
        .add_systems(
            FixedUpdate,
            step_player
                .in_set(StepSet::Player)
                .run_if(in_state(GameState::Running)),
        )
        .add_systems(
            FixedUpdate,
            check_game_over
                .in_set(StepSet::Aftermath)
                .run_if(in_state(GameState::Running)),
        )
        .add_systems(
            FixedUpdate,
            death_tick
                .in_set(StepSet::Aftermath)
                .run_if(in_state(GameState::GameOver)),
        )
        .add_systems(PostUpdate, (sync_player_sprite, sync_swing_sprite));
}

fn spawn(mut commands: Commands, tunables: Res<Tunables>) {
    let body = Body::new(tunables.player_start, tunables.player_size);

    commands.spawn((
        Name::new("Player"),
        Player,
        body,
        Velocity::default(),
        PlayerState::Normal,
        Attack::default(),
        Sprite {
            color: PLAYER_COLOR,
            custom_size: Some(tunables.player_size.as_vec2()),
            ..default()
        },
        Transform::from_translation(
            screen_to_world(body.rect(), tunables.screen).extend(Layer::Player.z()),
        ),
    ));

    commands.spawn((
        Name::new("Swing"),
        SwingSprite,
        Sprite {
            color: Color::srgb(1.0, 0.85, 0.3),
            custom_size: Some(tunables.hitbox_size.as_vec2()),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, Layer::Swing.z()),
        Visibility::Hidden,
    ));
}

fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<PlayerInput>) {
    let Some(keys) = keys else {
        return;
    };

    let mut axis = Vec2::ZERO;

    if keys.any_pressed([KeyCode::ArrowRight, KeyCode::KeyD]) {
        axis.x += 1.0;
    }
    if keys.any_pressed([KeyCode::ArrowLeft, KeyCode::KeyA]) {
        axis.x -= 1.0;
    }
    if keys.any_pressed([KeyCode::ArrowUp, KeyCode::KeyW]) {
        axis.y -= 1.0;
    }
    if keys.any_pressed([KeyCode::ArrowDown, KeyCode::KeyS]) {
        axis.y += 1.0;
    }

    input.axis = axis;
    input.attack = keys.pressed(KeyCode::Space);
}

/// Damp, integrate, and keep the player on the playfield.
pub fn integrate(body: &mut Body, vel: &mut Velocity, tunables: &Tunables) {
    vel.0 *= tunables.damping;
    body.pos += vel.0;

    let max = (tunables.screen.as_ivec2() - body.size).max(IVec2::ZERO).as_vec2();
    body.pos = body.pos.clamp(Vec2::ZERO, max);
}

/// One simulation frame for the player.
pub fn step_player(
    tunables: Res<Tunables>,
    input: Res<PlayerInput>,
    mut board: ResMut<Scoreboard>,
    mut shake: ResMut<ScreenShake>,
    mut q_player: Query<
        (&mut Body, &mut Velocity, &mut PlayerState, &mut Attack),
        (With<Player>, Without<Enemy>),
    >,
    mut q_enemies: Query<(Entity, &Body, &mut Enemy), (Without<Player>, Without<PendingDespawn>)>,
) {
    let Ok((mut body, mut vel, mut cond, mut attack)) = q_player.single_mut() else {
        return;
    };

    let controllable = match *cond {
        PlayerState::Normal => true,
        PlayerState::Hit { frames_left } => {
            let left = frames_left.saturating_sub(1);
            *cond = if left == 0 {
                PlayerState::Normal
            } else {
                PlayerState::Hit { frames_left: left }
            };
            false
        }
        PlayerState::Dead { .. } => false,
    };

    if controllable {
        vel.0 += input.axis * tunables.player_speed;

        if input.attack && attack.start(body.rect(), tunables.hitbox_size, tunables.swing_frames) {
            debug!("swing started at {:?}", body.pos);
        }

        if attack.is_swinging() {
            attack.follow(body.rect(), tunables.hitbox_size);

            if let Some(hitbox) = attack.hitbox() {
                let target = q_enemies
                    .iter()
                    .filter(|(_, enemy_body, enemy)| {
                        enemy.is_alive() && overlaps(hitbox, enemy_body.rect())
                    })
                    .min_by_key(|(_, _, enemy)| enemy.spawn_id)
                    .map(|(e, _, _)| e);

                if let Some(target) = target {
                    let (_, _, mut enemy) = q_enemies
                        .get_mut(target)
                        .expect("hit target vanished between scan and damage");
                    enemy.take_hit(tunables.enemy_hit_stun);
                    attack.consume();
                    shake.trigger(tunables.swing_shake);
                    debug!(
                        "hit {:?} #{} (health {})",
                        enemy.kind, enemy.spawn_id, enemy.health
                    );
                }
            }

            attack.tick();
        }
    }

    integrate(&mut body, &mut vel, &tunables);

    if *cond != PlayerState::Normal {
        return;
    }

    let rect = body.rect();
    let touched = q_enemies
        .iter()
        .any(|(_, enemy_body, enemy)| enemy.is_alive() && overlaps(rect, enemy_body.rect()));

    if touched {
        if board.lose_life() {
            info!("last life lost to a collision");
        }
        *cond = PlayerState::Hit {
            frames_left: tunables.hit_frames,
        };
        vel.0 = tunables.knockback;
        attack.cancel();
        shake.trigger(tunables.player_hit_shake);
        debug!("player hit, {} lives left", board.lives);
    }
}

/// Request `GameOver` on the frame the last life is lost.
pub fn check_game_over(
    tunables: Res<Tunables>,
    board: Res<Scoreboard>,
    mut next: ResMut<NextState<GameState>>,
    mut q_player: Query<(&mut PlayerState, &mut Attack), With<Player>>,
) {
    if !board.is_out() {
        return;
    }

    next.set(GameState::GameOver);

    let Ok((mut cond, mut attack)) = q_player.single_mut() else {
        return;
    };
    if !matches!(*cond, PlayerState::Dead { .. }) {
        *cond = PlayerState::Dead {
            frames_left: tunables.death_frames,
        };
        attack.cancel();
    }
}

fn announce_game_over(board: Res<Scoreboard>) {
    info!("game over, final score {}", board.score);
}

/// Death slide + countdown. Exits the app when the timer runs out.
pub fn death_tick(
    tunables: Res<Tunables>,
    mut shake: ResMut<ScreenShake>,
    mut exit: MessageWriter<AppExit>,
    mut q_player: Query<(&mut Body, &mut Velocity, &mut PlayerState), With<Player>>,
) {
    let Ok((mut body, mut vel, mut cond)) = q_player.single_mut() else {
        return;
    };

    integrate(&mut body, &mut vel, &tunables);
    shake.trigger(tunables.death_shake);

    let left = match *cond {
        PlayerState::Dead { frames_left } => frames_left.saturating_sub(1),
        _ => tunables.death_frames,
    };
    *cond = PlayerState::Dead { frames_left: left };

    if left == 0 {
        info!("death animation finished, exiting");
        exit.write(AppExit::Success);
    }
}

// -----------------------------------------------------------------------------
// Presentation
// -----------------------------------------------------------------------------

const PLAYER_COLOR: Color = Color::srgb(0.2, 0.75, 0.9);

/// Frames per on/off phase of the hit blink.
const BLINK_FRAMES: u32 = 4;

fn sync_player_sprite(
    tunables: Res<Tunables>,
    mut q: Query<(&Body, &PlayerState, &mut Sprite, &mut Transform), With<Player>>,
) {
    let Ok((body, cond, mut sprite, mut tf)) = q.single_mut() else {
        return;
    };

    let pos = screen_to_world(body.rect(), tunables.screen);
    tf.translation.x = pos.x;
    tf.translation.y = pos.y;

    match *cond {
        PlayerState::Normal => {
            sprite.color = PLAYER_COLOR;
            tf.scale = Vec3::ONE;
        }
        PlayerState::Hit { frames_left } => {
            sprite.color = if (frames_left / BLINK_FRAMES) % 2 == 0 {
                Color::WHITE
            } else {
                PLAYER_COLOR
            };
        }
        PlayerState::Dead { frames_left } => {
            let t = frames_left as f32 / tunables.death_frames.max(1) as f32;
            tf.scale = Vec3::splat(t.clamp(0.0, 1.0));
            let mut c = PLAYER_COLOR.to_srgba();
            c.alpha = t.clamp(0.0, 1.0);
            sprite.color = c.into();
        }
    }
}

fn sync_swing_sprite(
    tunables: Res<Tunables>,
    q_player: Query<&Attack, With<Player>>,
    mut q_swing: Query<(&mut Transform, &mut Visibility), With<SwingSprite>>,
) {
    let Ok(attack) = q_player.single() else {
        return;
    };
    let Ok((mut tf, mut vis)) = q_swing.single_mut() else {
        return;
    };

    match attack.hitbox() {
        Some(hitbox) => {
            let pos = screen_to_world(hitbox, tunables.screen);
            tf.translation.x = pos.x;
            tf.translation.y = pos.y;
            *vis = Visibility::Visible;
        }
        None => *vis = Visibility::Hidden,
    }
}
