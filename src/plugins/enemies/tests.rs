//! Unit tests for the enemies module.
//!
//! Compiled as a submodule of `mod.rs` so they can reach private systems.

use bevy::prelude::*;

use super::*;
use crate::common::test_utils::{run_system_once, sim_world};

fn spawn_at(world: &mut World, kind: EnemyKind, pos: Vec2, id: u64) -> Entity {
    world
        .spawn((Enemy::new(kind, id), Body::new(pos, kind.stats().size)))
        .id()
}

fn is_marked(world: &World, e: Entity) -> bool {
    world.get::<PendingDespawn>(e).is_some()
}

fn step(world: &mut World) {
    run_system_once(world, step_enemies);
}

// -----------------------------------------------------------------------------
// Type table
// -----------------------------------------------------------------------------

#[test]
fn kind_table_matches_final_values() {
    let n = EnemyKind::Normal.stats();
    let s = EnemyKind::Speedster.stats();
    let g = EnemyKind::Giant.stats();

    assert_eq!((n.base_speed, n.health, n.score), (0.75, 2, 1));
    assert_eq!((s.base_speed, s.health, s.score), (1.0, 1, 2));
    assert_eq!((g.base_speed, g.health, g.score), (0.25, 4, 4));

    assert!(n.rotates && !s.rotates && !g.rotates);
    for kind in EnemyKind::ALL {
        assert!(kind.stats().speed_cap >= kind.stats().base_speed);
    }
}

// -----------------------------------------------------------------------------
// Enemy rules
// -----------------------------------------------------------------------------

#[test]
fn speed_ramps_to_cap_and_never_above() {
    for kind in EnemyKind::ALL {
        let stats = kind.stats();
        let mut enemy = Enemy::new(kind, 0);
        assert_eq!(enemy.speed, 0.0);

        enemy.advance(5.0);
        assert_eq!(enemy.speed, stats.base_speed);

        let mut prev = enemy.speed;
        for _ in 0..100 {
            enemy.advance(5.0);
            assert!(enemy.speed <= stats.speed_cap);
            assert!(enemy.speed >= prev);
            prev = enemy.speed;
        }
        assert_eq!(enemy.speed, stats.speed_cap);
    }
}

#[test]
fn stagger_reverses_speed_verbatim() {
    let mut enemy = Enemy::new(EnemyKind::Normal, 0);
    enemy.speed = 3.0;
    enemy.take_hit(10);
    assert_eq!(enemy.speed, -6.0);
    assert_eq!(enemy.health, 1);
    assert_eq!(enemy.hit_stun, 10);

    // Ramp resumes from the reversed speed.
    enemy.advance(5.0);
    assert_eq!(enemy.speed, -5.25);
}

#[test]
fn only_the_asteroid_spins_and_angle_wraps() {
    let mut rock = Enemy::new(EnemyKind::Normal, 0);
    rock.angle = 357.0;
    rock.advance(5.0);
    assert_eq!(rock.angle, 2.0);
    assert_eq!(rock.look().angle, Some(2.0));

    let mut giant = Enemy::new(EnemyKind::Giant, 1);
    giant.advance(5.0);
    assert_eq!(giant.angle, 0.0);
    assert_eq!(giant.look().angle, None);
}

#[test]
fn hit_stun_drives_the_flash() {
    let mut enemy = Enemy::new(EnemyKind::Giant, 0);
    enemy.take_hit(2);
    assert!(enemy.look().flashed);
    enemy.advance(5.0);
    assert!(enemy.look().flashed);
    enemy.advance(5.0);
    assert!(!enemy.look().flashed);
    enemy.advance(5.0);
    assert_eq!(enemy.hit_stun, 0);
}

#[test]
fn step_moves_left_by_current_speed() {
    let mut world = sim_world();
    let e = spawn_at(&mut world, EnemyKind::Speedster, Vec2::new(500.0, 100.0), 0);

    step(&mut world);
    step(&mut world);

    let body = world.get::<Body>(e).unwrap();
    assert_eq!(body.pos.x, 500.0 - 1.0 - 2.0);
    assert_eq!(body.pos.y, 100.0);
}

#[test]
fn killed_enemy_waits_for_hit_stun_then_scores() {
    let mut world = sim_world();
    let e = spawn_at(&mut world, EnemyKind::Speedster, Vec2::new(500.0, 100.0), 0);
    world.get_mut::<Enemy>(e).unwrap().take_hit(3);

    step(&mut world);
    step(&mut world);
    assert!(!is_marked(&world, e));
    assert_eq!(world.resource::<Scoreboard>().score, 0);

    step(&mut world);
    assert!(is_marked(&world, e));
    assert_eq!(world.resource::<Scoreboard>().score, 2);

    // Marked enemies are ignored by later steps: no double scoring.
    step(&mut world);
    assert_eq!(world.resource::<Scoreboard>().score, 2);

    run_system_once(&mut world, despawn_marked_enemies);
    assert!(world.get_entity(e).is_err());
}

#[test]
fn escaping_enemy_costs_a_life_and_shakes() {
    let mut world = sim_world();
    // Right edge starts at x = 2 and crosses 0 on the third frame.
    let e = spawn_at(&mut world, EnemyKind::Normal, Vec2::new(-46.0, 100.0), 0);

    step(&mut world);
    assert!(!is_marked(&world, e));
    step(&mut world);
    step(&mut world);
    assert!(is_marked(&world, e));

    assert_eq!(world.resource::<Scoreboard>().lives, 2);
    assert_eq!(world.resource::<Scoreboard>().score, 0);
    assert!(world.resource::<ScreenShake>().is_active());
}

#[test]
fn stunned_or_post_game_escapes_are_free() {
    let mut world = sim_world();
    let stunned = spawn_at(&mut world, EnemyKind::Giant, Vec2::new(-120.0, 0.0), 0);
    world.get_mut::<Enemy>(stunned).unwrap().take_hit(5);
    step(&mut world);
    assert!(is_marked(&world, stunned));
    assert_eq!(world.resource::<Scoreboard>().lives, 3);

    world.resource_mut::<Scoreboard>().lives = 0;
    let late = spawn_at(&mut world, EnemyKind::Giant, Vec2::new(-120.0, 0.0), 1);
    step(&mut world);
    assert!(is_marked(&world, late));
    assert_eq!(world.resource::<Scoreboard>().lives, 0);
}

#[test]
fn escape_penalty_can_be_switched_off() {
    let mut world = sim_world();
    world.resource_mut::<Tunables>().escape_costs_life = false;
    let e = spawn_at(&mut world, EnemyKind::Giant, Vec2::new(-120.0, 0.0), 0);
    step(&mut world);
    assert!(is_marked(&world, e));
    assert_eq!(world.resource::<Scoreboard>().lives, 3);
}

// -----------------------------------------------------------------------------
// Spawner
// -----------------------------------------------------------------------------

#[test]
fn spawner_fires_every_interval() {
    let mut spawner = Spawner::new(3);
    assert!(!spawner.tick());
    assert!(!spawner.tick());
    assert!(spawner.tick());
    assert_eq!(spawner.remaining(), 3);

    assert_eq!(spawner.take_id(), 0);
    assert_eq!(spawner.take_id(), 1);
}

#[test]
fn spawner_at_one_spawns_exactly_one_enemy_at_right_edge() {
    let mut world = sim_world();
    let mut spawner = Spawner::new(200);
    spawner.set_remaining(1);
    world.insert_resource(spawner);

    run_system_once(&mut world, tick_spawner);

    assert_eq!(world.resource::<Spawner>().remaining(), 200);
    let bodies: Vec<Body> = world.query::<(&Enemy, &Body)>().iter(&world).map(|(_, b)| *b).collect();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0].pos.x, 1000.0);
    assert!((0.0..800.0).contains(&bodies[0].pos.y));

    // Nothing more until the countdown runs out again.
    run_system_once(&mut world, tick_spawner);
    assert_eq!(world.query::<&Enemy>().iter(&world).count(), 1);
}

#[test]
fn spawner_covers_every_kind_and_height_range() {
    let mut world = sim_world();
    world.insert_resource(Spawner::new(1));

    for _ in 0..300 {
        run_system_once(&mut world, tick_spawner);
    }

    let enemies: Vec<(Enemy, Body)> = world
        .query::<(&Enemy, &Body)>()
        .iter(&world)
        .map(|(e, b)| (e.clone(), *b))
        .collect();
    assert_eq!(enemies.len(), 300);

    for kind in EnemyKind::ALL {
        assert!(enemies.iter().any(|(e, _)| e.kind == kind));
    }
    assert!(enemies.iter().all(|(_, b)| (0.0..800.0).contains(&b.pos.y)));

    let mut ids: Vec<u64> = enemies.iter().map(|(e, _)| e.spawn_id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 300);
}

#[test]
fn spawner_stops_once_lives_are_gone() {
    let mut world = sim_world();
    world.resource_mut::<Scoreboard>().lives = 0;
    world.insert_resource(Spawner::new(1));

    run_system_once(&mut world, tick_spawner);
    assert_eq!(world.query::<&Enemy>().iter(&world).count(), 0);
}

// -----------------------------------------------------------------------------
// Presentation
// -----------------------------------------------------------------------------

#[test]
fn sprite_sync_places_spins_and_flashes() {
    let mut world = sim_world();
    let mut rock = Enemy::new(EnemyKind::Normal, 0);
    rock.angle = 90.0;
    rock.hit_stun = 2;
    let body = Body::new(Vec2::new(300.0, 200.0), EnemyKind::Normal.stats().size);
    let e = world
        .spawn((rock, body, Sprite::default(), Transform::default()))
        .id();

    run_system_once(&mut world, sync_enemy_sprites);

    let tf = *world.get::<Transform>(e).unwrap();
    // Rect [300,348) x [200,248) has its centre at (324, 224) on screen.
    assert_eq!(tf.translation.truncate(), Vec2::new(-176.0, 176.0));
    assert!(tf.rotation.angle_between(Quat::from_rotation_z(90f32.to_radians())) < 1e-5);

    let base = EnemyKind::Normal.stats().color.to_srgba();
    let flashed = world.get::<Sprite>(e).unwrap().color.to_srgba();
    assert!((flashed.red - (base.red + (1.0 - base.red) * FLASH_MIX)).abs() < 1e-5);
    assert!((flashed.blue - (base.blue + (1.0 - base.blue) * FLASH_MIX)).abs() < 1e-5);

    world.get_mut::<Enemy>(e).unwrap().hit_stun = 0;
    run_system_once(&mut world, sync_enemy_sprites);
    assert_eq!(
        world.get::<Sprite>(e).unwrap().color,
        EnemyKind::Normal.stats().color
    );
}

#[test]
fn sprite_sync_leaves_non_spinning_kinds_upright() {
    let mut world = sim_world();
    let giant = Enemy::new(EnemyKind::Giant, 0);
    let body = Body::new(Vec2::new(500.0, 100.0), EnemyKind::Giant.stats().size);
    let e = world
        .spawn((giant, body, Sprite::default(), Transform::default()))
        .id();

    run_system_once(&mut world, sync_enemy_sprites);

    assert_eq!(world.get::<Transform>(e).unwrap().rotation, Quat::IDENTITY);
}
