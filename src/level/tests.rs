//! Level domain: unit tests for playground layouts and completion.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{CollectedKeys, Playfield, PlaygroundKind, PlaygroundSeed, build, rect};
use crate::movement::{
    KinematicState, MovementIntents, ProfileParams, RespawnReason, StaticGeometry, TickEnvironment,
    advance, overlaps,
};

const WORLD: Vec2 = Vec2::new(1280.0, 720.0);
const ACTOR: Vec2 = Vec2::new(30.0, 60.0);

fn test_profile() -> ProfileParams {
    ProfileParams {
        walk_speed: 4.0,
        run_speed: 8.0,
        acceleration: 0.3,
        deceleration: 0.3,
        jump_force: 14.0,
        gravity: 0.6,
        falling_gravity: 1.0,
        max_fall_speed: 12.0,
        ..default()
    }
}

fn settle(playfield: &Playfield, ticks: usize) -> (KinematicState, Option<RespawnReason>) {
    let profile = test_profile();
    let mut state = KinematicState::new(playfield.spawn_position(ACTOR), ACTOR);
    let mut respawn = None;
    for _ in 0..ticks {
        let outcome = advance(
            &mut state,
            &profile,
            &MovementIntents::idle(),
            TickEnvironment {
                geometry: playfield,
                hazards: &playfield.hazards,
                world_bottom: WORLD.y,
            },
        );
        respawn = respawn.or(outcome.respawn);
    }
    (state, respawn)
}

#[test]
fn test_every_playground_has_a_finish() {
    for kind in PlaygroundKind::ALL {
        let playfield = build(kind, WORLD, None);
        assert_eq!(playfield.kind, kind);
        let finish = playfield.finish.expect("finish platform");
        assert!(playfield.rectangles().contains(&finish), "{:?}", kind);
    }
}

#[test]
fn test_spawn_is_clear_and_actor_lands() {
    for kind in PlaygroundKind::ALL {
        let playfield = build(kind, WORLD, None);
        let start = KinematicState::new(playfield.spawn_position(ACTOR), ACTOR);
        assert!(
            !playfield.rectangles().iter().any(|r| overlaps(start.bounds(), *r)),
            "{:?} spawns inside a solid",
            kind
        );

        let (state, respawn) = settle(&playfield, 30);
        assert!(state.on_ground, "{:?} actor did not land", kind);
        assert_eq!(respawn, None, "{:?}", kind);
    }
}

#[test]
fn test_comparison_course_has_hazards() {
    let playfield = build(PlaygroundKind::Comparison, WORLD, None);
    assert_eq!(
        playfield.hazards,
        vec![rect(300.0, 640.0, 80.0, 20.0), rect(600.0, 640.0, 80.0, 20.0)]
    );
}

#[test]
fn test_randomized_layouts_are_seeded() {
    let mut a = ChaCha8Rng::seed_from_u64(7);
    let mut b = ChaCha8Rng::seed_from_u64(7);
    for kind in [PlaygroundKind::Factory, PlaygroundKind::Summit, PlaygroundKind::Void] {
        assert!(kind.randomizable());
        assert_eq!(build(kind, WORLD, Some(&mut a)), build(kind, WORLD, Some(&mut b)));
    }
    assert!(!PlaygroundKind::Flat.randomizable());
    assert_eq!(
        build(PlaygroundKind::Flat, WORLD, Some(&mut a)),
        build(PlaygroundKind::Flat, WORLD, None)
    );
}

#[test]
fn test_seed_generations() {
    let mut seed = PlaygroundSeed::new(42);
    let first = build(PlaygroundKind::Summit, WORLD, Some(&mut seed.next_rng()));
    let second = build(PlaygroundKind::Summit, WORLD, Some(&mut seed.next_rng()));
    assert_eq!(seed.generation, 2);
    assert_ne!(first, second);

    let mut replay = PlaygroundSeed::new(42);
    let replayed = build(PlaygroundKind::Summit, WORLD, Some(&mut replay.next_rng()));
    assert_eq!(first, replayed);
}

#[test]
fn test_factory_pit_is_a_hazard() {
    let playfield = build(PlaygroundKind::Factory, WORLD, None);
    assert_eq!(playfield.hazards, vec![rect(200.0, 690.0, 800.0, 30.0)]);
}

#[test]
fn test_reached_finish_counts_touching() {
    let playfield = build(PlaygroundKind::Flat, WORLD, None);
    let ground_y = WORLD.y - 80.0;

    let standing = KinematicState::new(Vec2::new(1100.0, ground_y - ACTOR.y), ACTOR);
    assert!(playfield.reached_finish(standing.bounds()));

    let short = KinematicState::new(Vec2::new(900.0, ground_y - ACTOR.y), ACTOR);
    assert!(!playfield.reached_finish(short.bounds()));
}

#[test]
fn test_collected_keys() {
    let mut keys = CollectedKeys::default();
    keys.record(PlaygroundKind::Shaft, "madeline");
    keys.record(PlaygroundKind::Shaft, "madeline");
    keys.record(PlaygroundKind::Flat, "mario");

    assert_eq!(keys.for_playground(PlaygroundKind::Shaft), ["madeline", "madeline"]);
    assert!(keys.for_playground(PlaygroundKind::Void).is_empty());
    assert_eq!(keys.total(), 3);
}
