//! Playground layouts.
//!
//! Coordinates are y-down with the origin at the top-left of a
//! `world.x` by `world.y` area. Ground lines are measured up from the bottom.

use bevy::prelude::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use super::playfield::{Playfield, PlaygroundKind};

/// Builds a playground. Randomizable kinds use `rng` when given, every
/// other kind ignores it.
pub fn build(kind: PlaygroundKind, world: Vec2, rng: Option<&mut ChaCha8Rng>) -> Playfield {
    match kind {
        PlaygroundKind::Flat => flat(world),
        PlaygroundKind::WallClimb => wall_climb(world),
        PlaygroundKind::Factory => factory(world, rng),
        PlaygroundKind::Summit => summit(world, rng),
        PlaygroundKind::Void => void(world, rng),
        PlaygroundKind::Shaft => shaft(world),
        PlaygroundKind::Comparison => comparison(world),
    }
}

fn flat(world: Vec2) -> Playfield {
    let ground_y = world.y - 80.0;
    let mut field = Playfield::new(PlaygroundKind::Flat, Vec2::new(100.0, ground_y));
    field
        .solid(0.0, ground_y, 300.0, 80.0)
        .solid(300.0, ground_y, 700.0, 80.0)
        .finish(1000.0, ground_y, 280.0, 80.0);
    field
}

fn wall_climb(world: Vec2) -> Playfield {
    let ground_y = world.y - 80.0;
    let shaft_x = 900.0;
    let mut field = Playfield::new(PlaygroundKind::WallClimb, Vec2::new(100.0, ground_y));
    field
        .solid(50.0, ground_y, 250.0, 80.0)
        .solid(500.0, ground_y, 300.0, 80.0)
        .solid(shaft_x, ground_y, 40.0, 80.0)
        .solid(shaft_x + 150.0, ground_y - 100.0, 40.0, 180.0)
        .solid(shaft_x, ground_y - 200.0, 40.0, 100.0)
        .solid(shaft_x + 150.0, ground_y - 300.0, 40.0, 100.0)
        .finish(shaft_x + 40.0, ground_y - 350.0, 110.0, 20.0);
    field
}

fn factory(world: Vec2, mut rng: Option<&mut ChaCha8Rng>) -> Playfield {
    let ground_y = world.y - 50.0;
    let mut field = Playfield::new(PlaygroundKind::Factory, Vec2::new(80.0, ground_y));
    field
        .solid(50.0, ground_y, 150.0, 50.0)
        .hazard(200.0, ground_y + 20.0, 800.0, 30.0);

    let (shafts, shaft_gap) = match rng.as_deref_mut() {
        Some(rng) => (rng.random_range(3..=5), rng.random_range(150..=250) as f32),
        None => (3, 200.0),
    };

    let mut shaft_x = 300.0;
    for i in 0..shafts {
        let (height, y_base, width_gap) = match rng.as_deref_mut() {
            Some(rng) => (
                rng.random_range(120..=180) as f32,
                ground_y - (i * rng.random_range(150..=200)) as f32 - 100.0,
                rng.random_range(90..=140) as f32,
            ),
            None => (150.0, ground_y - (i * 180) as f32 - 100.0, 130.0),
        };

        field
            .solid(shaft_x, y_base, 30.0, height)
            .solid(shaft_x + width_gap, y_base, 30.0, height);
        // Ledge between the walls of every pair but the last
        if i < shafts - 1 {
            field.solid(shaft_x + 30.0, y_base - 30.0, 70.0, 20.0);
        }
        shaft_x += shaft_gap;
    }

    let finish_y = ground_y - (shafts * 150) as f32 - 50.0;
    field.finish(shaft_x, finish_y, 100.0, 30.0);
    field
}

fn summit(world: Vec2, rng: Option<&mut ChaCha8Rng>) -> Playfield {
    let ground_y = world.y - 50.0;
    let mut field = Playfield::new(PlaygroundKind::Summit, Vec2::new(100.0, ground_y));
    field.solid(50.0, ground_y, 200.0, 50.0);

    let Some(rng) = rng else {
        field
            .solid(300.0, ground_y - 100.0, 40.0, 200.0)
            .solid(450.0, ground_y - 250.0, 40.0, 150.0)
            .solid(600.0, ground_y - 350.0, 40.0, 300.0)
            .solid(750.0, ground_y - 100.0, 40.0, 400.0)
            .finish(750.0, ground_y - 550.0, 100.0, 20.0);
        return field;
    };

    let mut x = 300.0;
    let mut y = ground_y - 100.0;
    for _ in 0..5 {
        if rng.random_bool(0.5) {
            // Wall
            let height = rng.random_range(150..=300) as f32;
            field.solid(x, y, 40.0, height);
            x += rng.random_range(100..=150) as f32;
            y -= rng.random_range(50..=100) as f32;
        } else {
            // Floating block
            let width = rng.random_range(40..=80) as f32;
            let height = rng.random_range(20..=40) as f32;
            field.solid(x, y, width, height);
            x += rng.random_range(80..=140) as f32;
            y -= rng.random_range(40..=120) as f32;
        }
    }
    field.finish(x, y - 50.0, 100.0, 20.0);
    field
}

fn void(world: Vec2, rng: Option<&mut ChaCha8Rng>) -> Playfield {
    let ground_y = world.y - 50.0;
    let mut field = Playfield::new(PlaygroundKind::Void, Vec2::new(70.0, ground_y));
    field.solid(50.0, ground_y, 100.0, 20.0);

    let Some(rng) = rng else {
        // Descending ramp steps
        for i in 0..5 {
            let i = i as f32;
            field.solid(200.0 + i * 60.0, ground_y + i * 10.0, 60.0, 20.0);
        }
        field
            .solid(600.0, ground_y - 200.0, 20.0, 400.0)
            .solid(400.0, ground_y - 300.0, 100.0, 20.0)
            .solid(200.0, ground_y - 450.0, 100.0, 20.0)
            .finish(800.0, ground_y - 300.0, 50.0, 50.0);
        return field;
    };

    let mut x = 200.0;
    let mut y = ground_y;
    for _ in 0..rng.random_range(4..=7) {
        field.solid(x, y, 60.0, 20.0);
        x += 60.0;
        y += 10.0;
    }

    // Islands stay inside the world regardless of its size
    let max_x = (world.x - 380.0).max(201.0) as i32;
    let max_y = (world.y - 220.0).max(101.0) as i32;
    for _ in 0..5 {
        x = rng.random_range(200..=max_x) as f32;
        y = rng.random_range(100..=max_y) as f32;
        let width = rng.random_range(50..=150) as f32;
        field.solid(x, y, width, 20.0);
    }
    field.finish(x, y - 50.0, 50.0, 50.0);
    field
}

fn shaft(world: Vec2) -> Playfield {
    let ground_y = world.y - 50.0;
    let shaft_x = 450.0;
    let start_y = ground_y - 50.0;
    let mut field = Playfield::new(PlaygroundKind::Shaft, Vec2::new(80.0, ground_y));

    // Runway and shaft floor
    field
        .solid(50.0, ground_y, 400.0, 50.0)
        .solid(450.0, ground_y, 250.0, 50.0);

    // Entry wall
    field.solid(shaft_x + 180.0, start_y - 150.0, 40.0, 200.0);

    // Wide section; the left wall's bottom clears the runway
    let width_wide = 180.0;
    let height_1 = 200.0;
    let y_1 = start_y - 200.0;
    field
        .solid(shaft_x, y_1 - 50.0, 30.0, height_1)
        .solid(shaft_x + width_wide, y_1 - 200.0, 30.0, height_1 + 200.0);

    let width_med = 140.0;
    let height_2 = 200.0;
    let y_2 = y_1 - 250.0;
    let offset_2 = ((width_wide - width_med) / 2.0f32).floor();
    field
        .solid(shaft_x + offset_2, y_2, 30.0, height_2)
        .solid(shaft_x + offset_2 + width_med, y_2 - 50.0, 30.0, height_2 + 50.0);

    let width_narrow = 100.0;
    let height_3 = 250.0;
    let y_3 = y_2 - 250.0;
    let offset_3 = ((width_wide - width_narrow) / 2.0f32).floor();
    field
        .solid(shaft_x + offset_3, y_3, 30.0, height_3)
        .solid(shaft_x + offset_3 + width_narrow, y_3, 30.0, height_3)
        .finish(shaft_x + offset_3 - 40.0, y_3 - 50.0, width_narrow + 110.0, 30.0);
    field
}

fn comparison(world: Vec2) -> Playfield {
    let ground_y = world.y - 60.0;
    let mut field = Playfield::new(PlaygroundKind::Comparison, Vec2::new(150.0, ground_y));

    // Momentum: running-jump gaps
    field
        .solid(0.0, ground_y, 400.0, 60.0)
        .solid(100.0, ground_y - 100.0, 150.0, 20.0)
        .solid(400.0, ground_y - 100.0, 150.0, 20.0)
        .solid(700.0, ground_y - 150.0, 150.0, 20.0);

    // Wall jump: alternating shaft walls
    let shaft_x = 950.0;
    field
        .solid(shaft_x, ground_y, 40.0, 60.0)
        .solid(shaft_x + 150.0, ground_y - 100.0, 40.0, 160.0)
        .solid(shaft_x, ground_y - 200.0, 40.0, 100.0)
        .solid(shaft_x + 150.0, ground_y - 300.0, 40.0, 100.0)
        .solid(shaft_x, ground_y - 400.0, 40.0, 100.0)
        .finish(shaft_x + 50.0, ground_y - 450.0, 100.0, 20.0);

    // Precision: small steps that need instant stops
    field.solid(400.0, ground_y, 880.0, 60.0);
    let prec_x = 500.0;
    for (i, dy) in [80.0, 120.0, 80.0, 120.0, 80.0].into_iter().enumerate() {
        field.solid(prec_x + i as f32 * 80.0, ground_y - dy, 40.0, 20.0);
    }

    // Dash: a gap too long to jump
    field
        .solid(1100.0, ground_y, 180.0, 60.0)
        .solid(450.0, ground_y - 250.0, 100.0, 20.0)
        .solid(850.0, ground_y - 250.0, 100.0, 20.0);

    // Speed jump: only a run-boosted jump reaches the top ledge
    field
        .solid(1100.0, ground_y - 150.0, 100.0, 20.0)
        .solid(1100.0, ground_y - 280.0, 100.0, 20.0);

    field
        .hazard(300.0, ground_y - 20.0, 80.0, 20.0)
        .hazard(600.0, ground_y - 20.0, 80.0, 20.0);
    field
}
