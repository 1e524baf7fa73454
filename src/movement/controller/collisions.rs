//! Axis-separated collision against static rectangles, plus wall probing.
//!
//! Resolution is discrete: the full displacement is applied first and any
//! overlap is pushed out afterwards, so very fast motion can pass through
//! thin geometry.

use bevy::prelude::*;

use crate::movement::{KinematicState, ProfileParams};

/// Solid geometry the controller collides with, read once per tick.
pub trait StaticGeometry {
    fn rectangles(&self) -> &[Rect];
}

impl StaticGeometry for [Rect] {
    fn rectangles(&self) -> &[Rect] {
        self
    }
}

impl StaticGeometry for Vec<Rect> {
    fn rectangles(&self) -> &[Rect] {
        self
    }
}

/// How far the actor's bottom must reach below a solid's top edge for the
/// solid to count as a wall.
const WALL_OVERLAP_MIN: f32 = 5.0;
/// Horizontal inflation of the probe box on each side.
const WALL_PROBE_MARGIN: f32 = 1.0;

/// Strict overlap; boxes that only share an edge do not collide.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.min.x < b.max.x && a.max.x > b.min.x && a.min.y < b.max.y && a.max.y > b.min.y
}

pub(crate) fn move_horizontal(state: &mut KinematicState, geometry: &(impl StaticGeometry + ?Sized)) {
    state.position.x += state.velocity.x;

    for solid in geometry.rectangles() {
        if !overlaps(state.bounds(), *solid) {
            continue;
        }
        if state.velocity.x > 0.0 {
            state.position.x = solid.min.x - state.size.x;
            state.velocity.x = 0.0;
        }
        if state.velocity.x < 0.0 {
            state.position.x = solid.max.x;
            state.velocity.x = 0.0;
        }
    }
}

pub(crate) fn move_vertical(state: &mut KinematicState, geometry: &(impl StaticGeometry + ?Sized)) {
    state.on_ground = false;
    state.position.y += state.velocity.y;

    for solid in geometry.rectangles() {
        if !overlaps(state.bounds(), *solid) {
            continue;
        }
        if state.velocity.y > 0.0 {
            state.position.y = solid.min.y - state.size.y;
            state.velocity.y = 0.0;
            state.on_ground = true;
            state.air_frames = 0;
            state.has_double_jumped = false;
        }
        if state.velocity.y < 0.0 {
            state.position.y = solid.max.y;
            state.velocity.y = 0.0;
        }
    }
}

/// Classifies side contact with a wall after horizontal resolution.
pub(crate) fn detect_wall_contact(
    state: &mut KinematicState,
    profile: &ProfileParams,
    geometry: &(impl StaticGeometry + ?Sized),
) {
    let was_on_wall = state.on_wall;
    state.on_wall = false;
    state.wall_direction = 0;

    if !profile.has_wall_slide {
        return;
    }

    let bounds = state.bounds();
    let probe = Rect::from_corners(
        bounds.min - Vec2::new(WALL_PROBE_MARGIN, 0.0),
        bounds.max + Vec2::new(WALL_PROBE_MARGIN, 0.0),
    );
    let center_x = state.center().x;

    for solid in geometry.rectangles() {
        if !overlaps(probe, *solid) {
            continue;
        }
        // Perched on a top corner is not a wall
        if bounds.max.y <= solid.min.y + WALL_OVERLAP_MIN {
            continue;
        }
        if center_x < solid.min.x {
            state.on_wall = true;
            state.wall_direction = 1;
        } else if center_x > solid.max.x {
            state.on_wall = true;
            state.wall_direction = -1;
        }
    }

    if state.on_wall && !was_on_wall {
        state.wall_stick_frames = profile.wall_stick_frames;
    }
}

/// Any overlap between the actor and a hazard rectangle.
pub(crate) fn touches_hazard(state: &KinematicState, hazards: &[Rect]) -> bool {
    let bounds = state.bounds();
    hazards.iter().any(|hazard| overlaps(bounds, *hazard))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, x + w, y + h)
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(a, rect(10.0, 0.0, 10.0, 10.0)));
        assert!(!overlaps(a, rect(0.0, 10.0, 10.0, 10.0)));
        assert!(overlaps(a, rect(9.5, 9.5, 10.0, 10.0)));
    }

    #[test]
    fn test_horizontal_push_out_zeroes_velocity() {
        let walls = vec![rect(100.0, 0.0, 20.0, 200.0)];
        let mut state = KinematicState::new(Vec2::new(65.0, 50.0), Vec2::new(30.0, 60.0));
        state.velocity.x = 10.0;

        move_horizontal(&mut state, &walls);

        assert_eq!(state.position.x, 70.0);
        assert_eq!(state.velocity.x, 0.0);
    }

    #[test]
    fn test_landing_resets_air_state() {
        let floor = vec![rect(0.0, 100.0, 200.0, 20.0)];
        let mut state = KinematicState::new(Vec2::new(10.0, 38.0), Vec2::new(30.0, 60.0));
        state.velocity.y = 5.0;
        state.air_frames = 9;
        state.has_double_jumped = true;

        move_vertical(&mut state, &floor);

        assert!(state.on_ground);
        assert_eq!(state.position.y, 40.0);
        assert_eq!(state.velocity.y, 0.0);
        assert_eq!(state.air_frames, 0);
        assert!(!state.has_double_jumped);
    }

    #[test]
    fn test_ceiling_bump_does_not_ground() {
        let ceiling = vec![rect(0.0, 0.0, 200.0, 20.0)];
        let mut state = KinematicState::new(Vec2::new(10.0, 25.0), Vec2::new(30.0, 60.0));
        state.velocity.y = -8.0;

        move_vertical(&mut state, &ceiling);

        assert!(!state.on_ground);
        assert_eq!(state.position.y, 20.0);
        assert_eq!(state.velocity.y, 0.0);
    }

    #[test]
    fn test_fast_motion_tunnels_through_thin_wall() {
        let thin = vec![rect(50.0, 0.0, 2.0, 200.0)];
        let mut state = KinematicState::new(Vec2::new(0.0, 50.0), Vec2::new(30.0, 60.0));
        state.velocity.x = 60.0;

        move_horizontal(&mut state, &thin);

        assert_eq!(state.position.x, 60.0);
        assert_eq!(state.velocity.x, 60.0);
    }

    #[test]
    fn test_wall_contact_side_and_corner_perch() {
        let profile = ProfileParams {
            has_wall_slide: true,
            wall_stick_frames: 7,
            ..default()
        };
        let wall = vec![rect(100.0, 0.0, 20.0, 200.0)];

        let mut beside = KinematicState::new(Vec2::new(70.0, 50.0), Vec2::new(30.0, 60.0));
        detect_wall_contact(&mut beside, &profile, &wall);
        assert!(beside.on_wall);
        assert_eq!(beside.wall_direction, 1);
        assert_eq!(beside.wall_stick_frames, 7);

        let mut left_side = KinematicState::new(Vec2::new(120.0, 50.0), Vec2::new(30.0, 60.0));
        detect_wall_contact(&mut left_side, &profile, &wall);
        assert_eq!(left_side.wall_direction, -1);

        // Bottom only 3 units below the top edge
        let mut perched = KinematicState::new(Vec2::new(70.0, -57.0), Vec2::new(30.0, 60.0));
        detect_wall_contact(&mut perched, &profile, &wall);
        assert!(!perched.on_wall);
    }

    #[test]
    fn test_wall_contact_requires_wall_slide() {
        let wall = vec![rect(100.0, 0.0, 20.0, 200.0)];
        let mut state = KinematicState::new(Vec2::new(70.0, 50.0), Vec2::new(30.0, 60.0));
        state.on_wall = true;
        state.wall_direction = 1;

        detect_wall_contact(&mut state, &ProfileParams::default(), &wall);

        assert!(!state.on_wall);
        assert_eq!(state.wall_direction, 0);
    }
}
