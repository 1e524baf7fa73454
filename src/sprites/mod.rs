//! Sprites domain: flat-colored rectangles for the playfield and the actor.
//!
//! World space is y-down with a top-left origin; Bevy is y-up and centered,
//! so every placement goes through [`to_screen`].

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::content::Roster;
use crate::core::SandboxConfig;
use crate::level::Playfield;
use crate::movement::{ActorRespawned, KinematicState, Player};

const SOLID_COLOR: Color = Color::srgb(0.45, 0.45, 0.5);
const HAZARD_COLOR: Color = Color::srgb(1.0, 50.0 / 255.0, 50.0 / 255.0);
const FINISH_COLOR: Color = Color::srgb(1.0, 215.0 / 255.0, 0.0);
const SKID_COLOR: Color = Color::srgb(1.0, 200.0 / 255.0, 0.0);
const WALL_COLOR: Color = Color::srgb(200.0 / 255.0, 100.0 / 255.0, 1.0);

/// Per-channel lift applied to the profile color while airborne.
const AIRBORNE_LIGHTEN: f32 = 30.0 / 255.0;

/// Marker for sprites rebuilt whenever the playfield changes.
#[derive(Component, Debug)]
pub struct LevelSprite;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                rebuild_level_sprites.run_if(resource_changed::<Playfield>),
                sync_actor_sprite.run_if(resource_exists::<Roster>),
                log_respawns,
            ),
        );
    }
}

/// Center of a y-down world rectangle in Bevy's y-up, centered space.
pub fn to_screen(rect: Rect, world: Vec2) -> Vec2 {
    let center = rect.center();
    Vec2::new(center.x - world.x / 2.0, world.y / 2.0 - center.y)
}

/// Tint for the actor given its state and the active profile color.
pub fn actor_tint(state: &KinematicState, base: Color) -> Color {
    if state.is_skidding {
        SKID_COLOR
    } else if state.on_wall {
        WALL_COLOR
    } else if !state.on_ground {
        lighten(base)
    } else {
        base
    }
}

fn lighten(color: Color) -> Color {
    let c = color.to_srgba();
    Color::srgb(
        (c.red + AIRBORNE_LIGHTEN).min(1.0),
        (c.green + AIRBORNE_LIGHTEN).min(1.0),
        (c.blue + AIRBORNE_LIGHTEN).min(1.0),
    )
}

fn rebuild_level_sprites(
    mut commands: Commands,
    config: Res<SandboxConfig>,
    playfield: Res<Playfield>,
    existing: Query<Entity, With<LevelSprite>>,
) {
    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }

    let world = config.world_size();
    let finish = playfield.finish;
    let solids = playfield
        .solids
        .iter()
        // The finish is also solid; draw it once, in its own color
        .filter(|rect| Some(**rect) != finish)
        .map(|rect| (*rect, SOLID_COLOR));
    let hazards = playfield.hazards.iter().map(|rect| (*rect, HAZARD_COLOR));

    let mut count = 0;
    for (rect, color) in solids.chain(hazards).chain(finish.map(|f| (f, FINISH_COLOR))) {
        let center = to_screen(rect, world);
        commands.spawn((
            LevelSprite,
            Sprite::from_color(color, rect.size()),
            Transform::from_xyz(center.x, center.y, 0.0),
        ));
        count += 1;
    }
    debug!("Built {} level sprites for '{}'", count, playfield.kind.name());
}

fn sync_actor_sprite(
    config: Res<SandboxConfig>,
    roster: Res<Roster>,
    mut actors: Query<(&KinematicState, &mut Transform, &mut Sprite), With<Player>>,
) {
    let world = config.world_size();
    let base = roster.active().color;

    for (state, mut transform, mut sprite) in actors.iter_mut() {
        let center = to_screen(state.bounds(), world);
        transform.translation.x = center.x;
        transform.translation.y = center.y;
        sprite.color = actor_tint(state, base);
        sprite.flip_x = !state.facing_right();
    }
}

fn log_respawns(mut respawned: MessageReader<ActorRespawned>) {
    for message in respawned.read() {
        debug!("Actor {:?} respawned: {:?}", message.entity, message.cause);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_screen_flips_y_around_world_center() {
        let world = Vec2::new(1280.0, 720.0);
        let top_left = Rect::new(0.0, 0.0, 20.0, 20.0);
        assert_eq!(to_screen(top_left, world), Vec2::new(-630.0, 350.0));

        let bottom_right = Rect::new(1260.0, 700.0, 1280.0, 720.0);
        assert_eq!(to_screen(bottom_right, world), Vec2::new(630.0, -350.0));
    }

    #[test]
    fn tint_prefers_skid_then_wall_then_air() {
        let base = Color::srgb(0.5, 0.5, 0.5);
        let mut state = KinematicState::new(Vec2::ZERO, Vec2::new(30.0, 60.0));
        state.on_ground = true;
        assert_eq!(actor_tint(&state, base), base);

        state.on_ground = false;
        let air = actor_tint(&state, base).to_srgba();
        assert!((air.red - (0.5 + AIRBORNE_LIGHTEN)).abs() < 1e-6);

        state.on_wall = true;
        assert_eq!(actor_tint(&state, base), WALL_COLOR);

        state.is_skidding = true;
        assert_eq!(actor_tint(&state, base), SKID_COLOR);
    }

    #[test]
    fn lighten_caps_at_full_intensity() {
        let c = lighten(Color::WHITE).to_srgba();
        assert_eq!((c.red, c.green, c.blue), (1.0, 1.0, 1.0));
    }
}
