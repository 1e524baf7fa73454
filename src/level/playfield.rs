//! Level geometry read by the movement controller.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{StaticGeometry, overlaps};

/// Selectable practice courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum PlaygroundKind {
    #[default]
    Flat,
    WallClimb,
    /// Hazard pit under stacked wall pairs.
    Factory,
    /// Wall and ledge climb.
    Summit,
    /// Momentum ramps and floating islands.
    Void,
    /// Narrowing wall-jump shafts.
    Shaft,
    /// One course with a section per character strength, plus hazards.
    Comparison,
}

impl PlaygroundKind {
    /// In hotkey order.
    pub const ALL: [PlaygroundKind; 7] = [
        PlaygroundKind::Flat,
        PlaygroundKind::WallClimb,
        PlaygroundKind::Factory,
        PlaygroundKind::Summit,
        PlaygroundKind::Void,
        PlaygroundKind::Shaft,
        PlaygroundKind::Comparison,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PlaygroundKind::Flat => "Flat Run",
            PlaygroundKind::WallClimb => "Wall Climb",
            PlaygroundKind::Factory => "Factory",
            PlaygroundKind::Summit => "Summit",
            PlaygroundKind::Void => "Void",
            PlaygroundKind::Shaft => "The Shaft",
            PlaygroundKind::Comparison => "Comparison Course",
        }
    }

    /// Whether a seeded RNG changes the layout.
    pub fn randomizable(self) -> bool {
        matches!(
            self,
            PlaygroundKind::Factory
                | PlaygroundKind::Summit
                | PlaygroundKind::Void
                | PlaygroundKind::Shaft
        )
    }
}

/// The loaded playground: solids, hazards, finish and spawn.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Playfield {
    pub kind: PlaygroundKind,
    /// Includes the finish platform.
    pub solids: Vec<Rect>,
    pub hazards: Vec<Rect>,
    pub finish: Option<Rect>,
    /// Point the actor's feet are placed on.
    pub spawn: Vec2,
}

impl Playfield {
    pub fn new(kind: PlaygroundKind, spawn: Vec2) -> Self {
        Self {
            kind,
            solids: Vec::new(),
            hazards: Vec::new(),
            finish: None,
            spawn,
        }
    }

    /// Adds a solid from its top-left corner and size.
    pub fn solid(&mut self, x: f32, y: f32, width: f32, height: f32) -> &mut Self {
        self.solids.push(rect(x, y, width, height));
        self
    }

    pub fn hazard(&mut self, x: f32, y: f32, width: f32, height: f32) -> &mut Self {
        self.hazards.push(rect(x, y, width, height));
        self
    }

    /// Adds the finish platform; it is also solid.
    pub fn finish(&mut self, x: f32, y: f32, width: f32, height: f32) -> &mut Self {
        let finish = rect(x, y, width, height);
        self.solids.push(finish);
        self.finish = Some(finish);
        self
    }

    /// Top-left position for an actor of `size` standing on the spawn point.
    pub fn spawn_position(&self, size: Vec2) -> Vec2 {
        Vec2::new(self.spawn.x, self.spawn.y - size.y)
    }

    /// Touching the finish counts, so standing on it is enough.
    pub fn reached_finish(&self, bounds: Rect) -> bool {
        self.finish
            .is_some_and(|finish| overlaps(bounds.inflate(1.0), finish))
    }
}

impl StaticGeometry for Playfield {
    fn rectangles(&self) -> &[Rect] {
        &self.solids
    }
}

/// Rectangle from a top-left corner and size in y-down world space.
pub fn rect(x: f32, y: f32, width: f32, height: f32) -> Rect {
    Rect::new(x, y, x + width, y + height)
}
