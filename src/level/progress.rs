//! Per-playground completion record and the randomization seed.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

use super::playfield::PlaygroundKind;

/// Character ids that reached each playground's finish, one entry per completion.
#[derive(Resource, Debug, Clone, Default)]
pub struct CollectedKeys {
    by_playground: HashMap<PlaygroundKind, Vec<String>>,
}

impl CollectedKeys {
    pub fn record(&mut self, kind: PlaygroundKind, character_id: &str) {
        self.by_playground
            .entry(kind)
            .or_default()
            .push(character_id.to_string());
    }

    pub fn for_playground(&self, kind: PlaygroundKind) -> &[String] {
        self.by_playground
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn total(&self) -> usize {
        self.by_playground.values().map(Vec::len).sum()
    }
}

/// Seeds randomized layouts. Each randomize bumps the generation so the
/// sequence of layouts is reproducible from `base`.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaygroundSeed {
    pub base: u64,
    pub generation: u64,
}

impl PlaygroundSeed {
    pub fn new(base: u64) -> Self {
        Self {
            base,
            generation: 0,
        }
    }

    /// Advances to the next generation and returns its RNG.
    pub fn next_rng(&mut self) -> ChaCha8Rng {
        self.generation += 1;
        ChaCha8Rng::seed_from_u64(self.base.wrapping_add(self.generation))
    }
}
