//! Random organism construction, bounded by the hosting editor's grid.

use crate::cell::CellState;
use crate::config::EditorConfig;
use crate::coord::LocalCoord;
use crate::grid::GridSurface;
use crate::organism::Organism;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Grows random organism bodies one feasible cell at a time.
///
/// The generator owns its random stream so a fixed seed reproduces the same
/// sequence of bodies regardless of what else the editor draws.
pub struct RandomOrganismGenerator {
    rng: ChaCha8Rng,
    growth_attempts: usize,
    max_body_radius_frac: f32,
    anchor_state: CellState,
}

impl RandomOrganismGenerator {
    /// Create a generator with a random seed.
    pub fn new(config: &EditorConfig) -> Self {
        let seed = config
            .generator
            .seed
            .unwrap_or_else(|| rand::thread_rng().gen());
        Self::new_with_seed(config, seed)
    }

    /// Create a generator with a specific seed for reproducibility.
    pub fn new_with_seed(config: &EditorConfig, seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            growth_attempts: config.generator.growth_attempts,
            max_body_radius_frac: config.generator.max_body_radius_frac,
            anchor_state: config.editing.default_state,
        }
    }

    /// Generate a fresh organism anchored at the host grid's center.
    ///
    /// The body starts as the default anchor cell and grows by repeatedly
    /// trying to attach a random living cell next to a random existing one.
    /// Growth is capped to a radius derived from the host so the result fits
    /// the editing surface. Attempts that land on occupied or detached
    /// coordinates are simply skipped, so bodies vary in size.
    pub fn generate(&mut self, host: &GridSurface) -> Organism {
        let (cols, rows) = host.dimensions();
        let radius =
            ((cols.min(rows) as f32 / 2.0 * self.max_body_radius_frac).floor() as i32).max(1);

        let mut organism = Organism::new(host.center());
        organism.anatomy.add_cell(self.anchor_state, LocalCoord::ORIGIN);

        for _ in 0..self.growth_attempts {
            // Sorted snapshot so the pick is deterministic under one seed.
            let mut occupied: Vec<LocalCoord> = organism.anatomy.cells().map(|c| c.loc).collect();
            occupied.sort();

            let base = occupied[self.rng.gen_range(0..occupied.len())];
            let loc = LocalCoord::new(
                base.col + self.rng.gen_range(-1i32..=1),
                base.row + self.rng.gen_range(-1i32..=1),
            );

            if loc.col.abs() > radius || loc.row.abs() > radius {
                continue;
            }
            if !organism.anatomy.can_place_at(loc) {
                continue;
            }

            let state = CellState::LIVING[self.rng.gen_range(0..CellState::LIVING.len())];
            organism.anatomy.add_cell(state, loc);
        }

        organism
    }
}
