//! Organism editing core: coordinate translation, structural mutation,
//! lifecycle operations, and population scatter.

use crate::cell::CellState;
use crate::config::EditorConfig;
use crate::coord::{AbsoluteCoord, LocalCoord};
use crate::environment::{ScatterOutcome, ScatterTarget};
use crate::generator::RandomOrganismGenerator;
use crate::grid::GridSurface;
use crate::organism::Organism;
use crate::render::{NullRenderer, Renderer};
use crate::species::SpeciesDescriptor;
use log::{debug, warn};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Prime multiplier deriving the generator's random stream from the editor
/// seed, so body growth and scatter positions never share a sequence.
const GENERATOR_STREAM_PRIME: u64 = 7919;

/// What became of a requested cell edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The anatomy changed; grid, redraw, and species followed.
    Applied,
    /// Nothing to do (removing from a vacant coordinate).
    Ignored,
    /// The anatomy model refused the change; no side effects.
    RejectedInfeasible,
    /// Removal targeted the anchor cell; no side effects.
    RejectedAnchorProtected,
}

impl EditOutcome {
    #[inline]
    pub fn is_applied(self) -> bool {
        self == EditOutcome::Applied
    }
}

/// Interactive editor for one organism's anatomy on a fixed-size grid.
///
/// The editor owns the grid surface and the organism under edit, keeps the
/// two synchronized, and reclassifies the organism's species after every
/// successful structural change. The organism slot is replaced wholesale by
/// the lifecycle operations and never aliased.
pub struct OrganismEditor {
    pub grid: GridSurface,
    pub organism: Organism,
    pub config: EditorConfig,
    /// Highlight overlays draw only while the editor is active.
    pub is_active: bool,

    generator: RandomOrganismGenerator,
    renderer: Box<dyn Renderer>,
    rng: ChaCha8Rng,
}

impl OrganismEditor {
    /// Create an editor with a random seed, holding the default organism.
    pub fn new(config: EditorConfig) -> Self {
        let seed = config
            .generator
            .seed
            .unwrap_or_else(|| rand::thread_rng().gen());
        Self::new_with_seed(config, seed)
    }

    /// Create an editor with a specific seed for reproducibility.
    pub fn new_with_seed(config: EditorConfig, seed: u64) -> Self {
        Self::with_renderer_and_seed(config, Box::new(NullRenderer), seed)
    }

    /// Create an editor drawing through `renderer`.
    pub fn with_renderer_and_seed(
        config: EditorConfig,
        renderer: Box<dyn Renderer>,
        seed: u64,
    ) -> Self {
        let grid = GridSurface::new(config.grid.cols, config.grid.rows);
        let generator =
            RandomOrganismGenerator::new_with_seed(&config, seed.wrapping_mul(GENERATOR_STREAM_PRIME));

        let mut editor = Self {
            organism: Organism::new(grid.center()),
            grid,
            config,
            is_active: true,
            generator,
            renderer,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        editor.set_default_organism();
        editor
    }

    /// Render tick: draws highlight overlays while the editor is active.
    /// Idempotent, no effect beyond drawing.
    pub fn update(&mut self) {
        if self.is_active {
            self.renderer.render_highlights(&self.grid);
        }
    }

    fn render_full(&mut self) {
        self.renderer.render_full_grid(&self.grid);
    }

    /// Write a state to the grid and request a redraw.
    fn change_cell(&mut self, at: AbsoluteCoord, state: CellState) {
        self.grid.set_cell(at, state);
        self.render_full();
    }

    /// Post-mutation hook: every successful structural change lands here, so
    /// the species descriptor can never go stale. Always a fresh descriptor
    /// with zero observations.
    fn reclassify(&mut self) {
        self.organism.species = Some(SpeciesDescriptor::classify(&self.organism.anatomy, None, 0));
    }

    /// Place or replace a cell at an absolute grid position.
    ///
    /// An occupied local coordinate is replaced in place; a vacant one is
    /// added when the anatomy's feasibility predicate allows it. Infeasible
    /// edits are quiet rejections.
    pub fn apply_cell_edit(&mut self, at: AbsoluteCoord, state: CellState) -> EditOutcome {
        let local = at.to_local(self.grid.center());

        let existing = self.organism.anatomy.cell_at(local).map(|c| c.loc);
        if let Some(loc) = existing {
            self.organism
                .anatomy
                .replace_cell(state, loc, loc.is_origin());
            self.change_cell(at, state);
            self.reclassify();
            EditOutcome::Applied
        } else if self.organism.anatomy.can_place_at(local) {
            self.organism.anatomy.add_cell(state, local);
            self.change_cell(at, state);
            self.reclassify();
            EditOutcome::Applied
        } else {
            debug!("edit at {:?} infeasible, no adjacent structure", local);
            EditOutcome::RejectedInfeasible
        }
    }

    /// Remove the cell at an absolute grid position.
    ///
    /// The anchor cell is protected; the rejection is the one edit that
    /// warrants a user-visible warning. The anatomy may also refuse removals
    /// that would split the body.
    pub fn remove_cell(&mut self, at: AbsoluteCoord) -> EditOutcome {
        let local = at.to_local(self.grid.center());

        if local.is_origin() {
            warn!("cannot remove the anchor cell");
            return EditOutcome::RejectedAnchorProtected;
        }
        if self.organism.anatomy.cell_at(local).is_none() {
            return EditOutcome::Ignored;
        }
        if self.organism.anatomy.remove_cell(local) {
            self.change_cell(at, CellState::Empty);
            self.reclassify();
            EditOutcome::Applied
        } else {
            debug!("removal at {:?} refused by anatomy", local);
            EditOutcome::RejectedInfeasible
        }
    }

    /// Clear the grid surface to empty.
    pub fn clear(&mut self) {
        self.grid.fill(CellState::Empty);
    }

    /// Reset to the editor's initial state: a single-cell organism of the
    /// configured starting type, anchored at grid center.
    pub fn set_default_organism(&mut self) {
        self.clear();
        let center = self.grid.center();

        let mut organism = Organism::new(center);
        organism
            .anatomy
            .add_cell(self.config.editing.default_state, LocalCoord::ORIGIN);
        self.organism = organism;

        self.organism.project_onto(&mut self.grid);
        self.render_full();
        self.reclassify();
    }

    /// Replace the edited organism with an independent copy of `source`,
    /// anchored at grid center.
    ///
    /// The copy keeps whatever species slot it arrives with; unlike the
    /// single-cell mutations this does not reclassify.
    pub fn set_organism_to_copy_of(&mut self, source: &Organism) {
        self.clear();
        self.organism = Organism::copy_of(source, self.grid.center());
        self.organism.project_onto(&mut self.grid);
        self.render_full();
    }

    /// Hand the current design off: an independent copy anchored at absolute
    /// (0, 0), detached from this editor's grid.
    pub fn copy_of_current(&self) -> Organism {
        Organism::copy_of(&self.organism, AbsoluteCoord::new(0, 0))
    }

    /// Replace the edited organism with a freshly generated random one.
    pub fn create_random_organism(&mut self) {
        self.clear();
        self.organism = self.generator.generate(&self.grid);
        self.organism.project_onto(&mut self.grid);
        self.render_full();
        self.reclassify();
    }

    /// Populate `target` with `count` freshly generated organisms at
    /// randomized, edge-avoiding positions.
    ///
    /// The target confirms its own reset first; declining aborts the whole
    /// operation before any generation. Placements do not collision-check
    /// against each other.
    pub fn scatter_random_organisms(
        &mut self,
        target: &mut dyn ScatterTarget,
        count: usize,
    ) -> ScatterOutcome {
        if !target.reset(true) {
            return ScatterOutcome::ResetDeclined;
        }
        if count == 0 {
            return ScatterOutcome::Completed { placed: 0 };
        }

        let (cols, rows) = target.dimensions();
        let margin = self.config.scatter.margin;
        if cols <= 2 * margin || rows <= 2 * margin {
            warn!(
                "scatter target {}x{} cannot honor margin {}",
                cols, rows, margin
            );
            return ScatterOutcome::TargetTooSmall;
        }

        for _ in 0..count {
            let mut organism = self.generator.generate(&self.grid);
            organism.species = Some(SpeciesDescriptor::classify(&organism.anatomy, None, 0));

            let at = AbsoluteCoord::new(
                self.rng.gen_range(margin..cols - margin),
                self.rng.gen_range(margin..rows - margin),
            );
            target.drop_organism(organism, at);
        }

        debug!("scattered {} organisms into target", count);
        ScatterOutcome::Completed { placed: count }
    }
}
