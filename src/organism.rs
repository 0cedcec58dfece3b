//! Organism aggregate: anchor, anatomy, and species identity.

use crate::anatomy::Anatomy;
use crate::coord::AbsoluteCoord;
use crate::grid::GridSurface;
use crate::species::SpeciesDescriptor;
use serde::{Deserialize, Serialize};

/// A designed organism: one anatomy anchored at an absolute grid position.
///
/// The species slot starts out unclassified and is filled by whoever owns the
/// organism; the editor reclassifies it after every structural change.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Organism {
    /// Absolute grid position of the anatomy's origin cell.
    pub anchor: AbsoluteCoord,
    pub anatomy: Anatomy,
    pub species: Option<SpeciesDescriptor>,
}

impl Organism {
    /// Create an organism with an empty anatomy.
    pub fn new(anchor: AbsoluteCoord) -> Self {
        Self {
            anchor,
            anatomy: Anatomy::new(),
            species: None,
        }
    }

    /// Create a structurally independent copy of `source` at a new anchor.
    ///
    /// The anatomy is deep-copied; the copy keeps the source's species slot
    /// and carries no tie to the source's grid.
    pub fn copy_of(source: &Organism, anchor: AbsoluteCoord) -> Self {
        Self {
            anchor,
            anatomy: source.anatomy.clone(),
            species: source.species.clone(),
        }
    }

    /// Write every anatomy cell onto `grid` at its absolute position.
    ///
    /// Cells that would land outside the grid are dropped by the surface.
    pub fn project_onto(&self, grid: &mut GridSurface) {
        for cell in self.anatomy.cells() {
            if let Some(abs) = cell.loc.to_absolute(self.anchor) {
                grid.set_cell(abs, cell.state);
            }
        }
    }
}
