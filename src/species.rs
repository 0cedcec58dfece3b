//! Species classification: structural identity derived from an anatomy snapshot.

use crate::anatomy::Anatomy;
use crate::cell::CellState;
use crate::coord::LocalCoord;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// Name fragments keyed by the body's dominant cell state.
fn name_root(dominant: Option<CellState>) -> &'static str {
    match dominant {
        Some(CellState::Mouth) => "Vora",
        Some(CellState::Producer) => "Flora",
        Some(CellState::Mover) => "Curso",
        Some(CellState::Killer) => "Preda",
        Some(CellState::Armor) => "Scuta",
        Some(CellState::Eye) => "Specta",
        _ => "Proto",
    }
}

static NAME_SUFFIXES: &[&str] = &[
    "ceps", "derm", "pod", "zoa", "morph", "gaster", "soma", "blast",
];

/// Derived structural identity of an anatomy, used to group organisms.
///
/// A descriptor is disposable: the editor recomputes it after every
/// successful structural mutation, always fresh with zero observations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeciesDescriptor {
    /// Generated human-readable name.
    pub name: String,
    /// Hash over the sorted (coordinate, state) set.
    pub structural_hash: u64,
    /// Number of cells in the classified anatomy.
    pub cell_count: usize,
    /// Cells per state.
    pub composition: BTreeMap<CellState, usize>,
    /// How many individuals of this species have been observed.
    pub observations: u32,
}

impl SpeciesDescriptor {
    /// Classify an anatomy snapshot.
    ///
    /// `prior` carries an earlier descriptor whose name the new one keeps
    /// when present; the editor always passes `None`, treating every
    /// structural change as a brand-new identity.
    pub fn classify(
        anatomy: &Anatomy,
        prior: Option<&SpeciesDescriptor>,
        observations: u32,
    ) -> Self {
        let mut cells: Vec<(LocalCoord, CellState)> =
            anatomy.cells().map(|c| (c.loc, c.state)).collect();
        cells.sort();

        let mut hasher = DefaultHasher::new();
        cells.hash(&mut hasher);
        let structural_hash = hasher.finish();

        let mut composition: BTreeMap<CellState, usize> = BTreeMap::new();
        for &(_, state) in &cells {
            *composition.entry(state).or_insert(0) += 1;
        }

        let name = match prior {
            Some(p) => p.name.clone(),
            None => Self::generate_name(&composition, structural_hash),
        };

        Self {
            name,
            structural_hash,
            cell_count: cells.len(),
            composition,
            observations,
        }
    }

    /// Two descriptors denote the same species when their structures match.
    #[inline]
    pub fn same_species(&self, other: &SpeciesDescriptor) -> bool {
        self.structural_hash == other.structural_hash
    }

    fn generate_name(composition: &BTreeMap<CellState, usize>, hash: u64) -> String {
        let dominant = composition
            .iter()
            .max_by_key(|&(state, count)| (*count, *state))
            .map(|(&state, _)| state);

        let suffix = NAME_SUFFIXES[(hash % NAME_SUFFIXES.len() as u64) as usize];
        format!("{}{}-{:04x}", name_root(dominant), suffix, hash & 0xffff)
    }
}
