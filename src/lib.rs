//! # MORPHOGEN
//!
//! Anatomy editor core for a grid-based cellular life simulator.
//!
//! ## Features
//!
//! - **Typed coordinates**: absolute grid positions and anchor-relative
//!   anatomy positions are distinct types, so the two spaces never mix
//! - **Invariant-enforcing mutations**: anchor protection, add-vs-replace
//!   disambiguation, connectivity-preserving removal
//! - **Derived species identity**: reclassified after every structural change
//! - **Population scatter**: bulk random placement into a target environment
//! - **Reproducible**: seeded random number generation
//! - **Configurable**: YAML configuration files
//!
//! ## Quick Start
//!
//! ```rust
//! use morphogen::{AbsoluteCoord, CellState, EditorConfig, OrganismEditor};
//!
//! // Editor holding the default single-cell organism on a 15x15 grid.
//! let mut editor = OrganismEditor::new_with_seed(EditorConfig::default(), 42);
//! let center = editor.grid.center();
//!
//! // Grow the body one cell to the east of the anchor.
//! let at = AbsoluteCoord::new(center.col + 1, center.row);
//! let outcome = editor.apply_cell_edit(at, CellState::Producer);
//!
//! assert!(outcome.is_applied());
//! assert_eq!(editor.organism.anatomy.cell_count(), 2);
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use morphogen::EditorConfig;
//!
//! let mut config = EditorConfig::default();
//! config.grid.cols = 21;
//! config.grid.rows = 21;
//! config.scatter.margin = 4;
//! ```

pub mod anatomy;
pub mod cell;
pub mod config;
pub mod coord;
pub mod editor;
pub mod environment;
pub mod generator;
pub mod grid;
pub mod organism;
pub mod render;
pub mod species;

// Re-export main types
pub use anatomy::Anatomy;
pub use cell::{Cell, CellState};
pub use config::EditorConfig;
pub use coord::{AbsoluteCoord, LocalCoord};
pub use editor::{EditOutcome, OrganismEditor};
pub use environment::{ScatterOutcome, ScatterTarget};
pub use generator::RandomOrganismGenerator;
pub use grid::GridSurface;
pub use organism::Organism;
pub use render::{NullRenderer, Renderer};
pub use species::SpeciesDescriptor;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_quick_editing_session() {
        let mut editor = OrganismEditor::new_with_seed(EditorConfig::default(), 7);
        let center = editor.grid.center();

        let outcome =
            editor.apply_cell_edit(AbsoluteCoord::new(center.col, center.row + 1), CellState::Eye);

        assert!(outcome.is_applied());
        assert_eq!(editor.organism.anatomy.cell_count(), 2);
    }
}
