//! Sparse anatomy model: typed cells keyed by anchor-relative coordinates.

use crate::cell::{Cell, CellState};
use crate::coord::LocalCoord;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// An organism's body: a set of typed cells in local coordinates.
///
/// Invariants: at most one cell per coordinate, and once seeded the anchor
/// cell at the origin stays occupied. The anchor's state may change through
/// [`Anatomy::replace_cell`] but [`Anatomy::remove_cell`] refuses to take it
/// out, as it refuses any removal that would split the body in two.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Anatomy {
    cells: HashMap<LocalCoord, Cell>,
}

impl Anatomy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the cell at a local coordinate.
    #[inline]
    pub fn cell_at(&self, loc: LocalCoord) -> Option<&Cell> {
        self.cells.get(&loc)
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate all cells. Order is unspecified.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    /// Count cells holding `state`.
    pub fn count_of(&self, state: CellState) -> usize {
        self.cells.values().filter(|c| c.state == state).count()
    }

    /// Feasibility predicate for new cells: the coordinate must be vacant and
    /// touch at least one existing cell (diagonals count).
    pub fn can_place_at(&self, loc: LocalCoord) -> bool {
        !self.cells.contains_key(&loc) && self.cells.values().any(|c| c.loc.is_adjacent(loc))
    }

    /// Insert a new cell at a vacant coordinate.
    ///
    /// Returns `None` if the coordinate is occupied. Feasibility is the
    /// caller's check; seeding the anchor on an empty body goes through here
    /// directly since nothing exists to be adjacent to yet.
    pub fn add_cell(&mut self, state: CellState, loc: LocalCoord) -> Option<&Cell> {
        if self.cells.contains_key(&loc) {
            return None;
        }
        self.cells.insert(loc, Cell::new(state, loc));
        self.cells.get(&loc)
    }

    /// Change the state of an existing cell in place.
    ///
    /// This is a replace, not a remove plus add, so the cell's place in the
    /// body's connectivity is untouched. Callers replacing the anchor pass
    /// `is_anchor`; the call is refused when the flag disagrees with the
    /// coordinate.
    pub fn replace_cell(
        &mut self,
        state: CellState,
        loc: LocalCoord,
        is_anchor: bool,
    ) -> Option<&Cell> {
        if is_anchor && !loc.is_origin() {
            return None;
        }
        let cell = self.cells.get_mut(&loc)?;
        cell.state = state;
        Some(&*cell)
    }

    /// Remove the cell at a coordinate.
    ///
    /// Returns false without mutating when the coordinate is vacant, is the
    /// anchor, or when removal would disconnect the remaining cells from the
    /// anchor.
    pub fn remove_cell(&mut self, loc: LocalCoord) -> bool {
        if loc.is_origin() || !self.cells.contains_key(&loc) {
            return false;
        }
        if !self.connected_without(loc) {
            return false;
        }
        self.cells.remove(&loc);
        true
    }

    /// Flood fill from the anchor, pretending `removed` is gone. True when
    /// every other cell is still reachable.
    fn connected_without(&self, removed: LocalCoord) -> bool {
        let mut reached = HashSet::new();
        reached.insert(LocalCoord::ORIGIN);
        let mut frontier = vec![LocalCoord::ORIGIN];

        while let Some(current) = frontier.pop() {
            for cell in self.cells.values() {
                if cell.loc == removed || reached.contains(&cell.loc) {
                    continue;
                }
                if current.is_adjacent(cell.loc) {
                    reached.insert(cell.loc);
                    frontier.push(cell.loc);
                }
            }
        }

        reached.len() == self.cells.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Anatomy {
        let mut anatomy = Anatomy::new();
        anatomy.add_cell(CellState::Mouth, LocalCoord::ORIGIN);
        anatomy
    }

    #[test]
    fn test_add_cell_requires_vacancy() {
        let mut anatomy = seeded();

        assert!(anatomy.add_cell(CellState::Producer, LocalCoord::ORIGIN).is_none());
        assert!(anatomy.add_cell(CellState::Producer, LocalCoord::new(1, 0)).is_some());
        assert_eq!(anatomy.cell_count(), 2);
    }

    #[test]
    fn test_can_place_at_adjacency() {
        let anatomy = seeded();

        assert!(anatomy.can_place_at(LocalCoord::new(1, 0)));
        assert!(anatomy.can_place_at(LocalCoord::new(-1, -1)));
        assert!(!anatomy.can_place_at(LocalCoord::ORIGIN)); // occupied
        assert!(!anatomy.can_place_at(LocalCoord::new(2, 0))); // detached
    }

    #[test]
    fn test_can_place_at_on_empty_body() {
        let anatomy = Anatomy::new();
        assert!(!anatomy.can_place_at(LocalCoord::ORIGIN));
    }

    #[test]
    fn test_replace_preserves_count() {
        let mut anatomy = seeded();

        let replaced = anatomy.replace_cell(CellState::Eye, LocalCoord::ORIGIN, true);
        assert_eq!(replaced.map(|c| c.state), Some(CellState::Eye));
        assert_eq!(anatomy.cell_count(), 1);
    }

    #[test]
    fn test_replace_rejects_bad_anchor_flag() {
        let mut anatomy = seeded();
        anatomy.add_cell(CellState::Producer, LocalCoord::new(1, 0));

        assert!(anatomy
            .replace_cell(CellState::Eye, LocalCoord::new(1, 0), true)
            .is_none());
        assert_eq!(anatomy.count_of(CellState::Producer), 1);
    }

    #[test]
    fn test_replace_absent_cell() {
        let mut anatomy = seeded();
        assert!(anatomy
            .replace_cell(CellState::Eye, LocalCoord::new(3, 3), false)
            .is_none());
    }

    #[test]
    fn test_remove_protects_anchor() {
        let mut anatomy = seeded();

        assert!(!anatomy.remove_cell(LocalCoord::ORIGIN));
        assert_eq!(anatomy.cell_count(), 1);
    }

    #[test]
    fn test_remove_leaf_cell() {
        let mut anatomy = seeded();
        anatomy.add_cell(CellState::Producer, LocalCoord::new(1, 0));

        assert!(anatomy.remove_cell(LocalCoord::new(1, 0)));
        assert_eq!(anatomy.cell_count(), 1);
        assert!(anatomy.cell_at(LocalCoord::new(1, 0)).is_none());
    }

    #[test]
    fn test_remove_vacant_is_refused() {
        let mut anatomy = seeded();
        assert!(!anatomy.remove_cell(LocalCoord::new(1, 1)));
    }

    #[test]
    fn test_remove_refuses_to_disconnect() {
        // A chain: anchor - bridge - tip. Removing the bridge strands the tip.
        let mut anatomy = seeded();
        anatomy.add_cell(CellState::Producer, LocalCoord::new(1, 0));
        anatomy.add_cell(CellState::Eye, LocalCoord::new(2, 0));

        assert!(!anatomy.remove_cell(LocalCoord::new(1, 0)));
        assert_eq!(anatomy.cell_count(), 3);

        // The tip itself is removable.
        assert!(anatomy.remove_cell(LocalCoord::new(2, 0)));
        assert!(anatomy.remove_cell(LocalCoord::new(1, 0)));
        assert_eq!(anatomy.cell_count(), 1);
    }

    #[test]
    fn test_diagonal_connectivity_counts() {
        let mut anatomy = seeded();
        anatomy.add_cell(CellState::Producer, LocalCoord::new(1, 0));
        anatomy.add_cell(CellState::Eye, LocalCoord::new(2, 1));

        // The tip touches the bridge only diagonally, but that keeps it
        // connected to the anchor through (1, 0).
        assert!(!anatomy.remove_cell(LocalCoord::new(1, 0)));

        // A ring around the removal point keeps everything reachable.
        anatomy.add_cell(CellState::Armor, LocalCoord::new(1, 1));
        assert!(anatomy.remove_cell(LocalCoord::new(1, 0)));
        assert_eq!(anatomy.cell_count(), 3);
    }
}
