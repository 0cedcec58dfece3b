//! Grid surface: the absolute-coordinate cell store the editor projects onto.

use crate::cell::CellState;
use crate::coord::AbsoluteCoord;
use serde::{Deserialize, Serialize};

/// A fixed-size rectangular store of cell states.
///
/// The grid's contents are a rendering projection of the edited organism plus
/// empty background, never an independent source of truth. Out-of-bounds reads
/// return [`CellState::Empty`]; out-of-bounds writes are dropped. Bounds
/// policing belongs to the input controller upstream.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridSurface {
    cols: usize,
    rows: usize,
    /// cells[row][col]
    cells: Vec<Vec<CellState>>,
}

impl GridSurface {
    /// Create a new grid filled with empty cells.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![vec![CellState::Empty; cols]; rows],
        }
    }

    /// Grid dimensions as (cols, rows).
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The grid's center cell, the default anchor position while editing.
    #[inline]
    pub fn center(&self) -> AbsoluteCoord {
        AbsoluteCoord::new(self.cols / 2, self.rows / 2)
    }

    /// Set every cell to `state`.
    pub fn fill(&mut self, state: CellState) {
        for row in &mut self.cells {
            for cell in row {
                *cell = state;
            }
        }
    }

    /// Get the state at a position.
    #[inline]
    pub fn get(&self, at: AbsoluteCoord) -> CellState {
        if at.col < self.cols && at.row < self.rows {
            self.cells[at.row][at.col]
        } else {
            CellState::Empty
        }
    }

    /// Set the state at a position.
    #[inline]
    pub fn set_cell(&mut self, at: AbsoluteCoord, state: CellState) {
        if at.col < self.cols && at.row < self.rows {
            self.cells[at.row][at.col] = state;
        }
    }

    /// Iterate all cells with their positions, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (AbsoluteCoord, CellState)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, states)| {
            states
                .iter()
                .enumerate()
                .map(move |(col, &state)| (AbsoluteCoord::new(col, row), state))
        })
    }

    /// Count cells currently holding `state`.
    pub fn count_of(&self, state: CellState) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == state)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = GridSurface::new(15, 15);

        assert_eq!(grid.dimensions(), (15, 15));
        assert_eq!(grid.count_of(CellState::Empty), 225);
    }

    #[test]
    fn test_center() {
        assert_eq!(GridSurface::new(15, 15).center(), AbsoluteCoord::new(7, 7));
        assert_eq!(GridSurface::new(16, 10).center(), AbsoluteCoord::new(8, 5));
        assert_eq!(GridSurface::new(1, 1).center(), AbsoluteCoord::new(0, 0));
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = GridSurface::new(15, 15);
        let at = AbsoluteCoord::new(8, 7);

        grid.set_cell(at, CellState::Mouth);
        assert_eq!(grid.get(at), CellState::Mouth);
        assert_eq!(grid.get(AbsoluteCoord::new(7, 7)), CellState::Empty);
    }

    #[test]
    fn test_out_of_bounds_policy() {
        let mut grid = GridSurface::new(10, 10);

        // Dropped write, empty read.
        grid.set_cell(AbsoluteCoord::new(10, 3), CellState::Wall);
        assert_eq!(grid.get(AbsoluteCoord::new(10, 3)), CellState::Empty);
        assert_eq!(grid.count_of(CellState::Wall), 0);
    }

    #[test]
    fn test_fill() {
        let mut grid = GridSurface::new(5, 5);
        grid.set_cell(AbsoluteCoord::new(2, 2), CellState::Mouth);

        grid.fill(CellState::Empty);
        assert_eq!(grid.count_of(CellState::Empty), 25);
    }

    #[test]
    fn test_iter_covers_grid() {
        let mut grid = GridSurface::new(3, 2);
        grid.set_cell(AbsoluteCoord::new(2, 1), CellState::Eye);

        let cells: Vec<_> = grid.iter().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[5], (AbsoluteCoord::new(2, 1), CellState::Eye));
    }
}
