//! Cell states and the anatomy cell record.

use crate::coord::LocalCoord;
use serde::{Deserialize, Serialize};

/// The typed state a grid or anatomy cell can hold.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    /// Background state of the grid surface.
    Empty,
    /// Loose food lying on the grid, not part of any body.
    Food,
    /// Impassable terrain.
    Wall,
    Mouth,
    Producer,
    Mover,
    Killer,
    Armor,
    Eye,
}

impl CellState {
    /// States that form an organism's body.
    pub const LIVING: [CellState; 6] = [
        CellState::Mouth,
        CellState::Producer,
        CellState::Mover,
        CellState::Killer,
        CellState::Armor,
        CellState::Eye,
    ];

    #[inline]
    pub fn is_living(self) -> bool {
        matches!(
            self,
            CellState::Mouth
                | CellState::Producer
                | CellState::Mover
                | CellState::Killer
                | CellState::Armor
                | CellState::Eye
        )
    }
}

/// A single typed cell of an anatomy, keyed by its local coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub state: CellState,
    pub loc: LocalCoord,
}

impl Cell {
    pub fn new(state: CellState, loc: LocalCoord) -> Self {
        Self { state, loc }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_living_states() {
        assert!(CellState::Mouth.is_living());
        assert!(CellState::Eye.is_living());
        assert!(!CellState::Empty.is_living());
        assert!(!CellState::Food.is_living());
        assert!(!CellState::Wall.is_living());

        for state in CellState::LIVING {
            assert!(state.is_living());
        }
    }
}
