//! Absolute and anatomy-local coordinate spaces.
//!
//! The grid surface addresses cells by unsigned indices; an anatomy addresses
//! its cells relative to the organism's anchor. Keeping the two spaces as
//! distinct types makes every translation an explicit call.

use serde::{Deserialize, Serialize};

/// A position on the grid surface, in grid indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbsoluteCoord {
    pub col: usize,
    pub row: usize,
}

impl AbsoluteCoord {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Express this position relative to `anchor`.
    #[inline]
    pub fn to_local(self, anchor: AbsoluteCoord) -> LocalCoord {
        LocalCoord {
            col: self.col as i32 - anchor.col as i32,
            row: self.row as i32 - anchor.row as i32,
        }
    }
}

/// A position relative to an organism's anchor cell.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct LocalCoord {
    pub col: i32,
    pub row: i32,
}

impl LocalCoord {
    /// The anchor cell's own coordinate.
    pub const ORIGIN: LocalCoord = LocalCoord { col: 0, row: 0 };

    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    #[inline]
    pub fn is_origin(self) -> bool {
        self == Self::ORIGIN
    }

    /// Express this position in grid indices given `anchor`.
    ///
    /// Returns `None` when the result would fall left of or above the grid
    /// origin; positions past the far edges are the grid's concern.
    pub fn to_absolute(self, anchor: AbsoluteCoord) -> Option<AbsoluteCoord> {
        let col = anchor.col as i32 + self.col;
        let row = anchor.row as i32 + self.row;
        if col < 0 || row < 0 {
            return None;
        }
        Some(AbsoluteCoord {
            col: col as usize,
            row: row as usize,
        })
    }

    /// Chebyshev distance to another local coordinate.
    #[inline]
    pub fn chebyshev(self, other: LocalCoord) -> i32 {
        (self.col - other.col).abs().max((self.row - other.row).abs())
    }

    /// True when `other` touches this coordinate, diagonals included.
    #[inline]
    pub fn is_adjacent(self, other: LocalCoord) -> bool {
        self != other && self.chebyshev(other) <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_is_subtraction() {
        let anchor = AbsoluteCoord::new(7, 7);

        assert_eq!(AbsoluteCoord::new(7, 7).to_local(anchor), LocalCoord::ORIGIN);
        assert_eq!(AbsoluteCoord::new(8, 7).to_local(anchor), LocalCoord::new(1, 0));
        assert_eq!(AbsoluteCoord::new(5, 9).to_local(anchor), LocalCoord::new(-2, 2));
    }

    #[test]
    fn test_translation_roundtrip() {
        let anchor = AbsoluteCoord::new(10, 4);

        for (col, row) in [(0, 0), (10, 4), (12, 3), (19, 9)] {
            let abs = AbsoluteCoord::new(col, row);
            let back = abs.to_local(anchor).to_absolute(anchor);
            assert_eq!(back, Some(abs));
        }
    }

    #[test]
    fn test_to_absolute_rejects_negative() {
        let anchor = AbsoluteCoord::new(1, 1);

        assert_eq!(LocalCoord::new(-2, 0).to_absolute(anchor), None);
        assert_eq!(LocalCoord::new(0, -2).to_absolute(anchor), None);
        assert_eq!(
            LocalCoord::new(-1, -1).to_absolute(anchor),
            Some(AbsoluteCoord::new(0, 0))
        );
    }

    #[test]
    fn test_adjacency() {
        let origin = LocalCoord::ORIGIN;

        assert!(origin.is_adjacent(LocalCoord::new(1, 0)));
        assert!(origin.is_adjacent(LocalCoord::new(-1, 1)));
        assert!(origin.is_adjacent(LocalCoord::new(1, 1)));
        assert!(!origin.is_adjacent(origin));
        assert!(!origin.is_adjacent(LocalCoord::new(2, 0)));
        assert!(!origin.is_adjacent(LocalCoord::new(2, 2)));
    }
}
