//! Coordinate types for the 8x8 board
//!
//! Provides a bounds-checked square newtype so the rest of the engine never
//! handles raw, possibly off-board coordinates. Once a [`Square`] exists it
//! is on the board by construction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of rows (and columns) on the board
pub const BOARD_SIZE: u8 = 8;

/// Board position as (row, col)
///
/// Valid squares satisfy `row < 8 && col < 8`. Row 0 is Dark's back rank,
/// row 7 is Light's. Construction goes through [`Square::new`] (asserting)
/// or [`Square::try_new`] (validating), so an out-of-bounds position is
/// unrepresentable past the input boundary.
///
/// Ordering is row-major (row first, then column within a row), which is
/// what gives the mandatory-move set its deterministic iteration order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a square from in-range coordinates
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is 8 or greater. Use [`Square::try_new`]
    /// for unvalidated input such as click coordinates.
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            row < BOARD_SIZE && col < BOARD_SIZE,
            "Square must be in range 0-7"
        );
        Square { row, col }
    }

    /// Create a square from possibly out-of-range coordinates
    ///
    /// Returns `None` when either coordinate leaves the board. This is the
    /// entry point for raw caller input (e.g. a click translated from pixel
    /// coordinates, which can land on a side panel past column 7).
    pub fn try_new(row: i16, col: i16) -> Option<Self> {
        if (0..BOARD_SIZE as i16).contains(&row) && (0..BOARD_SIZE as i16).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Get the row index (0-7)
    pub fn row(self) -> u8 {
        self.row
    }

    /// Get the column index (0-7)
    pub fn col(self) -> u8 {
        self.col
    }

    /// Offset this square by a signed delta
    ///
    /// Returns `None` when the result leaves the board. Move generation
    /// walks diagonals with this, so the walk stops at the edge instead of
    /// wrapping.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        Square::try_new(self.row as i16 + dr as i16, self.col as i16 + dc as i16)
    }

    /// Whether this is a dark square (the playable half of the board)
    ///
    /// All pieces start and stay on dark squares; diagonal movement cannot
    /// leave them.
    pub fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Iterate every square in row-major order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }

    /// Convert to tuple (row, col) for compatibility with existing code
    pub fn to_tuple(self) -> (u8, u8) {
        (self.row, self.col)
    }
}

impl From<(u8, u8)> for Square {
    fn from((row, col): (u8, u8)) -> Self {
        Square::new(row, col)
    }
}

impl From<Square> for (u8, u8) {
    fn from(square: Square) -> Self {
        square.to_tuple()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_in_bounds() {
        assert_eq!(Square::try_new(0, 0), Some(Square::new(0, 0)));
        assert_eq!(Square::try_new(7, 7), Some(Square::new(7, 7)));
        assert_eq!(Square::try_new(3, 4), Some(Square::new(3, 4)));
    }

    #[test]
    fn test_try_new_rejects_out_of_bounds() {
        assert_eq!(Square::try_new(-1, 0), None);
        assert_eq!(Square::try_new(0, -1), None);
        assert_eq!(Square::try_new(8, 0), None);
        assert_eq!(Square::try_new(0, 8), None);
        assert_eq!(Square::try_new(10, 3), None);
    }

    #[test]
    fn test_offset_stays_on_board() {
        let square = Square::new(4, 4);
        assert_eq!(square.offset(-1, -1), Some(Square::new(3, 3)));
        assert_eq!(square.offset(1, 1), Some(Square::new(5, 5)));
    }

    #[test]
    fn test_offset_leaves_board() {
        assert_eq!(Square::new(0, 0).offset(-1, -1), None);
        assert_eq!(Square::new(7, 7).offset(1, 1), None);
        assert_eq!(Square::new(0, 4).offset(-1, 1), None);
    }

    #[test]
    fn test_ordering_is_row_major() {
        // Row dominates; column breaks ties within a row
        assert!(Square::new(0, 7) < Square::new(1, 0));
        assert!(Square::new(3, 2) < Square::new(3, 5));

        let all: Vec<Square> = Square::all().collect();
        let mut sorted = all.clone();
        sorted.sort();
        assert_eq!(all, sorted, "Square::all() should already be row-major");
        assert_eq!(all.len(), 64);
    }

    #[test]
    fn test_dark_squares() {
        assert!(!Square::new(0, 0).is_dark());
        assert!(Square::new(0, 1).is_dark());
        assert!(Square::new(5, 0).is_dark());
        assert_eq!(Square::all().filter(|s| s.is_dark()).count(), 32);
    }

    #[test]
    fn test_tuple_roundtrip() {
        for square in Square::all() {
            assert_eq!(Square::from(square.to_tuple()), square);
        }
    }
}
