//! Turn sequencing
//!
//! Tracks whose turn it is and how many full moves have been played.

use crate::pieces::PieceColor;

/// Whose turn it is, plus the full-move counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentTurn {
    /// The side to move
    pub color: PieceColor,
    /// Move number (increments after both players have moved)
    pub move_number: u32,
}

impl Default for CurrentTurn {
    fn default() -> Self {
        Self {
            color: PieceColor::Light,
            move_number: 1,
        }
    }
}

impl CurrentTurn {
    /// Switch to the other side's turn
    ///
    /// The move number increments when play returns to Light.
    pub fn advance(&mut self) {
        self.color = match self.color {
            PieceColor::Light => PieceColor::Dark,
            PieceColor::Dark => {
                self.move_number += 1;
                PieceColor::Light
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_turn_default() {
        let turn = CurrentTurn::default();
        assert_eq!(turn.color, PieceColor::Light);
        assert_eq!(turn.move_number, 1);
    }

    #[test]
    fn test_current_turn_advance() {
        let mut turn = CurrentTurn::default();

        turn.advance();
        assert_eq!(turn.color, PieceColor::Dark);
        assert_eq!(turn.move_number, 1);

        turn.advance();
        assert_eq!(turn.color, PieceColor::Light);
        assert_eq!(turn.move_number, 2);
    }
}
