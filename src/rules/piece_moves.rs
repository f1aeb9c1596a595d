//! Checkers piece movement rules
//!
//! Contains the rules for how men and kings move and capture.
//! Pure functions with no side effects - easy to test.
//!
//! Both generators are per-piece queries over an immutable board snapshot.
//! They know nothing about whose turn it is or about the mandatory-capture
//! rule; board-wide aggregation lives in [`crate::rules::mandatory`].

use crate::pieces::{PieceColor, PieceRank};
use crate::rules::board_state::BoardState;
use crate::types::Square;

/// The four diagonal directions as (row delta, col delta)
pub const ALL_DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// The two forward diagonals for a side
fn forward_diagonals(color: PieceColor) -> [(i8, i8); 2] {
    let dr = color.forward_delta();
    [(dr, -1), (dr, 1)]
}

/// All non-capture destinations for the piece on `from`
///
/// A man steps one square along its two forward diagonals. A king slides
/// along all four diagonals, any distance, up to the first occupied square
/// or the board edge. Returns an empty list when `from` is empty.
pub fn simple_moves(board: &BoardState, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let mut destinations = Vec::new();
    match piece.rank {
        PieceRank::Man => {
            for (dr, dc) in forward_diagonals(piece.color) {
                if let Some(dest) = from.offset(dr, dc) {
                    if board.is_empty(dest) {
                        destinations.push(dest);
                    }
                }
            }
        }
        PieceRank::King => {
            for (dr, dc) in ALL_DIAGONALS {
                let mut current = from;
                while let Some(next) = current.offset(dr, dc) {
                    if !board.is_empty(next) {
                        break;
                    }
                    destinations.push(next);
                    current = next;
                }
            }
        }
    }
    destinations
}

/// All capture moves for the piece on `from`, as (destination, captured) pairs
///
/// A man jumps an adjacent opponent piece along a forward diagonal when the
/// square beyond it is free. A king walks each diagonal: the first piece it
/// meets must be an opponent (an own piece ends the ray), and every
/// consecutive empty square past that piece is a landing square. A second
/// piece directly behind the first ends the ray - a king captures at most
/// one piece per diagonal run.
pub fn capture_moves(board: &BoardState, from: Square) -> Vec<(Square, Square)> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let mut captures = Vec::new();
    match piece.rank {
        PieceRank::Man => {
            for (dr, dc) in forward_diagonals(piece.color) {
                let Some(adjacent) = from.offset(dr, dc) else {
                    continue;
                };
                let Some(landing) = adjacent.offset(dr, dc) else {
                    continue;
                };
                if board.color_at(adjacent) == Some(piece.color.opponent())
                    && board.is_empty(landing)
                {
                    captures.push((landing, adjacent));
                }
            }
        }
        PieceRank::King => {
            for (dr, dc) in ALL_DIAGONALS {
                let mut captured: Option<Square> = None;
                let mut current = from;
                while let Some(next) = current.offset(dr, dc) {
                    match board.color_at(next) {
                        // Own piece blocks the ray outright
                        Some(color) if color == piece.color => break,
                        Some(_) => {
                            // A second piece behind the first ends the ray
                            if captured.is_some() {
                                break;
                            }
                            captured = Some(next);
                        }
                        None => {
                            if let Some(victim) = captured {
                                captures.push((next, victim));
                            }
                        }
                    }
                    current = next;
                }
            }
        }
    }
    captures
}
