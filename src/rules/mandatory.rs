//! Board-wide legal-move resolution
//!
//! Aggregates per-piece move generation into the authoritative set of legal
//! moves for the side to move, enforcing the mandatory-capture rule: if any
//! capture exists anywhere on the board for that side, only capture moves
//! are legal this turn.
//!
//! The set is recomputed from scratch after every board mutation or turn
//! change; it is never carried stale across a move.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::pieces::PieceColor;
use crate::rules::board_state::BoardState;
use crate::rules::piece_moves::{capture_moves, simple_moves};
use crate::types::Square;

/// A single move: origin, destination, and the captured square for jumps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Square of the captured piece; `None` for a simple move
    pub captured: Option<Square>,
}

impl Move {
    /// A non-capture step or slide
    pub fn simple(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            captured: None,
        }
    }

    /// A jump capturing the piece on `captured`
    pub fn capture(from: Square, to: Square, captured: Square) -> Self {
        Move {
            from,
            to,
            captured: Some(captured),
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// The mandatory-move set: origin square -> legal moves from that origin
///
/// Backed by a `BTreeMap` keyed on [`Square`], whose row-major ordering
/// makes iteration deterministic - the order carries no rule significance
/// but keeps tests and the AI tie-break reproducible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoveSet {
    moves: BTreeMap<Square, Vec<Move>>,
}

impl MoveSet {
    /// A set holding the moves of a single origin
    ///
    /// Used when a capture chain collapses the legal set to the chaining
    /// piece's follow-up jumps.
    pub fn single_origin(origin: Square, moves: Vec<Move>) -> Self {
        let mut set = MoveSet::default();
        for mv in moves {
            debug_assert_eq!(mv.from, origin);
            set.insert(mv);
        }
        set
    }

    fn insert(&mut self, mv: Move) {
        self.moves.entry(mv.from).or_default().push(mv);
    }

    /// Whether no piece of the side has any legal move
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Whether the piece on `origin` has at least one legal move
    pub fn contains(&self, origin: Square) -> bool {
        self.moves.contains_key(&origin)
    }

    /// The legal moves from `origin` (empty slice when it has none)
    pub fn moves_from(&self, origin: Square) -> &[Move] {
        self.moves.get(&origin).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Look up the move from `origin` to `to`, if it is legal
    pub fn find(&self, origin: Square, to: Square) -> Option<Move> {
        self.moves_from(origin).iter().find(|mv| mv.to == to).copied()
    }

    /// Iterate every legal move, origins in row-major order
    pub fn all_moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves.values().flatten().copied()
    }

    /// Iterate (origin, moves) entries in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Square, &[Move])> + '_ {
        self.moves.iter().map(|(sq, moves)| (*sq, moves.as_slice()))
    }

    /// Whether any move in the set is a capture
    ///
    /// With the mandatory rule enforced this means *every* move in the set
    /// is a capture.
    pub fn has_captures(&self) -> bool {
        self.all_moves().any(|mv| mv.is_capture())
    }
}

/// Compute the legal moves of `side` over the whole board
///
/// Scans all cells in row-major order collecting capture moves; when any
/// exist, the result holds only captures. Simple moves are considered only
/// when zero captures exist board-wide for the side.
pub fn legal_moves(board: &BoardState, side: PieceColor) -> MoveSet {
    let mut set = MoveSet::default();

    for (square, _) in board.pieces_of(side) {
        for (dest, captured) in capture_moves(board, square) {
            set.insert(Move::capture(square, dest, captured));
        }
    }
    if !set.is_empty() {
        return set;
    }

    for (square, _) in board.pieces_of(side) {
        for dest in simple_moves(board, square) {
            set.insert(Move::simple(square, dest));
        }
    }
    set
}
