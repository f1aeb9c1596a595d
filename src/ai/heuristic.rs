//! Heuristic move scoring for the computer player
//!
//! Scores every candidate by simulating it on a scratch board and summing
//! a handful of static terms. The safety term looks exactly one reply
//! ahead - it asks only whether the landing square can be jumped on the
//! resulting board - which is a known limitation of this heuristic, kept
//! as observed rather than upgraded to a deeper search.

use tracing::debug;

use crate::game::executor::apply_move;
use crate::pieces::PieceColor;
use crate::rules::board_state::BoardState;
use crate::rules::mandatory::{Move, MoveSet};
use crate::rules::piece_moves::capture_moves;
use crate::types::Square;

/// Bonus for any capture
pub const CAPTURE_BONUS: i32 = 100;
/// Additional bonus when the capture leaves a follow-up jump (chain setup)
pub const CHAIN_BONUS: i32 = 500;
/// Bonus for promoting to king
pub const PROMOTION_BONUS: i32 = 200;
/// Weight per row advanced from the side's back rank
pub const ADVANCEMENT_WEIGHT: i32 = 5;
/// Bonus for landing on one of the four center columns
pub const CENTER_BONUS: i32 = 5;
/// Penalty for landing on a square the opponent can immediately jump
pub const UNSAFE_PENALTY: i32 = 150;

/// Pick the best move for `side` from the mandatory-move set
///
/// The pool is the set's capture moves when any exist, otherwise its simple
/// moves - restating board-wide mandatory capture, which the resolver has
/// already enforced upstream. Candidates are scored with [`score_move`];
/// the strictly highest total wins and ties go to the first candidate in
/// the set's row-major enumeration order.
///
/// Returns `None` when the pool is empty: the caller must advance the turn
/// without a move.
pub fn choose_move(board: &BoardState, moves: &MoveSet, side: PieceColor) -> Option<Move> {
    let capture_pool: Vec<Move> = moves.all_moves().filter(Move::is_capture).collect();
    let pool: Vec<Move> = if capture_pool.is_empty() {
        moves.all_moves().collect()
    } else {
        capture_pool
    };

    let mut best: Option<(Move, i32)> = None;
    for candidate in pool {
        let score = score_move(board, &candidate, side);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((candidate, score));
        }
    }

    if let Some((mv, score)) = best {
        debug!(
            "[AI] best move {} -> {} (score {})",
            mv.from, mv.to, score
        );
    }
    best.map(|(mv, _)| mv)
}

/// Score a single candidate move for `side`
///
/// Simulates the move on a scratch clone of the board (through the same
/// executor real moves use, so promotion and chain detection match) and
/// sums the heuristic terms.
pub fn score_move(board: &BoardState, mv: &Move, side: PieceColor) -> i32 {
    let mut scratch = board.clone();
    let Ok(result) = apply_move(&mut scratch, mv, side) else {
        // Unreachable for moves drawn from the mandatory set
        return i32::MIN;
    };

    let mut score = 0;
    if mv.is_capture() {
        score += CAPTURE_BONUS;
        if result.chained_captures.is_some() {
            score += CHAIN_BONUS;
        }
    }
    if result.promoted {
        score += PROMOTION_BONUS;
    }

    score += ADVANCEMENT_WEIGHT * side.advancement(mv.to.row()) as i32;
    if (2..=5).contains(&mv.to.col()) {
        score += CENTER_BONUS;
    }
    if !is_position_safe(&scratch, mv.to, side) {
        score -= UNSAFE_PENALTY;
    }
    score
}

/// Whether the piece on `square` is out of the opponent's immediate reach
///
/// Runs capture generation for every opponent piece on `board` and checks
/// whether any jump takes the piece on `square`. Only this single reply is
/// considered; multi-move consequences are out of scope.
pub fn is_position_safe(board: &BoardState, square: Square, side: PieceColor) -> bool {
    let opponent = side.opponent();
    for (from, _) in board.pieces_of(opponent) {
        if capture_moves(board, from)
            .iter()
            .any(|&(_, captured)| captured == square)
        {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::Piece;
    use crate::rules::mandatory::legal_moves;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn test_capture_outscores_simple_move() {
        let mut board = BoardState::new();
        board.place(sq(3, 3), Piece::man(PieceColor::Dark));
        board.place(sq(4, 4), Piece::man(PieceColor::Light));

        let capture = Move::capture(sq(3, 3), sq(5, 5), sq(4, 4));
        let step = Move::simple(sq(3, 3), sq(4, 2));

        assert!(
            score_move(&board, &capture, PieceColor::Dark)
                > score_move(&board, &step, PieceColor::Dark)
        );
    }

    #[test]
    fn test_chain_bonus_dominates_equal_captures() {
        // Two dark men can each jump a light man. Only the jump from (2,2)
        // leaves a follow-up capture, and its landing square can even be
        // re-taken; the chain bonus must still win.
        let mut board = BoardState::new();
        board.place(sq(2, 2), Piece::man(PieceColor::Dark));
        board.place(sq(3, 3), Piece::man(PieceColor::Light));
        board.place(sq(5, 5), Piece::man(PieceColor::Light));
        board.place(sq(2, 5), Piece::man(PieceColor::Dark));
        board.place(sq(3, 6), Piece::man(PieceColor::Light));

        let set = legal_moves(&board, PieceColor::Dark);
        assert!(set.has_captures());

        let chosen = choose_move(&board, &set, PieceColor::Dark).expect("captures exist");
        assert_eq!(
            chosen,
            Move::capture(sq(2, 2), sq(4, 4), sq(3, 3)),
            "The capture that sets up a further jump must win"
        );
    }

    #[test]
    fn test_promotion_bonus() {
        let mut board = BoardState::new();
        board.place(sq(6, 2), Piece::man(PieceColor::Dark));

        let promoting = Move::simple(sq(6, 2), sq(7, 3));
        let staying = Move::simple(sq(6, 2), sq(7, 1));
        // Both moves promote here; compare against a man one row back instead
        let mut board_back = BoardState::new();
        board_back.place(sq(5, 2), Piece::man(PieceColor::Dark));
        let non_promoting = Move::simple(sq(5, 2), sq(6, 3));

        let promoting_score = score_move(&board, &promoting, PieceColor::Dark);
        let non_promoting_score = score_move(&board_back, &non_promoting, PieceColor::Dark);
        assert!(promoting_score > non_promoting_score + PROMOTION_BONUS / 2);
        // Center column tie-break sanity: (7,3) is a center column, (7,1) is not
        let edge_score = score_move(&board, &staying, PieceColor::Dark);
        assert_eq!(promoting_score - edge_score, CENTER_BONUS);
    }

    #[test]
    fn test_unsafe_landing_is_penalized() {
        // Stepping to (4,4) walks into a light man's jump; stepping to
        // (4,0) is out of reach
        let mut board = BoardState::new();
        board.place(sq(3, 3), Piece::man(PieceColor::Dark));
        board.place(sq(3, 1), Piece::man(PieceColor::Dark));
        board.place(sq(5, 5), Piece::man(PieceColor::Light));

        let unsafe_step = Move::simple(sq(3, 3), sq(4, 4));
        let safe_step = Move::simple(sq(3, 1), sq(4, 0));

        let unsafe_score = score_move(&board, &unsafe_step, PieceColor::Dark);
        let safe_score = score_move(&board, &safe_step, PieceColor::Dark);
        assert!(
            safe_score > unsafe_score,
            "safe {safe_score} should beat unsafe {unsafe_score}"
        );
    }

    #[test]
    fn test_is_position_safe() {
        let mut board = BoardState::new();
        board.place(sq(4, 4), Piece::man(PieceColor::Dark));
        board.place(sq(5, 5), Piece::man(PieceColor::Light));

        // Light can jump (4,4) onto (3,3)
        assert!(!is_position_safe(&board, sq(4, 4), PieceColor::Dark));
        // A piece with no opponent adjacent is safe
        board.place(sq(0, 1), Piece::man(PieceColor::Dark));
        assert!(is_position_safe(&board, sq(0, 1), PieceColor::Dark));
    }

    #[test]
    fn test_first_found_wins_ties() {
        // Two identical-scoring steps from symmetric positions: the
        // row-major first candidate must be returned
        let mut board = BoardState::new();
        board.place(sq(2, 3), Piece::man(PieceColor::Dark));

        let set = legal_moves(&board, PieceColor::Dark);
        let moves: Vec<Move> = set.all_moves().collect();
        assert_eq!(moves.len(), 2);
        let scores: Vec<i32> = moves
            .iter()
            .map(|mv| score_move(&board, mv, PieceColor::Dark))
            .collect();
        assert_eq!(scores[0], scores[1], "Symmetric steps score equally");

        let chosen = choose_move(&board, &set, PieceColor::Dark).unwrap();
        assert_eq!(chosen, moves[0], "Tie goes to the first enumerated move");
    }

    #[test]
    fn test_empty_pool_returns_none() {
        let board = BoardState::new();
        let set = legal_moves(&board, PieceColor::Dark);
        assert!(choose_move(&board, &set, PieceColor::Dark).is_none());
    }
}
