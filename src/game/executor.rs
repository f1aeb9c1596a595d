//! Move execution
//!
//! Core function to apply a validated move to a board: relocation, capture
//! removal, promotion, and re-evaluation for chained captures. The executor
//! mutates only the board it is handed; turn advancement and selection
//! updates are the session's job, which loops on the returned result until
//! the turn has ended.

use crate::error::{GameError, GameResult};
use crate::pieces::{PieceColor, PieceRank};
use crate::rules::board_state::BoardState;
use crate::rules::mandatory::Move;
use crate::rules::piece_moves::capture_moves;

/// Outcome of applying a single move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// The moved man was promoted to king on its landing square
    pub promoted: bool,
    /// Follow-up captures available to the same piece from its new square
    ///
    /// `Some` means the capture chain continues and the turn is not
    /// finished; the list is never empty. `None` means the turn ends
    /// normally. A simple move is always `None`.
    pub chained_captures: Option<Vec<Move>>,
}

impl ExecutionResult {
    /// Whether the same piece must keep capturing
    pub fn chains(&self) -> bool {
        self.chained_captures.is_some()
    }
}

/// Apply `mv` for `side` to the board
///
/// Steps, in order:
/// 1. Relocate the piece from origin to destination, clearing the origin.
/// 2. Clear the captured square, if the move is a jump.
/// 3. Promote a man landing on its promotion row. This happens in the same
///    application step, before chain re-evaluation, so a freshly promoted
///    king re-evaluates its chain with king capture rules.
/// 4. If the move was a capture, re-run capture generation for the piece at
///    its new square on the updated board to detect a chain.
///
/// The move is assumed validated against the mandatory-move set; the
/// remaining checks are defensive and only fail when a caller bypasses the
/// selection protocol.
pub fn apply_move(
    board: &mut BoardState,
    mv: &Move,
    side: PieceColor,
) -> GameResult<ExecutionResult> {
    let piece = board.piece_at(mv.from).ok_or(GameError::PieceNotFound {
        row: mv.from.row(),
        col: mv.from.col(),
    })?;
    if piece.color != side {
        return Err(GameError::WrongColor {
            row: mv.from.row(),
            col: mv.from.col(),
        });
    }

    board.take(mv.from);
    if let Some(captured) = mv.captured {
        board.take(captured);
    }

    let promoted = piece.rank == PieceRank::Man && mv.to.row() == side.promotion_row();
    let landed = if promoted { piece.promoted() } else { piece };
    board.place(mv.to, landed);

    let chained_captures = if mv.is_capture() {
        let follow_ups: Vec<Move> = capture_moves(board, mv.to)
            .into_iter()
            .map(|(to, captured)| Move::capture(mv.to, to, captured))
            .collect();
        if follow_ups.is_empty() {
            None
        } else {
            Some(follow_ups)
        }
    } else {
        None
    };

    Ok(ExecutionResult {
        promoted,
        chained_captures,
    })
}
