//! Game session - the engine facade the UI layer calls into
//!
//! [`CheckersGame`] owns the board exclusively and orchestrates the rules
//! layer on each player action: clicks run the selection protocol, computer
//! turns run the heuristic to completion, and every mutation is followed by
//! a fresh mandatory-move computation and - once a turn has fully ended -
//! a terminal-state check.
//!
//! The session is headless and synchronous. The pacing delay before a
//! computer move is the caller's concern: poll [`CheckersGame::is_computer_turn`]
//! and invoke [`CheckersGame::computer_move`] when ready.

use tracing::{debug, error, info, warn};

use crate::ai::heuristic::choose_move;
use crate::game::executor::apply_move;
use crate::game::game_over::GameOverState;
use crate::game::selection::Selection;
use crate::game::turn::CurrentTurn;
use crate::pieces::PieceColor;
use crate::rules::board_state::{BoardState, PIECES_PER_SIDE};
use crate::rules::mandatory::{legal_moves, Move, MoveSet};
use crate::types::Square;

/// The side the computer controls in vs-computer games
pub const COMPUTER_SIDE: PieceColor = PieceColor::Dark;

/// A complete game session
///
/// Created with [`CheckersGame::new`] at the standard starting position.
/// All mutation goes through [`handle_click`](CheckersGame::handle_click)
/// and [`computer_move`](CheckersGame::computer_move); everything else is a
/// read-only query.
#[derive(Debug, Clone)]
pub struct CheckersGame {
    board: BoardState,
    turn: CurrentTurn,
    selection: Selection,
    status: GameOverState,
    mandatory: MoveSet,
    vs_computer: bool,
}

impl CheckersGame {
    /// Start a new game from the standard starting layout
    ///
    /// Light moves first. With `vs_computer` set, Dark is played by the
    /// heuristic opponent.
    pub fn new(vs_computer: bool) -> Self {
        Self::from_position(BoardState::starting(), PieceColor::Light, vs_computer)
    }

    /// Start a game from an arbitrary position
    ///
    /// Useful for analysis and tests. The terminal check runs immediately,
    /// so a position where `side_to_move` has no legal move is already
    /// decided.
    pub fn from_position(board: BoardState, side_to_move: PieceColor, vs_computer: bool) -> Self {
        let mandatory = legal_moves(&board, side_to_move);
        let mut game = CheckersGame {
            board,
            turn: CurrentTurn {
                color: side_to_move,
                move_number: 1,
            },
            selection: Selection::default(),
            status: GameOverState::Playing,
            mandatory,
            vs_computer,
        };
        game.check_winner();
        game
    }

    /// The current board
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// The side to move
    pub fn side_to_move(&self) -> PieceColor {
        self.turn.color
    }

    /// Full-move counter (increments after both sides have moved)
    pub fn move_number(&self) -> u32 {
        self.turn.move_number
    }

    /// Current game status
    pub fn status(&self) -> GameOverState {
        self.status
    }

    /// The winner, if the game is over
    pub fn winner(&self) -> Option<PieceColor> {
        self.status.winner()
    }

    /// The currently selected piece, if any
    pub fn selected_square(&self) -> Option<Square> {
        self.selection.square
    }

    /// Whether a capture chain is in progress
    ///
    /// While set, only the selected piece may move and the turn has not
    /// ended.
    pub fn in_chain_capture(&self) -> bool {
        self.selection.chain_capture
    }

    /// Whether the side to move has a mandatory capture this turn
    ///
    /// The UI uses this for the "capture required" banner and to highlight
    /// the pieces that must jump.
    pub fn has_mandatory_capture(&self) -> bool {
        self.mandatory.has_captures()
    }

    /// How many pieces of `color` have been captured so far
    pub fn captured_count(&self, color: PieceColor) -> u32 {
        PIECES_PER_SIDE.saturating_sub(self.board.piece_count(color))
    }

    /// Whether the computer should act now
    ///
    /// True only in vs-computer games, while playing, on the computer's
    /// turn. The caller is expected to apply its own pacing delay before
    /// invoking [`computer_move`](CheckersGame::computer_move).
    pub fn is_computer_turn(&self) -> bool {
        self.vs_computer && self.status == GameOverState::Playing && self.turn.color == COMPUTER_SIDE
    }

    /// Legal destination squares for the piece on `square`
    ///
    /// Returns the destinations drawn from the current mandatory-move set
    /// plus a flag telling whether any of them is a capture. Derived state
    /// for UI highlighting only.
    pub fn legal_destinations(&self, square: Square) -> (Vec<Square>, bool) {
        let moves = self.mandatory.moves_from(square);
        let destinations = moves.iter().map(|mv| mv.to).collect();
        let has_capture = moves.iter().any(|mv| mv.is_capture());
        (destinations, has_capture)
    }

    /// Report a clicked cell
    ///
    /// Runs the selection protocol; anything that does not match a legal
    /// action - out-of-range coordinates, empty cells, opponent pieces,
    /// pieces with no legal moves, any click during the computer's turn -
    /// leaves the session unchanged.
    pub fn handle_click(&mut self, row: u8, col: u8) {
        if self.status.is_game_over() || self.is_computer_turn() {
            return;
        }
        let Some(clicked) = Square::try_new(row as i16, col as i16) else {
            return;
        };

        // During an active capture chain only the chaining piece may move;
        // clicks elsewhere (including deselection) are ignored until the
        // chain ends.
        if self.selection.chain_capture {
            if let Some(origin) = self.selection.square {
                if let Some(mv) = self.mandatory.find(origin, clicked) {
                    self.execute(mv);
                }
            }
            return;
        }

        if let Some(origin) = self.selection.square {
            // 1. Click on a legal destination: apply the move
            if let Some(mv) = self.mandatory.find(origin, clicked) {
                self.execute(mv);
                return;
            }
            // 2. Click on the selected piece itself: deselect
            if clicked == origin {
                self.selection.clear();
                self.mandatory = legal_moves(&self.board, self.turn.color);
                return;
            }
        }

        // 3. Click on another piece of the side to move that has moves:
        //    select it. 4. Anything else: no state change.
        if self.board.color_at(clicked) == Some(self.turn.color) && self.mandatory.contains(clicked)
        {
            self.selection.select(clicked);
        }
    }

    /// Play the computer's turn to completion
    ///
    /// Chooses and applies moves until a non-chaining move ends the turn:
    /// an explicit loop rather than recursion between selection and
    /// application. After each forced chain link the move pool collapses to
    /// the chaining piece's follow-up captures. No-op unless
    /// [`is_computer_turn`](CheckersGame::is_computer_turn) holds.
    pub fn computer_move(&mut self) {
        if !self.is_computer_turn() {
            return;
        }

        loop {
            let Some(mv) = choose_move(&self.board, &self.mandatory, COMPUTER_SIDE) else {
                // Transient degenerate case: no move available although the
                // terminal check has not fired. Surface it and pass the turn.
                warn!("[AI] no legal moves available; advancing turn without a move");
                self.finish_turn();
                return;
            };

            if !self.execute(mv) {
                // Unreachable for moves drawn from the mandatory set
                error!("[AI] chosen move failed to apply; aborting computer turn");
                return;
            }

            if self.status.is_game_over() || !self.selection.chain_capture {
                return;
            }
            // Chain continues: the mandatory set now holds only the chaining
            // piece's captures, so the next iteration picks from those.
        }
    }

    /// Apply a move from the mandatory set and update session state
    ///
    /// Returns whether the move was applied.
    fn execute(&mut self, mv: Move) -> bool {
        let side = self.turn.color;
        let result = match apply_move(&mut self.board, &mv, side) {
            Ok(result) => result,
            Err(err) => {
                error!("[MOVE] rejected: {err}");
                return false;
            }
        };

        debug!(
            "[MOVE] {:?} {} -> {}{}{}",
            side,
            mv.from,
            mv.to,
            if mv.is_capture() { " (capture)" } else { "" },
            if result.promoted { " (promoted)" } else { "" },
        );

        if let Some(chain) = result.chained_captures {
            // Same piece stays on the move; the legal set collapses to its
            // follow-up jumps and the turn does not advance.
            self.selection.square = Some(mv.to);
            self.selection.chain_capture = true;
            self.mandatory = MoveSet::single_origin(mv.to, chain);
            return true;
        }

        self.finish_turn();
        true
    }

    /// End the current turn: advance, recompute legal moves, check winner
    fn finish_turn(&mut self) {
        self.selection.clear();
        self.turn.advance();
        self.mandatory = legal_moves(&self.board, self.turn.color);
        debug!("[TURN] {:?} to move", self.turn.color);
        self.check_winner();
    }

    /// Evaluate the win conditions for the side to move
    ///
    /// A side with zero remaining pieces loses immediately; otherwise the
    /// side to move loses when its mandatory-move set is empty. Called only
    /// once a turn has fully ended, never mid-chain.
    fn check_winner(&mut self) {
        if self.status.is_game_over() {
            return;
        }

        let status = if self.board.piece_count(PieceColor::Dark) == 0 {
            GameOverState::loss_for(PieceColor::Dark)
        } else if self.board.piece_count(PieceColor::Light) == 0 {
            GameOverState::loss_for(PieceColor::Light)
        } else if self.mandatory.is_empty() {
            GameOverState::loss_for(self.turn.color)
        } else {
            return;
        };

        self.status = status;
        info!("[GAME_OVER] {}", status.message());
    }
}
