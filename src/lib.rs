//! Checkers (draughts) rules engine - headless game logic
//!
//! Implements a complete 8x8 checkers engine with mandatory captures,
//! multi-jump chains, king promotion and a heuristic computer opponent,
//! with clean separation between pure rules and session state. The crate
//! has zero dependency on any rendering context: the graphical front end
//! (menu, board drawing, win screens) is an external collaborator that
//! calls in through [`CheckersGame`].
//!
//! # Module Organization
//!
//! - `types` - Bounds-checked board coordinates
//! - `pieces` - Sides and ranks as tagged values
//! - `rules` - Pure move generation and the mandatory-capture resolver
//! - `game` - Move execution, turn sequencing, the session facade
//! - `ai` - Single-ply heuristic move selection for the computer side
//! - `error` - Engine error types
//!
//! # Control Flow
//!
//! The UI layer reports clicked cells and polls for the computer's turn:
//!
//! ```
//! use checkers_logic::CheckersGame;
//!
//! let mut game = CheckersGame::new(true);
//! game.handle_click(5, 2); // select the man on (5,2)
//! game.handle_click(4, 3); // move it; the turn passes to the computer
//! if game.is_computer_turn() {
//!     // after the UI's pacing delay has elapsed
//!     game.computer_move();
//! }
//! assert!(game.winner().is_none());
//! ```
//!
//! Every engine operation is synchronous and bounded by the board size;
//! there are no timers, threads or blocking calls.

pub mod ai;
pub mod error;
pub mod game;
pub mod pieces;
pub mod rules;
pub mod types;

// Re-export the main entry points
pub use ai::heuristic::choose_move;
pub use error::{GameError, GameResult};
pub use game::executor::{apply_move, ExecutionResult};
pub use game::game_over::GameOverState;
pub use game::session::{CheckersGame, COMPUTER_SIDE};
pub use pieces::{Piece, PieceColor, PieceRank};
pub use rules::board_state::BoardState;
pub use rules::mandatory::{legal_moves, Move, MoveSet};
pub use types::Square;
