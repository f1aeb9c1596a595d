//! Checkers game module - turn sequencing and session state
//!
//! Implements the game state machine on top of the pure rules layer, with
//! a clean separation between state holders and the session facade.
//!
//! # Module Organization
//!
//! - `executor` - Applies a validated move to the board (relocation,
//!   capture removal, promotion, chain re-evaluation)
//! - `selection` - The piece a player is currently acting on
//! - `turn` - Whose turn it is and the move counter
//! - `game_over` - Terminal state tracking and result queries
//! - `session` - [`CheckersGame`], the facade the UI layer calls into
//!
//! # Control Flow
//!
//! The session owns the board exclusively. Every click or computer turn
//! funnels through the same path: validate against the freshly computed
//! mandatory-move set, apply through the executor, recompute the set, then
//! check for a winner once the turn has fully ended (never mid-chain).

pub mod executor;
pub mod game_over;
pub mod selection;
pub mod session;
pub mod turn;

// Re-export the session facade (main entry point)
pub use executor::{apply_move, ExecutionResult};
pub use game_over::GameOverState;
pub use selection::Selection;
pub use session::CheckersGame;
pub use turn::CurrentTurn;
