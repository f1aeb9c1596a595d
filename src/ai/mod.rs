//! Computer opponent
//!
//! Single-ply heuristic move selection for the computer side. Each
//! candidate move is simulated on a scratch copy of the board and scored
//! with a static evaluation; there is no deeper search.
//!
//! # Integration Strategy
//!
//! The session's mandatory-move set is the source of truth. The AI never
//! generates moves of its own: it picks from the same validated set a human
//! player would click through, so computer moves follow exactly the same
//! rules. Chain captures are driven by the session, which calls back into
//! [`choose_move`] after each forced link with the set collapsed to the
//! chaining piece.

pub mod heuristic;

// Re-export for convenience
pub use heuristic::{choose_move, is_position_safe, score_move};
