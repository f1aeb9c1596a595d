//! Checkers rules module - Pure game logic without UI coupling
//!
//! Implements draughts move generation and board state management using
//! pure functions, allowing easy headless testing.
//!
//! # Architecture
//!
//! This module maintains a clean separation between rules and the session
//! layer:
//! - **Pure functions** for per-piece move generation (easy to unit test)
//! - **Lightweight BoardState** for snapshot-based queries
//! - **Board-wide resolver** that turns per-piece moves into the
//!   authoritative mandatory-move set
//!
//! # Module Structure
//!
//! - `board_state` - Board representation and occupancy queries
//! - `piece_moves` - Movement and capture rules for men and kings
//! - `mandatory` - Mandatory-capture aggregation across the whole board

pub mod board_state;
pub mod mandatory;
pub mod piece_moves;


// Re-export commonly used items
pub use board_state::BoardState;
pub use mandatory::{legal_moves, Move, MoveSet};
pub use piece_moves::{capture_moves, simple_moves};
