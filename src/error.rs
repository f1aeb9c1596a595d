//! Error types for the checkers engine
//!
//! Provides custom error types for move application and game state
//! management. The selection protocol itself never errors - an invalid
//! click is a no-op - so these variants only surface when a caller
//! bypasses the protocol and drives the executor directly.

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// No piece on the square a move starts from
    #[error("No piece at ({row}, {col})")]
    PieceNotFound { row: u8, col: u8 },

    /// The piece on the origin square belongs to the other side
    #[error("Piece at ({row}, {col}) does not belong to the side to move")]
    WrongColor { row: u8, col: u8 },

    /// Invalid move attempted
    #[error("Invalid move: {message}")]
    InvalidMove { message: String },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
