//! Game over state tracking and result management
//!
//! Tracks the end-game condition and provides methods for determining the
//! outcome and displaying results.
//!
//! # Game Over Conditions
//!
//! - **LightWon / DarkWon**: the opponent has no pieces left, or is the
//!   side to move with no legal move in the mandatory-move set
//!
//! There is no draw state: a side that cannot move loses, and no
//! repetition or move-limit rule exists.

use serde::{Deserialize, Serialize};

use crate::pieces::PieceColor;

/// The game's end state
///
/// Starts as `Playing` and transitions to a terminal state when the game
/// ends. Once set to any non-Playing state, the session rejects further
/// moves and the result should be displayed to players. No transition
/// leaves a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameOverState {
    /// Game is still in progress
    #[default]
    Playing,

    /// Light captured or blocked every dark piece
    LightWon,

    /// Dark captured or blocked every light piece
    DarkWon,
}

impl GameOverState {
    /// The terminal state in which `loser` has lost
    pub fn loss_for(loser: PieceColor) -> Self {
        match loser {
            PieceColor::Light => GameOverState::DarkWon,
            PieceColor::Dark => GameOverState::LightWon,
        }
    }

    /// Check if the game has ended
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameOverState::Playing)
    }

    /// Get the winner of the game, if there is one
    ///
    /// Authoritative only once the game is over; returns `None` while
    /// playing.
    pub fn winner(&self) -> Option<PieceColor> {
        match self {
            GameOverState::LightWon => Some(PieceColor::Light),
            GameOverState::DarkWon => Some(PieceColor::Dark),
            GameOverState::Playing => None,
        }
    }

    /// Get a human-readable message describing the game result
    pub fn message(&self) -> &str {
        match self {
            GameOverState::Playing => "Game in progress",
            GameOverState::LightWon => "Light wins!",
            GameOverState::DarkWon => "Dark wins!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_over_state_default() {
        //! Verifies GameOverState defaults to Playing
        let state = GameOverState::default();
        assert_eq!(state, GameOverState::Playing);
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_terminal_states_are_game_over() {
        assert!(GameOverState::LightWon.is_game_over());
        assert!(GameOverState::DarkWon.is_game_over());
        assert!(!GameOverState::Playing.is_game_over());
    }

    #[test]
    fn test_winner() {
        assert_eq!(GameOverState::Playing.winner(), None);
        assert_eq!(GameOverState::LightWon.winner(), Some(PieceColor::Light));
        assert_eq!(GameOverState::DarkWon.winner(), Some(PieceColor::Dark));
    }

    #[test]
    fn test_loss_for() {
        assert_eq!(
            GameOverState::loss_for(PieceColor::Light),
            GameOverState::DarkWon
        );
        assert_eq!(
            GameOverState::loss_for(PieceColor::Dark),
            GameOverState::LightWon
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(GameOverState::Playing.message(), "Game in progress");
        assert_eq!(GameOverState::LightWon.message(), "Light wins!");
        assert_eq!(GameOverState::DarkWon.message(), "Dark wins!");
    }
}
