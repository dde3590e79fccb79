//! Game state and outcome types

use serde::{Deserialize, Serialize};

use super::board::{Board, Mark};

/// Outcome of a completed game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Mark),
    Draw,
}

/// A board plus whose turn it is.
///
/// Built fresh at the start of each game and discarded at the end. Exactly
/// one terminal state (win or draw) is reached within at most 9 moves; no
/// state is ever revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub to_move: Mark,
}

impl GameState {
    /// Create a fresh game with an empty board and the given first mover
    pub fn new(first_mover: Mark) -> Self {
        GameState {
            board: Board::new(),
            to_move: first_mover,
        }
    }

    /// Apply the current mover's mark and flip the turn indicator.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IllegalMove`] if the position is occupied or
    /// out of bounds. The environment treats this as a fatal contract
    /// violation, never something to retry.
    #[must_use = "make_move returns a new game state; the original is unchanged"]
    pub fn make_move(&self, pos: usize) -> Result<GameState, crate::Error> {
        let board = self.board.with_mark(pos, self.to_move)?;
        Ok(GameState {
            board,
            to_move: self.to_move.opponent(),
        })
    }

    /// Check if the game has reached a terminal state
    pub fn is_terminal(&self) -> bool {
        self.board.is_won() || self.board.is_full()
    }

    /// Get the outcome if the game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        if let Some(winner) = self.board.winner() {
            Some(GameOutcome::Win(winner))
        } else if self.board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}
