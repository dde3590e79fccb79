//! Observer ports - hooks for rendering and training-progress collection
//!
//! Observers keep side-effecting output (console rendering, progress bars,
//! metrics) out of the turn loop and the training loop. All methods default
//! to no-ops so implementations override only what they need.

use crate::{
    Result,
    tictactoe::{GameOutcome, GameState, Mark},
};

/// Observer of a single game's moves.
///
/// The environment notifies a game observer after every applied move and
/// once at each game boundary. Purely side-effecting; observers never
/// influence play.
pub trait GameObserver: Send {
    /// Called when a game starts, with the fresh state.
    fn on_game_start(&mut self, _state: &GameState) {}

    /// Called after a move is applied.
    ///
    /// `mark` is the mover, `position` the cell played, and `state` the
    /// resulting game state.
    fn on_move(&mut self, _mark: Mark, _position: usize, _state: &GameState) {}

    /// Called when the game reaches its terminal state.
    fn on_game_end(&mut self, _outcome: GameOutcome) {}
}

/// Observer of a training run.
///
/// # Event Sequence
///
/// 1. `on_training_start(total_games)` - once at the beginning
/// 2. `on_game_end(game_num, outcome)` - after each game
/// 3. `on_training_end()` - once at the end
pub trait TrainingObserver: Send {
    /// Called when training starts.
    fn on_training_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called when a game ends.
    fn on_game_end(&mut self, _game_num: usize, _outcome: GameOutcome) -> Result<()> {
        Ok(())
    }

    /// Called when training completes.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
