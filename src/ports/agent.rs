//! Agent port - the capability interface the environment drives
//!
//! The environment is polymorphic over anything that can pick a legal move
//! and absorb reward signals: the tabular Q-learner, the console-driven
//! human agent, and the scripted doubles used by the test suite.

use crate::{Result, tictactoe::Board};

/// Agent trait - a player the environment can drive through a game.
///
/// # Calling contract
///
/// For each game the environment calls, in order:
/// 1. `reset()` - once, before the first move
/// 2. `choose_move(board)` - on each of the agent's turns
/// 3. `reward(value, achieved_board)` - one full turn AFTER the rewarded
///    move, once its consequence (the opponent's reply, or the game's end)
///    is known; `achieved_board` is the board that resulted from play
/// 4. `notify_game_over()` - exactly once, when the game ends
///
/// An agent may receive `reward` before its first `choose_move` of a game
/// (the opponent opened); implementations must treat that as a no-op.
pub trait Agent: Send {
    /// Clear any per-game memory.
    ///
    /// # Default Implementation
    ///
    /// Does nothing, suitable for stateless agents.
    fn reset(&mut self) {}

    /// Select a move for the given board.
    ///
    /// Must return a position (0-8) whose cell is empty; returning an
    /// occupied position is a fatal contract violation that aborts the
    /// game.
    ///
    /// # Errors
    ///
    /// Returns an error if no legal move exists (never the case under the
    /// environment's terminal-check ordering).
    fn choose_move(&mut self, board: &Board) -> Result<usize>;

    /// Record a scalar reward for this agent's PREVIOUS move.
    ///
    /// `achieved_board` is the board state that move led to, used by
    /// learning agents to bootstrap a value estimate. The reward is never
    /// attributed to `achieved_board` itself.
    ///
    /// # Default Implementation
    ///
    /// Does nothing, suitable for non-learning agents.
    fn reward(&mut self, _value: f64, _achieved_board: &Board) {}

    /// Lifecycle hook invoked once when a game completes.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn notify_game_over(&mut self) {}

    /// Get the agent's name, used in console reporting.
    fn name(&self) -> &str;
}
