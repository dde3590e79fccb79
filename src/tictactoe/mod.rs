//! Tic-tac-toe rules engine
//!
//! The board is pure data with legality queries; [`GameState`] adds the
//! turn indicator and move application; [`lines`] holds the fixed set of
//! winning lines shared by every game.

pub mod board;
pub mod game;
pub mod lines;

pub use board::{Board, Cell, Mark};
pub use game::{GameOutcome, GameState};
pub use lines::WIN_LINES;
