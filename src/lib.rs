//! Tabular Q-learning self-play for tic-tac-toe
//!
//! This crate provides:
//! - A complete tic-tac-toe rules engine with legality and terminal checks
//! - A game environment that alternates two agents and dispatches the
//!   deferred reward signals tabular Q-learning needs
//! - A tabular Q-learning agent with ε-greedy exploration and optimistic
//!   value initialization
//! - A self-play training pipeline with progress observers
//! - Policy export and saved-agent serialization

pub mod cli;
pub mod env;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod ports;
pub mod q_learning;
pub mod tictactoe;
pub mod types;

pub use env::{EnvConfig, GameEnvironment, RewardSchedule};
pub use error::{Error, Result};
pub use ports::{Agent, GameObserver, TrainingObserver};
pub use q_learning::{QAgent, QConfig};
pub use types::BoardKey;
