//! Tabular Q-learning
//!
//! The agent learns a state/action value function from the rewards the
//! environment dispatches. Because the consequence of a move is only known
//! after the opponent replies, each reward arrives one full turn late and
//! is applied to the agent's remembered (board, action) pair, never to the
//! board the environment passes alongside it.
//!
//! ## Update rule
//!
//! `Q(s,a) ← (1 − α)·Q(s,a) + α·(r + γ·max_a' Q(s',a'))`
//!
//! with optimistic initialization: unseen pairs start at 100.0 so they
//! look worth trying until experience says otherwise.

pub mod agent;
pub mod q_table;
pub mod serialization;

// Public re-exports
pub use agent::{DEFAULT_EPSILON, QAgent, QConfig};
pub use q_table::QTable;
pub use serialization::{SavedQAgent, TrainingMetadata};
