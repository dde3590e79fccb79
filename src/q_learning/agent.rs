//! Tabular Q-learning agent
//!
//! Selects moves ε-greedily against its value table and applies the
//! deferred temporal-difference update when the environment reports the
//! reward for its previous move.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::Agent,
    q_learning::q_table::{
        DEFAULT_DISCOUNT_FACTOR, DEFAULT_LEARNING_RATE, DEFAULT_Q_INIT, QTable,
    },
    tictactoe::Board,
};

/// Default exploration rate ε
pub const DEFAULT_EPSILON: f64 = 0.2;

/// Hyperparameters for a [`QAgent`], fixed at construction
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QConfig {
    /// Learning rate α (0.0 to 1.0)
    pub learning_rate: f64,
    /// Discount factor γ (0.0 to 1.0)
    pub discount_factor: f64,
    /// Exploration rate ε (0.0 to 1.0)
    pub epsilon: f64,
    /// Initial Q-value for unseen state/action pairs
    pub q_init: f64,
}

impl Default for QConfig {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            discount_factor: DEFAULT_DISCOUNT_FACTOR,
            epsilon: DEFAULT_EPSILON,
            q_init: DEFAULT_Q_INIT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct QAgentState {
    pub q_table: QTable,
    pub epsilon: f64,
    pub games_played: usize,
    pub rng_seed: Option<u64>,
}

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Tabular Q-learning agent.
///
/// Owns its value table exclusively and a pending-turn memory: the
/// (board, action) pair most recently chosen, awaiting its reward. The
/// pending pair is set inside [`choose_move`](Agent::choose_move),
/// consumed by the next [`reward`](Agent::reward) call, and cleared at the
/// start of each game.
#[derive(Debug, Clone)]
pub struct QAgent {
    q_table: QTable,
    epsilon: f64,
    games_played: usize,
    pending: Option<(Board, usize)>,
    rng: StdRng,
    rng_seed: Option<u64>,
}

impl QAgent {
    /// Create an agent with the given hyperparameters
    pub fn new(config: QConfig) -> Self {
        Self {
            q_table: QTable::new(config.learning_rate, config.discount_factor, config.q_init),
            epsilon: config.epsilon,
            games_played: 0,
            pending: None,
            rng: build_rng(None),
            rng_seed: None,
        }
    }

    /// Seed the agent's random source so exploration and tie-breaking are
    /// reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
        self
    }

    /// Number of completed games this agent has been notified of
    pub fn games_played(&self) -> usize {
        self.games_played
    }

    /// Read access to the learned value table
    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// Mutable access to the value table, for pre-seeding scripted runs
    pub fn q_table_mut(&mut self) -> &mut QTable {
        &mut self.q_table
    }

    /// ε-greedy selection over the legal moves.
    ///
    /// Ties among maximal-value moves are broken uniformly at random,
    /// never by first-found index, to avoid positional bias.
    fn select_epsilon_greedy(&mut self, board: &Board, legal_moves: &[usize]) -> usize {
        if self.rng.random::<f64>() < self.epsilon {
            // Explore: uniform over legal moves
            *legal_moves.choose(&mut self.rng).unwrap()
        } else {
            // Exploit: max value, random among ties
            let mut best_value = f64::NEG_INFINITY;
            let mut best_moves: Vec<usize> = Vec::new();
            for &position in legal_moves {
                let q = self.q_table.value(board, position);
                if q > best_value {
                    best_value = q;
                    best_moves.clear();
                    best_moves.push(position);
                } else if q == best_value {
                    best_moves.push(position);
                }
            }
            *best_moves.choose(&mut self.rng).unwrap()
        }
    }

    pub(crate) fn export_state(&self) -> QAgentState {
        QAgentState {
            q_table: self.q_table.clone(),
            epsilon: self.epsilon,
            games_played: self.games_played,
            rng_seed: self.rng_seed,
        }
    }

    pub(crate) fn from_state(state: QAgentState) -> Self {
        Self {
            q_table: state.q_table,
            epsilon: state.epsilon,
            games_played: state.games_played,
            pending: None,
            rng: build_rng(state.rng_seed),
            rng_seed: state.rng_seed,
        }
    }
}

impl Default for QAgent {
    fn default() -> Self {
        Self::new(QConfig::default())
    }
}

impl Agent for QAgent {
    fn reset(&mut self) {
        self.pending = None;
    }

    fn choose_move(&mut self, board: &Board) -> Result<usize> {
        let legal_moves = board.legal_moves();
        if legal_moves.is_empty() {
            return Err(crate::Error::NoLegalMoves);
        }

        let position = self.select_epsilon_greedy(board, &legal_moves);

        // Remember the pair until its reward arrives
        self.pending = Some((*board, position));
        Ok(position)
    }

    fn reward(&mut self, value: f64, achieved_board: &Board) {
        // An agent whose opponent opened the game gets its first callback
        // as a reward with no pending move; nothing to update yet.
        let Some((board, action)) = self.pending.take() else {
            return;
        };
        self.q_table
            .deferred_update(&board, action, value, achieved_board);
    }

    fn notify_game_over(&mut self) {
        self.games_played += 1;
    }

    fn name(&self) -> &str {
        "Q-Learner"
    }
}
