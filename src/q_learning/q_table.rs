//! Q-value table for temporal difference learning

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{tictactoe::Board, types::BoardKey};

/// Default learning rate α
pub const DEFAULT_LEARNING_RATE: f64 = 0.5;

/// Default discount factor γ
pub const DEFAULT_DISCOUNT_FACTOR: f64 = 0.9;

/// Default initial Q-value for unseen state/action pairs.
///
/// Deliberately optimistic: unseen moves look attractive until experience
/// proves otherwise, which drives exploration beyond what ε alone gives.
pub const DEFAULT_Q_INIT: f64 = 100.0;

/// Mapping from board configuration to per-action value estimates.
///
/// Entries are created lazily: the first lookup of a state/action pair
/// INSERTS the initial value rather than merely returning it, so a pair
/// that was only ever evaluated is still an observable table entry. The
/// policy exporter depends on this.
///
/// A table is exclusively owned by one agent; two self-play agents never
/// share one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QTable {
    values: HashMap<BoardKey, HashMap<usize, f64>>,
    learning_rate: f64,
    discount_factor: f64,
    q_init: f64,
}

impl QTable {
    /// Create an empty table with the given hyperparameters
    pub fn new(learning_rate: f64, discount_factor: f64, q_init: f64) -> Self {
        Self {
            values: HashMap::new(),
            learning_rate,
            discount_factor,
            q_init,
        }
    }

    /// Get the value estimate for a state/action pair, inserting the
    /// initial value on first access.
    pub fn value(&mut self, board: &Board, action: usize) -> f64 {
        *self
            .values
            .entry(board.key())
            .or_default()
            .entry(action)
            .or_insert(self.q_init)
    }

    /// Look up a value estimate without creating an entry
    pub fn get(&self, key: &BoardKey, action: usize) -> Option<f64> {
        self.values.get(key).and_then(|actions| actions.get(&action)).copied()
    }

    /// Set the value estimate for a state/action pair
    pub fn set(&mut self, board: &Board, action: usize, value: f64) {
        self.values.entry(board.key()).or_default().insert(action, value);
    }

    /// Best achievable value from a board: the maximum estimate over its
    /// legal moves, or 0.0 when no legal move remains (full board).
    pub fn board_value(&mut self, board: &Board) -> f64 {
        let legal = board.legal_moves();
        if legal.is_empty() {
            return 0.0;
        }
        legal
            .into_iter()
            .map(|action| self.value(board, action))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Deferred temporal-difference update.
    ///
    /// Updates the entry for the PENDING (board, action) pair - never the
    /// achieved board, which only supplies the bootstrap term:
    ///
    /// `Q(s,a) ← (1 − α)·Q(s,a) + α·(reward + γ·max_a' Q(s',a'))`
    pub fn deferred_update(
        &mut self,
        board: &Board,
        action: usize,
        reward: f64,
        achieved_board: &Board,
    ) {
        let old = self.value(board, action);
        let best_achievable = self.board_value(achieved_board);
        let new = (1.0 - self.learning_rate) * old
            + self.learning_rate * (reward + self.discount_factor * best_achievable);
        self.set(board, action, new);
    }

    /// Iterate over observed board configurations and their action values
    pub fn states(&self) -> impl Iterator<Item = (&BoardKey, &HashMap<usize, f64>)> {
        self.values.iter()
    }

    /// Number of board configurations observed
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether no configuration has been observed yet
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn discount_factor(&self) -> f64 {
        self.discount_factor
    }

    pub fn q_init(&self) -> f64 {
        self.q_init
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn test_first_lookup_inserts_default() {
        let mut table = QTable::new(0.5, 0.9, 100.0);
        let b = board(".........");
        assert!(table.get(&b.key(), 4).is_none());

        assert_eq!(table.value(&b, 4), 100.0);
        // The lookup itself created the entry
        assert_eq!(table.get(&b.key(), 4), Some(100.0));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_set_get() {
        let mut table = QTable::new(0.5, 0.9, 100.0);
        let b = board("X........");
        table.set(&b, 3, 42.5);
        assert_eq!(table.value(&b, 3), 42.5);
    }

    #[test]
    fn test_board_value_takes_max_over_legal_moves() {
        let mut table = QTable::new(0.5, 0.9, 0.0);
        let b = board("XO.......");
        table.set(&b, 2, 1.0);
        table.set(&b, 5, 7.0);
        table.set(&b, 8, 3.0);
        assert_eq!(table.board_value(&b), 7.0);
    }

    #[test]
    fn test_board_value_of_full_board_is_zero() {
        let mut table = QTable::new(0.5, 0.9, 100.0);
        let b = board("XOXXOOOXX");
        assert_eq!(table.board_value(&b), 0.0);
    }

    #[test]
    fn test_board_value_defaults_optimistically() {
        let mut table = QTable::new(0.5, 0.9, 100.0);
        // Won board with open cells: the open cells still back the bootstrap
        let b = board("XXXOO....");
        assert_eq!(table.board_value(&b), 100.0);
    }

    #[test]
    fn test_deferred_update() {
        let mut table = QTable::new(0.5, 0.9, 100.0);
        let pending = board(".........");
        let achieved = board("X..O.....");
        table.set(&pending, 0, 1000.0);
        table.set(&achieved, 1, 1000.0);

        table.deferred_update(&pending, 0, 0.0, &achieved);

        // new = 0.5 * 1000 + 0.5 * (0 + 0.9 * 1000) = 950
        assert_eq!(table.get(&pending.key(), 0), Some(950.0));
    }

    #[test]
    fn test_deferred_update_terminal_bootstrap() {
        let mut table = QTable::new(0.5, 0.9, 100.0);
        let pending = board("XO.XO....");
        let achieved = board("XOXXOOOXX");
        table.set(&pending, 6, 200.0);

        table.deferred_update(&pending, 6, 50.0, &achieved);

        // Full board: bootstrap term is zero
        // new = 0.5 * 200 + 0.5 * (50 + 0.9 * 0) = 125
        assert_eq!(table.get(&pending.key(), 6), Some(125.0));
    }
}
