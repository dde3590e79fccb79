//! Self-play training loop

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    env::{EnvConfig, GameEnvironment},
    ports::{Agent, TrainingObserver},
    tictactoe::{GameOutcome, Mark},
};

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of self-play games
    pub num_games: usize,

    /// Random seed for the environment's first-mover selection
    pub seed: Option<u64>,

    /// Environment configuration (reward schedule, first-mover override)
    pub env: EnvConfig,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            num_games: 500,
            seed: None,
            env: EnvConfig::default(),
        }
    }
}

/// Tallies from a training run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Total games played
    pub total_games: usize,

    /// Games won by the X agent
    pub x_wins: usize,

    /// Games won by the O agent
    pub o_wins: usize,

    /// Drawn games
    pub draws: usize,

    /// X win rate
    pub x_win_rate: f64,

    /// O win rate
    pub o_win_rate: f64,

    /// Draw rate
    pub draw_rate: f64,
}

impl TrainingResult {
    /// Create a new training result
    pub fn new(total_games: usize, x_wins: usize, o_wins: usize, draws: usize) -> Self {
        let rate = |n: usize| {
            if total_games > 0 {
                n as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            total_games,
            x_wins,
            o_wins,
            draws,
            x_win_rate: rate(x_wins),
            o_win_rate: rate(o_wins),
            draw_rate: rate(draws),
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Runs many games back-to-back between two agents.
///
/// Each agent keeps accumulating experience across games; the trainer only
/// builds a fresh environment, tallies outcomes, and notifies observers.
pub struct SelfPlayTrainer {
    config: TrainingConfig,
    observers: Vec<Box<dyn TrainingObserver>>,
}

impl SelfPlayTrainer {
    /// Create a new trainer
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the trainer
    pub fn with_observer(mut self, observer: Box<dyn TrainingObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run the configured number of games.
    ///
    /// # Errors
    ///
    /// Propagates any environment error (an illegal move from either agent
    /// aborts the whole run; it signals a defect, not a transient
    /// condition).
    pub fn run(
        &mut self,
        player_x: &mut dyn Agent,
        player_o: &mut dyn Agent,
    ) -> Result<TrainingResult> {
        let mut env = GameEnvironment::with_config(self.config.env);
        if let Some(seed) = self.config.seed {
            env = env.with_seed(seed);
        }

        let mut x_wins = 0;
        let mut o_wins = 0;
        let mut draws = 0;

        for observer in &mut self.observers {
            observer.on_training_start(self.config.num_games)?;
        }

        for game_num in 0..self.config.num_games {
            let outcome = env.play_game(player_x, player_o)?;

            match outcome {
                GameOutcome::Win(Mark::X) => x_wins += 1,
                GameOutcome::Win(Mark::O) => o_wins += 1,
                GameOutcome::Draw => draws += 1,
            }

            for observer in &mut self.observers {
                observer.on_game_end(game_num, outcome)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        Ok(TrainingResult::new(
            self.config.num_games,
            x_wins,
            o_wins,
            draws,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::q_learning::{QAgent, QConfig};

    #[test]
    fn test_self_play_tallies_add_up() {
        let config = TrainingConfig {
            num_games: 25,
            seed: Some(42),
            env: EnvConfig::default(),
        };

        let mut trainer = SelfPlayTrainer::new(config);
        let mut x = QAgent::new(QConfig::default()).with_seed(1);
        let mut o = QAgent::new(QConfig::default()).with_seed(2);

        let result = trainer.run(&mut x, &mut o).unwrap();

        assert_eq!(result.total_games, 25);
        assert_eq!(result.x_wins + result.o_wins + result.draws, 25);
    }

    #[test]
    fn test_rates_are_fractions_of_total() {
        let result = TrainingResult::new(10, 4, 3, 3);
        assert_eq!(result.x_win_rate, 0.4);
        assert_eq!(result.o_win_rate, 0.3);
        assert_eq!(result.draw_rate, 0.3);
    }

    #[test]
    fn test_empty_run_has_zero_rates() {
        let result = TrainingResult::new(0, 0, 0, 0);
        assert_eq!(result.x_win_rate, 0.0);
        assert_eq!(result.draw_rate, 0.0);
    }
}
