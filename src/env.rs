//! Game environment - runs one game to completion and dispatches rewards
//!
//! The environment owns the turn loop: it alternates between the two
//! agents, validates every proposed move, applies it, detects termination,
//! and delivers reward signals with the timing the Q-learner's deferred
//! bookkeeping depends on.

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::{Agent, GameObserver},
    tictactoe::{GameOutcome, GameState, Mark},
};

/// Terminal reward values delivered by the environment.
///
/// The draw reward is symmetric: the agent that completed the drawing move
/// and its opponent both receive the same value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RewardSchedule {
    pub win: f64,
    pub draw: f64,
    pub loss: f64,
}

impl Default for RewardSchedule {
    fn default() -> Self {
        Self {
            win: 100.0,
            draw: 50.0,
            loss: -100.0,
        }
    }
}

/// Environment configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Fixed first mover. `None` (the default) picks the first mover
    /// uniformly at random each game, so neither configured agent always
    /// opens. Fix it only when a test needs a scripted game.
    pub first_player: Option<Mark>,

    /// Terminal reward values
    pub rewards: RewardSchedule,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            first_player: None,
            rewards: RewardSchedule::default(),
        }
    }
}

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Orchestrates single games between two agents.
///
/// One environment instance is reused across a training run; each call to
/// [`play_game`](Self::play_game) builds a fresh [`GameState`] and runs it
/// to its terminal state.
pub struct GameEnvironment {
    config: EnvConfig,
    rng: StdRng,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameEnvironment {
    /// Create an environment with default configuration
    pub fn new() -> Self {
        Self::with_config(EnvConfig::default())
    }

    /// Create an environment with the given configuration
    pub fn with_config(config: EnvConfig) -> Self {
        Self {
            config,
            rng: build_rng(None),
            observers: Vec::new(),
        }
    }

    /// Seed the environment's random source (first-mover selection)
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Attach a game observer (e.g. a console renderer)
    pub fn with_observer(mut self, observer: Box<dyn GameObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Reward values in effect
    pub fn rewards(&self) -> RewardSchedule {
        self.config.rewards
    }

    fn pick_first_mover(&mut self) -> Mark {
        match self.config.first_player {
            Some(mark) => mark,
            None => {
                if self.rng.random::<bool>() {
                    Mark::X
                } else {
                    Mark::O
                }
            }
        }
    }

    /// Run exactly one game to completion.
    ///
    /// Resets both agents, then loops for at most 9 turns. After each
    /// applied move:
    ///
    /// - on a win, the mover receives the win reward and the opponent the
    ///   loss reward, both are notified, and the game ends;
    /// - on a draw, both receive the draw reward and are notified;
    /// - otherwise only the OPPONENT receives a zero reward for the move
    ///   just made against them. The mover's reward for this move arrives
    ///   one full turn later, once its consequence is known.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalMove`] if an agent proposes a move on an
    /// occupied cell - a fatal contract violation that aborts the game.
    /// Returns [`Error::UnfinishedGame`] if 9 moves pass without a
    /// terminal state, which indicates a defect in termination detection.
    pub fn play_game(
        &mut self,
        player_x: &mut dyn Agent,
        player_o: &mut dyn Agent,
    ) -> Result<GameOutcome> {
        player_x.reset();
        player_o.reset();

        let mut state = GameState::new(self.pick_first_mover());
        let rewards = self.config.rewards;

        for observer in &mut self.observers {
            observer.on_game_start(&state);
        }

        // Nine cells, one move per turn; termination is checked after
        // every move, so the loop bound is never reached mid-game.
        for _ in 0..9 {
            let mover = state.to_move;
            let (current, opponent): (&mut dyn Agent, &mut dyn Agent) = match mover {
                Mark::X => (&mut *player_x, &mut *player_o),
                Mark::O => (&mut *player_o, &mut *player_x),
            };

            let position = current.choose_move(&state.board)?;
            if !state.board.is_legal(position) {
                return Err(Error::IllegalMove { position });
            }
            state = state.make_move(position)?;

            for observer in &mut self.observers {
                observer.on_move(mover, position, &state);
            }

            if state.board.is_won() {
                current.reward(rewards.win, &state.board);
                current.notify_game_over();
                opponent.reward(rewards.loss, &state.board);
                opponent.notify_game_over();

                let outcome = GameOutcome::Win(mover);
                for observer in &mut self.observers {
                    observer.on_game_end(outcome);
                }
                return Ok(outcome);
            } else if state.board.is_draw() {
                current.reward(rewards.draw, &state.board);
                current.notify_game_over();
                opponent.reward(rewards.draw, &state.board);
                opponent.notify_game_over();

                for observer in &mut self.observers {
                    observer.on_game_end(GameOutcome::Draw);
                }
                return Ok(GameOutcome::Draw);
            } else {
                // The mover's reward waits until the opponent's reply is
                // known; only the opponent can be credited for the move
                // just made against them.
                opponent.reward(0.0, &state.board);
            }
        }

        Err(Error::UnfinishedGame)
    }
}

impl Default for GameEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Board;

    /// Plays a fixed move sequence
    struct Scripted {
        moves: Vec<usize>,
        next: usize,
    }

    impl Scripted {
        fn new(moves: Vec<usize>) -> Self {
            Self { moves, next: 0 }
        }
    }

    impl Agent for Scripted {
        fn choose_move(&mut self, _board: &Board) -> Result<usize> {
            let position = self.moves[self.next];
            self.next += 1;
            Ok(position)
        }

        fn name(&self) -> &str {
            "Scripted"
        }
    }

    #[test]
    fn test_scripted_win() {
        let config = EnvConfig {
            first_player: Some(Mark::X),
            ..EnvConfig::default()
        };
        let mut env = GameEnvironment::with_config(config);
        let mut x = Scripted::new(vec![0, 1, 2]);
        let mut o = Scripted::new(vec![3, 4]);

        let outcome = env.play_game(&mut x, &mut o).unwrap();
        assert_eq!(outcome, GameOutcome::Win(Mark::X));
    }

    #[test]
    fn test_scripted_draw() {
        let config = EnvConfig {
            first_player: Some(Mark::X),
            ..EnvConfig::default()
        };
        let mut env = GameEnvironment::with_config(config);
        let mut x = Scripted::new(vec![0, 2, 3, 7, 8]);
        let mut o = Scripted::new(vec![1, 4, 6, 5]);

        let outcome = env.play_game(&mut x, &mut o).unwrap();
        assert_eq!(outcome, GameOutcome::Draw);
    }

    #[test]
    fn test_illegal_move_aborts_game() {
        let config = EnvConfig {
            first_player: Some(Mark::X),
            ..EnvConfig::default()
        };
        let mut env = GameEnvironment::with_config(config);
        let mut x = Scripted::new(vec![0, 0]);
        let mut o = Scripted::new(vec![4]);

        let result = env.play_game(&mut x, &mut o);
        assert!(matches!(result, Err(Error::IllegalMove { position: 0 })));
    }

    #[test]
    fn test_first_mover_roughly_uniform() {
        let mut env = GameEnvironment::new().with_seed(17);
        let trials = 2000;
        let mut x_first = 0;
        for _ in 0..trials {
            if env.pick_first_mover() == Mark::X {
                x_first += 1;
            }
        }
        // Expect close to 1000 out of 2000; allow a generous band
        assert!(
            (850..=1150).contains(&x_first),
            "X moved first {x_first} times out of {trials}"
        );
    }
}
