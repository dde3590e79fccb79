//! Train command - self-play training with optional export and human play

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use crate::{
    cli::human::play_session,
    env::{EnvConfig, RewardSchedule},
    export::{MovesFormat, write_policy},
    pipeline::{ProgressObserver, SelfPlayTrainer, TrainingConfig},
    q_learning::{QAgent, QConfig, SavedQAgent, TrainingMetadata},
};

#[derive(Parser, Debug)]
#[command(about = "Train two Q-learning agents by self-play", allow_negative_numbers = true)]
pub struct TrainArgs {
    /// Number of self-play training games
    #[arg(long, short = 'g', default_value_t = 500_000)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Learning rate α (0.0-1.0)
    #[arg(long, default_value_t = 0.5)]
    pub learning_rate: f64,

    /// Discount factor γ (0.0-1.0)
    #[arg(long, default_value_t = 0.9)]
    pub discount: f64,

    /// Exploration rate ε (0.0-1.0)
    #[arg(long, default_value_t = 0.2)]
    pub epsilon: f64,

    /// Initial Q-value for unseen state/action pairs
    #[arg(long, default_value_t = 100.0)]
    pub q_init: f64,

    /// Reward schedule (win=100,draw=50,loss=-100)
    #[arg(long)]
    pub reward: Option<String>,

    /// Export the learned best-move policy (.json or .js)
    #[arg(long, short = 'm')]
    pub moves: Option<PathBuf>,

    /// Save the trained agent snapshot
    #[arg(long, short = 'O')]
    pub output: Option<PathBuf>,

    /// Play against the trained agent once training finishes
    #[arg(long, default_value_t = false)]
    pub play: bool,

    /// Show progress bar
    #[arg(long, default_value_t = true)]
    pub progress: bool,
}

/// Parse a reward schedule from string (e.g., "win=100,draw=50,loss=-100")
fn parse_reward_schedule(s: &str) -> Result<RewardSchedule> {
    let mut schedule = RewardSchedule::default();

    for part in s.split(',') {
        let trimmed = part.trim();
        if trimmed.is_empty() {
            continue;
        }
        let (key, value_str) = trimmed
            .split_once('=')
            .ok_or_else(|| anyhow!("Invalid reward entry '{trimmed}'. Expected key=value"))?;
        let value: f64 = value_str
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid numeric reward '{value_str}' in '{trimmed}'"))?;
        match key.trim().to_ascii_lowercase().as_str() {
            "win" => schedule.win = value,
            "draw" => schedule.draw = value,
            "loss" => schedule.loss = value,
            other => {
                return Err(anyhow!(
                    "Unknown reward key '{other}'. Expected win, draw, or loss"
                ));
            }
        }
    }

    Ok(schedule)
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let rewards = if let Some(ref reward_str) = args.reward {
        parse_reward_schedule(reward_str)?
    } else {
        RewardSchedule::default()
    };

    let q_config = QConfig {
        learning_rate: args.learning_rate,
        discount_factor: args.discount,
        epsilon: args.epsilon,
        q_init: args.q_init,
    };

    let mut player_x = QAgent::new(q_config);
    let mut player_o = QAgent::new(q_config);
    if let Some(seed) = args.seed {
        player_x = player_x.with_seed(seed);
        player_o = player_o.with_seed(seed.wrapping_add(1));
    }

    let config = TrainingConfig {
        num_games: args.games,
        seed: args.seed.map(|s| s.wrapping_add(2)),
        env: EnvConfig {
            first_player: None,
            rewards,
        },
    };

    let mut trainer = SelfPlayTrainer::new(config);
    if args.progress {
        trainer = trainer.with_observer(Box::new(ProgressObserver::new()));
    }

    println!("WOPR is playing tic-tac-toe against itself...");
    let result = trainer.run(&mut player_x, &mut player_o)?;

    println!("\n=== Training Complete ===");
    println!("Total games: {}", result.total_games);
    println!(
        "X wins: {} ({:.1}%)",
        result.x_wins,
        result.x_win_rate * 100.0
    );
    println!(
        "O wins: {} ({:.1}%)",
        result.o_wins,
        result.o_win_rate * 100.0
    );
    println!("Draws: {} ({:.1}%)", result.draws, result.draw_rate * 100.0);

    if let Some(ref moves_path) = args.moves {
        let format = MovesFormat::from_path(moves_path);
        let exported = write_policy(
            player_o.q_table(),
            moves_path,
            format,
            result.total_games,
        )
        .with_context(|| format!("Failed to export policy to {}", moves_path.display()))?;
        println!(
            "\n✓ Exported best moves for {} board states to: {}",
            exported,
            moves_path.display()
        );
    }

    if let Some(ref output_path) = args.output {
        let metadata = TrainingMetadata {
            games_trained: Some(result.total_games),
            seed: args.seed,
            saved_at: None,
        };
        let saved = SavedQAgent::from_agent(&player_o, metadata);
        saved.save_to_file(output_path)?;
        println!("✓ Agent saved to: {}", output_path.display());
        println!("  Stored board states: {}", player_o.q_table().len());
    }

    if args.play {
        println!("\nAI has been trained for {} rounds, starting human game...", args.games);
        play_session(&mut player_o)?;
    }

    Ok(())
}
