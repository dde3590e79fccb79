//! WOPR CLI - tic-tac-toe self-play Q-learning trainer
//!
//! Trains two tabular Q-learning agents against each other, optionally
//! exports the learned policy or the agent itself, and lets a human play
//! the result.

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wopr")]
#[command(version, about = "Tic-tac-toe self-play Q-learning trainer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train two Q-learning agents by self-play
    Train(wopr::cli::commands::train::TrainArgs),

    /// Play against a previously saved agent
    Play(wopr::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => wopr::cli::commands::train::execute(args),
        Commands::Play(args) => wopr::cli::commands::play::execute(args),
    }
}
