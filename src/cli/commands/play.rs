//! Play command - console games against a previously saved agent

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{cli::human::play_session, q_learning::SavedQAgent};

#[derive(Parser, Debug)]
#[command(about = "Play against a trained agent")]
pub struct PlayArgs {
    /// Saved agent snapshot to load
    #[arg(long, short = 'a')]
    pub agent: PathBuf,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let saved = SavedQAgent::load_from_file(&args.agent)?;
    let mut agent = saved.to_agent()?;

    if let Some(games) = saved.metadata.games_trained {
        println!("Loaded agent trained on {games} games");
    }

    play_session(&mut agent)?;
    Ok(())
}
