//! Console-driven human player
//!
//! The core expects a validated, 0-based move index; everything about
//! keyboard input - prompting, 1-based numbering, re-prompting on bad
//! input - lives here.

use std::io::{self, Write};

use crate::{
    Result,
    env::GameEnvironment,
    ports::Agent,
    q_learning::QAgent,
    tictactoe::Board,
};

use super::render::ConsoleRenderer;

/// Parse a 1-based cell number typed by the user into a 0-based position
pub fn parse_move_input(input: &str) -> Option<usize> {
    match input.trim().parse::<usize>() {
        Ok(n) if (1..=9).contains(&n) => Some(n - 1),
        _ => None,
    }
}

fn prompt(text: &str) -> Result<String> {
    print!("{text}");
    io::stdout().flush().map_err(|source| crate::Error::Io {
        operation: "flush stdout".to_string(),
        source,
    })?;

    let mut line = String::new();
    let bytes = io::stdin()
        .read_line(&mut line)
        .map_err(|source| crate::Error::Io {
            operation: "read console input".to_string(),
            source,
        })?;
    if bytes == 0 {
        return Err(crate::Error::Io {
            operation: "read console input".to_string(),
            source: io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"),
        });
    }
    Ok(line)
}

/// Human player driven by console input.
///
/// Blocks in `choose_move` until a legal move is typed; reward and
/// game-over notifications are no-ops.
pub struct HumanAgent;

impl Agent for HumanAgent {
    fn choose_move(&mut self, board: &Board) -> Result<usize> {
        println!();
        let mut line = prompt("Choose a move from 1-9: ")?;
        loop {
            if let Some(position) = parse_move_input(&line)
                && board.is_legal(position)
            {
                return Ok(position);
            }
            line = prompt("Invalid move, choose again: ")?;
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}

/// Play console games against a trained agent until the user bows out.
///
/// The human plays X, the agent plays O; the environment still picks the
/// first mover at random each game.
pub fn play_session(agent: &mut QAgent) -> Result<()> {
    println!("You are playing as X");
    println!(
        "You are playing against a {} that has played {} games",
        agent.name(),
        agent.games_played()
    );

    let mut human = HumanAgent;
    loop {
        let mut env = GameEnvironment::new().with_observer(Box::new(ConsoleRenderer::new()));
        env.play_game(&mut human, agent)?;

        let answer = prompt("The only winning move is not to play. Play again? y/n: ")?;
        if !answer.trim().to_ascii_lowercase().starts_with('y') {
            return Ok(());
        }
    }
}
