//! Common test doubles for the wopr test suite.
//!
//! Scripted agents let tests drive the environment down a predetermined
//! game; recording agents capture every callback so reward timing can be
//! asserted move by move.

#![allow(dead_code)]

use wopr::{Agent, Result, tictactoe::Board};

/// Plays a fixed sequence of moves, ignoring the board
pub struct ScriptedAgent {
    moves: Vec<usize>,
    next: usize,
}

impl ScriptedAgent {
    pub fn new(moves: Vec<usize>) -> Self {
        Self { moves, next: 0 }
    }
}

impl Agent for ScriptedAgent {
    fn choose_move(&mut self, _board: &Board) -> Result<usize> {
        let position = self.moves[self.next];
        self.next += 1;
        Ok(position)
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}

/// One observed agent callback
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Reset,
    Reward { value: f64, board: String },
    GameOver,
}

/// Scripted agent that records every callback it receives
pub struct RecordingAgent {
    moves: Vec<usize>,
    next: usize,
    pub events: Vec<Event>,
}

impl RecordingAgent {
    pub fn new(moves: Vec<usize>) -> Self {
        Self {
            moves,
            next: 0,
            events: Vec::new(),
        }
    }

    /// Rewards received, in order
    pub fn rewards(&self) -> Vec<(f64, String)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Reward { value, board } => Some((*value, board.clone())),
                _ => None,
            })
            .collect()
    }

    /// Number of game-over notifications received
    pub fn game_over_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, Event::GameOver))
            .count()
    }
}

impl Agent for RecordingAgent {
    fn reset(&mut self) {
        self.events.push(Event::Reset);
    }

    fn choose_move(&mut self, _board: &Board) -> Result<usize> {
        let position = self.moves[self.next];
        self.next += 1;
        Ok(position)
    }

    fn reward(&mut self, value: f64, achieved_board: &Board) {
        self.events.push(Event::Reward {
            value,
            board: achieved_board.encode(),
        });
    }

    fn notify_game_over(&mut self) {
        self.events.push(Event::GameOver);
    }

    fn name(&self) -> &str {
        "Recording"
    }
}
