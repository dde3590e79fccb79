//! Console board rendering

use crate::{
    ports::GameObserver,
    tictactoe::{Board, Cell, GameOutcome, GameState, Mark},
};

/// Format the board as the classic console grid
pub fn format_grid(board: &Board) -> String {
    let cell = |i: usize| match board.get(i) {
        Cell::Empty => ' ',
        occupied => occupied.to_char(),
    };
    let row = |a: usize, b: usize, c: usize| format!(" {} | {} | {}", cell(a), cell(b), cell(c));

    format!(
        "{}\n-----------\n{}\n-----------\n{}",
        row(0, 1, 2),
        row(3, 4, 5),
        row(6, 7, 8)
    )
}

/// Prints the board after every move, plus win/draw banners.
///
/// Purely side-effecting; attach to a
/// [`GameEnvironment`](crate::env::GameEnvironment) for interactive play.
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    pub fn new() -> Self {
        ConsoleRenderer
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GameObserver for ConsoleRenderer {
    fn on_game_start(&mut self, state: &GameState) {
        println!("{}", format_grid(&state.board));
    }

    fn on_move(&mut self, mark: Mark, position: usize, state: &GameState) {
        println!("\n{} goes for {}", mark, position + 1);
        println!("{}", format_grid(&state.board));
    }

    fn on_game_end(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(mark) => println!("\n{mark} wins!"),
            GameOutcome::Draw => println!("\nDraw!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grid() {
        let board = Board::from_string("XO...X..O").unwrap();
        let grid = format_grid(&board);
        assert_eq!(
            grid,
            " X | O |  \n-----------\n   |   | X\n-----------\n   |   | O"
        );
    }
}
