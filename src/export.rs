//! Learned-policy export
//!
//! After training, the value table is flattened to one best move per
//! observed board configuration and written out as a plain key→value
//! document: either JSON, or a small JS module a browser player can load
//! directly. The core only exposes read access to the table; everything
//! here is presentation.

use std::{
    collections::{BTreeMap, HashMap},
    fs::File,
    io::Write,
    path::Path,
};

use crate::{Result, q_learning::QTable, types::BoardKey};

/// Output format for the exported policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovesFormat {
    /// Plain JSON object mapping board key to best move
    Json,
    /// JS module assigning the same mapping to `ai_moves`
    Js,
}

impl MovesFormat {
    /// Infer the format from a file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("js") => MovesFormat::Js,
            _ => MovesFormat::Json,
        }
    }
}

fn best_action(actions: &HashMap<usize, f64>) -> Option<usize> {
    // Iteration-order tie-break is fine for an export snapshot
    actions
        .iter()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
        .map(|(&position, _)| position)
}

/// Pick the single highest-valued move for every observed board.
///
/// Sorted by key so repeated exports of the same table are byte-identical.
pub fn best_moves(table: &QTable) -> BTreeMap<BoardKey, usize> {
    table
        .states()
        .filter_map(|(key, actions)| best_action(actions).map(|pos| (key.clone(), pos)))
        .collect()
}

/// Render the policy as a pretty-printed JSON document
pub fn render_json(moves: &BTreeMap<BoardKey, usize>) -> Result<String> {
    Ok(serde_json::to_string_pretty(moves)?)
}

/// Render the policy as a JS module in the shape the browser player loads
pub fn render_js(moves: &BTreeMap<BoardKey, usize>, games_trained: usize) -> Result<String> {
    let json = serde_json::to_string_pretty(moves)?;
    Ok(format!(
        "/*\n * Tic-tac-toe moves learned from {games_trained} self-play games.\n */\n\n\
         var ai_moves = JSON.parse(`\n{json}`);\n"
    ))
}

/// Extract the best-move policy from a table and write it to `path`.
///
/// Returns the number of exported board configurations.
///
/// # Errors
///
/// Returns an error if the file cannot be written or the mapping cannot be
/// serialized.
pub fn write_policy(
    table: &QTable,
    path: &Path,
    format: MovesFormat,
    games_trained: usize,
) -> Result<usize> {
    let moves = best_moves(table);
    let document = match format {
        MovesFormat::Json => render_json(&moves)?,
        MovesFormat::Js => render_js(&moves, games_trained)?,
    };

    let mut file = File::create(path).map_err(|source| crate::Error::Io {
        operation: format!("create {}", path.display()),
        source,
    })?;
    file.write_all(document.as_bytes())
        .map_err(|source| crate::Error::Io {
            operation: format!("write {}", path.display()),
            source,
        })?;

    Ok(moves.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Board;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn test_best_moves_picks_argmax() {
        let mut table = QTable::new(0.5, 0.9, 100.0);
        let b = board("XO.......");
        table.set(&b, 2, 10.0);
        table.set(&b, 4, 90.0);
        table.set(&b, 8, 50.0);

        let moves = best_moves(&table);
        assert_eq!(moves.get(&b.key()), Some(&4));
    }

    #[test]
    fn test_best_moves_covers_every_observed_state() {
        let mut table = QTable::new(0.5, 0.9, 100.0);
        let a = board(".........");
        let b = board("X...O....");
        // State `a` was only evaluated, never updated; it still exports
        table.value(&a, 0);
        table.set(&b, 1, 12.0);

        let moves = best_moves(&table);
        assert_eq!(moves.len(), 2);
        assert_eq!(moves.get(&a.key()), Some(&0));
        assert_eq!(moves.get(&b.key()), Some(&1));
    }

    #[test]
    fn test_render_json_shape() {
        let mut table = QTable::new(0.5, 0.9, 100.0);
        table.set(&board("X........"), 4, 5.0);

        let doc = render_json(&best_moves(&table)).unwrap();
        assert!(doc.contains("\"X........\": 4"));
    }

    #[test]
    fn test_render_js_wraps_json() {
        let mut table = QTable::new(0.5, 0.9, 100.0);
        table.set(&board("X........"), 4, 5.0);

        let doc = render_js(&best_moves(&table), 1000).unwrap();
        assert!(doc.contains("var ai_moves = JSON.parse(`"));
        assert!(doc.contains("\"X........\": 4"));
        assert!(doc.contains("1000 self-play games"));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            MovesFormat::from_path(Path::new("moves.js")),
            MovesFormat::Js
        );
        assert_eq!(
            MovesFormat::from_path(Path::new("moves.json")),
            MovesFormat::Json
        );
        assert_eq!(MovesFormat::from_path(Path::new("moves")), MovesFormat::Json);
    }
}
