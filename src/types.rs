//! Newtype wrappers for improved type safety and domain modeling.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Board size constant for tic-tac-toe.
pub const BOARD_SIZE: usize = 9;

/// A validated board configuration key.
///
/// The Q-value table is indexed by the exact 9-cell sequence of a board,
/// encoded as a 9-character string of `.`, `X`, and `O`. Identity is
/// order-sensitive: two boards with marks in permuted positions are
/// distinct keys. This newtype ensures that only well-formed encodings are
/// used as table keys.
///
/// # Examples
///
/// ```
/// use wopr::tictactoe::Board;
/// use wopr::types::BoardKey;
///
/// let key = Board::new().key();
/// assert_eq!(key.as_str(), ".........");
///
/// // Parse from string (validates the format)
/// let key = BoardKey::parse("XO.......").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoardKey(String);

impl BoardKey {
    /// Parse and validate a board key from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not exactly 9 cell characters.
    pub fn parse(s: &str) -> Result<Self, crate::Error> {
        crate::tictactoe::Board::from_string(s)?;
        Ok(BoardKey(s.to_string()))
    }

    /// Create from a board encoding (unchecked, for internal use).
    ///
    /// Safe because `Board::encode` always produces a valid key.
    pub(crate) fn from_encoding(encoding: String) -> Self {
        BoardKey(encoding)
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for BoardKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&crate::tictactoe::Board> for BoardKey {
    fn from(board: &crate::tictactoe::Board) -> Self {
        board.key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_key() {
        assert!(BoardKey::parse(".........").is_ok());
        assert!(BoardKey::parse("XO.......").is_ok());
        assert!(BoardKey::parse("XOXOXOXOX").is_ok());
    }

    #[test]
    fn test_parse_rejects_short_key() {
        assert!(BoardKey::parse("XO.").is_err());
    }

    #[test]
    fn test_parse_rejects_invalid_character() {
        assert!(BoardKey::parse("XOZ......").is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        let key = BoardKey::parse("X...O....").unwrap();
        assert_eq!(key.to_string(), "X...O....");
    }
}
