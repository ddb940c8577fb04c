//! Opening book storage and lookup.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use thiserror::Error;

use crate::builtin;

/// Errors raised while loading an opening book.
///
/// Loading happens once at startup; a book that fails to load is fatal to
/// the caller, never a per-lookup condition.
#[derive(Debug, Error)]
pub enum BookError {
    /// The book file could not be read.
    #[error("failed to read opening book: {0}")]
    Io(#[from] std::io::Error),

    /// The book file is not a JSON object of placement to name.
    #[error("failed to parse opening book: {0}")]
    Json(#[from] serde_json::Error),
}

/// An immutable map from piece placement to opening name.
#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    positions: HashMap<String, String>,
}

impl OpeningBook {
    /// Creates a book from placement/name pairs.
    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        OpeningBook {
            positions: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Creates the compiled-in book.
    pub fn builtin() -> Self {
        Self::from_entries(builtin::OPENINGS.iter().copied())
    }

    /// Loads a book from a JSON object of `{ "<placement>": "<name>" }`.
    pub fn from_reader(reader: impl Read) -> Result<Self, BookError> {
        let positions: HashMap<String, String> = serde_json::from_reader(reader)?;
        Ok(OpeningBook { positions })
    }

    /// Loads a book from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BookError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Looks up an opening name. Accepts either a bare piece-placement
    /// string or a full FEN; everything after the first space is ignored.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let placement = key.split_whitespace().next()?;
        self.positions.get(placement).map(String::as_str)
    }

    /// Returns the number of positions in the book.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the book has no positions.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_has_king_pawn() {
        let book = OpeningBook::builtin();
        assert!(!book.is_empty());
        let name = book
            .lookup("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR")
            .unwrap();
        assert!(!name.is_empty());
    }

    #[test]
    fn lookup_accepts_full_fen() {
        let book = OpeningBook::builtin();
        assert_eq!(
            book.lookup("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"),
            book.lookup("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR"),
        );
    }

    #[test]
    fn lookup_ignores_turn_and_rights() {
        // Same placement reached with reversed side to move still hits.
        let book = OpeningBook::from_entries([("8/8/8/8/8/8/8/8", "Empty Board")]);
        assert_eq!(book.lookup("8/8/8/8/8/8/8/8 w - - 0 1"), Some("Empty Board"));
        assert_eq!(book.lookup("8/8/8/8/8/8/8/8 b - - 10 42"), Some("Empty Board"));
    }

    #[test]
    fn lookup_miss() {
        let book = OpeningBook::builtin();
        assert_eq!(book.lookup("8/8/8/8/8/8/8/8"), None);
        assert_eq!(book.lookup(""), None);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{}",
            r#"{"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR": "Starting Position"}"#
        )
        .unwrap();

        let book = OpeningBook::from_path(file.path()).unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(
            book.lookup("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
            Some("Starting Position")
        );
    }

    #[test]
    fn load_failures_are_fatal() {
        assert!(matches!(
            OpeningBook::from_path("/definitely/not/here.json"),
            Err(BookError::Io(_))
        ));
        assert!(matches!(
            OpeningBook::from_reader("not json".as_bytes()),
            Err(BookError::Json(_))
        ));
    }
}
