//! Ranked engine lines.

use serde::{Deserialize, Serialize};

use crate::eval::Evaluation;

/// A move in both notations, as evaluation feeds report them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveText {
    /// Standard algebraic notation ("Nf3").
    pub san: String,
    /// Coordinate notation ("g1f3").
    pub uci: String,
}

impl MoveText {
    /// Creates a move text pair.
    pub fn new(san: impl Into<String>, uci: impl Into<String>) -> Self {
        MoveText {
            san: san.into(),
            uci: uci.into(),
        }
    }
}

/// One ranked principal variation for a position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineLine {
    /// Evaluation at the end of the line, White-relative.
    pub eval: Evaluation,
    /// Which engine produced the line ("stockfish-17", "lichess-cloud").
    pub source: String,
    /// Search depth in plies.
    pub depth: u32,
    /// 1-based MultiPV rank among parallel lines at this depth.
    pub index: u32,
    /// The principal variation; at least the first move when present.
    pub moves: Vec<MoveText>,
}

impl EngineLine {
    /// Creates a line.
    pub fn new(
        eval: Evaluation,
        source: impl Into<String>,
        depth: u32,
        index: u32,
        moves: Vec<MoveText>,
    ) -> Self {
        EngineLine {
            eval,
            source: source.into(),
            depth,
            index,
            moves,
        }
    }

    /// The first move of the principal variation.
    pub fn first_move(&self) -> Option<&MoveText> {
        self.moves.first()
    }
}

/// Picks the best line: deepest search first, then lowest rank.
pub fn top_line(lines: &[EngineLine]) -> Option<&EngineLine> {
    lines
        .iter()
        .min_by_key(|line| (std::cmp::Reverse(line.depth), line.index))
}

/// Finds the line sharing `reference`'s depth and source at another rank.
pub fn sibling_line<'a>(
    lines: &'a [EngineLine],
    reference: &EngineLine,
    index: u32,
) -> Option<&'a EngineLine> {
    lines.iter().find(|line| {
        line.depth == reference.depth && line.source == reference.source && line.index == index
    })
}
