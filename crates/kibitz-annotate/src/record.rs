//! Game records handed to the annotator.

use kibitz_board::{Position, SanError};

use crate::classify::MoveReport;
use crate::line::{EngineLine, MoveText};

/// One mainline position with its engine data and annotation results.
#[derive(Debug, Clone)]
pub struct PositionRecord {
    /// The position itself.
    pub position: Position,
    /// The move that produced this position; `None` on the root.
    pub played: Option<MoveText>,
    /// Ranked engine lines for this position. Empty is a valid state, not
    /// an error: finished positions are typically never analyzed.
    pub lines: Vec<EngineLine>,
    /// Opening name, written back when the position is known theory.
    pub opening: Option<String>,
    /// Classification result, written back by the annotator.
    pub report: Option<MoveReport>,
}

impl PositionRecord {
    /// Creates the root record (no move led here).
    pub fn root(position: Position) -> Self {
        PositionRecord {
            position,
            played: None,
            lines: Vec::new(),
            opening: None,
            report: None,
        }
    }

    /// Creates a record for a position reached by `played`.
    pub fn after(position: Position, played: MoveText) -> Self {
        PositionRecord {
            position,
            played: Some(played),
            lines: Vec::new(),
            opening: None,
            report: None,
        }
    }

    /// Attaches engine lines.
    pub fn with_lines(mut self, lines: Vec<EngineLine>) -> Self {
        self.lines = lines;
        self
    }
}

/// A whole game in ply order: the root position first, then one record per
/// half-move.
#[derive(Debug, Clone, Default)]
pub struct GameRecord {
    pub records: Vec<PositionRecord>,
}

impl GameRecord {
    /// Builds a record chain by playing SAN moves from a starting position.
    /// Engine lines start empty; attach them per record before annotating.
    pub fn mainline(start: Position, sans: &[&str]) -> Result<Self, SanError> {
        let mut records = vec![PositionRecord::root(start.clone())];
        let mut position = start;
        for san in sans {
            let mv = position.from_san(san)?;
            let info = position.describe(mv);
            let next = position.apply(mv);
            records.push(PositionRecord::after(
                next.clone(),
                MoveText::new(info.san.clone(), info.uci()),
            ));
            position = next;
        }
        Ok(GameRecord { records })
    }

    /// Number of half-moves (the root does not count).
    pub fn ply_count(&self) -> usize {
        self.records.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mainline_builds_in_ply_order() {
        let game =
            GameRecord::mainline(Position::startpos(), &["e4", "e5", "Nf3"]).unwrap();
        assert_eq!(game.ply_count(), 3);
        assert!(game.records[0].played.is_none());
        assert_eq!(game.records[1].played.as_ref().unwrap().san, "e4");
        assert_eq!(game.records[3].played.as_ref().unwrap().uci, "g1f3");
        assert_eq!(
            game.records[2].position.placement(),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR"
        );
    }

    #[test]
    fn mainline_rejects_illegal_san() {
        assert!(GameRecord::mainline(Position::startpos(), &["e5"]).is_err());
    }

    #[test]
    fn empty_game() {
        let game = GameRecord::default();
        assert_eq!(game.ply_count(), 0);
    }
}
