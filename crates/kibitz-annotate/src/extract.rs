//! Resolving position records into classification inputs.
//!
//! Extraction turns a [`PositionRecord`] pair into the previous/current view
//! the waterfall works on. A record with no resolvable top line extracts to
//! `None` rather than an error: terminal positions are routinely never
//! analyzed, and the caller falls back to the engine-data-free checks.

use kibitz_board::{Color, Move, MoveInfo, Position};
use thiserror::Error;

use crate::eval::Evaluation;
use crate::line::{sibling_line, top_line, EngineLine, MoveText};
use crate::record::PositionRecord;

/// Errors raised when a record's engine data contradicts its position.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The resolved best line names a move its position cannot play. The
    /// feed and the position disagree, which is an upstream bug, never a
    /// recoverable analysis state.
    #[error("top engine move {san:?} is not legal in {fen}")]
    TopMove { san: String, fen: String },

    /// The recorded played move does not apply to the position it was
    /// supposedly played from.
    #[error("played move {san:?} is not legal in {fen}")]
    PlayedMove { san: String, fen: String },
}

/// The position a move was played from, with its resolved engine data.
#[derive(Debug, Clone)]
pub struct ExtractedPrevious {
    pub position: Position,
    pub top_line: EngineLine,
    /// The best move, resolved against `position`.
    pub top_move: MoveInfo,
    /// Evaluation of the top line, White-relative.
    pub eval: Evaluation,
    /// The rank-2 line sharing the top line's depth and source, if any.
    pub second_line: Option<EngineLine>,
    pub second_eval: Option<Evaluation>,
    /// The side to move, i.e. the player whose move is being classified.
    pub mover: Color,
}

/// The position a move produced, with its resolved engine data.
#[derive(Debug, Clone)]
pub struct ExtractedCurrent {
    pub position: Position,
    /// Evaluation of this position's top line, White-relative.
    pub eval: Evaluation,
    /// The played move, resolved against the previous position.
    pub played: MoveInfo,
    /// True when the played move put the opponent in check.
    pub gives_check: bool,
}

/// Resolves a feed move against a position, preferring SAN and falling back
/// to the coordinate form.
fn resolve(position: &Position, text: &MoveText) -> Option<Move> {
    position
        .from_san(&text.san)
        .ok()
        .or_else(|| position.from_uci(&text.uci))
}

/// Extracts the pre-move view of a record. Returns `Ok(None)` when no top
/// line (or no first move of one) is available.
pub fn extract_previous(
    record: &PositionRecord,
) -> Result<Option<ExtractedPrevious>, ExtractError> {
    let Some(top) = top_line(&record.lines) else {
        return Ok(None);
    };
    let Some(first) = top.first_move() else {
        return Ok(None);
    };

    let mv = resolve(&record.position, first).ok_or_else(|| ExtractError::TopMove {
        san: first.san.clone(),
        fen: record.position.to_fen(),
    })?;

    let second_line = sibling_line(&record.lines, top, 2).cloned();
    let second_eval = second_line.as_ref().map(|line| line.eval);

    Ok(Some(ExtractedPrevious {
        top_move: record.position.describe(mv),
        eval: top.eval,
        top_line: top.clone(),
        second_line,
        second_eval,
        mover: record.position.side_to_move(),
        position: record.position.clone(),
    }))
}

/// Extracts the post-move view of a record. `previous` is the record the
/// move was played from. Returns `Ok(None)` when no top line is available
/// or the record carries no played move.
pub fn extract_current(
    previous: &PositionRecord,
    record: &PositionRecord,
) -> Result<Option<ExtractedCurrent>, ExtractError> {
    let Some(top) = top_line(&record.lines) else {
        return Ok(None);
    };
    let Some(played_text) = &record.played else {
        return Ok(None);
    };

    let mv = resolve(&previous.position, played_text).ok_or_else(|| {
        ExtractError::PlayedMove {
            san: played_text.san.clone(),
            fen: previous.position.to_fen(),
        }
    })?;

    Ok(Some(ExtractedCurrent {
        eval: top.eval,
        played: previous.position.describe(mv),
        gives_check: record.position.in_check(),
        position: record.position.clone(),
    }))
}
