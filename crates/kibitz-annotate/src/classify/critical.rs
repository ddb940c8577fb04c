//! The CRITICAL refinement: the only move preserving the advantage.

use kibitz_board::PieceKind;

use crate::eval::Evaluation;
use crate::extract::{ExtractedCurrent, ExtractedPrevious};
use crate::tactics::{capture_square, is_piece_safe, BoardPiece};

/// Subjective centipawns past which a position counts as decisively
/// winning; finding good moves there earns no special credit.
const COMPLETELY_WINNING: i32 = 700;

/// Expected-points loss the second-best move must cost for the played
/// move to be critical: midway between an inaccuracy and a mistake.
const CRITICAL_THRESHOLD: f64 = 0.10;

/// Shared candidate filter for the critical and brilliant refinements.
///
/// Rejects moves in decisively winning positions (the alternative, or the
/// outcome when no alternative resolved, is a forced mate or past the
/// centipawn bar), moves in losing positions, queen promotions, and forced
/// replies to check. None of those are hard to find.
pub(super) fn is_refinement_candidate(
    previous: &ExtractedPrevious,
    current: &ExtractedCurrent,
) -> bool {
    let mover = previous.mover;
    let current_subjective = current.eval.subjective(mover);

    if matches!(current_subjective, Evaluation::Mate(v) if v > 0) {
        return false;
    }

    let decisive = match previous.second_eval.map(|eval| eval.subjective(mover)) {
        Some(Evaluation::Centipawn(v)) => v >= COMPLETELY_WINNING,
        Some(Evaluation::Mate(v)) => v > 0,
        None => {
            matches!(current_subjective, Evaluation::Centipawn(v) if v >= COMPLETELY_WINNING)
        }
    };
    if decisive {
        return false;
    }

    if current_subjective.value() < 0 {
        return false;
    }

    if current.played.mv.kind.promotion() == Some(PieceKind::Queen) {
        return false;
    }

    if previous.position.in_check() {
        return false;
    }

    true
}

/// Whether the played best move was the only one holding the position:
/// the second-best line gives up a tenth of the game or more.
pub(super) fn consider_critical(
    previous: &ExtractedPrevious,
    current: &ExtractedCurrent,
) -> bool {
    if !is_refinement_candidate(previous, current) {
        return false;
    }

    // Grabbing a piece that was hanging anyway is not critical, however
    // necessary the numbers say it was.
    if let Some(captured) = current.played.captured {
        let square = capture_square(current.played.mv, previous.mover);
        let piece = BoardPiece {
            square,
            kind: captured,
            color: previous.mover.opposite(),
        };
        if !is_piece_safe(&previous.position, &piece) {
            return false;
        }
    }

    let Some(second) = previous.second_eval else {
        return false;
    };

    let mover = previous.mover;
    let ep_top = previous.eval.expected_points_for(mover, mover);
    let ep_second = second.expected_points_for(mover, mover);
    (ep_top - ep_second).max(0.0) >= CRITICAL_THRESHOLD
}
