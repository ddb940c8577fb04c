//! The BRILLIANT refinement: a sound piece sacrifice.

use kibitz_board::PieceKind;

use crate::extract::{ExtractedCurrent, ExtractedPrevious};
use crate::tactics::{
    attacking_moves, has_danger_levels, is_piece_trapped, unsafe_pieces,
};

use super::critical::is_refinement_candidate;

/// Whether a best-or-better move deserves the brilliant label.
///
/// The move must genuinely offer material: it leaves at least one piece
/// hanging that outweighs whatever it captured, that piece is not covered
/// by counter-threats, and the offer was a choice rather than a necessity -
/// no credit for running from a trap, for sacrificing pieces that had no
/// squares anyway, or for quietly tidying up the mover's loose pieces.
pub(super) fn consider_brilliant(
    previous: &ExtractedPrevious,
    current: &ExtractedCurrent,
) -> bool {
    if !is_refinement_candidate(previous, current) {
        return false;
    }

    if current.played.mv.kind.promotion().is_some() {
        return false;
    }

    let mover = previous.mover;
    let unsafe_before = unsafe_pieces(&previous.position, mover, 0);

    let captured_value = current.played.captured.map_or(0, PieceKind::value);
    let unsafe_after = unsafe_pieces(&current.position, mover, captured_value);

    if unsafe_after.is_empty() {
        return false;
    }

    // Reducing the number of hanging pieces is moving to safety, not
    // sacrificing. Checks are exempt: a desperate try that keeps giving
    // check may still be brilliant.
    if !current.gives_check && unsafe_after.len() < unsafe_before.len() {
        return false;
    }

    // Every hanging piece covered by counter-threats means nothing was
    // really offered.
    let genuinely_offered = unsafe_after.iter().any(|piece| {
        let replies = attacking_moves(&current.position, piece, false);
        !has_danger_levels(&current.position, piece, &replies)
    });
    if !genuinely_offered {
        return false;
    }

    let trapped_before: Vec<_> = unsafe_before
        .iter()
        .filter(|piece| is_piece_trapped(&previous.position, piece))
        .collect();
    let trapped_after: Vec<_> = unsafe_after
        .iter()
        .filter(|piece| is_piece_trapped(&current.position, piece))
        .collect();

    let moved_from_trap = trapped_before
        .iter()
        .any(|piece| piece.square == current.played.mv.from);

    // A piece with no future earns no credit for hanging: not an escape
    // from a trap, not a forced sacrifice of all-trapped pieces, and not a
    // reduction of the trapped count.
    if moved_from_trap
        || trapped_after.len() == unsafe_after.len()
        || trapped_after.len() < trapped_before.len()
    {
        return false;
    }

    true
}
