//! Hanging-piece detection.

use kibitz_board::{Color, PieceKind, Position};

use super::{attacking_moves, defending_moves, BoardPiece};

/// Whether `piece` can stand where it is.
///
/// The predicate compares counts and values rather than playing out full
/// exchange sequences:
/// - any direct attacker cheaper than the piece makes it unsafe;
/// - otherwise at least as many defenders as attackers makes it safe;
/// - otherwise a piece cheaper than the cheapest direct attacker, with a
///   recapture cheaper than that attacker, is safe;
/// - otherwise any pawn defender makes it safe;
/// - everything else hangs.
pub fn is_piece_safe(position: &Position, piece: &BoardPiece) -> bool {
    let direct = attacking_moves(position, piece, false);

    if direct
        .iter()
        .any(|a| a.piece.value() < piece.kind.value())
    {
        return false;
    }

    let attackers = attacking_moves(position, piece, true);
    let defenders = defending_moves(position, piece, true);

    if attackers.len() <= defenders.len() {
        return true;
    }

    if let Some(cheapest) = direct.iter().map(|a| a.piece.value()).min() {
        if piece.kind.value() < cheapest
            && defenders.iter().any(|d| d.piece.value() < cheapest)
        {
            return true;
        }
    }

    defenders.iter().any(|d| d.piece == PieceKind::Pawn)
}

/// Non-pawn, non-king pieces of `color` worth strictly more than `floor`
/// that are not safe. The floor screens out pieces no more valuable than
/// whatever a move just captured; pass 0 to consider everything.
pub fn unsafe_pieces(position: &Position, color: Color, floor: u32) -> Vec<BoardPiece> {
    position
        .pieces(color)
        .into_iter()
        .filter(|&(_, kind)| {
            kind != PieceKind::Pawn && kind != PieceKind::King && kind.value() > floor
        })
        .map(|(square, kind)| BoardPiece {
            square,
            kind,
            color,
        })
        .filter(|piece| !is_piece_safe(position, piece))
        .collect()
}
