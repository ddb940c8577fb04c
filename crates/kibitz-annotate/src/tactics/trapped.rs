//! Trapped-piece detection.

use kibitz_board::Position;

use super::{is_piece_safe, move_creates_greater_threat, AttackMove, BoardPiece};

/// Whether `piece` is stuck: unsafe where it stands, with every legal move
/// either landing it somewhere equally unsafe or tripping a counter-threat
/// that makes the escape illusory.
///
/// The position is calibrated to the piece's side before probing, so the
/// answer does not depend on whose turn it happens to be.
pub fn is_piece_trapped(position: &Position, piece: &BoardPiece) -> bool {
    let board = position.with_side_to_move(piece.color);

    if is_piece_safe(&board, piece) {
        return false;
    }

    for mv in board.moves_from(piece.square) {
        let escape = AttackMove {
            from: mv.from,
            to: mv.to,
            piece: piece.kind,
            color: piece.color,
            promotion: mv.kind.promotion(),
        };
        if move_creates_greater_threat(&board, piece, &escape) {
            continue;
        }

        let after = board.apply(mv);
        let landed = BoardPiece {
            square: mv.to,
            kind: mv.kind.promotion().unwrap_or(piece.kind),
            color: piece.color,
        };
        if is_piece_safe(&after, &landed) {
            return false;
        }
    }

    true
}
