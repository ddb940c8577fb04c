//! Counter-threat ("danger level") detection.
//!
//! A hanging piece is not really hanging when every way of taking it hands
//! the capturing side a bigger problem. The classic shapes are a capture
//! that exposes an equal or more valuable piece of the capturer's own, and
//! a minor-piece sacrifice whose capture walks into mate.

use kibitz_board::{Color, PieceKind, Position};

use super::{attacking_moves, capture_square, unsafe_pieces, AttackMove, BoardPiece};

/// Capturing claims against `color`'s hanging pieces that are worth at
/// least as much as `threatened`, excluding `threatened`'s own square.
/// These are the counter-threats that can make taking it unprofitable.
fn relative_unsafe_attacks(
    position: &Position,
    threatened: &BoardPiece,
    color: Color,
    floor: u32,
) -> Vec<AttackMove> {
    let mut attacks = Vec::new();
    for piece in unsafe_pieces(position, color, floor) {
        if piece.square == threatened.square {
            continue;
        }
        if piece.kind.value() < threatened.kind.value() {
            continue;
        }
        attacks.extend(attacking_moves(position, &piece, false));
    }
    attacks
}

/// Whether acting on the threat against `threatened` (typically capturing
/// it) creates a greater counter-threat: a fresh attack on an equal or more
/// valuable hanging piece of the acting side, or, when the threatened piece
/// is worth less than a queen, an immediate mate for the threatened side.
pub fn move_creates_greater_threat(
    position: &Position,
    threatened: &BoardPiece,
    reply: &AttackMove,
) -> bool {
    let before = relative_unsafe_attacks(position, threatened, reply.color, 0);

    let board = position.with_side_to_move(reply.color);
    let Some(mv) = board.find_move(reply.from, reply.to, reply.promotion) else {
        // A reply that cannot actually be played threatens nothing.
        return false;
    };
    let captured_value = board
        .piece_at(capture_square(mv, reply.color))
        .map_or(0, |(kind, _)| kind.value());
    let after = board.apply(mv);

    let fresh = relative_unsafe_attacks(&after, threatened, reply.color, captured_value)
        .into_iter()
        .any(|attack| !before.iter().any(|b| b.same_claim(&attack)));
    if fresh {
        return true;
    }

    threatened.kind.value() < PieceKind::Queen.value()
        && after
            .legal_moves()
            .into_iter()
            .any(|next| after.apply(next).is_checkmate())
}

/// Whether every available reply against `threatened` trips
/// [`move_creates_greater_threat`]. Vacuously true with no replies.
pub fn has_danger_levels(
    position: &Position,
    threatened: &BoardPiece,
    replies: &[AttackMove],
) -> bool {
    replies
        .iter()
        .all(|reply| move_creates_greater_threat(position, threatened, reply))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kibitz_board::Square;

    fn piece_at(pos: &Position, square: &str) -> BoardPiece {
        BoardPiece::at(pos, Square::parse(square).unwrap()).unwrap()
    }

    #[test]
    fn capture_that_walks_into_mate_protects_the_piece() {
        // The g5 knight hangs to h6xg5, but that opens the h-file and
        // Qh7 is mate (the bishop on d3 covers h7).
        let pos =
            Position::from_fen("5rk1/5pp1/7p/6N1/8/3B3Q/5PP1/6K1 b - - 0 1").unwrap();
        let knight = piece_at(&pos, "g5");
        let replies = attacking_moves(&pos, &knight, false);
        assert_eq!(replies.len(), 1);
        assert!(has_danger_levels(&pos, &knight, &replies));
    }

    #[test]
    fn no_mate_no_protection() {
        // Same shape without the d3 bishop: Qh7+ is met by Kxh7, so the
        // knight really hangs.
        let pos = Position::from_fen("5rk1/5pp1/7p/6N1/8/7Q/5PP1/6K1 b - - 0 1").unwrap();
        let knight = piece_at(&pos, "g5");
        let replies = attacking_moves(&pos, &knight, false);
        assert_eq!(replies.len(), 1);
        assert!(!has_danger_levels(&pos, &knight, &replies));
    }

    #[test]
    fn capture_that_exposes_a_rook_protects_the_piece() {
        // Qxa5 wins the knight but vacates d8, leaving the d7 rook to the
        // d1 rook: a fresh counter-threat at least as valuable.
        let pos = Position::from_fen("3q2k1/3r4/8/N7/8/8/8/3R2K1 b - - 0 1").unwrap();
        let knight = piece_at(&pos, "a5");
        let replies = attacking_moves(&pos, &knight, false);
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].piece, PieceKind::Queen);
        assert!(move_creates_greater_threat(&pos, &knight, &replies[0]));
        assert!(has_danger_levels(&pos, &knight, &replies));
    }

    #[test]
    fn pre_existing_threats_do_not_count() {
        // The h7 rook already hangs to the h1 rook before the capture, and
        // Qxa5 changes nothing about that claim, so the knight is not
        // protected.
        let pos = Position::from_fen("k7/7r/8/N2q4/8/8/8/6KR b - - 0 1").unwrap();
        let knight = piece_at(&pos, "a5");
        let replies = attacking_moves(&pos, &knight, false);
        assert_eq!(replies.len(), 1);
        assert!(!has_danger_levels(&pos, &knight, &replies));
    }

    #[test]
    fn vacuously_protected_without_replies() {
        let pos = Position::from_fen("4k3/8/8/N7/8/8/8/6K1 w - - 0 1").unwrap();
        let knight = piece_at(&pos, "a5");
        assert!(has_danger_levels(&pos, &knight, &[]));
    }
}
