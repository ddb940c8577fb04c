//! Attacker discovery, direct and through batteries.

use std::collections::HashSet;

use kibitz_board::{PieceKind, Position, Square};

use super::{capture_square, AttackMove, BoardPiece, WORKLIST_BOUND};

/// Direct capturing claims on `piece`: every legal move of the opposing
/// side that captures on its square, plus king pressure that move
/// generation hides (a king bearing on a defended piece has no legal
/// capture but still contributes to the exchange count).
pub(crate) fn direct_attacking_moves(
    position: &Position,
    piece: &BoardPiece,
) -> Vec<AttackMove> {
    let attacker = piece.color.opposite();
    let board = position.with_side_to_move(attacker);

    let mut attacks: Vec<AttackMove> = Vec::new();
    for mv in board.legal_moves() {
        if capture_square(mv, attacker) != piece.square {
            continue;
        }
        let info = board.describe(mv);
        attacks.push(AttackMove {
            from: mv.from,
            to: mv.to,
            piece: info.piece,
            color: attacker,
            promotion: mv.kind.promotion(),
        });
    }

    for from in board.attackers(piece.square, attacker) {
        if board.piece_at(from).map(|(kind, _)| kind) != Some(PieceKind::King) {
            continue;
        }
        let already_listed = attacks
            .iter()
            .any(|a| a.piece == PieceKind::King && a.from == from);
        if !already_listed {
            attacks.push(AttackMove {
                from,
                to: piece.square,
                piece: PieceKind::King,
                color: attacker,
                promotion: None,
            });
        }
    }

    attacks
}

/// All capturing claims on `piece`.
///
/// With `transitive`, rear pieces of attacking batteries are found by a
/// bounded work list: pop an attacker, remove it in a simulated copy,
/// re-query, and keep only the claims the removal revealed. Kings are
/// never popped; a king is never part of an attacking battery.
pub fn attacking_moves(
    position: &Position,
    piece: &BoardPiece,
    transitive: bool,
) -> Vec<AttackMove> {
    let mut attacks = direct_attacking_moves(position, piece);
    if !transitive {
        return attacks;
    }

    let mut frontier: Vec<(Position, Square, PieceKind)> = attacks
        .iter()
        .map(|a| (position.clone(), a.from, a.piece))
        .collect();
    let mut seen: HashSet<(Square, PieceKind)> =
        frontier.iter().map(|&(_, sq, kind)| (sq, kind)).collect();

    let mut budget = WORKLIST_BOUND;
    while let Some((board, square, kind)) = frontier.pop() {
        if budget == 0 {
            break;
        }
        budget -= 1;

        if kind == PieceKind::King {
            continue;
        }

        let old: Vec<AttackMove> = direct_attacking_moves(&board, piece)
            .into_iter()
            .filter(|a| a.from != square)
            .collect();

        let stripped = board.removing(square);
        let revealed: Vec<AttackMove> = direct_attacking_moves(&stripped, piece)
            .into_iter()
            .filter(|a| {
                !old.iter().any(|o| o.same_claim(a))
                    && !attacks.iter().any(|o| o.same_claim(a))
            })
            .collect();

        for claim in &revealed {
            if seen.insert((claim.from, claim.piece)) {
                frontier.push((stripped.clone(), claim.from, claim.piece));
            }
        }
        attacks.extend(revealed);
    }

    attacks
}

#[cfg(test)]
mod tests {
    use super::*;
    use kibitz_board::Color;

    fn piece_at(pos: &Position, square: &str) -> BoardPiece {
        BoardPiece::at(pos, Square::parse(square).unwrap()).unwrap()
    }

    #[test]
    fn direct_attacks_only() {
        // Doubled white rooks against the e4 rook: only the front rook
        // attacks directly.
        let pos = Position::from_fen("4k3/8/8/8/4r3/8/4R3/4R2K w - - 0 1").unwrap();
        let target = piece_at(&pos, "e4");
        let attacks = attacking_moves(&pos, &target, false);
        assert_eq!(attacks.len(), 1);
        assert_eq!(attacks[0].from, Square::parse("e2").unwrap());
        assert_eq!(attacks[0].piece, PieceKind::Rook);
    }

    #[test]
    fn battery_rear_piece_is_found() {
        let pos = Position::from_fen("4k3/8/8/8/4r3/8/4R3/4R2K w - - 0 1").unwrap();
        let target = piece_at(&pos, "e4");
        let attacks = attacking_moves(&pos, &target, true);
        assert_eq!(attacks.len(), 2);
        assert!(attacks.iter().any(|a| a.from == Square::E1));
    }

    #[test]
    fn triple_battery() {
        // Queen behind two rooks, all on the e-file.
        let pos = Position::from_fen("4k3/8/8/8/4r3/4R3/4R3/4Q2K w - - 0 1").unwrap();
        let target = piece_at(&pos, "e4");
        let attacks = attacking_moves(&pos, &target, true);
        assert_eq!(attacks.len(), 3);
        assert!(attacks
            .iter()
            .any(|a| a.piece == PieceKind::Queen && a.from == Square::E1));
    }

    #[test]
    fn king_pressure_on_a_defended_piece_is_counted() {
        // Kxe4 is illegal because d5 defends the pawn, but the king still
        // bears on the square.
        let pos = Position::from_fen("4k3/8/8/3p4/4p3/3K4/8/8 w - - 0 1").unwrap();
        let target = piece_at(&pos, "e4");
        let attacks = attacking_moves(&pos, &target, false);
        assert_eq!(attacks.len(), 1);
        assert_eq!(attacks[0].piece, PieceKind::King);
        assert_eq!(attacks[0].color, Color::White);
    }

    #[test]
    fn king_is_not_expanded_as_a_battery_front() {
        // King directly in front of a rook on the e-file: the rook behind
        // the king is not an attacker.
        let pos = Position::from_fen("4k3/8/3p4/4p3/4K3/8/4R3/8 w - - 0 1").unwrap();
        let target = piece_at(&pos, "e5");
        let attacks = attacking_moves(&pos, &target, true);
        assert_eq!(attacks.len(), 1);
        assert_eq!(attacks[0].piece, PieceKind::King);
    }

    #[test]
    fn unattacked_piece_has_no_attackers() {
        let pos = Position::from_fen("4k3/8/8/8/4r3/8/8/7K w - - 0 1").unwrap();
        let target = piece_at(&pos, "e4");
        assert!(attacking_moves(&pos, &target, true).is_empty());
    }
}
