//! Defender discovery.

use kibitz_board::Position;

use super::{attacking_moves, AttackMove, BoardPiece};

/// All recapturing claims defending `piece`.
///
/// With direct attackers present, each first capture is simulated and the
/// capturing piece's attackers on its new square are the candidate
/// recapturers. The smallest such set is the answer: the defender does not
/// get to pick which capture happens, so only the weakest recapture line is
/// guaranteed. With no attackers, the piece is recolored in a simulated
/// copy and its attackers counted, which is exactly the set that could
/// recapture if an exchange started.
pub fn defending_moves(
    position: &Position,
    piece: &BoardPiece,
    transitive: bool,
) -> Vec<AttackMove> {
    let direct = attacking_moves(position, piece, false);

    let mut smallest: Option<Vec<AttackMove>> = None;
    for attack in &direct {
        let board = position.with_side_to_move(piece.color.opposite());
        let Some(mv) = board.find_move(attack.from, attack.to, attack.promotion) else {
            // King pressure on a defended piece has no legal capture; the
            // branch contributes nothing.
            continue;
        };
        let after = board.apply(mv);
        let landed = BoardPiece {
            square: mv.to,
            kind: attack.promotion.unwrap_or(attack.piece),
            color: attack.color,
        };
        let recapturers = attacking_moves(&after, &landed, transitive);
        if smallest
            .as_ref()
            .map_or(true, |s| recapturers.len() < s.len())
        {
            smallest = Some(recapturers);
        }
    }
    if let Some(defenders) = smallest {
        return defenders;
    }

    let flipped = position.placing(piece.square, piece.kind, piece.color.opposite());
    let mirrored = BoardPiece {
        color: piece.color.opposite(),
        ..*piece
    };
    attacking_moves(&flipped, &mirrored, transitive)
}
