//! Legal move generation and move application.

use crate::{Bitboard, Color, Move, MoveKind, PieceKind, Position, Square};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const STRAIGHTS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

fn leaper(sq: Square, deltas: &[(i8, i8)]) -> Bitboard {
    let mut out = Bitboard::EMPTY;
    for &(df, dr) in deltas {
        if let Some(to) = sq.offset(df, dr) {
            out.insert(to);
        }
    }
    out
}

/// Rays in each direction, stopping at (and including) the first blocker.
fn slider(sq: Square, occupied: Bitboard, directions: &[(i8, i8)]) -> Bitboard {
    let mut out = Bitboard::EMPTY;
    for &(df, dr) in directions {
        let mut cursor = sq;
        while let Some(next) = cursor.offset(df, dr) {
            out.insert(next);
            if occupied.contains(next) {
                break;
            }
            cursor = next;
        }
    }
    out
}

pub(crate) fn knight_attacks(sq: Square) -> Bitboard {
    leaper(sq, &KNIGHT_DELTAS)
}

pub(crate) fn king_attacks(sq: Square) -> Bitboard {
    leaper(sq, &KING_DELTAS)
}

pub(crate) fn pawn_attacks(sq: Square, color: Color) -> Bitboard {
    leaper(sq, &[(-1, color.forward()), (1, color.forward())])
}

pub(crate) fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    slider(sq, occupied, &DIAGONALS)
}

pub(crate) fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    slider(sq, occupied, &STRAIGHTS)
}

impl Position {
    /// Returns the squares of all pieces of `by` attacking `sq`, pinned or
    /// not. The attacked square itself may be empty or occupied by either
    /// side.
    pub fn attackers(&self, sq: Square, by: Color) -> Bitboard {
        let occupied = self.occupied();
        let mut out = Bitboard::EMPTY;

        out |= pawn_attacks(sq, by.opposite()) & self.pieces_of(PieceKind::Pawn, by);
        out |= knight_attacks(sq) & self.pieces_of(PieceKind::Knight, by);
        out |= king_attacks(sq) & self.pieces_of(PieceKind::King, by);

        let diagonal = bishop_attacks(sq, occupied);
        out |= diagonal
            & (self.pieces_of(PieceKind::Bishop, by) | self.pieces_of(PieceKind::Queen, by));

        let straight = rook_attacks(sq, occupied);
        out |= straight
            & (self.pieces_of(PieceKind::Rook, by) | self.pieces_of(PieceKind::Queen, by));

        out
    }

    /// Returns true if any piece of `by` attacks `sq`.
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        self.attackers(sq, by).any()
    }

    /// Returns true if the given side's king is attacked.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(sq) => self.is_square_attacked(sq, color.opposite()),
            None => false,
        }
    }

    /// Returns true if the side to move is in check.
    pub fn in_check(&self) -> bool {
        self.is_in_check(self.side_to_move)
    }

    /// Returns true if the side to move is checkmated.
    pub fn is_checkmate(&self) -> bool {
        self.in_check() && self.legal_moves().is_empty()
    }

    /// Returns true if the side to move is stalemated.
    pub fn is_stalemate(&self) -> bool {
        !self.in_check() && self.legal_moves().is_empty()
    }

    /// Generates all legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        let us = self.side_to_move;
        self.pseudo_legal_moves()
            .into_iter()
            .filter(|&mv| !self.apply(mv).is_in_check(us))
            .collect()
    }

    /// Legal moves of the piece standing on `sq`.
    pub fn moves_from(&self, sq: Square) -> Vec<Move> {
        self.legal_moves()
            .into_iter()
            .filter(|mv| mv.from == sq)
            .collect()
    }

    /// Legal moves landing on `sq`.
    pub fn moves_to(&self, sq: Square) -> Vec<Move> {
        self.legal_moves()
            .into_iter()
            .filter(|mv| mv.to == sq)
            .collect()
    }

    /// Resolves a from/to/promotion triple against the legal moves, so the
    /// returned move carries the correct kind (castle, en passant, double
    /// push).
    pub fn find_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Option<Move> {
        self.legal_moves()
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to && mv.kind.promotion() == promotion)
    }

    /// Resolves UCI coordinate notation ("e2e4", "e7e8q") to a legal move.
    pub fn from_uci(&self, uci: &str) -> Option<Move> {
        if uci.len() < 4 || uci.len() > 5 {
            return None;
        }
        let from = Square::parse(&uci[0..2])?;
        let to = Square::parse(&uci[2..4])?;
        let promotion = match uci.len() {
            5 => Some(PieceKind::from_letter(
                uci.chars().nth(4)?.to_ascii_uppercase(),
            )?),
            _ => None,
        };
        self.find_move(from, to, promotion)
    }

    /// Applies a move and returns the resulting position. The receiver is
    /// never mutated. The move must come from this position's move
    /// generation (or `find_move`).
    pub fn apply(&self, mv: Move) -> Position {
        let mut next = self.clone();
        let us = self.side_to_move;
        let them = us.opposite();

        let (piece, _) = self
            .piece_at(mv.from)
            .expect("apply requires a piece on the from square");

        next.clear_piece(mv.from, piece, us);

        let mut resets_clock = piece == PieceKind::Pawn;
        if let Some((captured, _)) = self.piece_at(mv.to) {
            next.clear_piece(mv.to, captured, them);
            resets_clock = true;
        }

        if mv.kind == MoveKind::EnPassant {
            let captured_sq = Square::new((mv.to.index() as i8 - 8 * us.forward()) as u8);
            next.clear_piece(captured_sq, PieceKind::Pawn, them);
            resets_clock = true;
        }

        let landed = mv.kind.promotion().unwrap_or(piece);
        next.set_piece(mv.to, landed, us);

        if mv.kind.is_castle() {
            let back = match us {
                Color::White => 0u8,
                Color::Black => 56u8,
            };
            let (rook_from, rook_to) = match mv.kind {
                MoveKind::CastleKingside => (Square::new(back + 7), Square::new(back + 5)),
                _ => (Square::new(back), Square::new(back + 3)),
            };
            next.clear_piece(rook_from, PieceKind::Rook, us);
            next.set_piece(rook_to, PieceKind::Rook, us);
        }

        if piece == PieceKind::King {
            next.castling.forbid_all(us);
        }
        for sq in [mv.from, mv.to] {
            match sq {
                Square::H1 => next.castling.forbid_kingside(Color::White),
                Square::A1 => next.castling.forbid_queenside(Color::White),
                Square::H8 => next.castling.forbid_kingside(Color::Black),
                Square::A8 => next.castling.forbid_queenside(Color::Black),
                _ => {}
            }
        }

        next.en_passant = match mv.kind {
            MoveKind::DoublePush => mv.to.offset(0, -us.forward()),
            _ => None,
        };

        next.halfmove_clock = if resets_clock {
            0
        } else {
            self.halfmove_clock + 1
        };
        if us == Color::Black {
            next.fullmove_number += 1;
        }
        next.side_to_move = them;

        next
    }

    fn pseudo_legal_moves(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(48);
        self.pawn_moves(&mut out);
        self.piece_moves(&mut out);
        self.castle_moves(&mut out);
        out
    }

    fn pawn_moves(&self, out: &mut Vec<Move>) {
        let us = self.side_to_move;
        let forward = us.forward();
        let (start_rank, promo_rank) = match us {
            Color::White => (1, 7),
            Color::Black => (6, 0),
        };
        let occupied = self.occupied();
        let enemy = self.by_color(us.opposite());

        for from in self.pieces_of(PieceKind::Pawn, us) {
            if let Some(one) = from.offset(0, forward) {
                if !occupied.contains(one) {
                    push_pawn_move(out, from, one, promo_rank);
                    if from.rank() == start_rank {
                        if let Some(two) = one.offset(0, forward) {
                            if !occupied.contains(two) {
                                out.push(Move {
                                    from,
                                    to: two,
                                    kind: MoveKind::DoublePush,
                                });
                            }
                        }
                    }
                }
            }
            for to in pawn_attacks(from, us) {
                if enemy.contains(to) {
                    push_pawn_move(out, from, to, promo_rank);
                } else if self.en_passant == Some(to) {
                    out.push(Move {
                        from,
                        to,
                        kind: MoveKind::EnPassant,
                    });
                }
            }
        }
    }

    fn piece_moves(&self, out: &mut Vec<Move>) {
        let us = self.side_to_move;
        let own = self.by_color(us);
        let occupied = self.occupied();

        for kind in [
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
            PieceKind::King,
        ] {
            for from in self.pieces_of(kind, us) {
                let reach = match kind {
                    PieceKind::Knight => knight_attacks(from),
                    PieceKind::Bishop => bishop_attacks(from, occupied),
                    PieceKind::Rook => rook_attacks(from, occupied),
                    PieceKind::Queen => {
                        bishop_attacks(from, occupied) | rook_attacks(from, occupied)
                    }
                    PieceKind::King => king_attacks(from),
                    PieceKind::Pawn => Bitboard::EMPTY,
                };
                for to in reach {
                    if !own.contains(to) {
                        out.push(Move::quiet(from, to));
                    }
                }
            }
        }
    }

    fn castle_moves(&self, out: &mut Vec<Move>) {
        let us = self.side_to_move;
        if self.is_in_check(us) {
            return;
        }
        let them = us.opposite();
        let occupied = self.occupied();
        let back = match us {
            Color::White => 0u8,
            Color::Black => 56u8,
        };
        let king_from = Square::new(back + 4);

        if self.castling.kingside(us)
            && self.piece_at(Square::new(back + 7)) == Some((PieceKind::Rook, us))
        {
            let transit = Square::new(back + 5);
            let target = Square::new(back + 6);
            if !occupied.contains(transit)
                && !occupied.contains(target)
                && !self.is_square_attacked(transit, them)
            {
                out.push(Move {
                    from: king_from,
                    to: target,
                    kind: MoveKind::CastleKingside,
                });
            }
        }

        if self.castling.queenside(us)
            && self.piece_at(Square::new(back)) == Some((PieceKind::Rook, us))
        {
            let transit = Square::new(back + 3);
            let target = Square::new(back + 2);
            let knight_home = Square::new(back + 1);
            if !occupied.contains(transit)
                && !occupied.contains(target)
                && !occupied.contains(knight_home)
                && !self.is_square_attacked(transit, them)
            {
                out.push(Move {
                    from: king_from,
                    to: target,
                    kind: MoveKind::CastleQueenside,
                });
            }
        }
    }
}

fn push_pawn_move(out: &mut Vec<Move>, from: Square, to: Square, promo_rank: u8) {
    if to.rank() == promo_rank {
        for kind in [
            PieceKind::Queen,
            PieceKind::Rook,
            PieceKind::Bishop,
            PieceKind::Knight,
        ] {
            out.push(Move {
                from,
                to,
                kind: MoveKind::Promotion(kind),
            });
        }
    } else {
        out.push(Move::quiet(from, to));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startpos_move_count() {
        let pos = Position::startpos();
        assert_eq!(pos.legal_moves().len(), 20);
    }

    #[test]
    fn single_legal_move() {
        // Ka2 is the only move for White.
        let pos = Position::from_fen("8/8/8/8/8/2r5/1K6/2r5 w - - 0 1").unwrap();
        let moves = pos.legal_moves();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].uci(), "b2a2");
    }

    #[test]
    fn apply_is_pure() {
        let pos = Position::startpos();
        let mv = pos.from_uci("e2e4").unwrap();
        let after = pos.apply(mv);
        assert_eq!(pos, Position::startpos());
        assert_eq!(after.side_to_move(), Color::Black);
        assert_eq!(after.en_passant(), Square::parse("e3"));
        assert!(after
            .piece_at(Square::parse("e4").unwrap())
            .is_some());
    }

    #[test]
    fn en_passant_capture() {
        let pos =
            Position::from_fen("rnbqkbnr/pppp1ppp/8/4pP2/8/8/PPPPP1PP/RNBQKBNR w KQkq e6 0 3")
                .unwrap();
        let mv = pos.from_uci("f5e6").unwrap();
        assert_eq!(mv.kind, MoveKind::EnPassant);
        let after = pos.apply(mv);
        // The e5 pawn is gone even though the capture landed on e6.
        assert!(after.piece_at(Square::parse("e5").unwrap()).is_none());
        assert_eq!(
            after.piece_at(Square::parse("e6").unwrap()),
            Some((PieceKind::Pawn, Color::White))
        );
    }

    #[test]
    fn promotion_moves() {
        let pos = Position::from_fen("8/P7/8/8/8/8/8/4K2k w - - 0 1").unwrap();
        let promotions: Vec<Move> = pos
            .legal_moves()
            .into_iter()
            .filter(|mv| mv.kind.promotion().is_some())
            .collect();
        assert_eq!(promotions.len(), 4);
        let after = pos.apply(pos.from_uci("a7a8q").unwrap());
        assert_eq!(
            after.piece_at(Square::A8),
            Some((PieceKind::Queen, Color::White))
        );
    }

    #[test]
    fn castling_both_sides() {
        let pos =
            Position::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();
        let moves = pos.legal_moves();
        assert!(moves.iter().any(|m| m.kind == MoveKind::CastleKingside));
        assert!(moves.iter().any(|m| m.kind == MoveKind::CastleQueenside));

        let after = pos.apply(pos.from_uci("e1g1").unwrap());
        assert_eq!(
            after.piece_at(Square::G1),
            Some((PieceKind::King, Color::White))
        );
        assert_eq!(
            after.piece_at(Square::F1),
            Some((PieceKind::Rook, Color::White))
        );
        assert!(!after.castling().kingside(Color::White));
        assert!(!after.castling().queenside(Color::White));
    }

    #[test]
    fn no_castling_through_check() {
        let pos =
            Position::from_fen("r3k2r/pppp1ppp/8/4r3/8/8/PPPP1PPP/R3K2R w KQkq - 0 1").unwrap();
        let moves = pos.legal_moves();
        assert!(!moves.iter().any(|m| m.kind == MoveKind::CastleKingside));
    }

    #[test]
    fn checkmate_and_stalemate() {
        // Fool's mate.
        let mate = Position::from_fen(
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        )
        .unwrap();
        assert!(mate.is_checkmate());
        assert!(!mate.is_stalemate());

        let stale = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(stale.is_stalemate());
        assert!(!stale.is_checkmate());
    }

    #[test]
    fn attackers_of_square() {
        let pos = Position::startpos();
        // e3 is covered by the d2 and f2 pawns.
        let e3 = Square::parse("e3").unwrap();
        let attackers = pos.attackers(e3, Color::White);
        assert_eq!(attackers.count(), 2);
        assert!(attackers.contains(Square::parse("d2").unwrap()));
        assert!(attackers.contains(Square::parse("f2").unwrap()));
    }

    #[test]
    fn attackers_through_battery_need_removal() {
        // Rook behind a rook: only the front rook attacks directly.
        let pos = Position::from_fen("4k3/8/8/8/4r3/8/4R3/4R2K w - - 0 1").unwrap();
        let e4 = Square::parse("e4").unwrap();
        let direct = pos.attackers(e4, Color::White);
        assert_eq!(direct.count(), 1);
        assert!(direct.contains(Square::parse("e2").unwrap()));
        // Removing the front rook reveals the rear one.
        let revealed = pos
            .removing(Square::parse("e2").unwrap())
            .attackers(e4, Color::White);
        assert!(revealed.contains(Square::E1));
    }

    #[test]
    fn pinned_piece_moves_are_illegal() {
        // The d2 knight is pinned against the king by the d8 rook.
        let pos = Position::from_fen("3r3k/8/8/8/8/8/3N4/3K4 w - - 0 1").unwrap();
        assert!(pos.moves_from(Square::parse("d2").unwrap()).is_empty());
    }

    #[test]
    fn find_move_resolves_kind() {
        let pos = Position::startpos();
        let mv = pos
            .find_move(
                Square::parse("d2").unwrap(),
                Square::parse("d4").unwrap(),
                None,
            )
            .unwrap();
        assert_eq!(mv.kind, MoveKind::DoublePush);
        assert!(pos
            .find_move(
                Square::parse("d2").unwrap(),
                Square::parse("d5").unwrap(),
                None
            )
            .is_none());
    }

    #[test]
    fn from_uci_rejects_garbage() {
        let pos = Position::startpos();
        assert!(pos.from_uci("e2e5").is_none());
        assert!(pos.from_uci("xx").is_none());
        assert!(pos.from_uci("e2e4qq").is_none());
    }
}
