//! Move representation.

use crate::{Color, PieceKind, Square};
use std::fmt;

/// Distinguishes the special move families that change more than two squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Plain move or capture.
    Quiet,
    /// Pawn double push from its starting rank.
    DoublePush,
    /// En passant capture.
    EnPassant,
    /// Kingside castling (O-O).
    CastleKingside,
    /// Queenside castling (O-O-O).
    CastleQueenside,
    /// Pawn promotion to the given kind.
    Promotion(PieceKind),
}

impl MoveKind {
    /// Returns the promotion piece, if any.
    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        match self {
            MoveKind::Promotion(kind) => Some(kind),
            _ => None,
        }
    }

    /// Returns true for either castling kind.
    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self, MoveKind::CastleKingside | MoveKind::CastleQueenside)
    }
}

/// A move between two squares.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    /// Creates a plain move.
    #[inline]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            kind: MoveKind::Quiet,
        }
    }

    /// Returns the UCI coordinate notation ("e2e4", "e7e8q").
    pub fn uci(self) -> String {
        match self.kind.promotion() {
            Some(kind) => format!(
                "{}{}{}",
                self.from,
                self.to,
                kind.letter().to_ascii_lowercase()
            ),
            None => format!("{}{}", self.from, self.to),
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.uci())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uci())
    }
}

/// A move together with everything the position knows about it: the moved
/// piece, its color, what it captured, and its SAN rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveInfo {
    pub mv: Move,
    pub piece: PieceKind,
    pub color: Color,
    /// Kind of the captured piece, if the move captures (en passant reports
    /// a pawn even though the target square is empty).
    pub captured: Option<PieceKind>,
    pub san: String,
}

impl MoveInfo {
    /// Returns the UCI coordinate notation of the underlying move.
    pub fn uci(&self) -> String {
        self.mv.uci()
    }
}
