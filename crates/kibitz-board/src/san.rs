//! Standard Algebraic Notation.
//!
//! Examples: "e4", "Nf3", "Bxc6", "O-O", "e8=Q", "Nbd2", "R1e1", "Qh4#".

use crate::{Move, MoveInfo, MoveKind, PieceKind, Position, Square};
use thiserror::Error;

/// Errors raised while resolving SAN text against a position.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SanError {
    #[error("empty SAN string")]
    Empty,

    #[error("malformed SAN '{0}'")]
    Malformed(String),

    #[error("no legal move matches '{0}'")]
    NoMatch(String),

    #[error("'{0}' is ambiguous")]
    Ambiguous(String),
}

impl Position {
    /// Renders a legal move in SAN, with `+`/`#` suffixes.
    pub fn to_san(&self, mv: Move) -> String {
        let mut san = match mv.kind {
            MoveKind::CastleKingside => "O-O".to_string(),
            MoveKind::CastleQueenside => "O-O-O".to_string(),
            _ => {
                let (piece, _) = self
                    .piece_at(mv.from)
                    .expect("to_san requires a piece on the from square");
                let mut body = String::new();

                if piece != PieceKind::Pawn {
                    body.push(piece.letter());
                    body.push_str(&self.disambiguation(mv, piece));
                }

                let captures =
                    self.piece_at(mv.to).is_some() || mv.kind == MoveKind::EnPassant;
                if captures {
                    if piece == PieceKind::Pawn {
                        body.push((b'a' + mv.from.file()) as char);
                    }
                    body.push('x');
                }

                body.push_str(&mv.to.name());

                if let Some(kind) = mv.kind.promotion() {
                    body.push('=');
                    body.push(kind.letter());
                }
                body
            }
        };

        let after = self.apply(mv);
        if after.in_check() {
            san.push(if after.legal_moves().is_empty() { '#' } else { '+' });
        }
        san
    }

    /// Resolves SAN text to a legal move.
    pub fn from_san(&self, san: &str) -> Result<Move, SanError> {
        let trimmed = san
            .trim()
            .trim_end_matches(|c| matches!(c, '+' | '#' | '!' | '?'));
        if trimmed.is_empty() {
            return Err(SanError::Empty);
        }

        if trimmed == "O-O" || trimmed == "0-0" {
            return self
                .legal_moves()
                .into_iter()
                .find(|mv| mv.kind == MoveKind::CastleKingside)
                .ok_or_else(|| SanError::NoMatch(san.to_string()));
        }
        if trimmed == "O-O-O" || trimmed == "0-0-0" {
            return self
                .legal_moves()
                .into_iter()
                .find(|mv| mv.kind == MoveKind::CastleQueenside)
                .ok_or_else(|| SanError::NoMatch(san.to_string()));
        }

        let pattern = SanPattern::parse(trimmed)
            .ok_or_else(|| SanError::Malformed(san.to_string()))?;

        let mut matches = self
            .legal_moves()
            .into_iter()
            .filter(|&mv| pattern.matches(self, mv));
        let first = matches
            .next()
            .ok_or_else(|| SanError::NoMatch(san.to_string()))?;
        if matches.next().is_some() {
            return Err(SanError::Ambiguous(san.to_string()));
        }
        Ok(first)
    }

    /// Describes a legal move: moved piece, color, captured kind, and SAN.
    pub fn describe(&self, mv: Move) -> MoveInfo {
        let (piece, color) = self
            .piece_at(mv.from)
            .expect("describe requires a piece on the from square");
        let captured = match mv.kind {
            MoveKind::EnPassant => Some(PieceKind::Pawn),
            _ => self.piece_at(mv.to).map(|(kind, _)| kind),
        };
        MoveInfo {
            mv,
            piece,
            color,
            captured,
            san: self.to_san(mv),
        }
    }

    /// Shortest file/rank prefix that singles the move out among same-kind
    /// moves to the same square.
    fn disambiguation(&self, mv: Move, piece: PieceKind) -> String {
        let rivals: Vec<Move> = self
            .legal_moves()
            .into_iter()
            .filter(|other| {
                other.to == mv.to
                    && other.from != mv.from
                    && self.piece_at(other.from).map(|(k, _)| k) == Some(piece)
            })
            .collect();

        if rivals.is_empty() {
            return String::new();
        }

        let file = (b'a' + mv.from.file()) as char;
        let rank = (b'1' + mv.from.rank()) as char;
        if rivals.iter().all(|other| other.from.file() != mv.from.file()) {
            file.to_string()
        } else if rivals.iter().all(|other| other.from.rank() != mv.from.rank()) {
            rank.to_string()
        } else {
            format!("{}{}", file, rank)
        }
    }
}

/// The destination, piece, origin hints, and promotion read out of SAN text.
struct SanPattern {
    piece: PieceKind,
    from_file: Option<u8>,
    from_rank: Option<u8>,
    to: Square,
    promotion: Option<PieceKind>,
}

impl SanPattern {
    fn parse(s: &str) -> Option<SanPattern> {
        let mut chars: Vec<char> = s.chars().filter(|&c| c != 'x').collect();

        let promotion = match chars.iter().position(|&c| c == '=') {
            Some(at) => {
                if at + 2 != chars.len() {
                    return None;
                }
                let kind = PieceKind::from_letter(chars[at + 1])?;
                chars.truncate(at);
                Some(kind)
            }
            None => None,
        };

        let piece = match chars.first() {
            Some(&c) if c.is_ascii_uppercase() => {
                chars.remove(0);
                PieceKind::from_letter(c)?
            }
            _ => PieceKind::Pawn,
        };

        if chars.len() < 2 {
            return None;
        }
        let rank_char = chars.pop()?;
        let file_char = chars.pop()?;
        let to = Square::parse(&format!("{}{}", file_char, rank_char))?;

        let (mut from_file, mut from_rank) = (None, None);
        for c in chars {
            match c {
                'a'..='h' if from_file.is_none() => from_file = Some(c as u8 - b'a'),
                '1'..='8' if from_rank.is_none() => from_rank = Some(c as u8 - b'1'),
                _ => return None,
            }
        }

        Some(SanPattern {
            piece,
            from_file,
            from_rank,
            to,
            promotion,
        })
    }

    fn matches(&self, position: &Position, mv: Move) -> bool {
        if mv.to != self.to || mv.kind.is_castle() {
            return false;
        }
        match position.piece_at(mv.from) {
            Some((kind, _)) if kind == self.piece => {}
            _ => return false,
        }
        if let Some(file) = self.from_file {
            if mv.from.file() != file {
                return false;
            }
        }
        if let Some(rank) = self.from_rank {
            if mv.from.rank() != rank {
                return false;
            }
        }
        mv.kind.promotion() == self.promotion
    }
}
