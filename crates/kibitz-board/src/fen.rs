//! FEN parsing and serialization.

use crate::{Color, PieceKind, Position, Square};
use thiserror::Error;

/// Errors raised while parsing a FEN string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected 6 FEN fields, got {0}")]
    FieldCount(usize),

    #[error("invalid piece placement: {0}")]
    Placement(String),

    #[error("invalid active color '{0}'")]
    ActiveColor(String),

    #[error("invalid castling field '{0}'")]
    Castling(String),

    #[error("invalid en passant square '{0}'")]
    EnPassant(String),

    #[error("invalid clock field '{0}'")]
    Clock(String),
}

pub(crate) fn parse(s: &str) -> Result<Position, FenError> {
    let fields: Vec<&str> = s.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(FenError::FieldCount(fields.len()));
    }

    let mut position = Position::empty();
    parse_placement(fields[0], &mut position)?;

    position.side_to_move = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(FenError::ActiveColor(other.to_string())),
    };

    if fields[2] != "-" {
        for c in fields[2].chars() {
            match c {
                'K' => position.castling.allow_kingside(Color::White),
                'Q' => position.castling.allow_queenside(Color::White),
                'k' => position.castling.allow_kingside(Color::Black),
                'q' => position.castling.allow_queenside(Color::Black),
                _ => return Err(FenError::Castling(fields[2].to_string())),
            }
        }
    }

    position.en_passant = match fields[3] {
        "-" => None,
        other => {
            let sq = Square::parse(other)
                .filter(|sq| sq.rank() == 2 || sq.rank() == 5)
                .ok_or_else(|| FenError::EnPassant(other.to_string()))?;
            Some(sq)
        }
    };

    position.halfmove_clock = fields[4]
        .parse::<u32>()
        .map_err(|_| FenError::Clock(fields[4].to_string()))?;
    position.fullmove_number = fields[5]
        .parse::<u32>()
        .map_err(|_| FenError::Clock(fields[5].to_string()))?;

    Ok(position)
}

fn parse_placement(field: &str, position: &mut Position) -> Result<(), FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::Placement(format!(
            "expected 8 ranks, got {}",
            ranks.len()
        )));
    }

    for (row, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - row as u8;
        let mut file = 0u8;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as u8;
            } else if let Some((kind, color)) = PieceKind::from_fen_char(c) {
                match Square::at(file, rank) {
                    Some(sq) => position.set_piece(sq, kind, color),
                    None => {
                        return Err(FenError::Placement(format!(
                            "rank {} overflows the board",
                            rank + 1
                        )))
                    }
                }
                file += 1;
            } else {
                return Err(FenError::Placement(format!("invalid character '{}'", c)));
            }
        }
        if file != 8 {
            return Err(FenError::Placement(format!(
                "rank {} covers {} squares",
                rank + 1,
                file
            )));
        }
    }

    Ok(())
}

pub(crate) fn write_placement(position: &Position) -> String {
    let mut out = String::new();
    for rank in (0..8).rev() {
        let mut run = 0;
        for file in 0..8 {
            let sq = Square::new(rank * 8 + file);
            match position.piece_at(sq) {
                Some((kind, color)) => {
                    if run > 0 {
                        out.push(char::from_digit(run, 10).expect("run is 1-8"));
                        run = 0;
                    }
                    out.push(kind.fen_char(color));
                }
                None => run += 1,
            }
        }
        if run > 0 {
            out.push(char::from_digit(run, 10).expect("run is 1-8"));
        }
        if rank > 0 {
            out.push('/');
        }
    }
    out
}

pub(crate) fn write(position: &Position) -> String {
    let placement = write_placement(position);

    let mut castling = String::new();
    if position.castling.kingside(Color::White) {
        castling.push('K');
    }
    if position.castling.queenside(Color::White) {
        castling.push('Q');
    }
    if position.castling.kingside(Color::Black) {
        castling.push('k');
    }
    if position.castling.queenside(Color::Black) {
        castling.push('q');
    }
    if castling.is_empty() {
        castling.push('-');
    }

    let en_passant = match position.en_passant {
        Some(sq) => sq.name(),
        None => "-".to_string(),
    };

    format!(
        "{} {} {} {} {} {}",
        placement,
        position.side_to_move.fen_char(),
        castling,
        en_passant,
        position.halfmove_clock,
        position.fullmove_number
    )
}
