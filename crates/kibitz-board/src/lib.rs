//! Board model for the kibitz move annotator.
//!
//! This crate is the board-query capability the annotator is built on:
//! - [`Position`] - full board state with positional (FEN-equivalent) equality
//! - [`Position::apply`] - move application that returns a fresh position and
//!   never mutates the original, so speculative lookahead can fan out freely
//! - [`Position::attackers`] - attacker lookup for a square and color
//! - Legal move generation, check/checkmate/stalemate tests
//! - FEN, SAN, and UCI conversion
//!
//! # Example
//!
//! ```
//! use kibitz_board::Position;
//!
//! let position = Position::startpos();
//! let moves = position.legal_moves();
//! assert_eq!(moves.len(), 20);
//!
//! let e4 = position.from_san("e4").unwrap();
//! let after = position.apply(e4);
//! assert_ne!(position, after);
//! ```

mod bitboard;
mod color;
mod fen;
mod movegen;
mod moves;
mod piece;
mod position;
mod san;
mod square;

pub use bitboard::Bitboard;
pub use color::Color;
pub use fen::FenError;
pub use moves::{Move, MoveInfo, MoveKind};
pub use piece::PieceKind;
pub use position::{CastlingRights, Position};
pub use san::SanError;
pub use square::Square;
