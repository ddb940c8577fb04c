//! Opening book lookup.
//!
//! Maps the piece-placement field of a position's FEN to an opening name.
//! Keying on placement alone means transpositions and mirrored move orders
//! still resolve to a name. The book is immutable after loading and safe to
//! share across concurrent readers.

mod book;
pub mod builtin;

pub use book::{BookError, OpeningBook};
