//! Move-quality annotation for analyzed chess games.
//!
//! Given a game's mainline positions and per-position engine lines, the
//! annotator assigns every move a quality label ([`Classification`]), an
//! accuracy score, and a missed-opportunity tag. Board questions go through
//! [`kibitz_board`]; evaluations arrive pre-resolved as [`EngineLine`]s.
//! This crate never runs an engine or touches the network.
//!
//! # Example
//!
//! ```
//! use kibitz_annotate::{Classification, GameAnnotator, GameRecord};
//! use kibitz_board::Position;
//!
//! // Scholar's mate; no engine data, so only the engine-free checks fire.
//! let mut game = GameRecord::mainline(
//!     Position::startpos(),
//!     &["e4", "e5", "Bc4", "Nc6", "Qh5", "Nf6", "Qxf7#"],
//! )
//! .unwrap();
//!
//! GameAnnotator::default().annotate(&mut game).unwrap();
//!
//! let last = game.records.last().unwrap();
//! assert_eq!(
//!     last.report.unwrap().classification,
//!     Classification::Best
//! );
//! ```

mod annotator;
mod classify;
mod config;
mod eval;
mod extract;
mod line;
mod record;
pub mod tactics;

pub use annotator::{AnnotateError, GameAnnotator};
pub use classify::{Classification, MoveReport};
pub use config::AnnotateOptions;
pub use eval::{accuracy, point_loss, Evaluation};
pub use extract::{ExtractError, ExtractedCurrent, ExtractedPrevious};
pub use line::{sibling_line, top_line, EngineLine, MoveText};
pub use record::{GameRecord, PositionRecord};
