//! Per-game annotation in ply order.

use thiserror::Error;

use kibitz_openings::OpeningBook;

use crate::classify::{classify, missed_opportunity, Classification, MoveReport};
use crate::config::AnnotateOptions;
use crate::eval;
use crate::extract::{extract_current, extract_previous, ExtractError};
use crate::record::{GameRecord, PositionRecord};

/// Errors that abort a whole annotation run.
#[derive(Debug, Error)]
pub enum AnnotateError {
    /// Engine data contradicts the position it claims to describe.
    #[error("invalid engine data: {0}")]
    Engine(#[from] ExtractError),
}

/// Classifies every move of a game.
///
/// The annotator is stateless between games; the only cross-move state is
/// the previous ply's classification, threaded through the traversal for
/// the missed-opportunity tag. Plies are therefore processed strictly in
/// order.
pub struct GameAnnotator {
    book: OpeningBook,
    options: AnnotateOptions,
}

impl Default for GameAnnotator {
    fn default() -> Self {
        Self::new(OpeningBook::builtin(), AnnotateOptions::default())
    }
}

impl GameAnnotator {
    /// Creates an annotator with the given book and options.
    pub fn new(book: OpeningBook, options: AnnotateOptions) -> Self {
        Self { book, options }
    }

    /// Annotates every non-root record of `game`, writing a [`MoveReport`]
    /// and, where theory matched, the opening name back onto the record.
    ///
    /// Records without resolvable engine data still get the engine-data-free
    /// checks (theory, checkmate), so a finished game's final position is
    /// classified even though no engine analyzed it. A record whose played
    /// move does not apply to its parent position is left unclassified with
    /// a warning rather than failing the run; a top engine move that does
    /// not apply fails loudly.
    pub fn annotate(&self, game: &mut GameRecord) -> Result<(), AnnotateError> {
        let mut previous_class: Option<Classification> = None;

        for ply in 1..game.records.len() {
            let (head, tail) = game.records.split_at_mut(ply);
            let previous_record = &head[ply - 1];
            let record = &mut tail[0];

            let extracted_previous = extract_previous(previous_record)?;
            let extracted_current = match extract_current(previous_record, record) {
                Ok(current) => current,
                Err(err @ ExtractError::PlayedMove { .. }) => {
                    tracing::warn!(ply, %err, "inconsistent record, move left unclassified");
                    previous_class = None;
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            let report = match (extracted_previous, extracted_current) {
                (Some(previous), Some(current)) => {
                    let outcome = classify(&previous, &current, &self.book, &self.options);
                    if let Some(name) = outcome.opening {
                        record.opening = Some(name);
                    }
                    let accuracy = match outcome.classification {
                        Classification::Forced | Classification::Theory => 100.0,
                        _ => eval::accuracy(eval::point_loss(
                            previous.eval,
                            current.eval,
                            previous.mover,
                        )),
                    };
                    Some(MoveReport {
                        classification: outcome.classification,
                        missed_opportunity: missed_opportunity(
                            outcome.classification,
                            previous_class,
                        ),
                        accuracy,
                    })
                }
                _ => self.classify_without_engine_data(record),
            };

            match &report {
                Some(report) => tracing::debug!(
                    ply,
                    san = record.played.as_ref().map(|m| m.san.as_str()),
                    classification = ?report.classification,
                    accuracy = report.accuracy,
                    "classified"
                ),
                None => tracing::debug!(ply, "no engine data, no engine-free label"),
            }

            previous_class = report.map(|r| r.classification);
            record.report = report;
        }

        Ok(())
    }

    /// The engine-data-free fallback: theory by position key, checkmate by
    /// board state. No better alternative existed in either case, so the
    /// accuracy is a clean 100.
    fn classify_without_engine_data(&self, record: &mut PositionRecord) -> Option<MoveReport> {
        let classification = match self.book.lookup(&record.position.placement()) {
            Some(name) if self.options.include_theory => {
                record.opening = Some(name.to_string());
                Classification::Theory
            }
            _ if record.position.is_checkmate() => Classification::Best,
            _ => return None,
        };

        Some(MoveReport {
            classification,
            missed_opportunity: false,
            accuracy: 100.0,
        })
    }
}
