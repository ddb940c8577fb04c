//! The classification waterfall.
//!
//! Strict priority, first match wins: FORCED, THEORY, CHECKMATE, then the
//! point-loss grade, then the CRITICAL and BRILLIANT refinements of a best
//! move. The missed-opportunity tag is orthogonal and applied by the
//! annotator after the waterfall, since it depends on the previous ply.

mod brilliant;
mod critical;
mod point_loss;

use serde::{Deserialize, Serialize};

use kibitz_openings::OpeningBook;

use crate::config::AnnotateOptions;
use crate::extract::{ExtractedCurrent, ExtractedPrevious};

/// Quality label for one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// A sound sacrifice: best play that deliberately leaves material
    /// hanging.
    Brilliant,
    /// The only move preserving the advantage.
    Critical,
    /// The engine's first choice, or an equivalent.
    Best,
    /// The only legal move.
    Forced,
    /// Known opening theory.
    Theory,
    Excellent,
    Good,
    Inaccuracy,
    Mistake,
    Blunder,
}

impl Classification {
    /// Coarse quality rank, used only to decide whether a label is already
    /// best-or-better before attempting a refinement. The five top labels
    /// share a rank; the waterfall guarantees at most one of them applies.
    pub const fn rank(self) -> u8 {
        match self {
            Classification::Blunder => 0,
            Classification::Mistake => 1,
            Classification::Inaccuracy => 2,
            Classification::Good => 3,
            Classification::Excellent => 4,
            Classification::Best
            | Classification::Critical
            | Classification::Brilliant
            | Classification::Forced
            | Classification::Theory => 5,
        }
    }

    /// True for the labels the missed-opportunity tag can attach to.
    const fn is_lapse(self) -> bool {
        matches!(
            self,
            Classification::Inaccuracy | Classification::Mistake | Classification::Blunder
        )
    }
}

/// Final annotation for one move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveReport {
    pub classification: Classification,
    /// Set when this lapse follows an opponent mistake or blunder that it
    /// failed to punish.
    pub missed_opportunity: bool,
    /// 0-100, from the win probability the move gave up.
    pub accuracy: f64,
}

/// What the waterfall decided for one move.
pub(crate) struct WaterfallOutcome {
    pub classification: Classification,
    /// Resolved opening name when THEORY matched.
    pub opening: Option<String>,
}

/// Runs the waterfall for one fully-extracted move.
pub(crate) fn classify(
    previous: &ExtractedPrevious,
    current: &ExtractedCurrent,
    book: &OpeningBook,
    options: &AnnotateOptions,
) -> WaterfallOutcome {
    if previous.position.legal_moves().len() <= 1 {
        return WaterfallOutcome {
            classification: Classification::Forced,
            opening: None,
        };
    }

    if options.include_theory {
        if let Some(name) = book.lookup(&current.position.placement()) {
            return WaterfallOutcome {
                classification: Classification::Theory,
                opening: Some(name.to_string()),
            };
        }
    }

    if current.position.is_checkmate() {
        return WaterfallOutcome {
            classification: Classification::Best,
            opening: None,
        };
    }

    let top_move_played = previous.top_move.mv == current.played.mv;
    let mut classification = if top_move_played {
        Classification::Best
    } else {
        point_loss::point_loss_classify(previous, current)
    };

    if options.include_critical
        && top_move_played
        && critical::consider_critical(previous, current)
    {
        classification = Classification::Critical;
    }

    if options.include_brilliant
        && classification.rank() >= Classification::Best.rank()
        && brilliant::consider_brilliant(previous, current)
    {
        classification = Classification::Brilliant;
    }

    WaterfallOutcome {
        classification,
        opening: None,
    }
}

/// The orthogonal post-waterfall tag: a lapse right after the opponent's
/// mistake or blunder failed to punish it.
pub(crate) fn missed_opportunity(
    current: Classification,
    previous: Option<Classification>,
) -> bool {
    current.is_lapse()
        && matches!(
            previous,
            Some(Classification::Mistake | Classification::Blunder)
        )
}

#[cfg(test)]
pub(crate) mod testutil {
    use kibitz_board::Position;

    use crate::eval::Evaluation;
    use crate::extract::{ExtractedCurrent, ExtractedPrevious};
    use crate::line::{EngineLine, MoveText};

    /// Builds an extracted pair from a position, its top and played moves,
    /// and the surrounding evaluations.
    pub(crate) fn nodes(
        fen: &str,
        top_san: &str,
        played_san: &str,
        before: Evaluation,
        after: Evaluation,
        second: Option<Evaluation>,
    ) -> (ExtractedPrevious, ExtractedCurrent) {
        let position = Position::from_fen(fen).unwrap();
        let top = position.from_san(top_san).unwrap();
        let played = position.from_san(played_san).unwrap();
        let next = position.apply(played);

        let previous = ExtractedPrevious {
            top_line: EngineLine::new(
                before,
                "test",
                20,
                1,
                vec![MoveText::new(top_san, top.uci())],
            ),
            top_move: position.describe(top),
            eval: before,
            second_line: second
                .map(|eval| EngineLine::new(eval, "test", 20, 2, Vec::new())),
            second_eval: second,
            mover: position.side_to_move(),
            position: position.clone(),
        };
        let current = ExtractedCurrent {
            eval: after,
            played: position.describe(played),
            gives_check: next.in_check(),
            position: next,
        };
        (previous, current)
    }
}
