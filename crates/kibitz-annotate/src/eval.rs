//! Win-probability model: expected points, point loss, and accuracy.

use kibitz_board::Color;
use serde::{Deserialize, Serialize};

/// Steepness of the centipawn-to-win-probability sigmoid.
pub const CENTIPAWN_GRADIENT: f64 = 0.0035;

const ACCURACY_MULTIPLIER: f64 = 103.16;
const ACCURACY_EXPONENT: f64 = -4.0;
const ACCURACY_OFFSET: f64 = -3.17;

/// An engine evaluation, always stored White-relative.
///
/// `Mate(n)` is a signed ply count to forced mate; the sign follows the
/// mating side. `Mate(0)` means mate is already on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Evaluation {
    Centipawn(i32),
    Mate(i32),
}

impl Evaluation {
    /// The raw signed value, centipawns or moves to mate.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            Evaluation::Centipawn(v) | Evaluation::Mate(v) => v,
        }
    }

    /// Returns true for forced-mate evaluations.
    #[inline]
    pub const fn is_mate(self) -> bool {
        matches!(self, Evaluation::Mate(_))
    }

    /// Re-signs the evaluation for the given side's point of view. White's
    /// view is the stored one; flipping twice is the identity.
    #[inline]
    pub const fn subjective(self, color: Color) -> Evaluation {
        match (self, color) {
            (eval, Color::White) => eval,
            (Evaluation::Centipawn(v), Color::Black) => Evaluation::Centipawn(-v),
            (Evaluation::Mate(v), Color::Black) => Evaluation::Mate(-v),
        }
    }

    /// White's win probability implied by this evaluation.
    ///
    /// `side_to_move` is the side to move in the evaluated position; it only
    /// matters for `Mate(0)`, where the side to move is the side that has
    /// been mated.
    pub fn expected_points(self, side_to_move: Color) -> f64 {
        match self {
            Evaluation::Centipawn(v) => {
                1.0 / (1.0 + (-CENTIPAWN_GRADIENT * f64::from(v)).exp())
            }
            Evaluation::Mate(0) => match side_to_move {
                Color::White => 0.0,
                Color::Black => 1.0,
            },
            Evaluation::Mate(v) if v > 0 => 1.0,
            Evaluation::Mate(_) => 0.0,
        }
    }

    /// Win probability from `perspective`'s side of the board.
    pub fn expected_points_for(self, perspective: Color, side_to_move: Color) -> f64 {
        let white = self.expected_points(side_to_move);
        match perspective {
            Color::White => white,
            Color::Black => 1.0 - white,
        }
    }
}

/// Expected points the mover gave up by reaching `after` instead of holding
/// `before`. Never negative: an improving move loses nothing.
///
/// `before` evaluates the position the mover was about to play in; `after`
/// evaluates the position the opponent now faces.
pub fn point_loss(before: Evaluation, after: Evaluation, mover: Color) -> f64 {
    let ep_before = before.expected_points_for(mover, mover);
    let ep_after = after.expected_points_for(mover, mover.opposite());
    (ep_before - ep_after).max(0.0)
}

/// Maps a point loss to a 0-100 accuracy score, strictly decreasing until
/// the decay bottoms out. A lossless move is a perfect 100.
pub fn accuracy(loss: f64) -> f64 {
    if loss <= 0.0 {
        return 100.0;
    }
    (ACCURACY_MULTIPLIER * (ACCURACY_EXPONENT * loss).exp() + ACCURACY_OFFSET).clamp(0.0, 100.0)
}
