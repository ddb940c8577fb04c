//! The point-loss grade: the four-way transition between centipawn and
//! mate evaluations.

use crate::eval::{point_loss, Evaluation};
use crate::extract::{ExtractedCurrent, ExtractedPrevious};

use super::Classification;

// Expected-points loss thresholds for the centipawn grade, ascending.
const BEST_LOSS: f64 = 0.01;
const EXCELLENT_LOSS: f64 = 0.045;
const GOOD_LOSS: f64 = 0.08;
const INACCURACY_LOSS: f64 = 0.12;
const MISTAKE_LOSS: f64 = 0.22;

/// Grades a move that was not the engine's first choice.
pub(super) fn point_loss_classify(
    previous: &ExtractedPrevious,
    current: &ExtractedCurrent,
) -> Classification {
    let mover = previous.mover;

    match (previous.eval, current.eval) {
        (Evaluation::Mate(_), Evaluation::Mate(_)) => {
            let before = previous.eval.subjective(mover).value();
            let after = current.eval.subjective(mover).value();
            // Throwing a winning mate into a losing one is always a
            // blunder, whatever the counts say.
            if before > 0 && after < 0 {
                return Classification::Blunder;
            }
            // Signed growth of the mate count from the mover's view. The
            // losing side holding or shortening its count concedes nothing.
            let mate_loss = (current.eval.value() - previous.eval.value()) * mover.sign();
            match mate_loss {
                loss if loss < 1 => Classification::Best,
                loss if loss < 2 => Classification::Excellent,
                loss if loss < 7 => Classification::Good,
                _ => Classification::Inaccuracy,
            }
        }
        (Evaluation::Mate(_), Evaluation::Centipawn(_)) => {
            // A forced mate was let slip; grade by what is left of the
            // advantage.
            match current.eval.subjective(mover).value() {
                v if v >= 800 => Classification::Excellent,
                v if v >= 400 => Classification::Good,
                v if v >= 200 => Classification::Inaccuracy,
                v if v >= 0 => Classification::Mistake,
                _ => Classification::Blunder,
            }
        }
        (Evaluation::Centipawn(_), Evaluation::Mate(_)) => {
            // A mate appeared; in the mover's favor it is simply best,
            // against the mover it is graded by how fast it lands.
            match current.eval.subjective(mover).value() {
                v if v > 0 => Classification::Best,
                v if v >= -2 => Classification::Blunder,
                v if v >= -5 => Classification::Mistake,
                _ => Classification::Inaccuracy,
            }
        }
        (Evaluation::Centipawn(_), Evaluation::Centipawn(_)) => {
            match point_loss(previous.eval, current.eval, mover) {
                loss if loss < BEST_LOSS => Classification::Best,
                loss if loss < EXCELLENT_LOSS => Classification::Excellent,
                loss if loss < GOOD_LOSS => Classification::Good,
                loss if loss < INACCURACY_LOSS => Classification::Inaccuracy,
                loss if loss < MISTAKE_LOSS => Classification::Mistake,
                _ => Classification::Blunder,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::nodes;
    use super::*;

    fn cp(v: i32) -> Evaluation {
        Evaluation::Centipawn(v)
    }

    fn mate(v: i32) -> Evaluation {
        Evaluation::Mate(v)
    }

    /// Grades a White move in a quiet position where Ra8+ is "best" and
    /// the played Rb2 is not, so only the evaluations matter.
    fn grade(before: Evaluation, after: Evaluation) -> Classification {
        let (previous, current) = nodes(
            "4k3/7r/8/8/8/8/R7/4K3 w - - 0 1",
            "Ra8+",
            "Rb2",
            before,
            after,
            None,
        );
        point_loss_classify(&previous, &current)
    }

    /// Same, for a Black move.
    fn grade_black(before: Evaluation, after: Evaluation) -> Classification {
        let (previous, current) = nodes(
            "4k3/7r/8/8/8/8/R7/4K3 b - - 0 1",
            "Rh1+",
            "Rh6",
            before,
            after,
            None,
        );
        point_loss_classify(&previous, &current)
    }

    #[test]
    fn centipawn_thresholds_ascend() {
        assert_eq!(grade(cp(0), cp(0)), Classification::Best);
        assert_eq!(grade(cp(0), cp(-20)), Classification::Excellent);
        assert_eq!(grade(cp(0), cp(-60)), Classification::Good);
        assert_eq!(grade(cp(0), cp(-110)), Classification::Inaccuracy);
        assert_eq!(grade(cp(0), cp(-180)), Classification::Mistake);
        assert_eq!(grade(cp(0), cp(-400)), Classification::Blunder);
    }

    #[test]
    fn improving_is_best() {
        assert_eq!(grade(cp(-50), cp(100)), Classification::Best);
        assert_eq!(grade_black(cp(50), cp(-100)), Classification::Best);
    }

    #[test]
    fn black_losses_mirror_white_losses() {
        assert_eq!(grade_black(cp(0), cp(180)), Classification::Mistake);
        assert_eq!(grade_black(cp(0), cp(400)), Classification::Blunder);
    }

    #[test]
    fn winning_mate_flipped_to_losing_is_blunder() {
        assert_eq!(grade(mate(3), mate(-2)), Classification::Blunder);
        assert_eq!(grade_black(mate(-3), mate(5)), Classification::Blunder);
    }

    #[test]
    fn mate_count_bands() {
        // Holding or shortening the count is best.
        assert_eq!(grade(mate(3), mate(3)), Classification::Best);
        assert_eq!(grade(mate(3), mate(2)), Classification::Best);
        assert_eq!(grade(mate(3), mate(4)), Classification::Excellent);
        assert_eq!(grade(mate(3), mate(5)), Classification::Good);
        assert_eq!(grade(mate(3), mate(12)), Classification::Inaccuracy);
    }

    #[test]
    fn losing_side_holding_its_mate_count_is_best() {
        // White is getting mated either way; keeping the count is best and
        // even losing ground is graded leniently.
        assert_eq!(grade(mate(-5), mate(-5)), Classification::Best);
        assert_eq!(grade(mate(-5), mate(-6)), Classification::Best);
        assert_eq!(grade(mate(-5), mate(-4)), Classification::Excellent);
    }

    #[test]
    fn mate_let_slip_grades_by_remaining_advantage() {
        assert_eq!(grade(mate(4), cp(850)), Classification::Excellent);
        assert_eq!(grade(mate(4), cp(500)), Classification::Good);
        assert_eq!(grade(mate(4), cp(250)), Classification::Inaccuracy);
        assert_eq!(grade(mate(4), cp(50)), Classification::Mistake);
        assert_eq!(grade(mate(4), cp(-50)), Classification::Blunder);
        // Black perspective.
        assert_eq!(grade_black(mate(-4), cp(-850)), Classification::Excellent);
    }

    #[test]
    fn mate_appearing_grades_by_direction_and_speed() {
        assert_eq!(grade(cp(600), mate(3)), Classification::Best);
        assert_eq!(grade(cp(0), mate(-1)), Classification::Blunder);
        assert_eq!(grade(cp(0), mate(-4)), Classification::Mistake);
        assert_eq!(grade(cp(0), mate(-8)), Classification::Inaccuracy);
        assert_eq!(grade_black(cp(0), mate(-3)), Classification::Best);
    }
}
