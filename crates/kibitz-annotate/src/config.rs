//! Annotation options.

/// Controls which classification stages the annotator runs.
///
/// The waterfall itself is fixed; these toggles only disable the optional
/// stages. Everything defaults to on.
#[derive(Debug, Clone)]
pub struct AnnotateOptions {
    /// Label book positions as theory instead of grading them.
    pub include_theory: bool,
    /// Attempt the critical ("only move") refinement of best moves.
    pub include_critical: bool,
    /// Attempt the brilliant (sound sacrifice) refinement.
    pub include_brilliant: bool,
}

impl Default for AnnotateOptions {
    fn default() -> Self {
        Self {
            include_theory: true,
            include_critical: true,
            include_brilliant: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_everything() {
        let options = AnnotateOptions::default();
        assert!(options.include_theory);
        assert!(options.include_critical);
        assert!(options.include_brilliant);
    }
}
