//! Compiled-in opening data.
//!
//! A curated subset of the common opening tree, keyed by piece placement.
//! Larger books can be loaded from JSON at runtime with
//! [`OpeningBook::from_path`](crate::OpeningBook::from_path).

/// Piece placement to opening name.
pub const OPENINGS: &[(&str, &str)] = &[
    // First moves.
    (
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR",
        "King's Pawn Opening",
    ),
    (
        "rnbqkbnr/pppppppp/8/8/3P4/8/PPP1PPPP/RNBQKBNR",
        "Queen's Pawn Opening",
    ),
    (
        "rnbqkbnr/pppppppp/8/8/2P5/8/PP1PPPPP/RNBQKBNR",
        "English Opening",
    ),
    (
        "rnbqkbnr/pppppppp/8/8/8/5N2/PPPPPPPP/RNBQKB1R",
        "Réti Opening",
    ),
    (
        "rnbqkbnr/pppppppp/8/8/8/6P1/PPPPPP1P/RNBQKBNR",
        "King's Fianchetto Opening",
    ),
    (
        "rnbqkbnr/pppppppp/8/8/8/1P6/P1PPPPPP/RNBQKBNR",
        "Nimzo-Larsen Attack",
    ),
    (
        "rnbqkbnr/pppppppp/8/8/5P2/8/PPPPP1PP/RNBQKBNR",
        "Bird's Opening",
    ),
    (
        "rnbqkbnr/pppppppp/8/8/8/2N5/PPPPPPPP/R1BQKBNR",
        "Van Geet Opening",
    ),
    // 1.e4 replies.
    (
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR",
        "King's Pawn Game",
    ),
    (
        "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR",
        "Sicilian Defense",
    ),
    (
        "rnbqkbnr/pppp1ppp/4p3/8/4P3/8/PPPP1PPP/RNBQKBNR",
        "French Defense",
    ),
    (
        "rnbqkbnr/pp1ppppp/2p5/8/4P3/8/PPPP1PPP/RNBQKBNR",
        "Caro-Kann Defense",
    ),
    (
        "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR",
        "Scandinavian Defense",
    ),
    (
        "rnbqkbnr/ppp1pppp/3p4/8/4P3/8/PPPP1PPP/RNBQKBNR",
        "Pirc Defense",
    ),
    (
        "rnbqkb1r/pppppppp/5n2/8/4P3/8/PPPP1PPP/RNBQKBNR",
        "Alekhine's Defense",
    ),
    (
        "rnbqkbnr/pppppp1p/6p1/8/4P3/8/PPPP1PPP/RNBQKBNR",
        "Modern Defense",
    ),
    // Open games.
    (
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R",
        "King's Knight Opening",
    ),
    (
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R",
        "King's Knight Opening: Normal Variation",
    ),
    (
        "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R",
        "Italian Game",
    ),
    (
        "r1bqk1nr/pppp1ppp/2n5/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQK2R",
        "Italian Game: Giuoco Piano",
    ),
    (
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R",
        "Italian Game: Two Knights Defense",
    ),
    (
        "r1bqkbnr/pppp1ppp/2n5/1B2p3/4P3/5N2/PPPP1PPP/RNBQK2R",
        "Ruy Lopez",
    ),
    (
        "r1bqkbnr/1ppp1ppp/p1n5/1B2p3/4P3/5N2/PPPP1PPP/RNBQK2R",
        "Ruy Lopez: Morphy Defense",
    ),
    (
        "r1bqkb1r/pppp1ppp/2n2n2/1B2p3/4P3/5N2/PPPP1PPP/RNBQK2R",
        "Ruy Lopez: Berlin Defense",
    ),
    (
        "r1bqkbnr/pppp1ppp/2n5/4p3/3PP3/5N2/PPP2PPP/RNBQKB1R",
        "Scotch Game",
    ),
    (
        "rnbqkb1r/pppp1ppp/5n2/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R",
        "Petrov's Defense",
    ),
    (
        "rnbqkbnr/ppp2ppp/3p4/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R",
        "Philidor Defense",
    ),
    (
        "rnbqkbnr/pppp1ppp/8/4p3/4PP2/8/PPPP2PP/RNBQKBNR",
        "King's Gambit",
    ),
    (
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/2N5/PPPP1PPP/R1BQKBNR",
        "Vienna Game",
    ),
    // Sicilian branches.
    (
        "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R",
        "Sicilian Defense: Open",
    ),
    (
        "rnbqkbnr/pp2pppp/3p4/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R",
        "Sicilian Defense: Najdorf-Scheveningen Complex",
    ),
    (
        "r1bqkbnr/pp1ppppp/2n5/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R",
        "Sicilian Defense: Old Sicilian",
    ),
    // French and Caro-Kann mainlines.
    (
        "rnbqkbnr/ppp2ppp/4p3/3p4/3PP3/8/PPP2PPP/RNBQKBNR",
        "French Defense: Normal Variation",
    ),
    (
        "rnbqkbnr/pp2pppp/2p5/3p4/3PP3/8/PPP2PPP/RNBQKBNR",
        "Caro-Kann Defense: Main Line",
    ),
    // Queen's pawn openings.
    (
        "rnbqkbnr/ppp1pppp/8/3p4/3P4/8/PPP1PPPP/RNBQKBNR",
        "Queen's Pawn Game",
    ),
    (
        "rnbqkbnr/ppp1pppp/8/3p4/2PP4/8/PP2PPPP/RNBQKBNR",
        "Queen's Gambit",
    ),
    (
        "rnbqkbnr/ppp2ppp/4p3/3p4/2PP4/8/PP2PPPP/RNBQKBNR",
        "Queen's Gambit Declined",
    ),
    (
        "rnbqkbnr/pp2pppp/2p5/3p4/2PP4/8/PP2PPPP/RNBQKBNR",
        "Slav Defense",
    ),
    (
        "rnbqkbnr/ppp1pppp/8/8/2pP4/8/PP2PPPP/RNBQKBNR",
        "Queen's Gambit Accepted",
    ),
    (
        "rnbqkb1r/pppppppp/5n2/8/3P4/8/PPP1PPPP/RNBQKBNR",
        "Indian Defense",
    ),
    (
        "rnbqkb1r/pppppppp/5n2/8/2PP4/8/PP2PPPP/RNBQKBNR",
        "Indian Defense: Normal Variation",
    ),
    (
        "rnbqkb1r/pppp1ppp/4pn2/8/2PP4/8/PP2PPPP/RNBQKBNR",
        "Indian Defense: East Indian",
    ),
    (
        "rnbqkb1r/pppppp1p/5np1/8/2PP4/8/PP2PPPP/RNBQKBNR",
        "King's Indian Defense",
    ),
    (
        "rnbqk2r/pppp1ppp/4pn2/8/1bPP4/2N5/PP2PPPP/R1BQKBNR",
        "Nimzo-Indian Defense",
    ),
    (
        "rnbqkb1r/p1pp1ppp/1p2pn2/8/2PP4/5N2/PP2PPPP/RNBQKB1R",
        "Queen's Indian Defense",
    ),
    (
        "rnbqkb1r/ppp1pp1p/5np1/3p4/2PP4/2N5/PP2PPPP/R1BQKB1R",
        "Grünfeld Defense",
    ),
    (
        "rnbqkbnr/ppppp1pp/8/5p2/3P4/8/PPP1PPPP/RNBQKBNR",
        "Dutch Defense",
    ),
    (
        "rnbqkbnr/pp1ppppp/8/2p5/3P4/8/PPP1PPPP/RNBQKBNR",
        "Benoni Defense",
    ),
    (
        "rnbqkbnr/ppp1pppp/8/3p4/3P1B2/8/PPP1PPPP/RN1QKBNR",
        "London System",
    ),
    // English replies.
    (
        "rnbqkbnr/pppp1ppp/8/4p3/2P5/8/PP1PPPPP/RNBQKBNR",
        "English Opening: King's English",
    ),
    (
        "rnbqkb1r/pppppppp/5n2/8/2P5/8/PP1PPPPP/RNBQKBNR",
        "English Opening: Anglo-Indian Defense",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let keys: HashSet<&str> = OPENINGS.iter().map(|&(placement, _)| placement).collect();
        assert_eq!(keys.len(), OPENINGS.len());
    }

    #[test]
    fn placements_are_well_formed() {
        for &(placement, name) in OPENINGS {
            assert!(!name.is_empty());
            let ranks: Vec<&str> = placement.split('/').collect();
            assert_eq!(ranks.len(), 8, "{} has {} ranks", placement, ranks.len());
            for rank in ranks {
                let squares: u32 = rank
                    .chars()
                    .map(|c| c.to_digit(10).unwrap_or(1))
                    .sum();
                assert_eq!(squares, 8, "bad rank in {}", placement);
            }
        }
    }
}
