//! The dominance table.
//!
//! Every kind beats exactly two others, loses to exactly two others and is
//! neutral against itself. The table is a pure lookup with no state.

use serde::{Deserialize, Serialize};

use crate::kind::TokenKind;

/// Result of matching an ordered pair of kinds `(a, b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The first kind beats the second.
    AWins,
    /// The second kind beats the first.
    BWins,
    /// Same kind; nothing happens.
    Neutral,
}

impl Outcome {
    /// The outcome of the same match with the operands swapped.
    pub const fn flip(self) -> Self {
        match self {
            Self::AWins => Self::BWins,
            Self::BWins => Self::AWins,
            Self::Neutral => Self::Neutral,
        }
    }
}

/// One row of the dominance table: `winner` `verb` `loser`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// The dominating kind.
    pub winner: TokenKind,
    /// The dominated kind.
    pub loser: TokenKind,
    /// How the winner beats the loser ("cuts", "covers", ...).
    pub verb: &'static str,
}

/// All ten winning pairs.
pub const RULES: [Rule; 10] = [
    Rule { winner: TokenKind::Scissors, loser: TokenKind::Paper, verb: "cuts" },
    Rule { winner: TokenKind::Paper, loser: TokenKind::Rock, verb: "covers" },
    Rule { winner: TokenKind::Rock, loser: TokenKind::Lizard, verb: "crushes" },
    Rule { winner: TokenKind::Lizard, loser: TokenKind::Spock, verb: "poisons" },
    Rule { winner: TokenKind::Spock, loser: TokenKind::Scissors, verb: "smashes" },
    Rule { winner: TokenKind::Scissors, loser: TokenKind::Lizard, verb: "decapitates" },
    Rule { winner: TokenKind::Lizard, loser: TokenKind::Paper, verb: "eats" },
    Rule { winner: TokenKind::Paper, loser: TokenKind::Spock, verb: "disproves" },
    Rule { winner: TokenKind::Spock, loser: TokenKind::Rock, verb: "vaporizes" },
    Rule { winner: TokenKind::Rock, loser: TokenKind::Scissors, verb: "crushes" },
];

/// Match `a` against `b`.
pub const fn beats(a: TokenKind, b: TokenKind) -> Outcome {
    if a.index() == b.index() {
        Outcome::Neutral
    } else if defeats(a, b) {
        Outcome::AWins
    } else {
        Outcome::BWins
    }
}

/// `true` if `a` dominates `b`.
const fn defeats(a: TokenKind, b: TokenKind) -> bool {
    use TokenKind::*;
    matches!(
        (a, b),
        (Rock, Scissors | Lizard)
            | (Paper, Rock | Spock)
            | (Scissors, Paper | Lizard)
            | (Lizard, Spock | Paper)
            | (Spock, Rock | Scissors)
    )
}

impl TokenKind {
    /// The two kinds this kind beats.
    pub const fn prey(self) -> [TokenKind; 2] {
        match self {
            Self::Rock => [Self::Scissors, Self::Lizard],
            Self::Paper => [Self::Rock, Self::Spock],
            Self::Scissors => [Self::Paper, Self::Lizard],
            Self::Lizard => [Self::Spock, Self::Paper],
            Self::Spock => [Self::Rock, Self::Scissors],
        }
    }

    /// The two kinds that beat this kind.
    pub const fn predators(self) -> [TokenKind; 2] {
        match self {
            Self::Rock => [Self::Paper, Self::Spock],
            Self::Paper => [Self::Scissors, Self::Lizard],
            Self::Scissors => [Self::Spock, Self::Rock],
            Self::Lizard => [Self::Scissors, Self::Rock],
            Self::Spock => [Self::Lizard, Self::Paper],
        }
    }
}

/// The table row describing how `winner` beats `loser`, if it does.
pub fn rule_for(winner: TokenKind, loser: TokenKind) -> Option<&'static Rule> {
    RULES
        .iter()
        .find(|r| r.winner == winner && r.loser == loser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_kind() -> impl Strategy<Value = TokenKind> {
        prop::sample::select(TokenKind::ALL.to_vec())
    }

    #[test]
    fn same_kind_is_neutral() {
        for kind in TokenKind::ALL {
            assert_eq!(beats(kind, kind), Outcome::Neutral);
        }
    }

    #[test]
    fn rock_row_matches_table() {
        assert_eq!(beats(TokenKind::Rock, TokenKind::Scissors), Outcome::AWins);
        assert_eq!(beats(TokenKind::Rock, TokenKind::Lizard), Outcome::AWins);
        assert_eq!(beats(TokenKind::Rock, TokenKind::Paper), Outcome::BWins);
        assert_eq!(beats(TokenKind::Rock, TokenKind::Spock), Outcome::BWins);
    }

    #[test]
    fn every_kind_beats_two_and_loses_to_two() {
        for a in TokenKind::ALL {
            let wins = TokenKind::ALL
                .iter()
                .filter(|&&b| beats(a, b) == Outcome::AWins)
                .count();
            let losses = TokenKind::ALL
                .iter()
                .filter(|&&b| beats(a, b) == Outcome::BWins)
                .count();
            assert_eq!((wins, losses), (2, 2), "{a}");
        }
    }

    #[test]
    fn prey_and_predators_agree_with_beats() {
        for kind in TokenKind::ALL {
            for prey in kind.prey() {
                assert_eq!(beats(kind, prey), Outcome::AWins);
            }
            for predator in kind.predators() {
                assert_eq!(beats(kind, predator), Outcome::BWins);
            }
        }
    }

    #[test]
    fn rules_cover_every_winning_pair_once() {
        for a in TokenKind::ALL {
            for b in TokenKind::ALL {
                let rows = RULES.iter().filter(|r| r.winner == a && r.loser == b).count();
                let expected = usize::from(beats(a, b) == Outcome::AWins);
                assert_eq!(rows, expected, "{a} vs {b}");
            }
        }
        assert_eq!(rule_for(TokenKind::Spock, TokenKind::Rock).unwrap().verb, "vaporizes");
        assert!(rule_for(TokenKind::Rock, TokenKind::Spock).is_none());
    }

    proptest! {
        #[test]
        fn distinct_kinds_disagree(a in any_kind(), b in any_kind()) {
            prop_assume!(a != b);
            let ab = beats(a, b);
            prop_assert_ne!(ab, Outcome::Neutral);
            prop_assert_eq!(beats(b, a), ab.flip());
        }
    }
}
