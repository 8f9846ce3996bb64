use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// The kind of a token. A closed set of five values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Crushes scissors, crushes lizard.
    Rock,
    /// Covers rock, disproves Spock.
    Paper,
    /// Cuts paper, decapitates lizard.
    Scissors,
    /// Poisons Spock, eats paper.
    Lizard,
    /// Smashes scissors, vaporizes rock.
    Spock,
}

impl TokenKind {
    /// Number of distinct kinds.
    pub const COUNT: usize = 5;

    /// All kinds in canonical order. This is also the spawn order.
    pub const ALL: [TokenKind; Self::COUNT] = [
        Self::Rock,
        Self::Paper,
        Self::Scissors,
        Self::Lizard,
        Self::Spock,
    ];

    /// Position of this kind in [`TokenKind::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::Rock => 0,
            Self::Paper => 1,
            Self::Scissors => 2,
            Self::Lizard => 3,
            Self::Spock => 4,
        }
    }

    /// Capitalized display name ("Rock", "Scissors", ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rock => "Rock",
            Self::Paper => "Paper",
            Self::Scissors => "Scissors",
            Self::Lizard => "Lizard",
            Self::Spock => "Spock",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenKind {
    type Err = CoreError;

    /// Case-insensitive; accepts the singular "scissor" as well.
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Self::Rock),
            "paper" => Ok(Self::Paper),
            "scissors" | "scissor" => Ok(Self::Scissors),
            "lizard" => Ok(Self::Lizard),
            "spock" => Ok(Self::Spock),
            _ => Err(CoreError::UnknownKind(s.to_string())),
        }
    }
}
