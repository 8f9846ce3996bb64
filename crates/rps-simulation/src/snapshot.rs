use rps_core::{Token, TokenKind, Vec2};
use serde::Serialize;

use crate::clock::Phase;
use crate::ledger::ScoreLedger;

/// Copy of one token's state, in population order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenView {
    /// Current kind.
    pub kind: TokenKind,
    /// Top-left corner of the bounding box.
    pub position: Vec2,
    /// Current velocity.
    pub velocity: Vec2,
}

impl From<&Token> for TokenView {
    fn from(token: &Token) -> Self {
        Self {
            kind: token.kind,
            position: token.position,
            velocity: token.velocity,
        }
    }
}

/// Everything a harness needs to draw one frame. Owns its data, so it stays
/// valid while the simulation keeps ticking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Tick this snapshot was taken at.
    pub tick: u64,
    /// Phase of that tick.
    pub phase: Phase,
    /// All tokens in population order.
    pub entities: Vec<TokenView>,
    /// Live count per kind.
    pub scores: ScoreLedger,
    /// The declared winner, if any.
    pub winner: Option<TokenKind>,
}

impl Snapshot {
    /// Number of tokens.
    pub fn population_size(&self) -> usize {
        self.entities.len()
    }

    /// The kind with the most live tokens (ties go to canonical order).
    pub fn leader(&self) -> Option<TokenKind> {
        self.scores.leader()
    }

    /// `true` once a winner has been declared.
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }
}
