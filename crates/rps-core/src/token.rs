use serde::{Deserialize, Serialize};

use crate::geometry::{Rect, Vec2};
use crate::kind::TokenKind;

/// A single token in the arena.
///
/// Tokens carry no identifier of their own; they are addressed by their
/// index in the population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Current kind. Only changes when the token loses a collision.
    pub kind: TokenKind,
    /// Top-left corner of the token's bounding box.
    pub position: Vec2,
    /// Displacement applied every running tick.
    pub velocity: Vec2,
}

impl Token {
    /// Create a token.
    pub const fn new(kind: TokenKind, position: Vec2, velocity: Vec2) -> Self {
        Self {
            kind,
            position,
            velocity,
        }
    }

    /// Create a motionless token.
    pub const fn at_rest(kind: TokenKind, position: Vec2) -> Self {
        Self::new(kind, position, Vec2::ZERO)
    }

    /// The square bounding box of side `size` at the current position.
    pub const fn bounds(&self, size: i32) -> Rect {
        Rect::square(self.position, size)
    }
}
