//! Core types for RPSLife: token kinds, the dominance table, and token geometry.
//!
//! This crate holds the pure data model the simulation engine operates on.
//! Nothing here owns mutable state beyond a single [`Token`]; populations,
//! scores and the tick loop live in `rps-simulation`.

/// The rock-paper-scissors-lizard-spock dominance relation.
pub mod dominance;
/// Error types used throughout the crate.
pub mod error;
/// Integer 2D vectors and axis-aligned bounding boxes.
pub mod geometry;
/// The five token kinds.
pub mod kind;
/// A single token's mutable state.
pub mod token;

/// Re-export dominance types.
pub use dominance::{Outcome, Rule, beats};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export geometry types.
pub use geometry::{Rect, Vec2};
/// Re-export the token kind enum.
pub use kind::TokenKind;
/// Re-export the token struct.
pub use token::Token;
