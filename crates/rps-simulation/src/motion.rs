//! Motion and boundary reflection.
//!
//! Every running tick each token moves by its velocity. Afterwards, per
//! axis, a bounding box that pokes past either arena edge has that velocity
//! component negated. Positions are never clamped, so a token can sit past
//! the edge for a tick before its next step carries it back inside.
//! Arithmetic saturates at the bounds of `i32`, so hand-placed tokens with
//! extreme velocities keep bouncing instead of overflowing.

use rps_core::{Rect, Vec2};
use tracing::trace;

use crate::context::SimContext;
use crate::system::System;

/// Which axes were reflected by a single step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reflection {
    /// The x velocity was negated.
    pub x: bool,
    /// The y velocity was negated.
    pub y: bool,
}

/// Move one token and reflect its velocity off the arena edges.
pub fn step(position: &mut Vec2, velocity: &mut Vec2, arena: &Rect, size: i32) -> Reflection {
    *position = position.saturating_add(*velocity);
    let bounds = Rect::square(*position, size);

    let mut reflection = Reflection::default();
    if bounds.left() < arena.left() || bounds.right() > arena.right() {
        velocity.x = velocity.x.saturating_neg();
        reflection.x = true;
    }
    if bounds.top() < arena.top() || bounds.bottom() > arena.bottom() {
        velocity.y = velocity.y.saturating_neg();
        reflection.y = true;
    }
    reflection
}

/// Moves every token and bounces it off the arena walls.
#[derive(Debug, Default)]
pub struct MotionSystem;

impl MotionSystem {
    /// Create the motion system.
    pub fn new() -> Self {
        Self
    }
}

impl System for MotionSystem {
    fn name(&self) -> &str {
        "motion"
    }

    fn tick(&mut self, ctx: &mut SimContext<'_>) {
        let arena = ctx.config.arena();
        let size = ctx.config.token_size;
        let mut bounces = 0usize;
        for (position, velocity) in ctx.population.kinematics_mut() {
            let r = step(position, velocity, &arena, size);
            bounces += usize::from(r.x) + usize::from(r.y);
        }
        trace!(tick = ctx.tick(), bounces, "motion step");
    }
}
