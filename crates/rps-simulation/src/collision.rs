//! Collision resolver.
//!
//! Tokens are visited in population order. For each acting token the
//! population is scanned, again in order, for the first token whose bounding
//! box overlaps the actor's. The dominance table then decides which of the
//! two is retyped; at most one token changes per actor.

use rps_core::dominance::{Outcome, beats, rule_for};
use rps_core::{Token, TokenKind};
use tracing::debug;

use crate::config::ScanPolicy;
use crate::context::SimContext;
use crate::event::SimEventKind;
use crate::population::Population;
use crate::system::System;

/// A conversion applied by [`resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Index of the token that was retyped.
    pub loser: usize,
    /// Index of the token that beat it.
    pub winner: usize,
    /// Kind the loser had.
    pub from: TokenKind,
    /// Kind the loser has now (the winner's kind).
    pub to: TokenKind,
}

/// Index of the first token overlapping `tokens[actor]`, in population order.
///
/// With [`ScanPolicy::IncludeSelf`] the actor is part of the scan and, since
/// a token always overlaps itself, is returned unless an earlier token
/// overlaps it.
pub fn find_collision(
    tokens: &[Token],
    actor: usize,
    size: i32,
    policy: ScanPolicy,
) -> Option<usize> {
    let bounds = tokens.get(actor)?.bounds(size);
    tokens
        .iter()
        .enumerate()
        .filter(|&(i, _)| policy == ScanPolicy::IncludeSelf || i != actor)
        .find(|(_, t)| t.bounds(size).intersects(&bounds))
        .map(|(i, _)| i)
}

/// Resolve the actor at `actor` against its first collision.
///
/// Returns the conversion that took place, if any. A self-hit or a
/// same-kind hit changes nothing.
pub fn resolve(
    population: &mut Population,
    actor: usize,
    size: i32,
    policy: ScanPolicy,
) -> Option<Resolution> {
    let other = find_collision(population.tokens(), actor, size, policy)?;
    let tokens = population.tokens();
    let (t, c) = (tokens[actor].kind, tokens[other].kind);

    let (loser, winner, to) = match beats(t, c) {
        Outcome::AWins => (other, actor, t),
        Outcome::BWins => (actor, other, c),
        Outcome::Neutral => return None,
    };
    let from = population.convert(loser, to)?;
    Some(Resolution {
        loser,
        winner,
        from,
        to,
    })
}

/// Runs [`resolve`] for every token, in population order.
#[derive(Debug, Default)]
pub struct CollisionSystem;

impl CollisionSystem {
    /// Create the collision system.
    pub fn new() -> Self {
        Self
    }
}

impl System for CollisionSystem {
    fn name(&self) -> &str {
        "collision"
    }

    fn tick(&mut self, ctx: &mut SimContext<'_>) {
        let size = ctx.config.token_size;
        let policy = ctx.config.scan_policy;
        for actor in 0..ctx.population.len() {
            let Some(r) = resolve(ctx.population, actor, size, policy) else {
                continue;
            };
            let verb = rule_for(r.to, r.from).map_or("beats", |rule| rule.verb);
            debug!(
                tick = ctx.tick(),
                loser = r.loser,
                winner = r.winner,
                from = %r.from,
                to = %r.to,
                "token converted"
            );
            ctx.emit(
                SimEventKind::Converted {
                    index: r.loser,
                    by: r.winner,
                    from: r.from,
                    to: r.to,
                },
                format!("{} #{} {verb} {} #{}", r.to, r.winner, r.from, r.loser),
            );
        }
    }
}
