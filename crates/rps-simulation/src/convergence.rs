use tracing::info;

use crate::context::SimContext;
use crate::event::SimEventKind;
use crate::system::System;

/// Declares the winner the first time every token shares one kind.
///
/// Once the population is homogeneous every collision is neutral, so the
/// declaration never needs revisiting.
#[derive(Debug, Default)]
pub struct ConvergenceSystem;

impl ConvergenceSystem {
    /// Create the convergence detector.
    pub fn new() -> Self {
        Self
    }
}

impl System for ConvergenceSystem {
    fn name(&self) -> &str {
        "convergence"
    }

    fn tick(&mut self, ctx: &mut SimContext<'_>) {
        if ctx.winner.is_some() {
            return;
        }
        if let Some(kind) = ctx.population.homogeneous_kind() {
            *ctx.winner = Some(kind);
            info!(tick = ctx.tick(), winner = %kind, "population converged");
            ctx.emit(
                SimEventKind::WinnerDeclared { kind },
                format!("every token is now {kind}"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SimClock;
    use crate::config::SimConfig;
    use crate::event::EventLog;
    use crate::population::Population;
    use rps_core::{Token, TokenKind, Vec2};

    fn run_once(population: &mut Population, winner: &mut Option<TokenKind>) -> EventLog {
        let config = SimConfig::default();
        let clock = SimClock::new(0);
        let mut events = EventLog::new(0);
        let mut ctx = SimContext {
            population,
            config: &config,
            clock: &clock,
            events: &mut events,
            winner,
        };
        ConvergenceSystem::new().tick(&mut ctx);
        events
    }

    #[test]
    fn declares_homogeneous_population() {
        let mut p = Population::new(vec![
            Token::at_rest(TokenKind::Paper, Vec2::ZERO),
            Token::at_rest(TokenKind::Paper, Vec2::new(90, 90)),
        ]);
        let mut winner = None;
        let events = run_once(&mut p, &mut winner);
        assert_eq!(winner, Some(TokenKind::Paper));
        assert_eq!(events.len(), 1);
        assert_eq!(events.events()[0].description, "every token is now Paper");
    }

    #[test]
    fn declares_only_once() {
        let mut p = Population::new(vec![Token::at_rest(TokenKind::Rock, Vec2::ZERO)]);
        let mut winner = Some(TokenKind::Rock);
        let events = run_once(&mut p, &mut winner);
        assert!(events.is_empty());
        assert_eq!(winner, Some(TokenKind::Rock));
    }

    #[test]
    fn mixed_population_has_no_winner() {
        let mut p = Population::new(vec![
            Token::at_rest(TokenKind::Rock, Vec2::ZERO),
            Token::at_rest(TokenKind::Spock, Vec2::new(90, 90)),
        ]);
        let mut winner = None;
        run_once(&mut p, &mut winner);
        assert_eq!(winner, None);
    }

    #[test]
    fn empty_population_has_no_winner() {
        let mut p = Population::default();
        let mut winner = None;
        run_once(&mut p, &mut winner);
        assert_eq!(winner, None);
    }
}
