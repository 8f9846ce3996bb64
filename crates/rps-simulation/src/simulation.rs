use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rps_core::{Token, TokenKind, Vec2};
use tracing::{info, trace};

use crate::clock::{Phase, SimClock};
use crate::collision::CollisionSystem;
use crate::config::SimConfig;
use crate::context::SimContext;
use crate::convergence::ConvergenceSystem;
use crate::error::SimResult;
use crate::event::{EventLog, SimEvent, SimEventKind};
use crate::ledger::ScoreLedger;
use crate::motion::MotionSystem;
use crate::population::Population;
use crate::snapshot::{Snapshot, TokenView};
use crate::system::System;

/// The top-level simulation orchestrator.
///
/// Owns the population, clock, RNG, event log and the fixed system pipeline
/// (motion, collision, convergence). [`Simulation::tick`] and
/// [`Simulation::reset`] are the only mutating entry points.
pub struct Simulation {
    config: SimConfig,
    placement: Vec<(TokenKind, Vec2)>,
    population: Population,
    clock: SimClock,
    rng: StdRng,
    events: EventLog,
    systems: Vec<Box<dyn System>>,
    winner: Option<TokenKind>,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("tick", &self.clock.tick())
            .field("tokens", &self.population.len())
            .field("winner", &self.winner)
            .field("events", &self.events.len())
            .finish()
    }
}

impl Simulation {
    /// Create a simulation with `spawn_count` tokens of every kind at their
    /// homes, each with a random velocity.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        let homes = config.spawn_homes();
        let placement: Vec<(TokenKind, Vec2)> = TokenKind::ALL
            .iter()
            .flat_map(|&kind| {
                std::iter::repeat_n((kind, homes.get(kind)), config.spawn_count as usize)
            })
            .collect();
        let mut rng = StdRng::seed_from_u64(config.seed);
        let tokens = spawn(&placement, &config, &mut rng);
        Ok(Self::assemble(config, placement, tokens, rng))
    }

    /// Create a simulation from an explicit initial population.
    ///
    /// The tokens keep their given velocities. A later [`Simulation::reset`]
    /// restores their kinds and positions with freshly drawn velocities.
    pub fn with_tokens(config: SimConfig, tokens: Vec<Token>) -> SimResult<Self> {
        config.validate()?;
        let placement = tokens.iter().map(|t| (t.kind, t.position)).collect();
        let rng = StdRng::seed_from_u64(config.seed);
        Ok(Self::assemble(config, placement, tokens, rng))
    }

    fn assemble(
        config: SimConfig,
        placement: Vec<(TokenKind, Vec2)>,
        tokens: Vec<Token>,
        rng: StdRng,
    ) -> Self {
        let population = Population::new(tokens);
        let systems: Vec<Box<dyn System>> = vec![
            Box::new(MotionSystem::new()),
            Box::new(CollisionSystem::new()),
            Box::new(ConvergenceSystem::new()),
        ];
        info!(
            tokens = population.len(),
            width = config.width,
            height = config.height,
            grace_ticks = config.grace_ticks,
            "simulation created"
        );
        Self {
            clock: SimClock::new(config.grace_ticks),
            events: EventLog::new(config.max_events),
            systems,
            winner: None,
            config,
            placement,
            population,
            rng,
        }
    }

    /// Advance the simulation by one tick and return the resulting state.
    ///
    /// During the grace period nothing moves. Afterwards motion, collision
    /// and convergence run in that order.
    pub fn tick(&mut self) -> Snapshot {
        let tick = self.clock.advance();
        if self.clock.phase() == Phase::Warmup {
            trace!(tick, "warmup tick");
            return self.snapshot();
        }

        if self.clock.just_started() {
            info!(
                tick,
                grace_ticks = self.clock.grace_ticks(),
                "grace period over, tokens released"
            );
            self.events.push(SimEvent::new(
                tick,
                SimEventKind::WarmupEnded,
                "tokens released",
            ));
        }

        for system in &mut self.systems {
            let mut ctx = SimContext {
                population: &mut self.population,
                config: &self.config,
                clock: &self.clock,
                events: &mut self.events,
                winner: &mut self.winner,
            };
            system.tick(&mut ctx);
            trace!(tick, system = system.name(), "system ticked");
        }

        debug_assert_eq!(self.population.ledger().total(), self.population.len());
        self.snapshot()
    }

    /// Advance the simulation by `n` ticks and return the final state.
    pub fn run(&mut self, n: u64) -> Snapshot {
        for _ in 0..n {
            self.tick();
        }
        self.snapshot()
    }

    /// Tick until a winner is declared or `max_ticks` more ticks have run.
    pub fn run_until_converged(&mut self, max_ticks: u64) -> Option<TokenKind> {
        for _ in 0..max_ticks {
            if self.winner.is_some() {
                break;
            }
            self.tick();
        }
        self.winner
    }

    /// Re-seed the initial placement with fresh velocities and start over.
    pub fn reset(&mut self) {
        let tokens = spawn(&self.placement, &self.config, &mut self.rng);
        self.population = Population::new(tokens);
        self.clock.reset();
        self.winner = None;
        self.events.clear();
        self.events
            .push(SimEvent::new(0, SimEventKind::Reset, "population re-seeded"));
        info!(tokens = self.population.len(), "simulation reset");
    }

    /// Copy the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.clock.tick(),
            phase: self.clock.phase(),
            entities: self.population.tokens().iter().map(TokenView::from).collect(),
            scores: *self.population.ledger(),
            winner: self.winner,
        }
    }

    /// All tokens in population order.
    pub fn tokens(&self) -> &[Token] {
        self.population.tokens()
    }

    /// Live count per kind.
    pub fn scores(&self) -> &ScoreLedger {
        self.population.ledger()
    }

    /// The declared winner, if any.
    pub fn winner(&self) -> Option<TokenKind> {
        self.winner
    }

    /// Phase of the most recent tick.
    pub fn phase(&self) -> Phase {
        self.clock.phase()
    }

    /// Number of ticks since creation or the last reset.
    pub fn current_tick(&self) -> u64 {
        self.clock.tick()
    }

    /// Number of tokens. Constant for the life of the simulation.
    pub fn population_size(&self) -> usize {
        self.population.len()
    }

    /// The run's configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Events recorded since creation or the last reset.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Names of the registered systems in execution order.
    pub fn system_names(&self) -> Vec<&str> {
        self.systems.iter().map(|s| s.name()).collect()
    }
}

/// Build tokens for a placement, drawing each velocity from the RNG.
fn spawn(placement: &[(TokenKind, Vec2)], config: &SimConfig, rng: &mut StdRng) -> Vec<Token> {
    let speeds = config.min_speed..=config.max_speed;
    placement
        .iter()
        .map(|&(kind, position)| {
            let velocity = Vec2::new(
                rng.random_range(speeds.clone()),
                rng.random_range(speeds.clone()),
            );
            Token::new(kind, position, velocity)
        })
        .collect()
}
