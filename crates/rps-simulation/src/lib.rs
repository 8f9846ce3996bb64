//! Tick-based simulation engine for RPSLife.
//!
//! A [`Simulation`] owns a fixed-size population of tokens, a score ledger and
//! a tick clock. Each call to [`Simulation::tick`] runs the registered systems
//! in a fixed order (motion, collision, convergence) once the warmup grace
//! period has elapsed, and returns an immutable [`Snapshot`] for the caller to
//! render or inspect.

/// Tick counter and warmup/running phase tracking.
pub mod clock;
/// Collision resolver: first-hit scan plus the dominance rule.
pub mod collision;
/// Configuration types for simulation runs.
pub mod config;
/// Mutable context passed to systems each tick.
pub mod context;
/// Convergence detector: declares the winner once.
pub mod convergence;
/// Error types for the simulation crate.
pub mod error;
/// Simulation event types and the event log.
pub mod event;
/// Per-kind live counts.
pub mod ledger;
/// Motion and boundary reflection.
pub mod motion;
/// The token population and its ledger, changed together.
pub mod population;
/// Top-level simulation orchestrator.
pub mod simulation;
/// Read-only views handed to the harness after each tick.
pub mod snapshot;
/// The trait that all simulation systems implement.
pub mod system;

/// Re-exports of [`clock::Phase`] and [`clock::SimClock`].
pub use clock::{Phase, SimClock};
/// Re-exports of [`config::ScanPolicy`], [`config::SimConfig`] and [`config::SpawnHomes`].
pub use config::{ScanPolicy, SimConfig, SpawnHomes};
/// Re-export of [`context::SimContext`].
pub use context::SimContext;
/// Re-exports of [`error::SimError`] and [`error::SimResult`].
pub use error::{SimError, SimResult};
/// Re-exports of [`event::EventLog`], [`event::SimEvent`], and [`event::SimEventKind`].
pub use event::{EventLog, SimEvent, SimEventKind};
/// Re-export of [`ledger::ScoreLedger`].
pub use ledger::ScoreLedger;
/// Re-export of [`population::Population`].
pub use population::Population;
/// Re-export of [`simulation::Simulation`].
pub use simulation::Simulation;
/// Re-exports of [`snapshot::Snapshot`] and [`snapshot::TokenView`].
pub use snapshot::{Snapshot, TokenView};
/// Re-export of [`system::System`].
pub use system::System;
