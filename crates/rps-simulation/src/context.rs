use rps_core::TokenKind;

use crate::clock::SimClock;
use crate::config::SimConfig;
use crate::event::{EventLog, SimEvent, SimEventKind};
use crate::population::Population;

/// Mutable context passed to each system during a tick.
pub struct SimContext<'a> {
    /// The tokens and their ledger.
    pub population: &'a mut Population,
    /// The run's configuration.
    pub config: &'a SimConfig,
    /// The tick clock, already advanced for this tick.
    pub clock: &'a SimClock,
    /// Event sink.
    pub events: &'a mut EventLog,
    /// The declared winner, if any.
    pub winner: &'a mut Option<TokenKind>,
}

impl SimContext<'_> {
    /// Emit a simulation event at the current tick.
    pub fn emit(&mut self, kind: SimEventKind, description: impl Into<String>) {
        self.events
            .push(SimEvent::new(self.clock.tick(), kind, description));
    }

    /// The current tick number.
    pub fn tick(&self) -> u64 {
        self.clock.tick()
    }
}
