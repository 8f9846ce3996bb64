use rps_core::TokenKind;
use serde::Serialize;

/// What kind of simulation event occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimEventKind {
    /// The grace period elapsed and tokens started moving.
    WarmupEnded,

    /// A token lost a collision and took its opponent's kind.
    Converted {
        /// Population index of the converted token.
        index: usize,
        /// Population index of the token that beat it.
        by: usize,
        /// The kind it had.
        from: TokenKind,
        /// The kind it has now.
        to: TokenKind,
    },

    /// Every token shares one kind. Emitted once per run.
    WinnerDeclared {
        /// The surviving kind.
        kind: TokenKind,
    },

    /// The population was re-seeded.
    Reset,
}

impl SimEventKind {
    /// Check whether the token at `index` is involved in this event.
    pub fn involves(&self, index: usize) -> bool {
        match self {
            Self::Converted { index: i, by, .. } => *i == index || *by == index,
            Self::WarmupEnded | Self::WinnerDeclared { .. } | Self::Reset => false,
        }
    }
}

/// A record of something that happened during simulation.
#[derive(Debug, Clone, Serialize)]
pub struct SimEvent {
    /// The simulation tick when this event occurred.
    pub tick: u64,
    /// The specific kind of event that occurred.
    pub kind: SimEventKind,
    /// A human-readable description of the event.
    pub description: String,
}

impl SimEvent {
    /// Create a new simulation event with the given tick, kind, and description.
    pub fn new(tick: u64, kind: SimEventKind, description: impl Into<String>) -> Self {
        Self {
            tick,
            kind,
            description: description.into(),
        }
    }
}

/// Accumulates events during a simulation run.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<SimEvent>,
    max_events: usize,
}

impl EventLog {
    /// Create a new event log with the given maximum capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
        }
    }

    /// Append an event, dropping the oldest events if the log exceeds its capacity.
    pub fn push(&mut self, event: SimEvent) {
        self.events.push(event);
        if self.max_events > 0 && self.events.len() > self.max_events {
            let drain_count = self.events.len() - self.max_events;
            self.events.drain(..drain_count);
        }
    }

    /// Return a slice of all recorded events.
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Return all events that occurred at the given tick.
    pub fn events_at_tick(&self, tick: u64) -> Vec<&SimEvent> {
        self.events.iter().filter(|e| e.tick == tick).collect()
    }

    /// Return all events involving the token at `index`.
    pub fn events_for_token(&self, index: usize) -> Vec<&SimEvent> {
        self.events
            .iter()
            .filter(|e| e.kind.involves(index))
            .collect()
    }

    /// Number of conversions recorded.
    pub fn conversions(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e.kind, SimEventKind::Converted { .. }))
            .count()
    }

    /// Return the number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Return `true` if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
