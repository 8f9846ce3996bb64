use crate::context::SimContext;

/// A simulation subsystem that runs each running tick.
///
/// Systems are executed in registration order. Each system receives
/// a mutable context providing access to the population, clock, config,
/// event log and winner slot. Ticking cannot fail.
pub trait System: std::fmt::Debug + Send {
    /// Human-readable name for this system.
    fn name(&self) -> &str;

    /// Called once per running tick.
    fn tick(&mut self, ctx: &mut SimContext<'_>);
}
