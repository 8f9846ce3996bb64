/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised while constructing a simulation.
///
/// A constructed simulation never fails: ticking and resetting are total.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    /// The configuration was rejected; no engine was built.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
