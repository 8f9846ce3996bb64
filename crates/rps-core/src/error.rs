/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building core values from external input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A kind name did not match any of the five token kinds.
    #[error("unknown token kind: \"{0}\" (expected rock, paper, scissors, lizard or spock)")]
    UnknownKind(String),
}
