//! Error types for the mechanics engine.

/// Errors that can occur while setting up or running a skirmish.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A dice or selection request was out of range (e.g. a die with no sides).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A weapon, stat block, or roster is malformed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The engine reached a state that its rules make impossible.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
