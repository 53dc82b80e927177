//! Crate error type.

/// Errors surfaced by the interaction engine.
///
/// All variants are gesture-entry failures: once an interaction is
/// running, moves and releases cannot fail (a release outside the grid
/// falls back rather than erroring).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no update path, so gestures are disabled outright.
    #[error("grid is read-only: interactions are disabled")]
    ReadOnly,

    /// Another job's interaction is already in flight.
    #[error("interaction already active for job '{0}'")]
    InteractionActive(String),

    /// A drag needs a primary resource row to fall back to.
    #[error("job '{0}' has no assigned resource")]
    MissingResource(String),
}

/// Convenience alias for fallible engine calls.
pub type GridResult<T> = Result<T, GridError>;
