//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`CoverError`]
//! via `From` so they can cross port boundaries.

/// Top-level error for every fallible coverctl operation.
#[derive(Debug, thiserror::Error)]
pub enum CoverError {
    /// A domain invariant was violated (bad configuration, unknown action, …).
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A named controller or entity does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The automation platform failed to answer a query or service call.
    #[error("platform error")]
    Platform(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The controller was configured without a cover entity.
    #[error("`cover` must not be empty")]
    EmptyCover,

    /// The controller name is empty.
    #[error("controller name must not be empty")]
    EmptyName,

    /// Two controllers were registered under the same name.
    #[error("controller `{0}` is defined more than once")]
    DuplicateName(String),

    /// `open_position` is lower than `close_position`.
    #[error("`open_position` ({open}) must be higher than `close_position` ({close})")]
    PositionBounds {
        /// Configured open position.
        open: i32,
        /// Configured close position.
        close: i32,
    },

    /// The action name is not part of the cover vocabulary.
    #[error("unknown cover action `{0}`")]
    UnknownAction(String),

    /// Both `mapping` and `merge_mapping` were given for the same controller.
    #[error("`mapping` and `merge_mapping` cannot be used together")]
    ConflictingMappings,
}

/// A lookup by name found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} `{name}` not found")]
pub struct NotFoundError {
    /// What was looked up (e.g. `"Controller"`).
    pub kind: &'static str,
    /// The name that was requested.
    pub name: String,
}
