use thiserror::Error;

/// Failure kinds shared by every lifecycle operation.
///
/// Commands return one of these instead of panicking; the presentation
/// layer is responsible for turning them into user-visible messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed or missing required input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The actor lacks the role or ownership the operation requires.
    #[error("Authorization error: {0}")]
    Authorization(String),

    /// Valid actor and input, but the listing is in the wrong state
    /// (already claimed, deletion window expired, not yet claimed).
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// The referenced record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}
