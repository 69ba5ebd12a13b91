use partage_shared::DomainError;
use partage_store::StoreError;
use thiserror::Error;

/// Errors returned by the command layer.
///
/// Domain failures (validation, authorization, precondition, not-found)
/// pass through unchanged so the front end can match on the kind; store
/// write failures are wrapped.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClientError>;
