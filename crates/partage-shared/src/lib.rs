//! # partage-shared
//!
//! Domain vocabulary shared by every Partage crate: typed identifiers,
//! the role and listing-status enumerations, the domain error kinds and
//! a handful of cross-crate constants.

pub mod constants;
pub mod error;
pub mod types;

pub use error::DomainError;
pub use types::{ListingId, ListingStatus, MessageId, UserId, UserRole};
