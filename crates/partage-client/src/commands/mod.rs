//! Lifecycle command handlers.
//!
//! Each sub-module groups related commands by domain.  A command takes
//! the application state explicitly, validates and authorizes before
//! touching anything, applies its full effect, persists, and returns the
//! updated record -- or a [`DomainError`] kind the front end turns into a
//! user-visible message.
//!
//! [`DomainError`]: partage_shared::DomainError

pub mod chat;
pub mod identity;
pub mod listings;

use partage_shared::DomainError;
use partage_store::User;

use crate::error::{ClientError, Result};
use crate::state::AppState;

/// Resolve the logged-in user, or fail.
pub(crate) fn require_login(state: &AppState) -> Result<User> {
    state.current_user.clone().ok_or_else(|| {
        ClientError::from(DomainError::Authorization("no user is logged in".into()))
    })
}
