//! Load/save access for the session namespace.
//!
//! The session holds the currently logged-in user, or nothing.  It is
//! persisted as `null` when the user logs out, mirroring the other
//! namespaces' whole-value replacement.

use partage_shared::constants::NS_SESSION;

use crate::database::Database;
use crate::error::Result;
use crate::models::User;

impl Database {
    /// Load the persisted session, degrading to `None` on a missing or
    /// malformed payload.
    pub fn load_session(&self) -> Result<Option<User>> {
        let Some(raw) = self.read_namespace(NS_SESSION)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Ok(session),
            Err(e) => {
                tracing::warn!(
                    namespace = NS_SESSION,
                    error = %e,
                    "corrupt session payload, treating as logged out"
                );
                Ok(None)
            }
        }
    }

    /// Persist the session (or its absence).
    pub fn save_session(&self, session: Option<&User>) -> Result<()> {
        let payload = serde_json::to_string(&session)?;
        self.write_namespace(NS_SESSION, &payload)
    }
}
