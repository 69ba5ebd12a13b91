//! Load/save access for the user registry namespace.

use partage_shared::constants::NS_USERS;

use crate::database::Database;
use crate::error::Result;
use crate::models::User;

impl Database {
    /// Load the full user registry, degrading to empty on a missing or
    /// malformed payload.
    pub fn load_users(&self) -> Result<Vec<User>> {
        let Some(raw) = self.read_namespace(NS_USERS)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(users) => Ok(users),
            Err(e) => {
                tracing::warn!(
                    namespace = NS_USERS,
                    error = %e,
                    "corrupt users payload, falling back to empty registry"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Persist the full user registry, replacing the previous blob.
    pub fn save_users(&self, users: &[User]) -> Result<()> {
        let payload = serde_json::to_string(users)?;
        self.write_namespace(NS_USERS, &payload)
    }
}
