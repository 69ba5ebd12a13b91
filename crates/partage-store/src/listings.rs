//! Load/save access for the listing namespace.

use partage_shared::constants::NS_LISTINGS;

use crate::database::Database;
use crate::error::Result;
use crate::models::Listing;

impl Database {
    /// Load the full listing collection.
    ///
    /// A missing or malformed payload degrades to the empty collection;
    /// corruption is logged but never surfaced to the caller.
    pub fn load_listings(&self) -> Result<Vec<Listing>> {
        let Some(raw) = self.read_namespace(NS_LISTINGS)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(listings) => Ok(listings),
            Err(e) => {
                tracing::warn!(
                    namespace = NS_LISTINGS,
                    error = %e,
                    "corrupt listings payload, falling back to empty collection"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Persist the full listing collection, replacing the previous blob.
    pub fn save_listings(&self, listings: &[Listing]) -> Result<()> {
        let payload = serde_json::to_string(listings)?;
        self.write_namespace(NS_LISTINGS, &payload)
    }
}
