//! Application state shared across all commands.
//!
//! [`AppState`] is the single explicit state object: it owns the database
//! handle, the user registry, the listing collection and the current
//! session.  It is initialised from the store once at startup and every
//! command persists through it -- there are no process-wide singletons.

use partage_shared::ListingId;
use partage_store::{Database, Listing, User};

use crate::error::Result;

/// Central application state.
///
/// Commands run one at a time on a `&mut AppState`; the single-threaded
/// embedding shell guarantees no interleaving.
pub struct AppState {
    /// Handle to the local database.
    pub database: Database,

    /// Every user ever registered on this device.
    pub users: Vec<User>,

    /// The full listing collection.  Unordered; projections impose
    /// whatever ordering a view needs.
    pub listings: Vec<Listing>,

    /// The logged-in user, if any.  `role` stays `None` between login
    /// and role selection.
    pub current_user: Option<User>,
}

impl AppState {
    /// Load application state from the store.
    ///
    /// Missing or corrupt namespaces degrade to empty defaults inside
    /// the store layer, so a fresh or damaged database still opens.  A
    /// persisted session is restored as the current user.
    pub fn open(database: Database) -> Result<Self> {
        let users = database.load_users()?;
        let listings = database.load_listings()?;
        let current_user = database.load_session()?;

        tracing::info!(
            users = users.len(),
            listings = listings.len(),
            session_restored = current_user.is_some(),
            "application state loaded"
        );

        Ok(Self {
            database,
            users,
            listings,
            current_user,
        })
    }

    pub fn find_listing(&self, id: ListingId) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    /// Persist the listing collection, restoring `previous` if the write
    /// fails so memory never drifts from durable state.
    pub(crate) fn commit_listings(&mut self, previous: Vec<Listing>) -> Result<()> {
        if let Err(e) = self.database.save_listings(&self.listings) {
            self.listings = previous;
            return Err(e.into());
        }
        Ok(())
    }

    /// Persist the user registry, restoring `previous` on failure.
    pub(crate) fn commit_users(&mut self, previous: Vec<User>) -> Result<()> {
        if let Err(e) = self.database.save_users(&self.users) {
            self.users = previous;
            return Err(e.into());
        }
        Ok(())
    }

    /// Persist the session, restoring `previous` on failure.
    pub(crate) fn commit_session(&mut self, previous: Option<User>) -> Result<()> {
        if let Err(e) = self.database.save_session(self.current_user.as_ref()) {
            self.current_user = previous;
            return Err(e.into());
        }
        Ok(())
    }
}
