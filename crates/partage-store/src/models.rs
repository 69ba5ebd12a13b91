//! Domain model structs persisted in the local database.
//!
//! Every struct derives `Serialize` and `Deserialize` so it can be
//! written into a namespace blob and handed directly to the UI layer.
//! Field names serialize in camelCase, matching the shape a JSON
//! front end expects.

use chrono::{DateTime, Utc};
use partage_shared::{ListingId, ListingStatus, MessageId, UserId, UserRole};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A registered user.  Identity is the exact (name, contact, credential)
/// tuple; the id is assigned once on first registration and stable
/// thereafter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Contact address (e-mail in the original form; free text here).
    pub contact: String,
    /// Opaque shared secret.  Matched verbatim at login, never hashed --
    /// this is explicitly not a security boundary.
    pub credential: String,
    /// `None` between login and role selection.
    pub role: Option<UserRole>,
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// One surplus-food offer.
///
/// The donor-supplied fields are immutable after creation; only the
/// lifecycle fields (`status`, claim details, acknowledgments) and the
/// append-only `chat` change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Unique listing identifier.
    pub id: ListingId,

    // Donor-supplied fields, immutable after creation.
    pub donor_name: String,
    /// Kind of donor organisation (restaurant, bakery, ...).
    pub donor_type: String,
    pub donor_user_id: UserId,
    pub food_description: String,
    /// Free-text amount, e.g. "3 trays".
    pub quantity: String,
    /// ISO date string from the form; compared lexicographically.
    pub expiry_date: String,
    pub pickup_window: String,
    pub location: String,
    pub notes: String,
    /// Optional photo, carried as an opaque data-URL string.
    pub image_ref: Option<String>,

    /// Always equals `donor_user_id`: the creating donor.
    pub created_by_user_id: UserId,
    pub created_at: DateTime<Utc>,

    // Lifecycle fields.
    pub status: ListingStatus,
    /// Set together with `claimed_at` when a charity claims.
    pub charity_user_id: Option<UserId>,
    pub charity_name: String,
    pub claimed_at: Option<DateTime<Utc>>,
    pub donor_ack: bool,
    pub charity_ack: bool,

    /// Donor <-> charity conversation, append-only.
    pub chat: Vec<ChatMessage>,
}

impl Listing {
    /// Both claim participants have confirmed the handoff.  Derived on
    /// demand; never stored as a separate flag.
    pub fn is_fully_confirmed(&self) -> bool {
        self.donor_ack && self.charity_ack
    }

    pub fn is_available(&self) -> bool {
        self.status == ListingStatus::Available
    }
}

// ---------------------------------------------------------------------------
// ChatMessage
// ---------------------------------------------------------------------------

/// A single chat message attached to a listing.  Immutable once created;
/// ordering is insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Unique message identifier.
    pub id: MessageId,
    pub sender_user_id: UserId,
    pub sender_name: String,
    pub sender_role: UserRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}
