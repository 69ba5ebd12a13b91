//! Listing lifecycle commands: create, delete, claim, acknowledge.
//!
//! A listing moves `Available -> Claimed` exactly once; after that only
//! the two acknowledgment flags change.  Deletion is limited to the
//! creating donor, while still available, within a fixed window from
//! creation.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use partage_shared::constants::DELETE_WINDOW_MINUTES;
use partage_shared::{DomainError, ListingId, ListingStatus, UserRole};
use partage_store::Listing;

use crate::commands::require_login;
use crate::error::Result;
use crate::state::AppState;

/// Donor-supplied input for a new listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDraft {
    pub donor_type: String,
    pub food_description: String,
    pub quantity: String,
    pub expiry_date: String,
    pub pickup_window: String,
    pub location: String,
    pub notes: String,
    pub image_ref: Option<String>,
}

/// Encode raw image bytes as a `data:` URL for [`ListingDraft::image_ref`].
///
/// The front end finishes this conversion before dispatching the create
/// command, so the command itself stays synchronous.
pub fn image_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Publish a new listing.  Only a logged-in donor may create one; every
/// required field must be non-empty after trimming.
pub fn create_listing(state: &mut AppState, draft: ListingDraft) -> Result<Listing> {
    let actor = require_login(state)?;
    if actor.role != Some(UserRole::Donor) {
        return Err(DomainError::Authorization("only donors can create listings".into()).into());
    }

    let donor_type = draft.donor_type.trim();
    let food_description = draft.food_description.trim();
    let quantity = draft.quantity.trim();
    let expiry_date = draft.expiry_date.trim();
    let pickup_window = draft.pickup_window.trim();
    let location = draft.location.trim();

    for (field, value) in [
        ("donor type", donor_type),
        ("food description", food_description),
        ("quantity", quantity),
        ("expiry date", expiry_date),
        ("pickup window", pickup_window),
        ("location", location),
    ] {
        if value.is_empty() {
            return Err(DomainError::Validation(format!("{field} is required")).into());
        }
    }

    let listing = Listing {
        id: ListingId::new(),
        donor_name: actor.name.clone(),
        donor_type: donor_type.to_string(),
        donor_user_id: actor.id,
        food_description: food_description.to_string(),
        quantity: quantity.to_string(),
        expiry_date: expiry_date.to_string(),
        pickup_window: pickup_window.to_string(),
        location: location.to_string(),
        notes: draft.notes.trim().to_string(),
        image_ref: draft.image_ref,
        created_by_user_id: actor.id,
        created_at: Utc::now(),
        status: ListingStatus::Available,
        charity_user_id: None,
        charity_name: String::new(),
        claimed_at: None,
        donor_ack: false,
        charity_ack: false,
        chat: Vec::new(),
    };

    let previous = state.listings.clone();
    state.listings.push(listing.clone());
    state.commit_listings(previous)?;

    info!(listing_id = %listing.id, donor = %actor.id, "listing created");
    Ok(listing)
}

/// Remove a listing.  Only the donor who created it may delete, only
/// while it is still available, and only within
/// [`DELETE_WINDOW_MINUTES`] of creation.
pub fn delete_listing(state: &mut AppState, id: ListingId) -> Result<()> {
    let actor = require_login(state)?;

    let Some(idx) = state.listings.iter().position(|l| l.id == id) else {
        return Err(DomainError::NotFound(format!("listing {id}")).into());
    };

    let listing = &state.listings[idx];
    if actor.role != Some(UserRole::Donor) || listing.created_by_user_id != actor.id {
        return Err(DomainError::Authorization(
            "only the donor who created a listing can delete it".into(),
        )
        .into());
    }
    if !listing.is_available() {
        return Err(DomainError::Precondition("listing has already been claimed".into()).into());
    }
    let age = Utc::now().signed_duration_since(listing.created_at);
    if age > Duration::minutes(DELETE_WINDOW_MINUTES) {
        return Err(DomainError::Precondition(format!(
            "deletion window of {DELETE_WINDOW_MINUTES} minutes has expired"
        ))
        .into());
    }

    let previous = state.listings.clone();
    state.listings.remove(idx);
    state.commit_listings(previous)?;

    info!(listing_id = %id, "listing deleted");
    Ok(())
}

/// Claim an available listing for the logged-in charity.
///
/// Strictly first come, first served: once the status flips to claimed,
/// every later attempt fails regardless of actor.
pub fn claim_listing(state: &mut AppState, id: ListingId) -> Result<Listing> {
    let actor = require_login(state)?;
    if actor.role != Some(UserRole::Charity) {
        return Err(DomainError::Authorization("only charities can claim listings".into()).into());
    }

    let Some(idx) = state.listings.iter().position(|l| l.id == id) else {
        return Err(DomainError::NotFound(format!("listing {id}")).into());
    };
    if !state.listings[idx].is_available() {
        return Err(DomainError::Precondition("listing has already been claimed".into()).into());
    }

    let previous = state.listings.clone();
    {
        let listing = &mut state.listings[idx];
        listing.status = ListingStatus::Claimed;
        listing.charity_user_id = Some(actor.id);
        listing.charity_name = actor.name.clone();
        listing.claimed_at = Some(Utc::now());
    }
    state.commit_listings(previous)?;

    info!(listing_id = %id, charity = %actor.id, "listing claimed");
    Ok(state.listings[idx].clone())
}

/// Record one side's confirmation that the handoff happened.
///
/// Re-acknowledging the same side is a no-op success.  Both flags set is
/// the "fully confirmed" condition, derived via
/// [`Listing::is_fully_confirmed`], never stored separately.
pub fn acknowledge_claim(state: &mut AppState, id: ListingId, side: UserRole) -> Result<Listing> {
    let Some(idx) = state.listings.iter().position(|l| l.id == id) else {
        return Err(DomainError::NotFound(format!("listing {id}")).into());
    };
    if state.listings[idx].status != ListingStatus::Claimed {
        return Err(DomainError::Precondition("listing has not been claimed yet".into()).into());
    }

    let previous = state.listings.clone();
    {
        let listing = &mut state.listings[idx];
        match side {
            UserRole::Donor => listing.donor_ack = true,
            UserRole::Charity => listing.charity_ack = true,
        }
    }
    state.commit_listings(previous)?;

    let listing = state.listings[idx].clone();
    if listing.is_fully_confirmed() {
        info!(listing_id = %id, "both sides confirmed the handoff");
    } else {
        info!(listing_id = %id, side = %side, "claim acknowledged");
    }
    Ok(listing)
}
