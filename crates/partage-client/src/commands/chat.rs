//! Listing chat: short messages between the donor and the claiming
//! charity, appended to the listing itself.
//!
//! Posting requires a logged-in user with a chosen role but is not
//! restricted to the two claim participants; the projections decide who
//! ever sees a chat box.

use chrono::Utc;
use tracing::info;

use partage_shared::{DomainError, ListingId, MessageId};
use partage_store::ChatMessage;

use crate::commands::require_login;
use crate::error::Result;
use crate::state::AppState;

/// Append a message to a listing's conversation.
pub fn post_chat_message(state: &mut AppState, id: ListingId, text: &str) -> Result<ChatMessage> {
    let actor = require_login(state)?;
    let Some(role) = actor.role else {
        return Err(
            DomainError::Authorization("choose a role before posting messages".into()).into(),
        );
    };

    let text = text.trim();
    if text.is_empty() {
        return Err(DomainError::Validation("message text is required".into()).into());
    }

    let Some(idx) = state.listings.iter().position(|l| l.id == id) else {
        return Err(DomainError::NotFound(format!("listing {id}")).into());
    };

    let message = ChatMessage {
        id: MessageId::new(),
        sender_user_id: actor.id,
        sender_name: actor.name.clone(),
        sender_role: role,
        text: text.to_string(),
        timestamp: Utc::now(),
    };

    let previous = state.listings.clone();
    state.listings[idx].chat.push(message.clone());
    state.commit_listings(previous)?;

    info!(listing_id = %id, message_id = %message.id, "chat message posted");
    Ok(message)
}

#[cfg(test)]
mod tests {
    use partage_shared::UserRole;
    use partage_store::Database;

    use super::*;
    use crate::commands::listings::{create_listing, ListingDraft};
    use crate::commands::{identity, listings};
    use crate::error::ClientError;

    fn temp_state() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open_at(&dir.path().join("test.db")).unwrap();
        let state = AppState::open(db).unwrap();
        (dir, state)
    }

    fn login_as(state: &mut AppState, name: &str, role: UserRole) {
        let contact = format!("{}@example.org", name.to_lowercase());
        identity::login(state, name, &contact, "1234").unwrap();
        identity::choose_role(state, role).unwrap();
    }

    fn published_listing(state: &mut AppState) -> ListingId {
        login_as(state, "Amel", UserRole::Donor);
        let draft = ListingDraft {
            donor_type: "Bakery".into(),
            food_description: "Rye bread".into(),
            quantity: "8 loaves".into(),
            expiry_date: "2026-08-08".into(),
            pickup_window: "19:00-20:00".into(),
            location: "Belleville".into(),
            notes: String::new(),
            image_ref: None,
        };
        create_listing(state, draft).unwrap().id
    }

    #[test]
    fn posting_requires_a_logged_in_user_with_a_role() {
        let (_dir, mut state) = temp_state();
        let id = published_listing(&mut state);

        identity::logout(&mut state).unwrap();
        let err = post_chat_message(&mut state, id, "hello").unwrap_err();
        assert!(matches!(
            err,
            ClientError::Domain(DomainError::Authorization(_))
        ));

        // Logged in again but no role chosen yet.
        identity::login(&mut state, "Amel", "amel@example.org", "1234").unwrap();
        let err = post_chat_message(&mut state, id, "hello").unwrap_err();
        assert!(matches!(
            err,
            ClientError::Domain(DomainError::Authorization(_))
        ));
    }

    #[test]
    fn empty_text_is_rejected() {
        let (_dir, mut state) = temp_state();
        let id = published_listing(&mut state);

        let err = post_chat_message(&mut state, id, "  \t ").unwrap_err();
        assert!(matches!(
            err,
            ClientError::Domain(DomainError::Validation(_))
        ));
        assert!(state.find_listing(id).unwrap().chat.is_empty());
    }

    #[test]
    fn unknown_listing_is_not_found() {
        let (_dir, mut state) = temp_state();
        published_listing(&mut state);

        let err = post_chat_message(&mut state, ListingId::new(), "hello").unwrap_err();
        assert!(matches!(err, ClientError::Domain(DomainError::NotFound(_))));
    }

    #[test]
    fn messages_append_in_order_with_sender_details() {
        let (_dir, mut state) = temp_state();
        let id = published_listing(&mut state);

        login_as(&mut state, "Refuge", UserRole::Charity);
        listings::claim_listing(&mut state, id).unwrap();
        post_chat_message(&mut state, id, "We can come at 19:15").unwrap();

        login_as(&mut state, "Amel", UserRole::Donor);
        post_chat_message(&mut state, id, "Perfect, ring twice").unwrap();

        let chat = &state.find_listing(id).unwrap().chat;
        assert_eq!(chat.len(), 2);
        assert_eq!(chat[0].sender_role, UserRole::Charity);
        assert_eq!(chat[0].text, "We can come at 19:15");
        assert_eq!(chat[1].sender_role, UserRole::Donor);
        assert_eq!(chat[1].sender_name, "Amel");
    }
}
