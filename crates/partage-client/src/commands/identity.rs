//! Login, role selection and logout.
//!
//! There is no password hashing and no account recovery: identity is the
//! exact (name, contact, credential) tuple, matched verbatim against the
//! local registry.  This is a shared-secret convenience, not a security
//! boundary.

use tracing::info;

use partage_shared::constants::MIN_CREDENTIAL_LEN;
use partage_shared::{DomainError, UserId, UserRole};
use partage_store::User;

use crate::error::Result;
use crate::state::AppState;

/// Log in with a (name, contact, credential) tuple.
///
/// An exact match returns the existing registry record; any mismatch --
/// including a typo in the credential -- registers a brand-new user with
/// no role.  Either way the session holds a role-less copy until
/// [`choose_role`] is called, so a returning user re-picks their role
/// each login.
pub fn login(state: &mut AppState, name: &str, contact: &str, credential: &str) -> Result<User> {
    let name = name.trim();
    let contact = contact.trim();
    let credential = credential.trim();

    if name.is_empty() {
        return Err(DomainError::Validation("name is required".into()).into());
    }
    if credential.len() < MIN_CREDENTIAL_LEN {
        return Err(DomainError::Validation(format!(
            "credential must be at least {MIN_CREDENTIAL_LEN} characters"
        ))
        .into());
    }

    let existing = state
        .users
        .iter()
        .find(|u| u.name == name && u.contact == contact && u.credential == credential)
        .cloned();

    let user = match existing {
        Some(user) => user,
        None => {
            let user = User {
                id: UserId::new(),
                name: name.to_string(),
                contact: contact.to_string(),
                credential: credential.to_string(),
                role: None,
            };
            let previous = state.users.clone();
            state.users.push(user.clone());
            state.commit_users(previous)?;
            info!(user_id = %user.id, "registered new user");
            user
        }
    };

    let previous = state.current_user.take();
    state.current_user = Some(User {
        role: None,
        ..user.clone()
    });
    state.commit_session(previous)?;

    info!(user_id = %user.id, name = %user.name, "logged in");
    Ok(user)
}

/// Assign the session user's role and record it on the registry entry.
///
/// Repeated calls overwrite the previous choice; nothing pins a role
/// once picked.
pub fn choose_role(state: &mut AppState, role: UserRole) -> Result<User> {
    let Some(current) = state.current_user.clone() else {
        return Err(DomainError::Authorization("no user is logged in".into()).into());
    };

    let Some(idx) = state.users.iter().position(|u| u.id == current.id) else {
        // The session should always reference a registry entry; this
        // guards against a hand-edited or partially cleared store.
        return Err(DomainError::NotFound(format!("user {}", current.id)).into());
    };

    let previous_users = state.users.clone();
    state.users[idx].role = Some(role);
    state.commit_users(previous_users)?;

    let updated = state.users[idx].clone();
    let previous_session = state.current_user.take();
    state.current_user = Some(updated.clone());
    state.commit_session(previous_session)?;

    info!(user_id = %updated.id, role = %role, "role selected");
    Ok(updated)
}

/// Clear the current session.
pub fn logout(state: &mut AppState) -> Result<()> {
    let previous = state.current_user.take();
    state.commit_session(previous)?;
    info!("logged out");
    Ok(())
}
