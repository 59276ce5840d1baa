//! Identity context: the stored session record and guest fallback.
//!
//! The session is a single JSON object under a fixed key. The core only
//! ever needs the user id out of it for collection scoping; an absent or
//! logged-out session resolves to the guest identity. Access control
//! (redirects and the like) is the presentation layer's business.

use serde::{Deserialize, Serialize};

use crate::adapter::StoreAdapter;
use crate::error::StoreError;
use crate::keys::SESSION_KEY;

/// Stored session record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: String,
    pub fullname: String,
    pub email: String,
    #[serde(default)]
    pub logged_in: bool,
}

impl Session {
    /// The identity used when no one is signed in.
    pub fn guest() -> Self {
        Self {
            user_id: "guest".into(),
            fullname: "Guest User".into(),
            email: "guest@example.com".into(),
            logged_in: false,
        }
    }
}

/// Read the stored session, if any. Malformed records read as absent.
pub fn current_session<S: StoreAdapter>(store: &S) -> Option<Session> {
    let raw = store.get(SESSION_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::warn!(error = %e, "Malformed session record, treating as signed out");
            None
        }
    }
}

/// Whether a signed-in session exists.
pub fn is_authenticated<S: StoreAdapter>(store: &S) -> bool {
    current_session(store).is_some_and(|s| s.logged_in)
}

/// The active identity: the signed-in session, or the guest fallback.
pub fn current_user<S: StoreAdapter>(store: &S) -> Session {
    current_session(store)
        .filter(|s| s.logged_in)
        .unwrap_or_else(Session::guest)
}

/// Persist a signed-in session record.
pub fn sign_in<S: StoreAdapter>(store: &mut S, mut session: Session) -> Result<(), StoreError> {
    session.logged_in = true;
    // A Session serializes to a JSON object infallibly.
    let raw = serde_json::to_string(&session).unwrap_or_default();
    store.set(SESSION_KEY, &raw)?;
    tracing::debug!(user_id = session.user_id, "Signed in");
    Ok(())
}

/// Remove the session record.
pub fn sign_out<S: StoreAdapter>(store: &mut S) -> Result<(), StoreError> {
    store.remove(SESSION_KEY)?;
    tracing::debug!("Signed out");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
