//! Cookie-backed in-memory sessions.
//!
//! Login establishes a local session keyed by an opaque random token; the
//! token travels in an HttpOnly cookie. There is no external identity
//! provider - the display name comes from the login request or the
//! configured default.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Cookie name carrying the session token.
pub const SESSION_COOKIE: &str = "wavescout_session";

/// Identity record for a signed-in visitor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
    pub signed_in_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("unknown session token")]
    UnknownToken,
}

/// Shared in-memory session registry.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, CurrentUser>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session for `username`. Returns the token and the identity
    /// record it resolves to.
    pub fn login(&self, username: &str) -> (String, CurrentUser) {
        let token = new_token();
        let user = CurrentUser {
            id: format!("u-{}", new_token()),
            username: username.to_string(),
            signed_in_at: Utc::now(),
        };
        self.write().insert(token.clone(), user.clone());
        (token, user)
    }

    /// End the session behind `token`, returning the identity it carried.
    pub fn logout(&self, token: &str) -> Result<CurrentUser, SessionError> {
        self.write().remove(token).ok_or(SessionError::UnknownToken)
    }

    /// Resolve a token to its signed-in user, if the session is live.
    pub fn current_user(&self, token: &str) -> Option<CurrentUser> {
        self.read().get(token).cloned()
    }

    pub fn active_sessions(&self) -> usize {
        self.read().len()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, CurrentUser>> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, CurrentUser>> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

/// Opaque random token, hex-encoded.
fn new_token() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_round_trips_through_the_token() {
        let store = SessionStore::new();
        let (token, user) = store.login("ada");

        let resolved = store.current_user(&token).expect("session should be live");
        assert_eq!(resolved, user);
        assert_eq!(resolved.username, "ada");
        assert_eq!(store.active_sessions(), 1);
    }

    #[test]
    fn logout_ends_the_session() {
        let store = SessionStore::new();
        let (token, user) = store.login("ada");

        let closed = store.logout(&token).expect("logout should succeed");
        assert_eq!(closed, user);
        assert!(store.current_user(&token).is_none());
        assert_eq!(store.active_sessions(), 0);

        // Second logout on the same token is an error, not a panic
        assert!(matches!(
            store.logout(&token),
            Err(SessionError::UnknownToken)
        ));
    }

    #[test]
    fn unknown_token_resolves_to_nobody() {
        let store = SessionStore::new();
        assert!(store.current_user("deadbeef").is_none());
    }

    #[test]
    fn tokens_are_unique_across_logins() {
        let store = SessionStore::new();
        let mut tokens = std::collections::HashSet::new();
        for _ in 0..32 {
            let (token, _) = store.login("ada");
            assert!(tokens.insert(token), "token collision");
        }
        assert_eq!(store.active_sessions(), 32);
    }
}
