/**
 * Session Management
 *
 * Server-side sessions keyed by an opaque identifier that the client holds
 * in the `sid` cookie.
 *
 * - `SessionStore` maps identifiers to records and expires them after a
 *   fixed time-to-live measured from creation. Anonymous records get at
 *   most `ANONYMOUS_TTL`, so cookie-less clients cannot pile up records
 *   for a whole session lifetime.
 * - `Session` is the per-request handle the session middleware puts in the
 *   request extensions. Handlers use it to read the current user, to
 *   establish a logged-in session, or to destroy it.
 *
 * Every visitor gets an identifier, logged in or not. A record only carries
 * user data after signup or login, and that is what the session check looks
 * at.
 */

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tokio::sync::RwLock;
use tokio::time::Instant;
use uuid::Uuid;

use crate::backend::error::{BackendError, ErrorCode};
use crate::shared::UserInfo;

/// Upper bound on any session lifetime
pub const MAX_SESSION_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Lifetime of a record that carries no user
pub const ANONYMOUS_TTL: Duration = Duration::from_secs(30 * 60);

/// Opaque session identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_simple())
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// What the store keeps for one identifier
#[derive(Debug, Clone)]
pub struct SessionRecord {
    /// `None` until signup or login
    pub user: Option<UserInfo>,
    pub expires_at: Instant,
}

impl SessionRecord {
    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// In-memory session store shared by every request
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionRecord>>>,
    ttl: Duration,
    anonymous_ttl: Duration,
}

impl SessionStore {
    /// `ttl` is capped at [`MAX_SESSION_TTL`]
    pub fn new(ttl: Duration) -> Self {
        let ttl = ttl.min(MAX_SESSION_TTL);

        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
            anonymous_ttl: ttl.min(ANONYMOUS_TTL),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    async fn insert(&self, user: Option<UserInfo>) -> SessionId {
        let id = SessionId::new();
        let ttl = if user.is_some() {
            self.ttl
        } else {
            self.anonymous_ttl
        };
        let record = SessionRecord {
            user,
            expires_at: Instant::now() + ttl,
        };

        self.sessions.write().await.insert(id, record);
        id
    }

    /// Start an anonymous session
    pub async fn create(&self) -> SessionId {
        self.insert(None).await
    }

    /// The live record for `id`, if any
    pub async fn get(&self, id: SessionId) -> Option<SessionRecord> {
        let now = Instant::now();

        self.sessions
            .read()
            .await
            .get(&id)
            .filter(|record| record.is_live(now))
            .cloned()
    }

    /// Issue a new identifier carrying `user`, dropping `previous`
    pub async fn establish(&self, previous: Option<SessionId>, user: UserInfo) -> SessionId {
        if let Some(previous) = previous {
            self.destroy(previous).await;
        }

        let handle = user.handle.clone();
        let id = self.insert(Some(user)).await;
        tracing::debug!("Session established for {}", handle);
        id
    }

    /// Returns whether a record was removed
    pub async fn destroy(&self, id: SessionId) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    /// Drop every expired record, returning how many were removed
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, record| record.is_live(now));
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

/// What the middleware must tell the client after the handler ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookieUpdate {
    /// Send this identifier
    Set(SessionId),
    /// Expire the cookie
    Clear,
}

#[derive(Debug)]
struct Slot {
    id: Option<SessionId>,
    update: Option<CookieUpdate>,
}

/// Per-request session handle
///
/// Inserted into the request extensions by the session middleware and
/// extracted by handlers:
///
/// ```rust,ignore
/// async fn handler(session: Session) -> String {
///     match session.user().await {
///         Some(user) => user.handle,
///         None => "anonymous".to_string(),
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    store: SessionStore,
    slot: Arc<RwLock<Slot>>,
}

impl Session {
    /// `fresh` marks an identifier the client has not seen yet
    pub fn new(store: SessionStore, id: SessionId, fresh: bool) -> Self {
        let slot = Slot {
            id: Some(id),
            update: fresh.then_some(CookieUpdate::Set(id)),
        };

        Self {
            store,
            slot: Arc::new(RwLock::new(slot)),
        }
    }

    /// `None` once the session has been destroyed
    pub async fn id(&self) -> Option<SessionId> {
        self.slot.read().await.id
    }

    /// The logged-in user, if this session carries one
    pub async fn user(&self) -> Option<UserInfo> {
        let id = self.id().await?;
        self.store.get(id).await.and_then(|record| record.user)
    }

    /// Replace the current session with one carrying `user`
    pub async fn establish(&self, user: UserInfo) -> SessionId {
        let mut slot = self.slot.write().await;

        let id = self.store.establish(slot.id, user).await;
        slot.id = Some(id);
        slot.update = Some(CookieUpdate::Set(id));
        id
    }

    /// Remove the session server-side and have the cookie cleared
    pub async fn destroy(&self) {
        let mut slot = self.slot.write().await;

        if let Some(id) = slot.id.take() {
            self.store.destroy(id).await;
        }
        slot.update = Some(CookieUpdate::Clear);
    }

    pub async fn cookie_update(&self) -> Option<CookieUpdate> {
        self.slot.read().await.update
    }
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<Session>().cloned().ok_or_else(|| {
            tracing::error!("Session not found in request extensions; is the session layer installed?");
            BackendError::Auth(ErrorCode::Internal)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> UserInfo {
        UserInfo {
            handle: "alice".to_string(),
            email: "a@x.com".to_string(),
        }
    }

    #[test]
    fn test_session_id_round_trips_through_text() {
        let id = SessionId::new();
        let parsed: SessionId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!("not-a-session".parse::<SessionId>().is_err());
    }

    #[tokio::test]
    async fn test_anonymous_session_has_no_user() {
        let store = SessionStore::new(Duration::from_secs(60));
        let id = store.create().await;

        let record = store.get(id).await.unwrap();
        assert!(record.user.is_none());
    }

    #[tokio::test]
    async fn test_establish_replaces_previous() {
        let store = SessionStore::new(Duration::from_secs(60));
        let anonymous = store.create().await;

        let id = store.establish(Some(anonymous), alice()).await;
        assert_ne!(id, anonymous);
        assert!(store.get(anonymous).await.is_none());
        assert_eq!(store.get(id).await.unwrap().user, Some(alice()));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_destroy() {
        let store = SessionStore::new(Duration::from_secs(60));
        let id = store.establish(None, alice()).await;

        assert!(store.destroy(id).await);
        assert!(!store.destroy(id).await);
        assert!(store.get(id).await.is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sessions_expire_after_ttl() {
        let store = SessionStore::new(Duration::from_secs(60));
        let id = store.establish(None, alice()).await;

        tokio::time::advance(Duration::from_secs(59)).await;
        assert!(store.get(id).await.is_some());

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(store.get(id).await.is_none());

        assert_eq!(store.purge_expired().await, 1);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_handle_establish_and_destroy() {
        let store = SessionStore::new(Duration::from_secs(60));
        let anonymous = store.create().await;
        let session = Session::new(store.clone(), anonymous, false);

        assert_eq!(session.cookie_update().await, None);
        assert!(session.user().await.is_none());

        let id = session.establish(alice()).await;
        assert_eq!(session.id().await, Some(id));
        assert_eq!(session.user().await, Some(alice()));
        assert_eq!(session.cookie_update().await, Some(CookieUpdate::Set(id)));

        session.destroy().await;
        assert_eq!(session.id().await, None);
        assert!(session.user().await.is_none());
        assert_eq!(session.cookie_update().await, Some(CookieUpdate::Clear));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_fresh_handle_sets_cookie() {
        let store = SessionStore::new(Duration::from_secs(60));
        let id = store.create().await;
        let session = Session::new(store, id, true);

        assert_eq!(session.cookie_update().await, Some(CookieUpdate::Set(id)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_anonymous_sessions_expire_early() {
        let store = SessionStore::new(Duration::from_secs(24 * 60 * 60));
        let anonymous = store.create().await;
        let logged_in = store.establish(None, alice()).await;

        tokio::time::advance(ANONYMOUS_TTL + Duration::from_secs(1)).await;
        assert!(store.get(anonymous).await.is_none());
        assert!(store.get(logged_in).await.is_some());

        assert_eq!(store.purge_expired().await, 1);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_huge_ttl_is_capped() {
        let store = SessionStore::new(Duration::from_secs(u64::MAX));
        assert_eq!(store.ttl(), MAX_SESSION_TTL);

        let id = store.create().await;
        assert!(store.get(id).await.is_some());
        let id = store.establish(Some(id), alice()).await;
        assert!(store.get(id).await.is_some());
    }
}
