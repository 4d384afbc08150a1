/**
 * Session Middleware
 *
 * For every request:
 * 1. Read the `sid` cookie and look the identifier up in the session store
 * 2. If it is missing, unknown or expired, start a new anonymous session
 * 3. Put a `Session` handle into the request extensions
 * 4. After the handler ran, send `Set-Cookie` if the identifier is new,
 *    was replaced by signup/login, or was destroyed by logout
 */

use std::time::Duration;

use axum::{
    extract::{Request, State},
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue,
    },
    middleware::Next,
    response::Response,
};
use cookie::{Cookie, SameSite};

use crate::backend::auth::sessions::{CookieUpdate, Session, SessionId};
use crate::backend::server::state::AppState;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "sid";

/// Attributes of the session cookie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionCookie {
    /// Only send over HTTPS; set in production
    pub secure: bool,
    pub max_age: Duration,
}

impl SessionCookie {
    /// Cookie carrying `id`
    pub fn build(&self, id: SessionId) -> Cookie<'static> {
        let max_age = cookie::time::Duration::try_from(self.max_age)
            .unwrap_or(cookie::time::Duration::MAX);

        Cookie::build((SESSION_COOKIE, id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(max_age)
            .build()
    }

    /// Cookie that makes the client forget its identifier
    pub fn removal(&self) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE, ""))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(cookie::time::Duration::ZERO)
            .build()
    }
}

/// The session identifier presented in the request's `Cookie` headers
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| Cookie::split_parse(value))
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .and_then(|cookie| cookie.value().parse().ok())
}

/// Session middleware
///
/// Install with `axum::middleware::from_fn_with_state`.
pub async fn session_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let sessions = app_state.sessions.clone();

    let live = match session_id_from_headers(request.headers()) {
        Some(id) => sessions.get(id).await.map(|_| id),
        None => None,
    };

    let session = match live {
        Some(id) => Session::new(sessions, id, false),
        None => {
            let id = sessions.create().await;
            tracing::trace!("Assigned new session {}", id);
            Session::new(sessions, id, true)
        }
    };

    request.extensions_mut().insert(session.clone());

    let mut response = next.run(request).await;

    let cookie = match session.cookie_update().await {
        Some(CookieUpdate::Set(id)) => app_state.cookie.build(id),
        Some(CookieUpdate::Clear) => app_state.cookie.removal(),
        None => return response,
    };

    match HeaderValue::from_str(&cookie.to_string()) {
        Ok(value) => {
            response.headers_mut().append(SET_COOKIE, value);
        }
        Err(e) => {
            tracing::error!("Failed to encode session cookie: {:?}", e);
        }
    }

    response
}
