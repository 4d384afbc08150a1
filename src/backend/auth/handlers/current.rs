/**
 * Session Check Handler
 *
 * `GET /session` returns the user attached to the caller's session.
 *
 * The session middleware hands an identifier to every visitor, so having
 * one says nothing about being logged in. This handler answers from the
 * user data stored in the session record instead.
 */

use axum::response::Json;

use crate::backend::auth::sessions::Session;
use crate::backend::error::{BackendError, ErrorCode};
use crate::shared::SessionResponse;

/// Get current session handler
///
/// # Errors
///
/// * `403 Forbidden` - the session carries no user
///
/// # Example Response
///
/// ```json
/// { "user": { "handle": "alice", "email": "a@x.com" } }
/// ```
pub async fn get_session(session: Session) -> Result<Json<SessionResponse>, BackendError> {
    let user = session.user().await.ok_or_else(|| {
        tracing::debug!("Session check without a logged-in user");
        BackendError::Auth(ErrorCode::NoSession)
    })?;

    Ok(Json(SessionResponse { user }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::handlers::test_support::fixture;
    use crate::shared::UserInfo;

    #[tokio::test]
    async fn test_anonymous_session_is_rejected() {
        let fx = fixture().await;

        let err = get_session(fx.session.clone()).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::NoSession);
    }

    #[tokio::test]
    async fn test_established_session_returns_user() {
        let fx = fixture().await;
        let alice = UserInfo {
            handle: "alice".to_string(),
            email: "a@x.com".to_string(),
        };
        fx.session.establish(alice.clone()).await;

        let response = get_session(fx.session.clone()).await.unwrap();
        assert_eq!(response.user, alice);
    }
}
