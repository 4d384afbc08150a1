/**
 * Logout Handler
 *
 * `POST /logout` destroys the session server-side and clears the cookie.
 * It succeeds whether or not anyone was logged in.
 */

use axum::http::StatusCode;

use crate::backend::auth::sessions::Session;

pub async fn logout(session: Session) -> StatusCode {
    if let Some(user) = session.user().await {
        tracing::info!("{} logout", user.handle);
    }

    session.destroy().await;
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::handlers::current::get_session;
    use crate::backend::auth::handlers::test_support::fixture;
    use crate::backend::auth::sessions::CookieUpdate;
    use crate::backend::error::ErrorCode;
    use crate::shared::UserInfo;

    #[tokio::test]
    async fn test_logout_clears_session() {
        let fx = fixture().await;
        fx.session
            .establish(UserInfo {
                handle: "alice".to_string(),
                email: "a@x.com".to_string(),
            })
            .await;

        assert_eq!(logout(fx.session.clone()).await, StatusCode::OK);

        let err = get_session(fx.session.clone()).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::NoSession);
        assert_eq!(fx.session.cookie_update().await, Some(CookieUpdate::Clear));
        assert!(fx.sessions.is_empty().await);
    }

    #[tokio::test]
    async fn test_logout_without_login() {
        let fx = fixture().await;
        assert_eq!(logout(fx.session.clone()).await, StatusCode::OK);
        // twice is still fine
        assert_eq!(logout(fx.session.clone()).await, StatusCode::OK);
    }
}
