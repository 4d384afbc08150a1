/**
 * Login Handler
 *
 * `POST /login?email=..&pass=..`
 *
 * An unknown email and a wrong password produce the same response and the
 * same amount of bcrypt work, so neither the body nor the timing tells
 * which emails are registered.
 */

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};

use crate::backend::auth::handlers::types::LoginParams;
use crate::backend::auth::password::{verify_absent, verify_password, HashCost};
use crate::backend::auth::sessions::Session;
use crate::backend::auth::users::AccountStore;
use crate::backend::error::{BackendError, ErrorCode};
use crate::shared::AuthResponse;

/// Login handler
///
/// # Errors
///
/// * `403 Forbidden` - unknown email, wrong password, empty input, or a malformed query
/// * `500 Internal Server Error` - storage or verification failure
pub async fn login(
    State(accounts): State<AccountStore>,
    State(cost): State<HashCost>,
    session: Session,
    query: Result<Query<LoginParams>, QueryRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Query(params) = query?;
    let mismatch = || BackendError::Auth(ErrorCode::CredentialsMismatch);
    let email = params.email.trim();

    if email.is_empty() || params.pass.is_empty() {
        tracing::warn!("Login with empty email or password");
        return Err(mismatch());
    }

    tracing::info!("Login request for: {}", email);

    let verified = match accounts.get_user_by_email(email).await? {
        Some(user) => verify_password(&params.pass, &user.password_hash)
            .await?
            .then_some(user),
        None => {
            tracing::warn!("User not found: {}", email);
            verify_absent(&params.pass, cost).await?;
            None
        }
    };

    let Some(user) = verified else {
        tracing::warn!("Login failed for: {}", email);
        return Err(mismatch());
    };

    let session_id = session.establish(user.info()).await;

    tracing::info!("User logged in successfully: {} ({})", user.handle, user.email);

    Ok(Json(AuthResponse {
        session_id: session_id.to_string(),
        handle: user.handle,
        email: user.email,
    }))
}
