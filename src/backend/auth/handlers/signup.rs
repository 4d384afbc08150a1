/**
 * Signup Handler
 *
 * `POST /signup?handle=..&email=..&pass=..`
 *
 * # Registration Process
 *
 * 1. Trim handle and email, reject empty or over-long fields
 * 2. Hash the password with bcrypt
 * 3. Insert the user; the `UNIQUE` constraints decide conflicts
 * 4. Establish a new session and return it
 *
 * Validation happens before any database access.
 */

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};

use crate::backend::auth::handlers::types::SignupParams;
use crate::backend::auth::password::{hash_password, HashCost};
use crate::backend::auth::sessions::Session;
use crate::backend::auth::users::AccountStore;
use crate::backend::error::BackendError;
use crate::shared::{normalize_email, normalize_handle, require_password, AuthResponse};

/// Sign up handler
///
/// # Errors
///
/// * `403 Forbidden` - malformed query, empty or over-long field, handle or email already registered
/// * `500 Internal Server Error` - hashing or storage failure
///
/// # Example Response
///
/// ```json
/// { "sessionID": "3f0c...", "handle": "alice", "email": "a@x.com" }
/// ```
pub async fn signup(
    State(accounts): State<AccountStore>,
    State(cost): State<HashCost>,
    session: Session,
    query: Result<Query<SignupParams>, QueryRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Query(params) = query?;
    let handle = normalize_handle(&params.handle)?;
    let email = normalize_email(&params.email)?;
    let password = require_password(&params.pass)?;

    tracing::info!("Signup request for handle: {}, email: {}", handle, email);

    let password_hash = hash_password(password, cost).await?;

    let user = accounts
        .create_user(&handle, &email, &password_hash)
        .await
        .inspect_err(|e| {
            if !e.is_masked() {
                tracing::warn!("Signup rejected for {} ({}): {}", handle, email, e);
            }
        })?;

    let session_id = session.establish(user.info()).await;

    tracing::info!("User created successfully: {} ({})", user.handle, user.email);

    Ok(Json(AuthResponse {
        session_id: session_id.to_string(),
        handle: user.handle,
        email: user.email,
    }))
}
