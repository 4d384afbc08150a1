/**
 * Authentication Routes
 *
 * - `POST /signup` - create an account and log in
 * - `POST /login` - log in with email and password
 * - `GET /session` - current user of this session
 * - `POST /logout` - end the session
 *
 * Parameters travel in the query string. Failures are answered with 403
 * and a JSON `{"error": ...}` body.
 */

use axum::routing::{get, post};
use axum::Router;

use crate::backend::auth::{get_session, login, logout, signup};
use crate::backend::server::state::AppState;

/// Add the authentication endpoints to `router`
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/session", get(get_session))
        .route("/logout", post(logout))
}
