/**
 * Router Configuration
 *
 * Layers, outermost first:
 * 1. `TraceLayer` - one span per request
 * 2. Session middleware - resolves the `sid` cookie
 *
 * Unmatched paths fall through to `ServeDir`, which answers `/` with
 * `index.html` and unknown files with 404.
 */

use std::path::Path;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::backend::middleware::session::session_middleware;
use crate::backend::routes::api_routes::configure_auth_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, static_dir: &Path) -> Router<()> {
    let router = configure_auth_routes(Router::new());

    let router = router.fallback_service(ServeDir::new(static_dir));

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn_with_state(
                    app_state.clone(),
                    session_middleware,
                )),
        )
        .with_state(app_state)
}
