//! Middleware Module
//!
//! - **`session`** - resolves the `sid` cookie into a [`Session`](crate::backend::auth::Session)
//!   for every request and writes the cookie back when it changes
//!
//! # Example
//!
//! ```rust,ignore
//! let router = router.layer(axum::middleware::from_fn_with_state(
//!     app_state.clone(),
//!     session_middleware,
//! ));
//! ```

pub mod session;

pub use session::{session_id_from_headers, session_middleware, SessionCookie, SESSION_COOKIE};
