//! Backend Module
//!
//! All server-side code: an Axum HTTP server exposing the signup / login /
//! session / logout endpoints and serving the board page from `static/`.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Router assembly
//! - **`auth`** - Account store, session store, auth handlers
//! - **`middleware`** - Session cookie resolution
//! - **`error`** - Backend error type and its HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── server/         - Config, state, init
//! ├── routes/         - Route configuration
//! ├── auth/           - Users, sessions, handlers
//! ├── middleware/     - Session middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the account store (a SQLite pool), the session store
//! (`Arc<RwLock<HashMap<..>>>`) and the cookie settings. It is cloned into
//! every handler through Axum's `State` extractor.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Accounts, sessions and auth handlers
pub mod auth;

/// Middleware for request processing
pub mod middleware;

pub use error::BackendError;
pub use server::{create_app, AppState};
