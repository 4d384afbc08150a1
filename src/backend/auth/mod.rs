//! Authentication Module
//!
//! Signup, login, session check and logout, backed by a SQLite account
//! store and an in-memory session store.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - Account store (users table)
//! ├── sessions.rs     - Session store and per-request session handle
//! ├── password.rs     - bcrypt hashing on the blocking pool
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (salted, configurable cost)
//! - Sessions live server-side; the client only holds an opaque identifier
//! - Unknown email and wrong password return the same 403
//! - Handle and email uniqueness is enforced by the database
//!
//! # Example
//!
//! ```rust,ignore
//! let app = Router::new()
//!     .route("/signup", post(signup))
//!     .route("/login", post(login))
//!     .route("/session", get(get_session))
//!     .route("/logout", post(logout));
//! ```

/// Account store and user model
pub mod users;

/// Session store and handle
pub mod sessions;

/// Password hashing
pub mod password;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_session, login, logout, signup};
pub use password::HashCost;
pub use sessions::{Session, SessionId, SessionStore};
pub use users::{AccountStore, User};
