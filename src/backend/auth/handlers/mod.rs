//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Query parameter types
//! ├── signup.rs   - POST /signup
//! ├── login.rs    - POST /login
//! ├── current.rs  - GET /session
//! └── logout.rs   - POST /logout
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: handle, email, password → user created → session established
//! 2. **Login**: email, password → hash verified → session established
//! 3. **Session**: session cookie → user returned, or 403 when nobody is logged in
//! 4. **Logout**: session destroyed, cookie cleared
//!
//! Every handler extracts a [`Session`](crate::backend::auth::sessions::Session),
//! so the session middleware must wrap these routes.

/// Query parameter types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Session check handler
pub mod current;

/// Logout handler
pub mod logout;

pub use types::{LoginParams, SignupParams};

pub use current::get_session;
pub use login::login;
pub use logout::logout;
pub use signup::signup;
