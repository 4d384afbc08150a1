//! Backend Error Module
//!
//! Error types for the HTTP handlers and their conversion into responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - `ErrorCode` table and `BackendError`
//! └── conversion.rs - `IntoResponse` for `BackendError`
//! ```
//!
//! # Response Format
//!
//! Every error renders as JSON with a single field:
//!
//! ```json
//! { "error": "email is already registered" }
//! ```
//!
//! Client errors (validation, conflicts, bad credentials, missing session)
//! carry their own message. Storage, hashing and task failures are logged
//! and masked as a generic 500.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::{BackendError, ErrorCode};
