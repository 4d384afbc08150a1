//! Shared Module
//!
//! Types that are meaningful on both sides of the HTTP boundary: the JSON
//! payloads returned by the auth endpoints, the field limits the server
//! enforces, and the validation error raised when a field breaks them.

/// Auth payload types
pub mod account;

/// Shared error types
pub mod error;

pub use account::{
    normalize_email, normalize_handle, require_password, AuthResponse, ErrorBody, SessionResponse,
    UserInfo, MAX_EMAIL_CHARS, MAX_HANDLE_CHARS,
};
pub use error::{Field, ValidationError};
