//! Shared Error Types
//!
//! Validation failures for the fields accepted by the signup and login
//! endpoints. These are raised before any storage access, so a client can
//! run the same checks locally.
//!
//! # Usage
//!
//! ```rust
//! use boardgame_site::shared::{normalize_handle, Field, ValidationError};
//!
//! let err = normalize_handle("   ").unwrap_err();
//! assert_eq!(err, ValidationError::Empty(Field::Handle));
//! ```
use std::fmt;

use thiserror::Error;

/// A user-supplied field that is subject to validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Handle,
    Email,
    Password,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Handle => "handle",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field validation error
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The field was missing or blank after trimming
    #[error("{0} must not be empty")]
    Empty(Field),

    /// The field is longer than its limit, counted in characters
    #[error("{field} must be at most {max} characters")]
    TooLong {
        /// The offending field
        field: Field,
        /// Maximum number of characters allowed
        max: usize,
    },
}
