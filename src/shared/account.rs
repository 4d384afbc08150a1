/**
 * Account Payloads
 *
 * JSON shapes returned by the auth endpoints and the field rules applied to
 * the values a client submits. The server is the authority on these rules;
 * they live here so the board page (or any other client) sees the same
 * limits.
 */

use serde::{Deserialize, Serialize};

use crate::shared::error::{Field, ValidationError};

/// Maximum handle length, in characters
pub const MAX_HANDLE_CHARS: usize = 50;

/// Maximum email length, in characters
pub const MAX_EMAIL_CHARS: usize = 200;

/// Public view of a user, safe to hand to clients
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub handle: String,
    pub email: String,
}

/// Returned by signup and login
///
/// ```json
/// { "sessionID": "0b8f...", "handle": "alice", "email": "a@x.com" }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    #[serde(rename = "sessionID")]
    pub session_id: String,
    pub handle: String,
    pub email: String,
}

/// Returned by the session check
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionResponse {
    pub user: UserInfo,
}

/// Body of every error response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

fn bounded(field: Field, raw: &str, max: usize) -> Result<String, ValidationError> {
    let value = raw.trim();

    if value.is_empty() {
        return Err(ValidationError::Empty(field));
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(value.to_string())
}

/// Trim a handle and check it against [`MAX_HANDLE_CHARS`]
pub fn normalize_handle(raw: &str) -> Result<String, ValidationError> {
    bounded(Field::Handle, raw, MAX_HANDLE_CHARS)
}

/// Trim an email and check it against [`MAX_EMAIL_CHARS`]
pub fn normalize_email(raw: &str) -> Result<String, ValidationError> {
    bounded(Field::Email, raw, MAX_EMAIL_CHARS)
}

/// Passwords are taken verbatim; only emptiness is rejected.
pub fn require_password(raw: &str) -> Result<&str, ValidationError> {
    if raw.is_empty() {
        Err(ValidationError::Empty(Field::Password))
    } else {
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize_handle("  alice \t").unwrap(), "alice");
        assert_eq!(normalize_email(" a@x.com\n").unwrap(), "a@x.com");
    }

    #[test]
    fn test_blank_is_empty() {
        assert_eq!(
            normalize_handle("   ").unwrap_err(),
            ValidationError::Empty(Field::Handle)
        );
        assert_eq!(
            normalize_email("").unwrap_err(),
            ValidationError::Empty(Field::Email)
        );
    }

    #[test]
    fn test_limits_count_characters() {
        // 50 two-byte characters is still within the limit
        let handle: String = "é".repeat(MAX_HANDLE_CHARS);
        assert_eq!(normalize_handle(&handle).unwrap(), handle);

        let too_long: String = "a".repeat(MAX_HANDLE_CHARS + 1);
        assert_eq!(
            normalize_handle(&too_long).unwrap_err(),
            ValidationError::TooLong {
                field: Field::Handle,
                max: MAX_HANDLE_CHARS
            }
        );
    }

    #[test]
    fn test_email_limit() {
        let email = format!("{}@x.com", "a".repeat(MAX_EMAIL_CHARS));
        assert!(matches!(
            normalize_email(&email),
            Err(ValidationError::TooLong { field: Field::Email, .. })
        ));
    }

    #[test]
    fn test_password_not_trimmed() {
        assert_eq!(require_password(" pw ").unwrap(), " pw ");
        assert_eq!(
            require_password("").unwrap_err(),
            ValidationError::Empty(Field::Password)
        );
    }

    #[test]
    fn test_auth_response_field_names() {
        let response = AuthResponse {
            session_id: "sid".to_string(),
            handle: "alice".to_string(),
            email: "a@x.com".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "sessionID": "sid", "handle": "alice", "email": "a@x.com" })
        );
    }
}
