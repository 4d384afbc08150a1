/**
 * Authentication Handler Types
 *
 * Query parameters accepted by the signup and login endpoints. Missing
 * parameters deserialize as empty strings so that they are reported by
 * field validation rather than rejected by the extractor.
 */

use serde::Deserialize;

/// `POST /signup?handle=..&email=..&pass=..`
#[derive(Deserialize, Default)]
pub struct SignupParams {
    #[serde(default)]
    pub handle: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub pass: String,
}

/// `POST /login?email=..&pass=..`
#[derive(Deserialize, Default)]
pub struct LoginParams {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub pass: String,
}

// Passwords stay out of Debug output.
impl std::fmt::Debug for SignupParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupParams")
            .field("handle", &self.handle)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for LoginParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginParams")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_params_default_to_empty() {
        let params: SignupParams = serde_json::from_str("{}").unwrap();
        assert!(params.handle.is_empty());
        assert!(params.email.is_empty());
        assert!(params.pass.is_empty());
    }

    #[test]
    fn test_debug_omits_password() {
        let params = LoginParams {
            email: "a@x.com".to_string(),
            pass: "secret".to_string(),
        };
        let debug = format!("{params:?}");
        assert!(debug.contains("a@x.com"));
        assert!(!debug.contains("secret"));
    }
}
