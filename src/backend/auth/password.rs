/**
 * Password Hashing
 *
 * bcrypt is deliberately slow, so both hashing and verification run on the
 * blocking thread pool instead of a runtime worker.
 */

use crate::backend::error::BackendError;

/// bcrypt cost factor used for new hashes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashCost(pub u32);

impl Default for HashCost {
    fn default() -> Self {
        Self(bcrypt::DEFAULT_COST)
    }
}

/// Hash `password` with a fresh salt
pub async fn hash_password(password: &str, cost: HashCost) -> Result<String, BackendError> {
    let password = password.to_owned();

    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost.0)).await??;
    Ok(hashed)
}

/// Check `password` against a stored bcrypt hash
pub async fn verify_password(password: &str, password_hash: &str) -> Result<bool, BackendError> {
    let password = password.to_owned();
    let password_hash = password_hash.to_owned();

    let valid =
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash)).await??;
    Ok(valid)
}

/// Verification for an email with no account
///
/// Does one bcrypt derivation at `cost` and always answers `false`, so an
/// unknown email takes about as long as a wrong password.
pub async fn verify_absent(password: &str, cost: HashCost) -> Result<bool, BackendError> {
    hash_password(password, cost).await?;
    Ok(false)
}
