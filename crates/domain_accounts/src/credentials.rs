//! Credential hashing and verification
//!
//! Secrets are hashed with Argon2id under the crate's default parameters.
//! Verification never reports *why* it failed: a malformed stored hash and a
//! wrong secret both come back as a plain mismatch.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

/// Error hashing a secret
#[derive(Debug, Error)]
#[error("failed to hash secret: {0}")]
pub struct HashError(String);

/// Hashes a secret with Argon2id and a fresh random salt
///
/// This is deliberately memory- and CPU-hard; call it from a blocking
/// context, not directly on the async executor.
pub fn hash_secret(secret: &str) -> Result<String, HashError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(secret.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| HashError(err.to_string()))
}

/// Verifies a secret against a stored hash
///
/// Returns `false` for a mismatch *and* for an unparseable stored hash, so
/// callers cannot distinguish the two.
pub fn verify_secret(secret: &str, stored_hash: &str) -> bool {
    PasswordHash::new(stored_hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(secret.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}
