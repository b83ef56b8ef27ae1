//! Password hashing and verification.
//!
//! Credentials are stored as argon2 PHC strings. The observed system kept
//! plaintext passwords; hashing here changes the stored form only, not the
//! authenticate contract.

use crate::error::{ProfNetError, Result};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Hash a password with argon2, producing a self-describing PHC string.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ProfNetError::internal(format!("password hashing failed: {e}")))?;
    Ok(password_hash.to_string())
}

/// Verify a password against a stored PHC string.
///
/// A malformed stored hash counts as a failed verification rather than an
/// error; the caller must not learn which part of the check failed.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrip() {
        let hash = hash_password("pw1").unwrap();
        assert_ne!(hash, "pw1");
        assert!(verify_password("pw1", &hash));
        assert!(!verify_password("pw2", &hash));
    }

    #[test]
    fn malformed_hash_fails_verification() {
        assert!(!verify_password("pw1", "not-a-phc-string"));
    }
}
