//! One-way password hashing.

use common::AppResult;
use domain::Password;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Hash and verify plaintext passwords.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait CredentialHasher: Send + Sync {
    /// Produce the storable hashed form of `plain`
    fn hash(&self, plain: &str) -> AppResult<String>;

    /// Check `plain` against a stored hashed form
    fn verify(&self, plain: &str, hashed: &str) -> bool;
}

/// Argon2id hasher backed by the domain `Password` value object.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2Hasher;

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plain: &str) -> AppResult<String> {
        Ok(Password::new(plain)?.into_string())
    }

    fn verify(&self, plain: &str, hashed: &str) -> bool {
        Password::from_hash(hashed).verify(plain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hasher = Argon2Hasher;
        let hashed = hasher.hash("new_password").unwrap();

        assert_ne!(hashed, "new_password");
        assert!(hasher.verify("new_password", &hashed));
        assert!(!hasher.verify("old_password", &hashed));
    }
}
