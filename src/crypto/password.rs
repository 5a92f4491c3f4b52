use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand_core::OsRng;

use super::CryptoError;

/// Argon2 password hashing with a random salt per call. Two hashes of the
/// same password never compare equal as strings; the salt rides inside the
/// PHC token.
#[derive(Default)]
pub struct CredentialHasher {
    argon2: Argon2<'static>,
}

impl CredentialHasher {
    pub fn hash(&self, password: &str) -> Result<String, CryptoError> {
        let mut rng = OsRng;
        let salt = SaltString::generate(&mut rng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(CryptoError::Hash)?;
        Ok(hash.to_string())
    }

    /// Recomputes against the embedded salt. Mismatches and unparseable
    /// tokens both come back as `false`, never as an error.
    pub fn verify(&self, password: &str, hash_token: &str) -> bool {
        match PasswordHash::new(hash_token) {
            Ok(parsed) => self
                .argon2
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}
