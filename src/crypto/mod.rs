use thiserror::Error;

use crate::config::EnvConfig;

pub mod codec;
pub mod password;
pub mod signing;

pub use codec::SymmetricCodec;
pub use password::CredentialHasher;
pub use signing::MessageAuthenticator;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("invalid base64 token: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("ciphertext is truncated or misaligned")]
    Malformed,
    #[error("decrypted bytes are not valid utf-8")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("password hashing failed: {0}")]
    Hash(argon2::password_hash::Error),
}

/// The three cryptographic primitives the handlers work with, keyed once
/// at process start. The symmetric key lives only in this struct: after a
/// restart every stored ciphertext is permanently undecryptable.
pub struct CryptoContext {
    pub codec: SymmetricCodec,
    pub hasher: CredentialHasher,
    pub authenticator: MessageAuthenticator,
}

impl CryptoContext {
    pub fn new(config: &EnvConfig) -> Self {
        Self {
            codec: SymmetricCodec::generate(),
            hasher: CredentialHasher::default(),
            authenticator: MessageAuthenticator::new(config.signing_secret.as_bytes()),
        }
    }
}
