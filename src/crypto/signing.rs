use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA-256 over message bytes, keyed by the shared secret from
/// configuration. Signatures are lowercase hex, 64 chars.
pub struct MessageAuthenticator {
    mac: HmacSha256,
}

impl MessageAuthenticator {
    pub fn new(secret: &[u8]) -> Self {
        let mac = HmacSha256::new_from_slice(secret)
            .expect("hmac accepts keys of any length");
        Self { mac }
    }

    /// Deterministic in (message, secret).
    pub fn sign(&self, message: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(message.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Constant-time comparison against the recomputed tag. Malformed hex
    /// counts as a mismatch.
    pub fn verify(&self, message: &str, signature_hex: &str) -> bool {
        let expected = match hex::decode(signature_hex) {
            Ok(bytes) => bytes,
            Err(_) => return false,
        };
        let mut mac = self.mac.clone();
        mac.update(message.as_bytes());
        mac.verify_slice(&expected).is_ok()
    }
}
