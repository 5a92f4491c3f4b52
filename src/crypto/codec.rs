use aes::cipher::{block_padding::NoPadding, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::Aes256;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand_core::{OsRng, RngCore};

use super::CryptoError;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

pub const KEY_SIZE: usize = 32;
const BLOCK_SIZE: usize = 16;
const PAD_BYTE: u8 = b' ';
const PAD_CHAR: char = ' ';

/// AES-256-CBC over space-padded plaintext, framed as base64(IV || ct).
///
/// The ciphertext carries no authentication tag: decrypting under the
/// wrong key yields garbage (usually an utf-8 error) rather than a clean
/// rejection. Stored tokens stay compatible with that legacy framing.
pub struct SymmetricCodec {
    key: [u8; KEY_SIZE],
}

impl SymmetricCodec {
    /// Fresh random key, one per process. Never persisted.
    pub fn generate() -> Self {
        let mut key = [0u8; KEY_SIZE];
        let mut rng = OsRng;
        rng.fill_bytes(&mut key);
        Self { key }
    }

    pub fn new(key: [u8; KEY_SIZE]) -> Self {
        Self { key }
    }

    /// Encrypts under a fresh random IV, so equal plaintexts never share a
    /// token. Padding is ASCII spaces up to the block boundary (a full pad
    /// block when the input is already aligned), which means plaintexts
    /// ending in spaces lose those spaces on round-trip. Known limitation.
    pub fn encrypt(&self, plaintext: &str) -> String {
        let mut iv = [0u8; BLOCK_SIZE];
        let mut rng = OsRng;
        rng.fill_bytes(&mut iv);

        let pad = BLOCK_SIZE - plaintext.len() % BLOCK_SIZE;
        let mut padded = Vec::with_capacity(plaintext.len() + pad);
        padded.extend_from_slice(plaintext.as_bytes());
        padded.resize(plaintext.len() + pad, PAD_BYTE);

        let ciphertext = Aes256CbcEnc::new(&self.key.into(), &iv.into())
            .encrypt_padded_vec_mut::<NoPadding>(&padded);

        let mut raw = Vec::with_capacity(BLOCK_SIZE + ciphertext.len());
        raw.extend_from_slice(&iv);
        raw.extend_from_slice(&ciphertext);
        STANDARD.encode(raw)
    }

    /// Splits the leading block off as the IV, decrypts the rest, and
    /// right-trims the space padding.
    pub fn decrypt(&self, token: &str) -> Result<String, CryptoError> {
        let raw = STANDARD.decode(token)?;
        if raw.len() < BLOCK_SIZE || raw.len() % BLOCK_SIZE != 0 {
            return Err(CryptoError::Malformed);
        }
        let (iv, ciphertext) = raw.split_at(BLOCK_SIZE);

        let decryptor = Aes256CbcDec::new_from_slices(&self.key, iv)
            .map_err(|_| CryptoError::Malformed)?;
        let padded = decryptor
            .decrypt_padded_vec_mut::<NoPadding>(ciphertext)
            .map_err(|_| CryptoError::Malformed)?;

        let text = String::from_utf8(padded)?;
        Ok(text.trim_end_matches(PAD_CHAR).to_string())
    }
}
