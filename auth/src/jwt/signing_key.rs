use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;

use super::errors::TokenError;

/// HMAC-SHA256 signing key shared by every token operation.
///
/// The configured secret is never used as-is: its UTF-8 bytes are
/// Base64-encoded (standard alphabet, padded) and the encoded text becomes
/// the key material. Derivation happens once, when the key is built.
#[derive(Clone)]
pub struct SigningKey {
    encoding: EncodingKey,
    decoding: DecodingKey,
    bits: usize,
}

impl SigningKey {
    /// HS256 keys shorter than the hash output are rejected.
    pub const MIN_BITS: usize = 256;

    /// Derive the signing key from the configured secret.
    ///
    /// # Errors
    /// * `WeakKey` - Encoded secret is shorter than 256 bits
    pub fn derive(secret: &str) -> Result<Self, TokenError> {
        let material = STANDARD.encode(secret.as_bytes());
        let bits = material.len() * 8;

        if bits < Self::MIN_BITS {
            return Err(TokenError::WeakKey {
                min_bits: Self::MIN_BITS,
                actual_bits: bits,
            });
        }

        Ok(Self {
            encoding: EncodingKey::from_secret(material.as_bytes()),
            decoding: DecodingKey::from_secret(material.as_bytes()),
            bits,
        })
    }

    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding
    }

    pub fn bits(&self) -> usize {
        self.bits
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("bits", &self.bits)
            .finish_non_exhaustive()
    }
}
