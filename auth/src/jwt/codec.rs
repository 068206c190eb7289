use std::sync::Arc;

use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::TokenClaims;
use super::errors::TokenError;
use super::signing_key::SigningKey;
use crate::clock::Clock;
use crate::clock::SystemClock;

/// Issues and validates signed, time-bound bearer tokens.
///
/// Tokens are compact HS256 JWS strings (`header.payload.signature`).
/// The signing key is derived once in [`TokenCodec::new`] and is read-only
/// afterwards, so a codec can be shared freely behind an `Arc`.
pub struct TokenCodec {
    key: SigningKey,
    clock: Arc<dyn Clock>,
    validation: Validation,
}

impl TokenCodec {
    const ALGORITHM: Algorithm = Algorithm::HS256;

    /// Create a codec from the configured secret.
    ///
    /// # Errors
    /// * `WeakKey` - Derived signing key is shorter than 256 bits
    pub fn new(secret: &str) -> Result<Self, TokenError> {
        let key = SigningKey::derive(secret)?;
        tracing::info!(key_bits = key.bits(), "Token signing key initialized");

        let mut validation = Validation::new(Self::ALGORITHM);
        // Expiry is checked against our own clock, without leeway
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Ok(Self {
            key,
            clock: Arc::new(SystemClock),
            validation,
        })
    }

    /// Replace the time source used for issuance and expiry checks.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Issue a token for `subject` carrying `roles`, valid for one hour.
    ///
    /// # Errors
    /// * `EncodingFailed` - Claims could not be signed or serialized
    pub fn issue(&self, subject: &str, roles: &[String]) -> Result<String, TokenError> {
        let claims = TokenClaims::issued_at(subject, roles, self.clock.now());

        let token = encode(
            &Header::new(Self::ALGORITHM),
            &claims,
            self.key.encoding_key(),
        )
        .map_err(|e| TokenError::EncodingFailed(e.to_string()))?;

        tracing::debug!(subject = %subject, expires_at = claims.exp, "Token issued");
        Ok(token)
    }

    /// Parse the token and verify its signature. Expiry is not checked.
    ///
    /// # Errors
    /// * `Malformed` - Token structure, encoding or payload cannot be parsed
    /// * `SignatureInvalid` - Signature does not verify with the signing key
    pub fn decode_claims(&self, token: &str) -> Result<TokenClaims, TokenError> {
        decode::<TokenClaims>(token, self.key.decoding_key(), &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
                _ => TokenError::Malformed(e.to_string()),
            })
    }

    /// Extract the subject of a correctly signed token.
    ///
    /// # Errors
    /// * `Malformed` - Token cannot be parsed
    /// * `SignatureInvalid` - Signature does not verify
    pub fn decode_subject(&self, token: &str) -> Result<String, TokenError> {
        self.decode_claims(token).map(|claims| claims.sub)
    }

    /// Parse, verify and check the expiry of the token.
    ///
    /// # Errors
    /// * `Malformed` - Token cannot be parsed
    /// * `SignatureInvalid` - Signature does not verify
    /// * `Expired` - Expiry lies before the current instant
    pub fn validate(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let claims = self.decode_claims(token)?;

        if claims.is_expired(self.clock.now()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// Whether the token is currently acceptable. Never fails: any parse,
    /// signature or expiry problem yields `false`.
    pub fn is_valid(&self, token: &str) -> bool {
        match self.validate(token) {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(error = %e, "Token rejected");
                false
            }
        }
    }
}
