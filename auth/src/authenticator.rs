use std::sync::Arc;

use crate::jwt::TokenCodec;
use crate::jwt::TokenError;
use crate::password::PasswordEncoder;
use crate::password::PasswordError;

/// Authentication coordinator combining password verification and token
/// issuance.
pub struct Authenticator {
    password_encoder: Arc<dyn PasswordEncoder>,
    token_codec: Arc<TokenCodec>,
}

/// Authentication operation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `password_encoder` - Hashing scheme for stored passwords
    /// * `token_codec` - Codec holding the process signing key
    pub fn new(password_encoder: Arc<dyn PasswordEncoder>, token_codec: Arc<TokenCodec>) -> Self {
        Self {
            password_encoder,
            token_codec,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn encode_password(&self, raw_password: &str) -> Result<String, PasswordError> {
        self.password_encoder.encode(raw_password)
    }

    /// Verify credentials and issue a token for `subject` with `roles`.
    ///
    /// # Arguments
    /// * `raw_password` - Plaintext password to verify
    /// * `digest` - Stored password digest
    /// * `subject` - Token subject
    /// * `roles` - Authorities to snapshot into the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `Password` - Stored digest is unreadable
    /// * `Token` - Token issuance failed
    pub fn authenticate(
        &self,
        raw_password: &str,
        digest: &str,
        subject: &str,
        roles: &[String],
    ) -> Result<String, AuthenticationError> {
        if !self.password_encoder.matches(raw_password, digest)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.token_codec.issue(subject, roles)?)
    }
}
