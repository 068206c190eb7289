use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Signing key too weak: at least {min_bits} bits required, got {actual_bits}")]
    WeakKey { min_bits: usize, actual_bits: usize },

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Malformed token: {0}")]
    Malformed(String),

    #[error("Token signature does not verify")]
    SignatureInvalid,

    #[error("Token is expired")]
    Expired,
}
