use auth::AuthenticationError;
use auth::PasswordError;
use auth::TokenError;
use thiserror::Error;

/// Error for required text fields (uid, name, password)
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("{field} must not be blank")]
    Blank { field: &'static str },

    #[error("{field} too long: maximum {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Error for role strings read back from the store or a token
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("Unknown authority: {0}")]
    UnknownAuthority(String),

    #[error("Identity has no roles")]
    Empty,
}

/// Top-level error for sign-up, sign-in and identity resolution
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid field: {0}")]
    InvalidField(#[from] FieldError),

    #[error("Invalid role: {0}")]
    InvalidRole(#[from] RoleError),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    // Domain-level errors
    #[error("User id already exists: {0}")]
    UidAlreadyExists(String),

    #[error("No identity for subject: {0}")]
    UnknownSubject(String),

    #[error("Authentication failed")]
    AuthenticationFailed,

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<AuthenticationError> for UserError {
    fn from(err: AuthenticationError) -> Self {
        match err {
            AuthenticationError::InvalidCredentials => UserError::AuthenticationFailed,
            AuthenticationError::Password(e) => UserError::Password(e),
            AuthenticationError::Token(e) => UserError::Token(e),
        }
    }
}
