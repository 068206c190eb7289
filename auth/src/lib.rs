//! Authentication utilities library
//!
//! Provides the stateless authentication building blocks of the shop
//! backend:
//! - Password hashing (Argon2id)
//! - Signed, time-bound bearer tokens (HS256 JWT, one hour lifetime)
//! - Authentication coordination (verify password, then issue token)
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::{Argon2PasswordEncoder, PasswordEncoder};
//!
//! let encoder = Argon2PasswordEncoder::new();
//! let digest = encoder.encode("my_password").unwrap();
//! assert!(encoder.matches("my_password", &digest).unwrap());
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenCodec;
//!
//! let codec = TokenCodec::new("secret_key_long_enough_for_hs256").unwrap();
//! let token = codec.issue("user123", &["ROLE_USER".to_string()]).unwrap();
//! assert!(codec.is_valid(&token));
//! assert_eq!(codec.decode_subject(&token).unwrap(), "user123");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use std::sync::Arc;
//!
//! use auth::{Argon2PasswordEncoder, Authenticator, TokenCodec};
//!
//! let codec = Arc::new(TokenCodec::new("secret_key_long_enough_for_hs256").unwrap());
//! let auth = Authenticator::new(Arc::new(Argon2PasswordEncoder::new()), codec.clone());
//!
//! // Sign-up: hash password
//! let digest = auth.encode_password("password123").unwrap();
//!
//! // Sign-in: verify and issue token
//! let token = auth
//!     .authenticate("password123", &digest, "user123", &["ROLE_ADMIN".to_string()])
//!     .unwrap();
//! assert!(codec.is_valid(&token));
//! ```

pub mod authenticator;
pub mod clock;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use clock::Clock;
pub use clock::FixedClock;
pub use clock::SystemClock;
pub use jwt::TokenClaims;
pub use jwt::TokenCodec;
pub use jwt::TokenError;
pub use password::Argon2PasswordEncoder;
pub use password::PasswordEncoder;
pub use password::PasswordError;
