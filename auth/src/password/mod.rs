pub mod argon2;
pub mod errors;

pub use argon2::Argon2PasswordEncoder;
pub use errors::PasswordError;

/// One-way salted password hashing.
pub trait PasswordEncoder: Send + Sync + 'static {
    /// Hash a plaintext password into a self-describing digest.
    fn encode(&self, raw_password: &str) -> Result<String, PasswordError>;

    /// Check a plaintext password against a stored digest.
    fn matches(&self, raw_password: &str, digest: &str) -> Result<bool, PasswordError>;
}
