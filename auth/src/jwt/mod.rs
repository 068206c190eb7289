pub mod claims;
pub mod codec;
pub mod errors;
pub mod signing_key;

pub use claims::TokenClaims;
pub use claims::TOKEN_VALIDITY_SECONDS;
pub use codec::TokenCodec;
pub use errors::TokenError;
pub use signing_key::SigningKey;
