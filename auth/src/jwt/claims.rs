use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Lifetime of every issued token (one hour).
pub const TOKEN_VALIDITY_SECONDS: i64 = 60 * 60;

/// Claims carried by a bearer token.
///
/// Roles are a snapshot taken at issuance time; a role change on the stored
/// identity only shows up in tokens issued afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// Subject (login handle of the identity)
    pub sub: String,

    /// Granted authorities, e.g. `ROLE_ADMIN`
    #[serde(default)]
    pub roles: Vec<String>,

    /// Issued at (Unix timestamp, seconds)
    pub iat: i64,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}

impl TokenClaims {
    /// Build claims issued at `now`, expiring one hour later.
    ///
    /// # Arguments
    /// * `subject` - Login handle of the identity
    /// * `roles` - Authorities granted to the identity
    /// * `now` - Issuance instant
    pub fn issued_at(subject: impl ToString, roles: &[String], now: DateTime<Utc>) -> Self {
        let expiration = now + Duration::seconds(TOKEN_VALIDITY_SECONDS);

        Self {
            sub: subject.to_string(),
            roles: roles.to_vec(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check whether the token is expired at `now`.
    ///
    /// A token whose expiry equals the current instant is still accepted.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.exp.saturating_mul(1000) < now.timestamp_millis()
    }
}
