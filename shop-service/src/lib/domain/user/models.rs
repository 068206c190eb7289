use std::fmt;
use std::str::FromStr;

use crate::user::errors::FieldError;
use crate::user::errors::RoleError;

/// Stored identity.
///
/// The password digest never leaves the service; HTTP responses are built
/// from dedicated response types.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub uid: Uid,
    pub password_hash: String,
    pub name: String,
    pub roles: Vec<Role>,
}

/// Identity not yet persisted; the store assigns its id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub uid: Uid,
    pub password_hash: String,
    pub name: String,
    pub roles: Vec<Role>,
}

/// Store-owned surrogate key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Login handle, unique per identity and immutable after sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uid(String);

impl Uid {
    const MAX_LENGTH: usize = 255;

    /// Create a validated login handle.
    ///
    /// # Errors
    /// * `Blank` - Handle is empty or whitespace only
    /// * `TooLong` - Handle exceeds 255 characters
    pub fn new(uid: String) -> Result<Self, FieldError> {
        let uid = required("id", uid)?;
        let length = uid.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(FieldError::TooLong {
                field: "id",
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(uid))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display name given at sign-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(name: String) -> Result<Self, FieldError> {
        required("name", name).map(Self)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Reject empty or whitespace-only values of a required field.
pub fn required(field: &'static str, value: String) -> Result<String, FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::Blank { field })
    } else {
        Ok(value)
    }
}

/// Granted role.
///
/// Serialized as `ROLE_USER` / `ROLE_ADMIN` at the store and token
/// boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    const USER_AUTHORITY: &'static str = "ROLE_USER";
    const ADMIN_AUTHORITY: &'static str = "ROLE_ADMIN";

    /// Map the role requested at sign-up.
    ///
    /// `"admin"` in any letter case grants [`Role::Admin`]; any other value,
    /// including none, grants [`Role::User`].
    pub fn from_requested(requested: Option<&str>) -> Self {
        match requested {
            Some(role) if role.eq_ignore_ascii_case("admin") => Role::Admin,
            _ => Role::User,
        }
    }

    pub fn as_authority(&self) -> &'static str {
        match self {
            Role::User => Self::USER_AUTHORITY,
            Role::Admin => Self::ADMIN_AUTHORITY,
        }
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(authority: &str) -> Result<Self, Self::Err> {
        match authority {
            Self::USER_AUTHORITY => Ok(Role::User),
            Self::ADMIN_AUTHORITY => Ok(Role::Admin),
            other => Err(RoleError::UnknownAuthority(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_authority())
    }
}

/// Parse a stored authority list, which must not be empty.
pub fn parse_authorities<I, S>(authorities: I) -> Result<Vec<Role>, RoleError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let roles = authorities
        .into_iter()
        .map(|authority| authority.as_ref().parse())
        .collect::<Result<Vec<Role>, RoleError>>()?;

    if roles.is_empty() {
        return Err(RoleError::Empty);
    }
    Ok(roles)
}

/// Render roles as authority strings, preserving order.
pub fn authorities(roles: &[Role]) -> Vec<String> {
    roles
        .iter()
        .map(|role| role.as_authority().to_string())
        .collect()
}

/// Authenticated caller resolved from a bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub uid: Uid,
    pub name: String,
    pub roles: Vec<Role>,
}

impl Principal {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Granted authorities, one per stored role.
    pub fn authorities(&self) -> Vec<String> {
        authorities(&self.roles)
    }
}

impl From<User> for Principal {
    fn from(user: User) -> Self {
        Self {
            uid: user.uid,
            name: user.name,
            roles: user.roles,
        }
    }
}

/// Command to register a new identity
#[derive(Debug)]
pub struct SignUpCommand {
    pub uid: Uid,
    pub password: String,
    pub name: DisplayName,
    /// Raw requested role; mapped by the service
    pub role: Option<String>,
}

impl SignUpCommand {
    /// Construct a new sign-up command.
    ///
    /// # Arguments
    /// * `uid` - Validated login handle
    /// * `password` - Plain text password (will be hashed by service)
    /// * `name` - Validated display name
    /// * `role` - Requested role, as sent by the client
    pub fn new(uid: Uid, password: String, name: DisplayName, role: Option<String>) -> Self {
        Self {
            uid,
            password,
            name,
            role,
        }
    }
}

/// Command to authenticate an identity
#[derive(Debug)]
pub struct SignInCommand {
    pub uid: Uid,
    pub password: String,
}

/// Result code reported by sign operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommonResponse {
    Success,
    Fail,
}

impl CommonResponse {
    pub fn code(&self) -> i32 {
        match self {
            CommonResponse::Success => 0,
            CommonResponse::Fail => -1,
        }
    }

    pub fn msg(&self) -> &'static str {
        match self {
            CommonResponse::Success => "Success",
            CommonResponse::Fail => "Fail",
        }
    }
}

/// Outcome of a sign-up (also embedded in the sign-in outcome).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpOutcome {
    pub success: bool,
    pub code: i32,
    pub msg: String,
}

impl SignUpOutcome {
    pub fn success() -> Self {
        Self::from_response(CommonResponse::Success, true)
    }

    pub fn failure() -> Self {
        Self::from_response(CommonResponse::Fail, false)
    }

    fn from_response(response: CommonResponse, success: bool) -> Self {
        Self {
            success,
            code: response.code(),
            msg: response.msg().to_string(),
        }
    }
}

/// Outcome of a successful sign-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInOutcome {
    pub outcome: SignUpOutcome,
    pub token: String,
}
