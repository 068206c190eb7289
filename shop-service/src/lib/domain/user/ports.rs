use async_trait::async_trait;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::Principal;
use crate::domain::user::models::SignInCommand;
use crate::domain::user::models::SignInOutcome;
use crate::domain::user::models::SignUpCommand;
use crate::domain::user::models::SignUpOutcome;
use crate::domain::user::models::Uid;
use crate::domain::user::models::User;
use crate::user::errors::UserError;

/// Port for sign-up and sign-in.
#[async_trait]
pub trait SignServicePort: Send + Sync + 'static {
    /// Register a new identity.
    ///
    /// # Arguments
    /// * `command` - Validated handle, name, plaintext password and requested role
    ///
    /// # Returns
    /// Success outcome when the stored record carries a name, failure outcome otherwise
    ///
    /// # Errors
    /// * `UidAlreadyExists` - Handle is already taken
    /// * `Password` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn sign_up(&self, command: SignUpCommand) -> Result<SignUpOutcome, UserError>;

    /// Verify credentials and issue a bearer token.
    ///
    /// # Arguments
    /// * `command` - Handle and plaintext password
    ///
    /// # Returns
    /// Success outcome with a token carrying the stored handle and roles
    ///
    /// # Errors
    /// * `UnknownSubject` - No identity with this handle
    /// * `AuthenticationFailed` - Password does not match
    /// * `DatabaseError` - Database operation failed
    async fn sign_in(&self, command: SignInCommand) -> Result<SignInOutcome, UserError>;
}

/// Port resolving a token subject back into a full principal.
#[async_trait]
pub trait PrincipalLoader: Send + Sync + 'static {
    /// Load the principal for a login handle.
    ///
    /// # Errors
    /// * `UnknownSubject` - No identity with this handle
    /// * `DatabaseError` - Database operation failed
    async fn load_principal(&self, uid: &Uid) -> Result<Principal, UserError>;
}

/// Persistence operations for identities.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new identity.
    ///
    /// # Returns
    /// Stored identity, including its assigned id
    ///
    /// # Errors
    /// * `UidAlreadyExists` - Handle is already taken
    /// * `DatabaseError` - Database operation failed
    async fn save(&self, user: NewUser) -> Result<User, UserError>;

    /// Retrieve identity by login handle.
    ///
    /// # Returns
    /// Optional identity (None if not found)
    ///
    /// # Errors
    /// * `InvalidRole` - Stored roles are unreadable
    /// * `DatabaseError` - Database operation failed
    async fn find_by_uid(&self, uid: &Uid) -> Result<Option<User>, UserError>;
}
