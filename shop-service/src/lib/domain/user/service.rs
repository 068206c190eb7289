use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;

use crate::domain::user::models::authorities;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Principal;
use crate::domain::user::models::Role;
use crate::domain::user::models::SignInCommand;
use crate::domain::user::models::SignInOutcome;
use crate::domain::user::models::SignUpCommand;
use crate::domain::user::models::SignUpOutcome;
use crate::domain::user::models::Uid;
use crate::user::errors::UserError;
use crate::user::ports::PrincipalLoader;
use crate::user::ports::SignServicePort;
use crate::user::ports::UserRepository;

/// Domain service for sign-up and sign-in.
pub struct SignService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> SignService<UR>
where
    UR: UserRepository,
{
    /// Create a new sign service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Identity persistence implementation
    /// * `authenticator` - Password hashing and token issuance
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> SignServicePort for SignService<UR>
where
    UR: UserRepository,
{
    async fn sign_up(&self, command: SignUpCommand) -> Result<SignUpOutcome, UserError> {
        let role = Role::from_requested(command.role.as_deref());
        tracing::info!(uid = %command.uid, role = %role, "Signing up");

        let password_hash = self.authenticator.encode_password(&command.password)?;

        let saved = self
            .repository
            .save(NewUser {
                uid: command.uid,
                password_hash,
                name: command.name.into_inner(),
                roles: vec![role],
            })
            .await?;

        if saved.name.is_empty() {
            tracing::warn!(uid = %saved.uid, "Stored identity came back without a name");
            return Ok(SignUpOutcome::failure());
        }

        tracing::info!(uid = %saved.uid, id = %saved.id, "Sign-up completed");
        Ok(SignUpOutcome::success())
    }

    async fn sign_in(&self, command: SignInCommand) -> Result<SignInOutcome, UserError> {
        tracing::info!(uid = %command.uid, "Signing in");

        let user = self
            .repository
            .find_by_uid(&command.uid)
            .await?
            .ok_or_else(|| UserError::UnknownSubject(command.uid.to_string()))?;

        let token = self
            .authenticator
            .authenticate(
                &command.password,
                &user.password_hash,
                user.uid.as_str(),
                &authorities(&user.roles),
            )
            .map_err(|e| {
                tracing::info!(uid = %user.uid, error = %e, "Sign-in rejected");
                UserError::from(e)
            })?;

        tracing::info!(uid = %user.uid, "Sign-in completed");
        Ok(SignInOutcome {
            outcome: SignUpOutcome::success(),
            token,
        })
    }
}

/// Resolves token subjects into principals through the identity store.
pub struct IdentityLoader<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
}

impl<UR> IdentityLoader<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<UR> PrincipalLoader for IdentityLoader<UR>
where
    UR: UserRepository,
{
    async fn load_principal(&self, uid: &Uid) -> Result<Principal, UserError> {
        tracing::debug!(uid = %uid, "Loading principal");

        self.repository
            .find_by_uid(uid)
            .await?
            .map(Principal::from)
            .ok_or_else(|| UserError::UnknownSubject(uid.to_string()))
    }
}
