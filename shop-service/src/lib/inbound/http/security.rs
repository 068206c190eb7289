use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::handlers::ApiError;
use crate::domain::user::models::Principal;
use crate::domain::user::models::Role;

/// Header carrying the bearer token.
pub const AUTH_TOKEN_HEADER: &str = "X-AUTH-TOKEN";

/// Outcome of checking a caller against a role requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    /// No principal is attached to the request
    Unauthenticated,
    /// A principal is attached but lacks the role
    Forbidden,
}

/// Per-request security context, stored in request extensions.
///
/// Anonymous unless the authentication layer resolved a principal from a
/// valid token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityContext {
    principal: Option<Principal>,
}

impl SecurityContext {
    pub fn anonymous() -> Self {
        Self { principal: None }
    }

    pub fn authenticated(principal: Principal) -> Self {
        Self {
            principal: Some(principal),
        }
    }

    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    pub fn check(&self, role: Role) -> AccessDecision {
        match &self.principal {
            None => AccessDecision::Unauthenticated,
            Some(principal) if principal.has_role(role) => AccessDecision::Granted,
            Some(_) => AccessDecision::Forbidden,
        }
    }

    fn from_parts(parts: &Parts) -> Self {
        parts
            .extensions
            .get::<SecurityContext>()
            .cloned()
            .unwrap_or_default()
    }
}

/// Extractor guarding a handler on the ADMIN role.
///
/// Rejects with the same responders as the access policy layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminPrincipal(pub Principal);

#[async_trait]
impl<S> FromRequestParts<S> for AdminPrincipal
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let context = SecurityContext::from_parts(parts);
        match (context.check(Role::Admin), context.principal) {
            (AccessDecision::Granted, Some(principal)) => Ok(AdminPrincipal(principal)),
            (AccessDecision::Forbidden, _) => {
                tracing::warn!("Admin-only operation attempted without the ADMIN role");
                Err(ApiError::AccessDenied)
            }
            _ => Err(ApiError::Unauthenticated),
        }
    }
}
