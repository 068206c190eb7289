use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use super::ApiError;
use super::ApiSuccess;
use super::sign_payload_rejected;
use crate::domain::user::models::DisplayName;
use crate::domain::user::models::SignUpCommand;
use crate::domain::user::models::SignUpOutcome;
use crate::domain::user::models::Uid;
use crate::domain::user::models::required;
use crate::domain::user::ports::SignServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::FieldError;

/// Register a new identity. A `role` of `admin` (any case) grants ADMIN,
/// anything else grants USER.
#[utoipa::path(
    post,
    path = "/sign-api/sign-up",
    tag = "sign",
    request_body = SignUpRequest,
    responses(
        (status = 200, description = "Sign-up processed", body = SignUpResponseData),
        (status = 400, description = "Sign-up failed")
    )
)]
pub async fn sign_up(
    State(state): State<AppState>,
    payload: Result<Json<SignUpRequest>, JsonRejection>,
) -> Result<ApiSuccess<SignUpResponseData>, ApiError> {
    let Json(body) = payload.map_err(sign_payload_rejected)?;
    tracing::info!(id = %body.id, name = %body.name, "Sign-up requested");

    let outcome = state.sign_service.sign_up(body.try_into_command()?).await?;

    tracing::info!(code = outcome.code, success = outcome.success, "Sign-up finished");
    Ok(ApiSuccess::new(StatusCode::OK, outcome.into()))
}

/// HTTP request body for sign-up (raw JSON)
#[derive(Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct SignUpRequest {
    id: String,
    password: String,
    name: String,
    #[serde(default)]
    role: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseSignUpRequestError {
    #[error(transparent)]
    Field(#[from] FieldError),
}

impl SignUpRequest {
    fn try_into_command(self) -> Result<SignUpCommand, ParseSignUpRequestError> {
        let uid = Uid::new(self.id)?;
        let password = required("password", self.password)?;
        let name = DisplayName::new(self.name)?;
        Ok(SignUpCommand::new(uid, password, name, self.role))
    }
}

impl From<ParseSignUpRequestError> for ApiError {
    fn from(err: ParseSignUpRequestError) -> Self {
        tracing::warn!(error = %err, "Sign-up request rejected");
        ApiError::SignFailure
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SignUpResponseData {
    pub success: bool,
    pub code: i32,
    pub msg: String,
}

impl From<SignUpOutcome> for SignUpResponseData {
    fn from(outcome: SignUpOutcome) -> Self {
        Self {
            success: outcome.success,
            code: outcome.code,
            msg: outcome.msg,
        }
    }
}
