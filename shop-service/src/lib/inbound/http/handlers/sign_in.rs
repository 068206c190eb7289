use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use utoipa::ToSchema;

use super::ApiError;
use super::ApiSuccess;
use super::sign_payload_rejected;
use crate::domain::user::models::SignInCommand;
use crate::domain::user::models::SignInOutcome;
use crate::domain::user::models::Uid;
use crate::domain::user::ports::SignServicePort;
use crate::inbound::http::router::AppState;

/// Verify credentials and issue a token for the `X-AUTH-TOKEN` header.
#[utoipa::path(
    post,
    path = "/sign-api/sign-in",
    tag = "sign",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Signed in", body = SignInResponseData),
        (status = 400, description = "Unknown id or wrong password")
    )
)]
pub async fn sign_in(
    State(state): State<AppState>,
    payload: Result<Json<SignInRequest>, JsonRejection>,
) -> Result<ApiSuccess<SignInResponseData>, ApiError> {
    let Json(body) = payload.map_err(sign_payload_rejected)?;
    tracing::info!(id = %body.id, "Sign-in requested");

    let uid = Uid::new(body.id).map_err(|e| {
        tracing::warn!(error = %e, "Sign-in request rejected");
        ApiError::SignFailure
    })?;

    let outcome = state
        .sign_service
        .sign_in(SignInCommand {
            uid,
            password: body.password,
        })
        .await?;

    tracing::info!("Sign-in succeeded; token issued");
    Ok(ApiSuccess::new(StatusCode::OK, outcome.into()))
}

/// HTTP request body for sign-in (raw JSON)
#[derive(Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct SignInRequest {
    id: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SignInResponseData {
    pub success: bool,
    pub code: i32,
    pub msg: String,
    pub token: String,
}

impl From<SignInOutcome> for SignInResponseData {
    fn from(outcome: SignInOutcome) -> Self {
        Self {
            success: outcome.outcome.success,
            code: outcome.outcome.code,
            msg: outcome.outcome.msg,
            token: outcome.token,
        }
    }
}
