use axum::extract::rejection::JsonRejection;
use axum::http::header;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::product::errors::ProductError;
use crate::user::errors::UserError;

pub mod exception;
pub mod products;
pub mod sign_in;
pub mod sign_up;

/// Body of the unauthenticated-access responder
pub const ENTRY_POINT_MESSAGE: &str = "인증이 실패핬습니다.";
/// Body of the access-denied responder
pub const ACCESS_DENIED_MESSAGE: &str = "접근이 금지되었습니다.";
/// Body of the catch-all failure responder on the sign API
pub const GENERIC_FAILURE_MESSAGE: &str = "에러 발생";

const JSON_UTF8: HeaderValue = HeaderValue::from_static("application/json;charset=UTF-8");

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Any sign-api failure; the body never says what went wrong
    SignFailure,
    /// No authenticated principal on a protected route
    Unauthenticated,
    /// Authenticated principal lacks the required role
    AccessDenied,
    InternalServerError(String),
    UnprocessableEntity(String),
    NotFound(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct EntryPointErrorResponse {
    msg: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::SignFailure => {
                let status = StatusCode::BAD_REQUEST;
                let body = json!({
                    "error type": status.canonical_reason().unwrap_or("Bad Request"),
                    "code": status.as_str(),
                    "message": GENERIC_FAILURE_MESSAGE,
                });
                return (status, Json(body)).into_response();
            }
            ApiError::Unauthenticated => {
                return responder(StatusCode::UNAUTHORIZED, ENTRY_POINT_MESSAGE);
            }
            ApiError::AccessDenied => {
                return responder(StatusCode::FORBIDDEN, ACCESS_DENIED_MESSAGE);
            }
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

fn responder(status: StatusCode, msg: &'static str) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, JSON_UTF8)],
        Json(EntryPointErrorResponse { msg }),
    )
        .into_response()
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        // Unknown user, wrong password and store failures look the same to the client
        tracing::error!(error = %err, "Sign request failed");
        ApiError::SignFailure
    }
}

/// Body rejections on the sign API (missing field, broken JSON, wrong
/// content type) get the same generic failure as every other sign error.
pub fn sign_payload_rejected(rejection: JsonRejection) -> ApiError {
    tracing::warn!(
        status = %rejection.status(),
        error = %rejection.body_text(),
        "Sign request body rejected"
    );
    ApiError::SignFailure
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ProductError::InvalidField(_) => ApiError::UnprocessableEntity(err.to_string()),
            ProductError::DatabaseError(_) => {
                tracing::error!(error = %err, "Product operation failed");
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}
