use super::ApiError;

/// Always fails; exercises the sign API's catch-all failure responder.
#[utoipa::path(
    get,
    path = "/sign-api/exception",
    tag = "sign",
    responses((status = 400, description = "Generic failure body"))
)]
pub async fn exception() -> Result<(), ApiError> {
    tracing::error!("Exception endpoint invoked");
    Err(ApiError::SignFailure)
}
