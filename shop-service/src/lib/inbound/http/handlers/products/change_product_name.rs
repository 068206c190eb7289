use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use utoipa::ToSchema;

use super::ProductResponseData;
use crate::domain::product::models::ProductName;
use crate::domain::product::models::ProductNumber;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

#[utoipa::path(
    put,
    path = "/product",
    tag = "product",
    request_body = ChangeProductNameRequest,
    security(("X-AUTH-TOKEN" = [])),
    responses(
        (status = 200, description = "Product renamed", body = ProductResponseData),
        (status = 401, description = "No valid token"),
        (status = 403, description = "Caller is not ADMIN"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn change_product_name(
    State(state): State<AppState>,
    Json(body): Json<ChangeProductNameRequest>,
) -> Result<ApiSuccess<ProductResponseData>, ApiError> {
    let name = ProductName::new(body.name)?;

    state
        .product_service
        .change_product_name(ProductNumber(body.number), name)
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::OK, product.into()))
}

/// HTTP request body for renaming a product (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct ChangeProductNameRequest {
    number: i64,
    name: String,
}
