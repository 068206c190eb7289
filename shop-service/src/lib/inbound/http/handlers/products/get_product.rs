use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ProductResponseData;
use crate::domain::product::models::ProductNumber;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

#[utoipa::path(
    get,
    path = "/product/{number}",
    tag = "product",
    params(("number" = i64, Path, description = "Product number")),
    responses(
        (status = 200, description = "Product found", body = ProductResponseData),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(number): Path<i64>,
) -> Result<ApiSuccess<ProductResponseData>, ApiError> {
    state
        .product_service
        .get_product(ProductNumber(number))
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::OK, product.into()))
}
