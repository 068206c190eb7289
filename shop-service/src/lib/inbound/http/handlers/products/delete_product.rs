use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::product::models::ProductNumber;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub const DELETED_MESSAGE: &str = "Delete product successfully";

#[utoipa::path(
    delete,
    path = "/product/{number}",
    tag = "product",
    params(("number" = i64, Path, description = "Product number")),
    security(("X-AUTH-TOKEN" = [])),
    responses(
        (status = 200, description = "Product deleted", body = String),
        (status = 401, description = "No valid token"),
        (status = 403, description = "Caller is not ADMIN"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(number): Path<i64>,
) -> Result<(StatusCode, &'static str), ApiError> {
    state
        .product_service
        .delete_product(ProductNumber(number))
        .await?;

    Ok((StatusCode::OK, DELETED_MESSAGE))
}
