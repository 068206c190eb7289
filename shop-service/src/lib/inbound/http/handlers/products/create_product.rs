use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use utoipa::ToSchema;

use super::ProductResponseData;
use crate::domain::product::models::CreateProductCommand;
use crate::domain::product::models::ProductName;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::inbound::http::security::AdminPrincipal;
use crate::product::errors::ProductFieldError;

/// Register a product. Restricted to ADMIN both by the URL policy and by
/// the handler itself.
#[utoipa::path(
    post,
    path = "/product",
    tag = "product",
    request_body = CreateProductRequest,
    security(("X-AUTH-TOKEN" = [])),
    responses(
        (status = 200, description = "Product saved", body = ProductResponseData),
        (status = 401, description = "No valid token"),
        (status = 403, description = "Caller is not ADMIN"),
        (status = 422, description = "Invalid product")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    AdminPrincipal(admin): AdminPrincipal,
    Json(body): Json<CreateProductRequest>,
) -> Result<ApiSuccess<ProductResponseData>, ApiError> {
    tracing::info!(uid = %admin.uid, name = %body.name, "Product registration requested");

    state
        .product_service
        .save_product(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::OK, product.into()))
}

/// HTTP request body for registering a product (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    name: String,
    price: i32,
    stock: i32,
}

impl CreateProductRequest {
    fn try_into_command(self) -> Result<CreateProductCommand, ProductFieldError> {
        let name = ProductName::new(self.name)?;
        CreateProductCommand::new(name, self.price, self.stock)
    }
}

impl From<ProductFieldError> for ApiError {
    fn from(err: ProductFieldError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
