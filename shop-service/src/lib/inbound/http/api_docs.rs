use axum::Json;
use utoipa::openapi::security::ApiKey;
use utoipa::openapi::security::ApiKeyValue;
use utoipa::openapi::security::SecurityScheme;
use utoipa::Modify;
use utoipa::OpenApi;

use super::handlers;
use super::security::AUTH_TOKEN_HEADER;

#[derive(OpenApi)]
#[openapi(
    info(title = "Shop API", description = "Sign-up, sign-in and product catalogue"),
    paths(
        handlers::sign_up::sign_up,
        handlers::sign_in::sign_in,
        handlers::exception::exception,
        handlers::products::get_product::get_product,
        handlers::products::create_product::create_product,
        handlers::products::change_product_name::change_product_name,
        handlers::products::delete_product::delete_product,
    ),
    components(schemas(
        handlers::sign_up::SignUpRequest,
        handlers::sign_up::SignUpResponseData,
        handlers::sign_in::SignInRequest,
        handlers::sign_in::SignInResponseData,
        handlers::products::ProductResponseData,
        handlers::products::create_product::CreateProductRequest,
        handlers::products::change_product_name::ChangeProductNameRequest,
    )),
    modifiers(&AuthTokenScheme),
    tags(
        (name = "sign", description = "Identity registration and token issuance"),
        (name = "product", description = "Product catalogue")
    )
)]
pub struct ApiDoc;

struct AuthTokenScheme;

impl Modify for AuthTokenScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                AUTH_TOKEN_HEADER,
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(AUTH_TOKEN_HEADER))),
            );
        }
    }
}

/// Serves the OpenAPI document.
pub async fn api_docs() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
