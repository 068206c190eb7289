use std::sync::Arc;
use std::time::Duration;

use auth::TokenCodec;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::access_policy::AccessPolicy;
use super::api_docs::api_docs;
use super::handlers::exception::exception;
use super::handlers::products::change_product_name;
use super::handlers::products::create_product;
use super::handlers::products::delete_product;
use super::handlers::products::get_product;
use super::handlers::sign_in::sign_in;
use super::handlers::sign_up::sign_up;
use super::middleware::authenticate;
use super::middleware::enforce_access_policy;
use crate::domain::product::ports::ProductServicePort;
use crate::domain::user::ports::PrincipalLoader;
use crate::domain::user::ports::SignServicePort;

#[derive(Clone)]
pub struct AppState {
    pub sign_service: Arc<dyn SignServicePort>,
    pub product_service: Arc<dyn ProductServicePort>,
    pub principal_loader: Arc<dyn PrincipalLoader>,
    pub token_codec: Arc<TokenCodec>,
    pub access_policy: Arc<AccessPolicy>,
}

/// Build the HTTP router.
///
/// Request flow: trace, authentication (token to security context),
/// access policy, handler.
pub fn create_router(
    sign_service: Arc<dyn SignServicePort>,
    product_service: Arc<dyn ProductServicePort>,
    principal_loader: Arc<dyn PrincipalLoader>,
    token_codec: Arc<TokenCodec>,
) -> Router {
    let state = AppState {
        sign_service,
        product_service,
        principal_loader,
        token_codec,
        access_policy: Arc::new(AccessPolicy::standard()),
    };

    let sign_routes = Router::new()
        .route("/sign-api/sign-up", post(sign_up))
        .route("/sign-api/sign-in", post(sign_in))
        .route("/sign-api/exception", get(exception));

    let product_routes = Router::new()
        .route("/product", post(create_product).put(change_product_name))
        .route("/product/:number", get(get_product).delete(delete_product));

    let doc_routes = Router::new()
        .route("/api-docs", get(api_docs))
        .route("/v3/api-docs", get(api_docs));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    // Layers run bottom-up: authentication before the access policy.
    Router::new()
        .merge(sign_routes)
        .merge(product_routes)
        .merge(doc_routes)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            enforce_access_policy,
        ))
        .layer(middleware::from_fn_with_state(state.clone(), authenticate))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
