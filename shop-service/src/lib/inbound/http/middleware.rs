use axum::extract::Request;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;
use super::security::AccessDecision;
use super::security::SecurityContext;
use super::security::AUTH_TOKEN_HEADER;
use crate::domain::user::models::Uid;
use crate::inbound::http::router::AppState;

/// Resolves the `X-AUTH-TOKEN` header into a [`SecurityContext`].
///
/// Never rejects a request: a missing, invalid or expired token, or a
/// subject that no longer resolves, leaves the request anonymous and the
/// access policy decides what happens next. Runs at most once per request.
pub async fn authenticate(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    if req.extensions().get::<SecurityContext>().is_none() {
        let token = resolve_token(req.headers());
        let context = match token {
            Some(token) => resolve_context(&state, &token).await,
            None => SecurityContext::anonymous(),
        };
        req.extensions_mut().insert(context);
    }

    next.run(req).await
}

fn resolve_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTH_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

async fn resolve_context(state: &AppState, token: &str) -> SecurityContext {
    let claims = match state.token_codec.validate(token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!(error = %e, "Token rejected; continuing anonymously");
            return SecurityContext::anonymous();
        }
    };

    let uid = match Uid::new(claims.sub) {
        Ok(uid) => uid,
        Err(e) => {
            tracing::debug!(error = %e, "Token subject unusable; continuing anonymously");
            return SecurityContext::anonymous();
        }
    };

    match state.principal_loader.load_principal(&uid).await {
        Ok(principal) => {
            tracing::debug!(uid = %principal.uid, "Request authenticated");
            SecurityContext::authenticated(principal)
        }
        Err(e) => {
            tracing::warn!(uid = %uid, error = %e, "Principal lookup failed; continuing anonymously");
            SecurityContext::anonymous()
        }
    }
}

/// Applies the URL access policy to the request's security context.
pub async fn enforce_access_policy(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let decision = {
        let context = req
            .extensions()
            .get::<SecurityContext>()
            .cloned()
            .unwrap_or_default();
        state
            .access_policy
            .decide(req.method(), req.uri().path(), &context)
    };

    match decision {
        AccessDecision::Granted => next.run(req).await,
        AccessDecision::Unauthenticated => {
            tracing::info!(method = %req.method(), path = %req.uri().path(), "Unauthenticated access rejected");
            ApiError::Unauthenticated.into_response()
        }
        AccessDecision::Forbidden => {
            tracing::info!(method = %req.method(), path = %req.uri().path(), "Access denied");
            ApiError::AccessDenied.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_resolve_token() {
        let mut headers = HeaderMap::new();
        assert_eq!(resolve_token(&headers), None);

        headers.insert("x-auth-token", HeaderValue::from_static("  "));
        assert_eq!(resolve_token(&headers), None);

        headers.insert("x-auth-token", HeaderValue::from_static("abc.def.ghi"));
        assert_eq!(resolve_token(&headers), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn test_other_headers_are_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer token"));
        assert_eq!(resolve_token(&headers), None);
    }
}
