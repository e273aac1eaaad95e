use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use shared_config::AppConfig;

/// Exact-match origin allow-list, built once at startup.
#[derive(Debug, Clone)]
pub struct AllowedOrigins(HashSet<String>);

impl AllowedOrigins {
    pub fn from_config(config: &AppConfig) -> Self {
        Self(config.allowed_origins.iter().cloned().collect())
    }

    pub fn contains(&self, origin: &str) -> bool {
        self.0.contains(origin)
    }
}

/// Cross-origin gate applied ahead of every route. Preflight requests always
/// succeed regardless of origin; anything else must carry an allow-listed
/// `Origin` header or is rejected before handler logic runs, with no response
/// envelope.
pub async fn origin_filter(
    State(allowed): State<Arc<AllowedOrigins>>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS {
        return preflight_response();
    }

    let origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    match origin {
        Some(origin) if allowed.contains(&origin) => {
            let mut response = next.run(request).await;
            if let Ok(value) = HeaderValue::from_str(&origin) {
                response
                    .headers_mut()
                    .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
                response
                    .headers_mut()
                    .insert(header::VARY, HeaderValue::from_static("Origin"));
            }
            response
        }
        origin => {
            warn!("Rejected request from origin {:?}", origin);
            StatusCode::FORBIDDEN.into_response()
        }
    }
}

fn preflight_response() -> Response {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, middleware, routing::get, Router};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let allowed = Arc::new(AllowedOrigins(
            ["https://allowed.example".to_string()].into_iter().collect(),
        ));
        Router::new()
            .route("/", get(|| async { "hello" }))
            .layer(middleware::from_fn_with_state(allowed, origin_filter))
    }

    #[tokio::test]
    async fn allowed_origin_passes_and_is_echoed() {
        let request = Request::builder()
            .uri("/")
            .header(header::ORIGIN, "https://allowed.example")
            .body(Body::empty())
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://allowed.example"
        );
    }

    #[tokio::test]
    async fn unlisted_origin_is_rejected_before_the_handler() {
        let request = Request::builder()
            .uri("/")
            .header(header::ORIGIN, "https://evil.example")
            .body(Body::empty())
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn missing_origin_is_rejected() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn preflight_succeeds_for_any_origin() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/")
            .header(header::ORIGIN, "https://evil.example")
            .body(Body::empty())
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }
}
