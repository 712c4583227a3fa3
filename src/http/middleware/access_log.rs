//! Access log middleware.
//!
//! One event per request: method, path, status, response size, latency and,
//! for POST, the request body. Also feeds the request metrics.

use std::time::Instant;

use axum::{
    body::{Body, HttpBody},
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::request::X_REQUEST_ID;
use crate::http::response::ApiError;
use crate::observability::metrics;

/// Limits the access log needs to buffer request bodies.
#[derive(Debug, Clone, Copy)]
pub struct AccessLog {
    pub max_body_bytes: usize,
}

pub async fn access_log_middleware(
    State(config): State<AccessLog>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let (request, body) = if method == Method::POST {
        let (parts, body) = request.into_parts();
        match axum::body::to_bytes(body, config.max_body_bytes).await {
            Ok(bytes) => {
                let logged = render_body(&bytes);
                (Request::from_parts(parts, Body::from(bytes)), Some(logged))
            }
            Err(e) => {
                tracing::warn!(request_id = %request_id, path = %path, error = %e, "Failed to read request body");
                let response = ApiError::PayloadTooLarge.into_response();
                metrics::record_request(method.as_str(), response.status().as_u16(), start);
                return response;
            }
        }
    } else {
        (request, None)
    };

    let response = next.run(request).await;
    let status = response.status().as_u16();
    let size = response.body().size_hint().exact();
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

    tracing::info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        status,
        size,
        latency_ms = %format_args!("{:.3}", latency_ms),
        body = body.as_deref(),
        "Request completed"
    );
    metrics::record_request(method.as_str(), status, start);

    response
}

/// Compact JSON of the request body, or `-` when it is not JSON.
fn render_body(bytes: &[u8]) -> String {
    serde_json::from_slice::<serde_json::Value>(bytes)
        .map(|value| value.to_string())
        .unwrap_or_else(|_| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{header, StatusCode},
        middleware,
        routing::post,
        Router,
    };
    use tower::ServiceExt;

    use crate::observability::capture::LogCapture;

    fn logged_router() -> Router {
        Router::new()
            .route(
                "/echo",
                post(|| async { (StatusCode::CREATED, "created") }).get(|| async { "ok" }),
            )
            .layer(middleware::from_fn_with_state(
                AccessLog { max_body_bytes: 64 },
                access_log_middleware,
            ))
    }

    #[tokio::test]
    async fn test_post_request_is_logged_with_body() {
        let logs = LogCapture::default();
        let _guard = logs.install();

        let request = Request::builder()
            .method(Method::POST)
            .uri("/echo")
            .header(header::CONTENT_TYPE, "application/json")
            .header(X_REQUEST_ID, "req-1")
            .body(Body::from(r#"{"name":"A","number":"1"}"#))
            .unwrap();
        let response = logged_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let events = logs.with_message("Request completed");
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event["method"], "POST");
        assert_eq!(event["path"], "/echo");
        assert_eq!(event["status"], 201);
        assert_eq!(event["size"], 7);
        assert_eq!(event["request_id"], "req-1");
        assert_eq!(event["body"], r#"{"name":"A","number":"1"}"#);
        assert!(event["latency_ms"].is_string());
    }

    #[tokio::test]
    async fn test_get_request_is_logged_without_body() {
        let logs = LogCapture::default();
        let _guard = logs.install();

        let request = Request::builder().uri("/echo").body(Body::empty()).unwrap();
        logged_router().oneshot(request).await.unwrap();

        let events = logs.with_message("Request completed");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["method"], "GET");
        assert_eq!(events[0]["status"], 200);
        assert_eq!(events[0]["size"], 2);
        assert_eq!(events[0]["request_id"], "-");
        assert!(events[0].get("body").is_none());
    }

    #[tokio::test]
    async fn test_oversized_post_body_is_rejected_and_not_forwarded() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/echo")
            .body(Body::from("x".repeat(65)))
            .unwrap();
        let response = logged_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_render_body() {
        assert_eq!(render_body(br#"{ "name": "A",  "number": "1" }"#), r#"{"name":"A","number":"1"}"#);
        assert_eq!(render_body(b"not json"), "-");
        assert_eq!(render_body(b""), "-");
    }
}
