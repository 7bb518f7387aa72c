//! Request logging middleware.

use axum::{extract::Request, middleware::Next, response::Response};

/// Log every request that reaches a user route.
pub async fn request_log_middleware(request: Request, next: Next) -> Response {
    tracing::info!(
        method = %request.method(),
        request = %request.uri(),
        "request received"
    );

    next.run(request).await
}
