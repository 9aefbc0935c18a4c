use axum::{extract::Request, middleware::Next, response::Response};
use chrono::{SecondsFormat, Utc};

/// Logs method, path and timestamp of every request. Observational only.
pub async fn log_request(request: Request, next: Next) -> Response {
    tracing::info!(
        method = %request.method(),
        path = %request.uri(),
        timestamp = %Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "request"
    );
    next.run(request).await
}
