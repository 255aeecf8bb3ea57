//! Middleware recording reverse-proxy forwarding headers as span attributes.
//!
//! A reverse proxy terminates TLS in front of this service; X-Forwarded-Proto
//! and X-Forwarded-Port carry the outside view of the request and are
//! recorded on the current tracing span for proper OpenTelemetry semantics.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

pub async fn record_forwarded_headers(request: Request, next: Next) -> Response {
    let span = tracing::Span::current();

    if let Some(scheme) = header_value(&request, "x-forwarded-proto") {
        span.record("url.scheme", scheme);
    }

    if let Some(port) =
        header_value(&request, "x-forwarded-port").and_then(|p| p.parse::<i64>().ok())
    {
        span.record("server.port", port);
    }

    next.run(request).await
}

fn header_value<'r>(request: &'r Request, name: &str) -> Option<&'r str> {
    request.headers().get(name).and_then(|v| v.to_str().ok())
}
