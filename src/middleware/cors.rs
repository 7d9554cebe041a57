use axum::{extract::Request, middleware::Next, response::Response};
use http::{header, HeaderValue};

/// Stamps the fixed CORS header set onto every response, success or error.
/// The allowed methods and headers are pinned values, so this is a plain
/// header rewrite rather than a negotiating `CorsLayer`.
pub async fn cors_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, DELETE, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

    response
}
