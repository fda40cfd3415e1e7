use axum::{extract::Request, middleware::Next, response::Response};

/// Log every request line, and the resulting status at debug level
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    log::info!("{} {}", method, uri);

    let response = next.run(request).await;
    log::debug!("{} {} -> {}", method, uri, response.status());
    response
}
