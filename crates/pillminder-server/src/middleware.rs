//! Request logging middleware.

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use log::info;
use std::time::Instant;
use uuid::Uuid;

/// Response header carrying the id used in the request's log line.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub(crate) async fn log_requests(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let mut response = next.run(request).await;

    info!(
        "request handled (request_id={request_id}, method={method}, path={path}, status={}, elapsed_ms={})",
        response.status().as_u16(),
        started.elapsed().as_millis()
    );
    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
