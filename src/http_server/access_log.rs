//! Access Log Middleware
//!
//! Tags every request with a `request_id` and logs one line when the
//! response is ready.

use std::time::Instant;

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::observability::{log_event_with_fields, Event};

/// Response header echoing the generated request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Log method, path, status and elapsed time for each request
pub async fn access_log(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let mut response = next.run(request).await;

    let request_id = request_id.to_string();
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis().to_string();

    log_event_with_fields(
        Event::RequestCompleted,
        &[
            ("elapsed_ms", elapsed_ms.as_str()),
            ("method", method.as_str()),
            ("path", path.as_str()),
            ("request_id", request_id.as_str()),
            ("status", status.as_str()),
        ],
    );

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
