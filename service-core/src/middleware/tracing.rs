//! Request correlation.
//!
//! Every request carries an `x-request-id` from the moment it enters the
//! router. A caller-supplied id is kept; otherwise a v4 UUID is minted. The
//! same id is echoed on the response and picked up by the `TraceLayer` span.

use axum::http::{HeaderMap, HeaderValue};
use axum::{extract::Request, middleware::Next, response::Response};
use uuid::Uuid;

use crate::observability::REQUEST_ID_HEADER;

fn incoming_request_id(headers: &HeaderMap) -> Option<HeaderValue> {
    headers
        .get(REQUEST_ID_HEADER)
        .filter(|value| value.to_str().is_ok_and(|s| !s.is_empty()))
        .cloned()
}

pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let request_id = match incoming_request_id(req.headers()) {
        Some(value) => value,
        // A hyphenated UUID is always a valid header value.
        None => HeaderValue::from_str(&Uuid::new_v4().to_string())
            .unwrap_or_else(|_| HeaderValue::from_static("-")),
    };

    req.headers_mut()
        .insert(REQUEST_ID_HEADER, request_id.clone());

    let mut response = next.run(req).await;
    response.headers_mut().insert(REQUEST_ID_HEADER, request_id);
    response
}
