//! Outbound responses.
//!
//! # Responsibilities
//! - Relay an upstream response: status, every header value, streaming body
//! - Build the single fixed failure response
//!
//! # Design Decisions
//! - Relay is verbatim; upstream 4xx/5xx pass through as-is
//! - Multi-value headers stay separate values under one name
//! - The body is never buffered and has no size limit

use axum::body::{Body, Bytes, HttpBody};
use axum::http::header::{self, HeaderMap, HeaderValue};
use axum::http::StatusCode;
use axum::response::Response;
use axum::BoxError;

/// Body of the failure response.
pub const SERVER_ERROR_BODY: &str = "Server Error\n";

/// The response sent when the upstream round trip could not complete.
pub fn proxy_failure() -> Response {
    let mut response = Response::new(Body::from(SERVER_ERROR_BODY));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;

    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    headers.insert(header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));

    response
}

/// Turn an upstream response into the caller's response.
///
/// The upstream body is moved into the outbound body and streamed; it is
/// released when the caller's response finishes or is dropped.
pub fn relay<B>(upstream: axum::http::Response<B>) -> Response
where
    B: HttpBody<Data = Bytes> + Send + 'static,
    B::Error: Into<BoxError>,
{
    let (parts, body) = upstream.into_parts();

    let mut response = Response::new(Body::new(body));
    *response.status_mut() = parts.status;
    copy_headers(&parts.headers, response.headers_mut());

    response
}

/// Append every value of every header in `from` onto `to`.
pub fn copy_headers(from: &HeaderMap, to: &mut HeaderMap) {
    for (name, value) in from {
        to.append(name.clone(), value.clone());
    }
}
