//! Build HTTP responses: redirects, errors, and relayed upstream responses.

use axum::body::Body;
use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::fetch::UpstreamResponse;

pub(crate) const NOT_FOUND_BODY: &str = "404 not found";

/// 301 with `Location: url`.
pub(crate) fn moved_permanently(url: &str) -> Response {
    match HeaderValue::from_str(url) {
        Ok(location) => (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response(),
        Err(e) => internal_error(&format!("invalid redirect location: {e}")),
    }
}

pub(crate) fn not_found() -> Response {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response()
}

/// 500 with the error message as plain-text body.
pub(crate) fn internal_error(message: &str) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, message.to_string()).into_response()
}

/// Relays an upstream response: same status, headers and body.
/// Header lines that are not valid HTTP are dropped.
pub(crate) fn upstream(resp: UpstreamResponse) -> Response {
    let status = match StatusCode::from_u16(resp.status) {
        Ok(s) => s,
        Err(_) => return internal_error(&format!("invalid upstream status {}", resp.status)),
    };

    let mut response = Response::new(Body::from(resp.body));
    *response.status_mut() = status;

    let headers = response.headers_mut();
    for (name, value) in resp.headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(&value),
        ) {
            (Ok(name), Ok(value)) => {
                headers.append(name, value);
            }
            _ => tracing::debug!(header = %name, "dropping invalid upstream header"),
        }
    }

    response
}
