//! HTTP response building module
//!
//! Builders for the status-code responses shared across handlers, decoupled
//! from specific endpoint logic.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build 404 Not Found response
///
/// The generic fallback's answer for paths that name no file.
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build a bare 404: empty body, no Content-Type.
///
/// Sent when a named asset (player page, client script) is missing on disk.
pub fn build_empty_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 501 Unsupported Method response
///
/// Only GET and HEAD are implemented.
pub fn build_501_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(501)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("501 Unsupported Method")))
        .unwrap_or_else(|e| {
            log_build_error("501", &e);
            Response::new(Full::new(Bytes::from("501 Unsupported Method")))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_404_response() {
        let response = build_404_response();
        assert_eq!(response.status(), 404);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/plain"
        );
    }

    #[test]
    fn test_empty_404_has_no_content_type() {
        let response = build_empty_404_response();
        assert_eq!(response.status(), 404);
        assert!(response.headers().get("content-type").is_none());
    }

    #[test]
    fn test_501_response() {
        let response = build_501_response();
        assert_eq!(response.status(), 501);
    }
}
