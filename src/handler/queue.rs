//! Queue-control polling endpoint.
//!
//! The queue file is an inter-process mailbox: an external producer rewrites
//! it, the browser player polls it here. The file is read and passed through
//! verbatim, never deleted, so a poller keeps seeing the same content until
//! the producer writes again.

use crate::config::PathsConfig;
use crate::handler::router::RequestContext;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io;
use tokio::fs;

/// Serve the queue-control document.
///
/// Absence of the file is an expected state (nothing queued yet) and maps
/// to 404. Any other read failure is surfaced to the connection layer.
pub async fn serve_queue_status(
    ctx: &RequestContext<'_>,
    paths: &PathsConfig,
) -> Result<Response<Full<Bytes>>, io::Error> {
    match fs::read(&paths.queue_file).await {
        Ok(content) => {
            if ctx.access_log {
                logger::log_response(content.len());
            }
            Ok(build_queue_response(content))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(build_queue_missing_response()),
        Err(e) => Err(e),
    }
}

/// Build the passthrough response: whatever bytes the producer wrote.
fn build_queue_response(content: Vec<u8>) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(content)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build queue response: {e}"));
            Response::new(Full::new(Bytes::new()))
        })
}

/// 404 with the same headers as the success path and an empty body, so the
/// polling script can treat "nothing queued" uniformly.
fn build_queue_missing_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build queue 404 response: {e}"));
            Response::new(Full::new(Bytes::new()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{get_ctx, paths_in, read_body};

    #[tokio::test]
    async fn passes_queue_bytes_through_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        let content = br#"[{"action":"play","id":"1209148981"}]"#;
        std::fs::write(&paths.queue_file, content).unwrap();

        let response = serve_queue_status(&get_ctx("/queue"), &paths).await.unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "*"
        );
        assert_eq!(read_body(response).await.as_ref(), content);
    }

    #[tokio::test]
    async fn serves_malformed_json_untouched() {
        // Passthrough means no validation: the player deals with the bytes.
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        std::fs::write(&paths.queue_file, b"not json {{{").unwrap();

        let response = serve_queue_status(&get_ctx("/queue"), &paths).await.unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(read_body(response).await.as_ref(), b"not json {{{");
    }

    #[tokio::test]
    async fn leaves_queue_file_in_place_across_polls() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        std::fs::write(&paths.queue_file, b"[]").unwrap();

        let first = serve_queue_status(&get_ctx("/queue"), &paths).await.unwrap();
        assert_eq!(first.status(), 200);

        // Second poll sees the identical document.
        let second = serve_queue_status(&get_ctx("/queue"), &paths).await.unwrap();
        assert_eq!(second.status(), 200);
        assert_eq!(read_body(second).await.as_ref(), b"[]");
        assert!(std::path::Path::new(&paths.queue_file).exists());
    }

    #[tokio::test]
    async fn missing_file_yields_cors_404_with_empty_body() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());

        let response = serve_queue_status(&get_ctx("/queue"), &paths).await.unwrap();

        assert_eq!(response.status(), 404);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "*"
        );
        assert!(read_body(response).await.is_empty());
    }

    #[tokio::test]
    async fn unreadable_file_propagates_as_error() {
        // A directory where the file should be: read fails with something
        // other than NotFound, which the handler refuses to swallow.
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        std::fs::create_dir(&paths.queue_file).unwrap();

        let result = serve_queue_status(&get_ctx("/queue"), &paths).await;

        assert!(result.is_err());
    }
}
