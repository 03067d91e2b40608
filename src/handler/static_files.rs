//! Static asset serving.
//!
//! Two named assets (the player page and its script) are served with a
//! pinned Content-Type. Everything the router does not recognize lands in
//! the generic fallback, which resolves the request path against the
//! static root and guesses the type from the extension.

use crate::config::PathsConfig;
use crate::handler::router::RequestContext;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io;
use std::path::Path;
use tokio::fs;

/// Serve the player page (`/` and `/index.html`).
pub async fn serve_index_page(
    ctx: &RequestContext<'_>,
    paths: &PathsConfig,
) -> Result<Response<Full<Bytes>>, io::Error> {
    serve_named_asset(ctx, &paths.index_page, "text/html").await
}

/// Serve the player client script (`/app.js`).
pub async fn serve_client_script(
    ctx: &RequestContext<'_>,
    paths: &PathsConfig,
) -> Result<Response<Full<Bytes>>, io::Error> {
    serve_named_asset(ctx, &paths.client_script, "application/javascript").await
}

/// Serve one named asset with a fixed Content-Type.
///
/// Same-origin only: unlike the queue and token endpoints these responses
/// carry no CORS header. A missing file answers with a bare 404; any other
/// read failure goes up to the connection layer.
async fn serve_named_asset(
    ctx: &RequestContext<'_>,
    file_path: &str,
    content_type: &'static str,
) -> Result<Response<Full<Bytes>>, io::Error> {
    match fs::read(file_path).await {
        Ok(content) => {
            if ctx.access_log {
                logger::log_response(content.len());
            }
            Ok(build_asset_response(content, content_type))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(http::build_empty_404_response()),
        Err(e) => Err(e),
    }
}

fn build_asset_response(content: Vec<u8>, content_type: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-type", content_type)
        .body(Full::new(Bytes::from(content)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build asset response: {e}"));
            Response::new(Full::new(Bytes::new()))
        })
}

/// Generic fallback: serve whatever file the request target names from the
/// static root.
pub async fn serve_fallback(ctx: &RequestContext<'_>, static_root: &str) -> Response<Full<Bytes>> {
    // File lookup ignores the query string; route matching does not.
    let path = ctx
        .target
        .split_once('?')
        .map_or(ctx.target, |(path, _)| path);

    match load_from_root(static_root, path).await {
        Some((content, content_type)) => {
            if ctx.access_log {
                logger::log_response(content.len());
            }
            build_fallback_response(content, content_type, ctx.is_head)
        }
        None => http::build_404_response(),
    }
}

/// Load a file addressed by a request path from the static root.
///
/// Directory targets probe for an `index.html` inside. The canonicalized
/// result must stay under the root; symlinks pointing out are refused.
async fn load_from_root(static_root: &str, path: &str) -> Option<(Vec<u8>, &'static str)> {
    // Remove leading slash and prevent directory traversal
    let clean_path = path.trim_start_matches('/').replace("..", "");
    let mut file_path = Path::new(static_root).join(&clean_path);

    let root_canonical = match Path::new(static_root).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static root not found or inaccessible '{static_root}': {e}"
            ));
            return None;
        }
    };

    if file_path.is_dir() || clean_path.is_empty() || clean_path.ends_with('/') {
        let index_path = file_path.join("index.html");
        if index_path.is_file() {
            file_path = index_path;
        }
    }

    // File not found is common (404), no need to log at warning level
    let Ok(file_path_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_path_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {path} -> {}",
            file_path_canonical.display()
        ));
        return None;
    }

    let content = match fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_path.display()
            ));
            return None;
        }
    };

    let content_type = mime::content_type_for(file_path.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}

/// Build the fallback response, honoring HEAD by sending headers only.
fn build_fallback_response(
    content: Vec<u8>,
    content_type: &'static str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build fallback response: {e}"));
            Response::new(Full::new(Bytes::new()))
        })
}
