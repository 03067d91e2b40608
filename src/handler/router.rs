//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method gating, route matching,
//! and dispatch to the endpoint handlers.

use crate::config::AppState;
use crate::handler::{queue, static_files, token};
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::io;
use std::sync::Arc;

/// Route identifiers, one per handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/queue`: queue-control polling.
    QueueStatus,
    /// `/` or `/index.html`: the player page.
    IndexPage,
    /// `/app.js`: the player client script.
    ClientScript,
    /// `/token`: developer-token minting.
    DeveloperToken,
    /// Everything else: generic static serving.
    Fallback,
}

impl Route {
    /// Map a raw request target to its route.
    ///
    /// Matching is exact and case-sensitive against the whole target, query
    /// string included. A target carrying a query therefore matches no named
    /// route and lands in the fallback.
    pub fn match_target(target: &str) -> Self {
        match target {
            "/queue" => Self::QueueStatus,
            "/" | "/index.html" => Self::IndexPage,
            "/app.js" => Self::ClientScript,
            "/token" => Self::DeveloperToken,
            _ => Self::Fallback,
        }
    }
}

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    /// Raw request target: path plus any query string, un-normalized.
    pub target: &'a str,
    pub is_head: bool,
    pub access_log: bool,
}

/// Main entry point for HTTP request handling.
///
/// Returns `Err` only for I/O faults no handler recovers from; the caller
/// treats that as fatal for the connection.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, io::Error> {
    let method = req.method();
    let uri = req.uri();
    let target = uri
        .path_and_query()
        .map_or_else(|| uri.path(), |pq| pq.as_str());

    let access_log = state.config.logging.access_log;
    if access_log {
        logger::log_request(method, uri, req.version());
    }

    let ctx = RequestContext {
        target,
        is_head: *method == Method::HEAD,
        access_log,
    };

    match *method {
        Method::GET => route_request(&ctx, &state).await,
        // HEAD skips the named routes and goes straight to the generic
        // handler, whatever the target.
        Method::HEAD => {
            Ok(static_files::serve_fallback(&ctx, &state.config.paths.static_root).await)
        }
        _ => {
            logger::log_warning(&format!("Unsupported method: {method}"));
            Ok(http::build_501_response())
        }
    }
}

/// Dispatch a GET to the matched route's handler.
async fn route_request(
    ctx: &RequestContext<'_>,
    state: &Arc<AppState>,
) -> Result<Response<Full<Bytes>>, io::Error> {
    let paths = &state.config.paths;

    match Route::match_target(ctx.target) {
        Route::QueueStatus => queue::serve_queue_status(ctx, paths).await,
        Route::IndexPage => static_files::serve_index_page(ctx, paths).await,
        Route::ClientScript => static_files::serve_client_script(ctx, paths).await,
        Route::DeveloperToken => Ok(token::serve_developer_token(ctx, paths).await),
        Route::Fallback => Ok(static_files::serve_fallback(ctx, &paths.static_root).await),
    }
}
