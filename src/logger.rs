//! Console logging.
//!
//! Everything goes to stdout/stderr; the server is a local tool and its
//! operator is a terminal. Request and response lines can be switched off
//! via `logging.access_log`.

use crate::config::Config;
use hyper::{Method, Uri, Version};
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Music player web server started");
    println!("Listening on: http://{addr}");
    println!("Log level: {}", config.logging.level);
    println!("Queue control file: {}", config.paths.queue_file);
    println!("Secrets file: {}", config.paths.secrets_file);
    println!("Static root: {}", config.paths.static_root);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    println!("[Request] {method} {uri} {version:?}");
}

pub fn log_response(size: usize) {
    println!("[Response] Sent 200 OK ({size} bytes)\n");
}

/// Token failures stay out of the HTTP response; this line is the only
/// place the cause shows up.
pub fn log_token_error(err: &impl std::fmt::Display) {
    eprintln!("[ERROR] Token generation error: {err}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
