// Server module entry
// Listener construction, per-connection serving, and the accept loop

pub mod connection;
pub mod listener;

// Re-export commonly used types
pub use listener::create_listener;

use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::AppState;
use crate::logger;

/// Accept connections forever, serving each on its own task.
///
/// Accept errors are logged and the loop keeps going; dropping the future
/// is the only way the server stops.
pub async fn run(listener: TcpListener, state: Arc<AppState>) {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                if state.config.logging.access_log {
                    logger::log_connection_accepted(&peer_addr);
                }
                connection::spawn_connection(stream, Arc::clone(&state));
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
