use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub paths: PathsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
}

/// Locations of everything the server reads from disk.
///
/// All defaults are relative so the server can be started from whichever
/// directory holds the player files.
#[derive(Debug, Deserialize, Clone)]
pub struct PathsConfig {
    /// Queue-control document written by the external queue producer.
    pub queue_file: String,
    /// Developer-token signing credentials.
    pub secrets_file: String,
    /// The player page.
    pub index_page: String,
    /// The player client script.
    pub client_script: String,
    /// Root directory for the generic static fallback.
    pub static_root: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load from `config_name.{toml,json,...}` if present, then environment
    /// variables (`PLAYER_` prefix), then built-in defaults.
    pub fn load_from(config_name: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_name).required(false))
            .add_source(config::Environment::with_prefix("PLAYER"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("paths.queue_file", "./music_queue_control.json")?
            .set_default("paths.secrets_file", "secrets.json")?
            .set_default("paths.index_page", "./index.html")?
            .set_default("paths.client_script", "./app.js")?
            .set_default("paths.static_root", ".")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Shared state handed to every connection task.
pub struct AppState {
    pub config: Config,
}

impl AppState {
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }
}
