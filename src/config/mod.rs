use serde::Deserialize;
use std::path::PathBuf;
use tracing::warn;

const DEFAULT_PORT: u16 = 4500;

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

/// Runtime configuration for the quilld service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// REST API port.
    pub port: u16,
    /// Bind address for the REST server (default: 127.0.0.1).
    pub bind_address: String,
    /// Data directory holding the SQLite database.
    pub data_dir: PathBuf,
    /// Log level filter (trace, debug, info, warn, error).
    pub log: String,
    /// Log output format: `"pretty"` (default) or `"json"`.
    pub log_format: String,
}

/// Optional TOML overlay loaded from `{data_dir}/config.toml`.
#[derive(Debug, Default, Deserialize)]
struct TomlConfig {
    port: Option<u16>,
    bind_address: Option<String>,
    log: Option<String>,
    log_format: Option<String>,
}

impl ServiceConfig {
    /// Build config from CLI/env args + optional TOML file.
    ///
    /// Priority (highest to lowest):
    ///   1. CLI / env — passed as `Some(value)` from clap
    ///   2. TOML file at `{data_dir}/config.toml`
    ///   3. Built-in defaults
    pub fn new(
        port: Option<u16>,
        data_dir: Option<PathBuf>,
        log: Option<String>,
        bind_address: Option<String>,
    ) -> Self {
        let data_dir = data_dir.unwrap_or_else(default_data_dir);

        // Load TOML as the lowest-priority override layer
        let toml = load_toml(&data_dir).unwrap_or_default();

        let port = port.or(toml.port).unwrap_or(DEFAULT_PORT);
        let log = log.or(toml.log).unwrap_or_else(|| "info".to_string());

        let bind_address = bind_address
            .or(std::env::var("QUILLD_BIND").ok().filter(|s| !s.is_empty()))
            .or(toml.bind_address)
            .unwrap_or_else(default_bind_address);

        let log_format = std::env::var("QUILLD_LOG_FORMAT")
            .ok()
            .filter(|s| !s.is_empty())
            .or(toml.log_format)
            .unwrap_or_else(|| "pretty".to_string());

        Self {
            port,
            bind_address,
            data_dir,
            log,
            log_format,
        }
    }
}

fn load_toml(data_dir: &std::path::Path) -> Option<TomlConfig> {
    let path = data_dir.join("config.toml");
    let content = std::fs::read_to_string(&path).ok()?;
    match toml::from_str(&content) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            warn!("ignoring malformed config.toml at {}: {e}", path.display());
            None
        }
    }
}

fn default_data_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        // ~/Library/Application Support/quilld
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("quilld");
        }
    }
    #[cfg(target_os = "linux")]
    {
        // $XDG_DATA_HOME/quilld or ~/.local/share/quilld
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("quilld");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home)
                .join(".local")
                .join("share")
                .join("quilld");
        }
    }
    #[cfg(target_os = "windows")]
    {
        // %APPDATA%\quilld
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("quilld");
        }
    }
    // Fallback
    PathBuf::from(".quilld")
}
