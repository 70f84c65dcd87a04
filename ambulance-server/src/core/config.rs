use std::path::PathBuf;

/// Which [`DocumentStore`](crate::db::DocumentStore) backs the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Process-lifetime `DashMap`
    Memory,
    /// Embedded redb file at [`Config::db_path`]
    Redb,
}

impl StoreBackend {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" => Some(Self::Memory),
            "redb" => Some(Self::Redb),
            _ => None,
        }
    }
}

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | AMBULANCE_API_PORT | 8080 | HTTP port |
/// | AMBULANCE_API_ENVIRONMENT | development | development / production |
/// | AMBULANCE_API_STORE | redb | `redb` or `memory` |
/// | AMBULANCE_API_DB_PATH | ambulance.redb | redb file |
/// | AMBULANCE_API_LOG_LEVEL | info | used when `RUST_LOG` is unset |
/// | AMBULANCE_API_LOG_DIR | - | daily-rolling log files when set |
/// | AMBULANCE_API_REQUEST_TIMEOUT_MS | 30000 | per-request timeout |
/// | AMBULANCE_API_CORS_ORIGIN | - | allowed origin; any when unset |
///
/// ```ignore
/// AMBULANCE_API_STORE=memory AMBULANCE_API_PORT=9000 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    /// development | production
    pub environment: String,
    pub store: StoreBackend,
    pub db_path: PathBuf,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub request_timeout_ms: u64,
    pub cors_origin: Option<String>,
}

impl Config {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let store = match std::env::var("AMBULANCE_API_STORE") {
            Ok(value) => StoreBackend::parse(&value).unwrap_or_else(|| {
                tracing::warn!(value = %value, "Unknown AMBULANCE_API_STORE, using redb");
                StoreBackend::Redb
            }),
            Err(_) => StoreBackend::Redb,
        };

        Self {
            http_port: std::env::var("AMBULANCE_API_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("AMBULANCE_API_ENVIRONMENT")
                .unwrap_or_else(|_| "development".into()),
            store,
            db_path: std::env::var("AMBULANCE_API_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("ambulance.redb")),
            log_level: std::env::var("AMBULANCE_API_LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("AMBULANCE_API_LOG_DIR").ok(),
            request_timeout_ms: std::env::var("AMBULANCE_API_REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            cors_origin: std::env::var("AMBULANCE_API_CORS_ORIGIN")
                .ok()
                .filter(|o| !o.is_empty()),
        }
    }

    /// In-memory store, no file output; used by tests
    pub fn in_memory() -> Self {
        Self {
            store: StoreBackend::Memory,
            log_dir: None,
            ..Self::from_env()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
