/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Base URL of the staff application, used in notification links.
    pub staff_app_url: String,
    /// Base URL of the customer portal, used in notification links.
    pub customer_portal_url: String,
    /// Root directory of the local object store holding file payloads.
    pub storage_root: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                        |
    /// |------------------------|--------------------------------|
    /// | `HOST`                 | `0.0.0.0`                      |
    /// | `PORT`                 | `3000`                         |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`        |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                           |
    /// | `STAFF_APP_URL`        | `http://localhost:5173/staff`  |
    /// | `CUSTOMER_PORTAL_URL`  | `http://localhost:5173`        |
    /// | `STORAGE_ROOT`         | `./storage`                    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let staff_app_url = std::env::var("STAFF_APP_URL")
            .unwrap_or_else(|_| "http://localhost:5173/staff".into());

        let customer_portal_url =
            std::env::var("CUSTOMER_PORTAL_URL").unwrap_or_else(|_| "http://localhost:5173".into());

        let storage_root = std::env::var("STORAGE_ROOT").unwrap_or_else(|_| "./storage".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            staff_app_url,
            customer_portal_url,
            storage_root,
        }
    }
}
