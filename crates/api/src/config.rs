use innkeeper_db::delete_policy::DeletePolicy;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have sensible defaults suitable for
/// local development. In production, override via environment variables.
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
    /// What happens to dependent rows when a hotel or customer is deleted.
    pub delete_policy: DeletePolicy,
    /// Interval between background availability sweeps in seconds
    /// (default: `3600`; `0` disables the sweep).
    pub availability_sweep_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default     |
    /// |---------------------------|-------------|
    /// | `HOST`                    | `0.0.0.0`   |
    /// | `PORT`                    | `3000`      |
    /// | `CORS_ORIGINS`            | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`        |
    /// | `ON_DELETE`               | `restrict`  |
    /// | `AVAILABILITY_SWEEP_SECS` | `3600`      |
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

        let delete_policy: DeletePolicy = std::env::var("ON_DELETE")
            .unwrap_or_else(|_| "restrict".into())
            .parse()
            .expect("ON_DELETE must be restrict, cascade, or set-null");

        let availability_sweep_secs: u64 = std::env::var("AVAILABILITY_SWEEP_SECS")
            .unwrap_or_else(|_| "3600".into())
            .parse()
            .expect("AVAILABILITY_SWEEP_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            delete_policy,
            availability_sweep_secs,
            jwt,
        }
    }
}
