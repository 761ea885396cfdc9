/// Default store: `app.db`, resolved against the process working directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://app.db";

/// Env vars that select the store, highest precedence first.
pub const DATABASE_URL_VARS: [&str; 2] = ["DB_URI", "DATABASE_URL"];

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5555`).
    pub port: u16,
    /// Backing store connection string (default: [`DEFAULT_DATABASE_URL`]).
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `5555`                     |
    /// | `DB_URI`               | `DATABASE_URL`, then below |
    /// | `DATABASE_URL`         | `sqlite://app.db`          |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5555".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = resolve_database_url(|name| std::env::var(name).ok());

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
        }
    }
}

/// Pick the store connection string from the first set, non-empty var in
/// [`DATABASE_URL_VARS`], falling back to [`DEFAULT_DATABASE_URL`].
fn resolve_database_url(lookup: impl Fn(&str) -> Option<String>) -> String {
    DATABASE_URL_VARS
        .iter()
        .filter_map(|name| lookup(*name))
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.into())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
