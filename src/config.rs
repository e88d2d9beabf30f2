use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub database_url: String,
    pub db_max_connections: u32,

    pub api_prefix: String,

    // Uploads
    pub upload_dir: String,
    pub upload_max_bytes: usize,

    // Sessions
    pub session_cookie: String,
    /// Idle expiry for sessions. `None` keeps them for the process lifetime.
    pub session_ttl_secs: Option<u64>,
    pub cookie_secure: bool,
    pub require_session: bool,

    pub cors_allowed_origin: String,

    // Rate limiting
    pub rate_limit_enabled: bool,
    pub rate_login_per_min: u32,
    pub rate_register_per_min: u32,

    pub log_dir: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "127.0.0.1:3000".to_string(),
            database_url: String::new(),
            db_max_connections: 10,
            api_prefix: "/api".to_string(),
            upload_dir: "uploads".to_string(),
            upload_max_bytes: 50 * 1024 * 1024,
            session_cookie: "payroll_session".to_string(),
            session_ttl_secs: None,
            cookie_secure: false,
            require_session: false,
            cors_allowed_origin: "http://localhost:4200".to_string(),
            rate_limit_enabled: true,
            rate_login_per_min: 60,
            rate_register_per_min: 30,
            log_dir: "logs".to_string(),
            log_level: "debug".to_string(),
        }
    }
}

/// Reads `key`, falling back to `default` when unset.
fn var_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let session_ttl_secs = match env::var("SESSION_TTL_SECS") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse()
                    .with_context(|| format!("SESSION_TTL_SECS has an invalid value: {raw:?}"))?,
            ),
            _ => None,
        };

        Ok(Self {
            server_addr: var_or("SERVER_ADDR", defaults.server_addr)?,
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            db_max_connections: var_or("DB_MAX_CONNECTIONS", defaults.db_max_connections)?,
            api_prefix: var_or("API_PREFIX", defaults.api_prefix)?,
            upload_dir: var_or("UPLOAD_DIR", defaults.upload_dir)?,
            upload_max_bytes: var_or("UPLOAD_MAX_BYTES", defaults.upload_max_bytes)?,
            session_cookie: var_or("SESSION_COOKIE", defaults.session_cookie)?,
            session_ttl_secs,
            cookie_secure: var_or("COOKIE_SECURE", defaults.cookie_secure)?,
            require_session: var_or("REQUIRE_SESSION", defaults.require_session)?,
            cors_allowed_origin: var_or("CORS_ALLOWED_ORIGIN", defaults.cors_allowed_origin)?,
            rate_limit_enabled: var_or("RATE_LIMIT_ENABLED", defaults.rate_limit_enabled)?,
            rate_login_per_min: var_or("RATE_LOGIN_PER_MIN", defaults.rate_login_per_min)?,
            rate_register_per_min: var_or(
                "RATE_REGISTER_PER_MIN",
                defaults.rate_register_per_min,
            )?,
            log_dir: var_or("LOG_DIR", defaults.log_dir)?,
            log_level: var_or("LOG_LEVEL", defaults.log_level)?,
        })
    }

    /// Resolves `log_level` to a tracing level, defaulting to DEBUG.
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::DEBUG)
    }
}
