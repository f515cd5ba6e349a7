use std::fmt;

/// Deployment environment, from `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    /// Anything other than `production` is treated as development.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("production") {
            AppEnv::Production
        } else {
            AppEnv::Development
        }
    }
}

impl fmt::Display for AppEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppEnv::Development => f.write_str("development"),
            AppEnv::Production => f.write_str("production"),
        }
    }
}

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Full connection URL.
    pub url: String,
    /// Pool size (default: `20`).
    pub max_connections: u32,
    /// Session `TimeZone` applied to every connection (default: `UTC`).
    pub timezone: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Deployment environment (default: development).
    pub app_env: AppEnv,
    /// Log level used when `RUST_LOG` is unset (default: `info`).
    pub log_level: String,
    /// Bind address (default: `localhost`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `APP_ENV`              | `development`              |
    /// | `LOG_LEVEL`            | `info`                     |
    /// | `SERVER_HOST`          | `HOST`, else `localhost`   |
    /// | `SERVER_PORT`          | `PORT`, else `3000`        |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DATABASE_URL`         | built from `DB_*` below    |
    /// | `DB_HOST`              | `localhost`                |
    /// | `DB_PORT`              | `5432`                     |
    /// | `DB_USER`              | `postgres`                 |
    /// | `DB_PASSWORD`          | `password`                 |
    /// | `DB_NAME`              | `movie_app`                |
    /// | `DB_SSLMODE`           | `disable`                  |
    /// | `DB_TIMEZONE`          | `UTC`                      |
    /// | `DB_MAX_CONNECTIONS`   | `20`                       |
    ///
    /// Panics on unparseable numeric values; misconfiguration should fail
    /// at startup.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reading from an arbitrary source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let app_env = AppEnv::parse(&var("APP_ENV", "development"));
        let log_level = var("LOG_LEVEL", "info");
        let either = |primary: &str, fallback: &str, default: &str| {
            lookup(primary).unwrap_or_else(|| var(fallback, default))
        };

        let host = either("SERVER_HOST", "HOST", "localhost");

        let port: u16 = either("SERVER_PORT", "PORT", "3000")
            .parse()
            .expect("SERVER_PORT must be a valid u16");

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = var("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let url = lookup("DATABASE_URL").unwrap_or_else(|| {
            format!(
                "postgres://{user}:{password}@{host}:{port}/{name}?sslmode={sslmode}",
                user = var("DB_USER", "postgres"),
                password = var("DB_PASSWORD", "password"),
                host = var("DB_HOST", "localhost"),
                port = var("DB_PORT", "5432"),
                name = var("DB_NAME", "movie_app"),
                sslmode = var("DB_SSLMODE", "disable"),
            )
        });

        let max_connections: u32 = var("DB_MAX_CONNECTIONS", "20")
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let timezone = var("DB_TIMEZONE", "UTC");

        Self {
            app_env,
            log_level,
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database: DatabaseConfig {
                url,
                max_connections,
                timezone,
            },
        }
    }
}
