use std::fmt;

use axum::http::HeaderValue;

use crate::auth::jwt::JwtConfig;

/// Origins of the local BlogSphere front-ends.
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173,http://localhost:5174";

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has invalid value {value:?} (expected {expected})")]
    Invalid {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Deployment mode, taken from `NODE_ENV`.
///
/// Only the exact value `production` selects [`DeploymentMode::Production`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentMode {
    Development,
    Production,
}

impl DeploymentMode {
    pub fn from_node_env(value: Option<&str>) -> Self {
        match value {
            Some("production") => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

/// Which document store backs the server.
#[derive(Debug, Clone)]
pub enum StoreConfig {
    /// Process-local store; contents are lost on restart.
    Memory,
    Postgres(PostgresConfig),
}

/// PostgreSQL connection settings.
#[derive(Clone)]
pub struct PostgresConfig {
    /// Full connection URL. When set, the individual parts are ignored.
    pub url: Option<String>,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub max_connections: u32,
}

impl fmt::Debug for PostgresConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except the token secret and database credentials have
/// defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Controls session cookie attributes.
    pub mode: DeploymentMode,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Put the insert/delete routes behind the session gate.
    pub require_auth_for_writes: bool,
    /// Session token signing configuration.
    pub jwt: JwtConfig,
    pub store: StoreConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                   | Default                                       |
    /// |---------------------------|-----------------------------------------------|
    /// | `HOST`                    | `0.0.0.0`                                     |
    /// | `PORT`                    | `5000`                                        |
    /// | `NODE_ENV`                | development unless `production`               |
    /// | `CORS_ORIGINS`            | `http://localhost:5173,http://localhost:5174` |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                                          |
    /// | `REQUIRE_AUTH_FOR_WRITES` | `false`                                       |
    /// | `STORE_BACKEND`           | `postgres` (or `memory`)                      |
    ///
    /// See [`JwtConfig::from_lookup`] and [`PostgresConfig`] for the rest.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_var(&lookup, "PORT", 5000u16, "a port number")?;
        let mode = DeploymentMode::from_node_env(lookup("NODE_ENV").as_deref());

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        for origin in &cors_origins {
            if origin.parse::<HeaderValue>().is_err() {
                return Err(ConfigError::Invalid {
                    name: "CORS_ORIGINS",
                    value: origin.clone(),
                    expected: "comma-separated origins",
                });
            }
        }

        let request_timeout_secs =
            parse_var(&lookup, "REQUEST_TIMEOUT_SECS", 30u64, "a number of seconds")?;
        let require_auth_for_writes =
            parse_var(&lookup, "REQUIRE_AUTH_FOR_WRITES", false, "true or false")?;

        let jwt = JwtConfig::from_lookup(&lookup)?;
        let store = StoreConfig::from_lookup(&lookup)?;

        Ok(Self {
            host,
            port,
            mode,
            cors_origins,
            request_timeout_secs,
            require_auth_for_writes,
            jwt,
            store,
        })
    }
}

impl StoreConfig {
    /// | Env Var              | Required                         | Default     |
    /// |----------------------|----------------------------------|-------------|
    /// | `STORE_BACKEND`      | no                               | `postgres`  |
    /// | `DATABASE_URL`       | no                               | --          |
    /// | `DB_USER`            | **yes** without `DATABASE_URL`   | --          |
    /// | `DB_PASSWORD`        | **yes** without `DATABASE_URL`   | --          |
    /// | `DB_HOST`            | no                               | `localhost` |
    /// | `DB_PORT`            | no                               | `5432`      |
    /// | `DB_NAME`            | no                               | `blog`      |
    /// | `DB_MAX_CONNECTIONS` | no                               | `20`        |
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend = lookup("STORE_BACKEND").unwrap_or_else(|| "postgres".into());
        match backend.as_str() {
            "memory" => Ok(Self::Memory),
            "postgres" => {
                let url = lookup("DATABASE_URL").filter(|u| !u.is_empty());
                let (user, password) = if url.is_some() {
                    (String::new(), String::new())
                } else {
                    (
                        lookup("DB_USER").ok_or(ConfigError::Missing("DB_USER"))?,
                        lookup("DB_PASSWORD").ok_or(ConfigError::Missing("DB_PASSWORD"))?,
                    )
                };

                Ok(Self::Postgres(PostgresConfig {
                    url,
                    user,
                    password,
                    host: lookup("DB_HOST").unwrap_or_else(|| "localhost".into()),
                    port: parse_var(lookup, "DB_PORT", 5432u16, "a port number")?,
                    database: lookup("DB_NAME").unwrap_or_else(|| "blog".into()),
                    max_connections: parse_var(lookup, "DB_MAX_CONNECTIONS", 20u32, "a positive integer")?,
                }))
            }
            other => Err(ConfigError::Invalid {
                name: "STORE_BACKEND",
                value: other.to_string(),
                expected: "postgres or memory",
            }),
        }
    }
}

/// Parse an optional variable, falling back to `default` when unset.
pub(crate) fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            value: raw,
            expected,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_with_memory_store() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("ACCESS_TOKEN_SECRET", "s3cret"),
            ("STORE_BACKEND", "memory"),
        ]))
        .unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.mode, DeploymentMode::Development);
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:5173", "http://localhost:5174"]
        );
        assert!(!config.require_auth_for_writes);
        assert_eq!(config.jwt.session_ttl_days, 365);
        assert_matches!(config.store, StoreConfig::Memory);
    }

    #[test]
    fn missing_secret_is_an_error() {
        let result = ServerConfig::from_lookup(lookup_from(&[("STORE_BACKEND", "memory")]));
        assert_matches!(result, Err(ConfigError::Missing("ACCESS_TOKEN_SECRET")));
    }

    #[test]
    fn postgres_requires_credentials_without_url() {
        let result = ServerConfig::from_lookup(lookup_from(&[("ACCESS_TOKEN_SECRET", "s")]));
        assert_matches!(result, Err(ConfigError::Missing("DB_USER")));
    }

    #[test]
    fn postgres_parts_are_read() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("ACCESS_TOKEN_SECRET", "s"),
            ("DB_USER", "blogger"),
            ("DB_PASSWORD", "p@ss:word"),
            ("DB_HOST", "db.internal"),
            ("NODE_ENV", "production"),
            ("PORT", "8080"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert!(config.mode.is_production());
        let StoreConfig::Postgres(pg) = config.store else {
            panic!("expected postgres store");
        };
        assert_eq!(pg.user, "blogger");
        assert_eq!(pg.password, "p@ss:word");
        assert_eq!(pg.host, "db.internal");
        assert_eq!(pg.database, "blog");
        assert!(!format!("{pg:?}").contains("p@ss:word"));
    }

    #[test]
    fn invalid_port_is_reported() {
        let result = ServerConfig::from_lookup(lookup_from(&[
            ("ACCESS_TOKEN_SECRET", "s"),
            ("STORE_BACKEND", "memory"),
            ("PORT", "eighty"),
        ]));
        assert_matches!(result, Err(ConfigError::Invalid { name: "PORT", .. }));
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let result = ServerConfig::from_lookup(lookup_from(&[
            ("ACCESS_TOKEN_SECRET", "s"),
            ("STORE_BACKEND", "mongo"),
        ]));
        assert_matches!(result, Err(ConfigError::Invalid { name: "STORE_BACKEND", .. }));
    }

    #[test]
    fn out_of_range_session_ttl_fails_startup() {
        for ttl in ["-1", "0", "200000000000000"] {
            let result = ServerConfig::from_lookup(lookup_from(&[
                ("ACCESS_TOKEN_SECRET", "s"),
                ("STORE_BACKEND", "memory"),
                ("SESSION_TTL_DAYS", ttl),
            ]));
            assert_matches!(
                result,
                Err(ConfigError::Invalid { name: "SESSION_TTL_DAYS", .. }),
                "ttl {ttl}"
            );
        }
    }

    #[test]
    fn only_exact_production_enables_production_mode() {
        assert!(DeploymentMode::from_node_env(Some("production")).is_production());
        assert!(!DeploymentMode::from_node_env(Some("Production")).is_production());
        assert!(!DeploymentMode::from_node_env(None).is_production());
    }
}
