//! Flag and environment configuration
//!
//! Every flag has an `APP_*` environment counterpart. A non-empty
//! environment value wins over the flag; numeric values that fail to parse
//! are ignored and the flag value is kept.

use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use clap::Args;
use thermolog_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use thermolog_server::models::SecretKey;
use thermolog_server::{DbConfig, ServerConfig};

/// Database connection flags
#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// Database host
    #[arg(long, default_value = "localhost")]
    pub db_host: String,

    /// Database port
    #[arg(long, default_value_t = 5432)]
    pub db_port: u16,

    /// Database user
    #[arg(long, default_value = "user")]
    pub db_user: String,

    /// Database password
    #[arg(long, default_value = "")]
    pub db_pass: String,

    /// Database name
    #[arg(long, default_value = "dbname")]
    pub db_name: String,

    /// Maximum pooled connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub db_max_connections: u32,
}

impl DbArgs {
    /// Apply `APP_DB_*` overrides.
    pub fn apply_env<F>(mut self, env: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        override_string(&mut self.db_host, "db-host", "APP_DB_HOST", env, false);
        override_parsed(&mut self.db_port, "db-port", "APP_DB_PORT", env);
        override_string(&mut self.db_user, "db-user", "APP_DB_USER", env, false);
        override_string(&mut self.db_pass, "db-pass", "APP_DB_PASS", env, true);
        override_string(&mut self.db_name, "db-name", "APP_DB_NAME", env, false);
        override_parsed(
            &mut self.db_max_connections,
            "db-max-connections",
            "APP_DB_MAX_CONNECTIONS",
            env,
        );
        self
    }

    pub fn to_config(&self) -> DbConfig {
        DbConfig {
            host: self.db_host.clone(),
            port: self.db_port,
            user: self.db_user.clone(),
            password: self.db_pass.clone(),
            name: self.db_name.clone(),
            max_connections: self.db_max_connections,
        }
    }
}

/// Arguments for the serve command
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Server host
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Server port
    #[arg(long, short = 'p', default_value_t = 8080)]
    pub port: u16,

    /// Shared secret devices send in the X-Secret-Key header
    #[arg(long, default_value = "")]
    pub secret_key: String,

    /// HTML document served at /
    #[arg(long, default_value = "index.html")]
    pub index_path: PathBuf,

    #[command(flatten)]
    pub db: DbArgs,
}

/// Fully resolved serve configuration
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub db: DbConfig,
    pub secret: SecretKey,
    pub index_path: PathBuf,
}

impl ServeArgs {
    /// Apply `APP_*` overrides.
    pub fn apply_env<F>(mut self, env: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        override_string(&mut self.host, "host", "APP_HOST", env, false);
        override_parsed(&mut self.port, "port", "APP_PORT", env);
        override_string(&mut self.secret_key, "secret-key", "APP_SECRET_KEY", env, true);
        if let Some(value) = non_empty(env, "APP_INDEX_PATH") {
            tracing::debug!(value = %value, "flag index-path overridden by env APP_INDEX_PATH");
            self.index_path = PathBuf::from(value);
        }
        self.db = self.db.apply_env(env);
        self
    }

    /// Validate and resolve into settings.
    pub fn into_settings(self) -> Result<Settings> {
        let bind_addr = resolve_bind_addr(&self.host, self.port)?;
        let secret =
            SecretKey::new(&self.secret_key).context("set --secret-key or APP_SECRET_KEY")?;

        Ok(Settings {
            server: ServerConfig { bind_addr },
            db: self.db.to_config(),
            secret,
            index_path: self.index_path,
        })
    }
}

fn resolve_bind_addr(host: &str, port: u16) -> Result<SocketAddr> {
    (host, port)
        .to_socket_addrs()
        .with_context(|| format!("invalid bind address {}:{}", host, port))?
        .next()
        .ok_or_else(|| anyhow!("bind address {}:{} resolved to nothing", host, port))
}

fn non_empty<F>(env: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    env(key).filter(|v| !v.is_empty())
}

fn override_string<F>(target: &mut String, flag: &str, key: &str, env: &F, sensitive: bool)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = non_empty(env, key) {
        let shown = if sensitive { "***" } else { value.as_str() };
        tracing::debug!(value = %shown, "flag {} overridden by env {}", flag, key);
        *target = value;
    }
}

fn override_parsed<T, F>(target: &mut T, flag: &str, key: &str, env: &F)
where
    T: FromStr + std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = non_empty(env, key) else {
        return;
    };
    match raw.parse::<T>() {
        Ok(value) => {
            tracing::debug!(value = %value, "flag {} overridden by env {}", flag, key);
            *target = value;
        }
        Err(_) => {
            tracing::warn!(value = %raw, "ignoring unparsable env {} for flag {}", key, flag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::HashMap;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        serve: ServeArgs,
    }

    fn parse(args: &[&str]) -> ServeArgs {
        let mut argv = vec!["thermolog"];
        argv.extend_from_slice(args);
        TestCli::parse_from(argv).serve
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let args = parse(&[]).apply_env(&env_from(&[]));
        assert_eq!(args.host, "127.0.0.1");
        assert_eq!(args.port, 8080);
        assert_eq!(args.index_path, PathBuf::from("index.html"));
        assert_eq!(args.db.db_host, "localhost");
        assert_eq!(args.db.db_port, 5432);
        assert_eq!(args.db.db_user, "user");
        assert_eq!(args.db.db_name, "dbname");
    }

    #[test]
    fn env_beats_flags() {
        let args = parse(&["--port", "9000", "--db-host", "flaghost", "--secret-key", "flag"])
            .apply_env(&env_from(&[
                ("APP_PORT", "9100"),
                ("APP_DB_HOST", "envhost"),
                ("APP_SECRET_KEY", "envsecret"),
                ("APP_DB_MAX_CONNECTIONS", "12"),
            ]));

        assert_eq!(args.port, 9100);
        assert_eq!(args.db.db_host, "envhost");
        assert_eq!(args.secret_key, "envsecret");
        assert_eq!(args.db.db_max_connections, 12);
    }

    #[test]
    fn empty_or_unparsable_env_keeps_flag() {
        let args = parse(&["--port", "9000", "--db-port", "6000", "--db-user", "flaguser"])
            .apply_env(&env_from(&[
                ("APP_PORT", "not-a-port"),
                ("APP_DB_PORT", "70000"),
                ("APP_DB_USER", ""),
            ]));

        assert_eq!(args.port, 9000);
        assert_eq!(args.db.db_port, 6000);
        assert_eq!(args.db.db_user, "flaguser");
    }

    #[test]
    fn settings_require_secret() {
        let err = parse(&[]).into_settings().unwrap_err();
        assert!(format!("{:#}", err).contains("secret key cannot be empty"));
    }

    #[test]
    fn settings_resolve() {
        let settings = parse(&["--secret-key", "s3cret", "--port", "8181", "--db-pass", "pw"])
            .into_settings()
            .unwrap();

        assert_eq!(settings.server.bind_addr.port(), 8181);
        assert!(settings.secret.matches("s3cret"));
        assert_eq!(settings.db.password, "pw");
    }
}
