/**
 * Server Configuration
 *
 * Settings are read from environment variables (after `.env` has been
 * loaded by the binary). A missing, unparsable or out-of-range value is logged and
 * replaced by its default, so the server always starts with a usable
 * configuration.
 *
 * | variable           | default             | range       |
 * |--------------------|---------------------|-------------|
 * | `SERVER_PORT`      | `8080`              |             |
 * | `DATABASE_URL`     | `sqlite://users.db` |             |
 * | `PRODUCTION`       | `false`             |             |
 * | `SESSION_TTL_SECS` | `86400`             | 1..=1 year  |
 * | `BCRYPT_COST`      | `12`                | 4..=31      |
 * | `STATIC_DIR`       | `static`            |             |
 */

use std::fmt::Display;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::backend::auth::sessions::MAX_SESSION_TTL;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE_URL: &str = "sqlite://users.db";
const DEFAULT_SESSION_TTL_SECS: u64 = 24 * 60 * 60;
const DEFAULT_STATIC_DIR: &str = "static";

/// Everything the server needs to start
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on, on all interfaces
    pub port: u16,
    /// SQLite URL; the file is created if missing
    pub database_url: String,
    /// Marks the session cookie `Secure`
    pub production: bool,
    /// Lifetime of a session from the moment it is created
    pub session_ttl: Duration,
    /// bcrypt cost for new password hashes
    pub bcrypt_cost: u32,
    /// Directory served at `/`
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            production: false,
            session_ttl: Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
            bcrypt_cost: bcrypt::DEFAULT_COST,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let mut bcrypt_cost = try_load(&lookup, "BCRYPT_COST", defaults.bcrypt_cost);
        if !(4..=31).contains(&bcrypt_cost) {
            tracing::warn!(
                "BCRYPT_COST {} is outside 4..=31, using default: {}",
                bcrypt_cost,
                defaults.bcrypt_cost
            );
            bcrypt_cost = defaults.bcrypt_cost;
        }

        let mut ttl_secs = try_load(&lookup, "SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS);
        if !(1..=MAX_SESSION_TTL.as_secs()).contains(&ttl_secs) {
            tracing::warn!(
                "SESSION_TTL_SECS {} is outside 1..={}, using default: {}",
                ttl_secs,
                MAX_SESSION_TTL.as_secs(),
                DEFAULT_SESSION_TTL_SECS
            );
            ttl_secs = DEFAULT_SESSION_TTL_SECS;
        }

        Self {
            port: try_load(&lookup, "SERVER_PORT", defaults.port),
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            production: lookup("PRODUCTION").is_some_and(|v| parse_flag(&v)),
            session_ttl: Duration::from_secs(ttl_secs),
            bcrypt_cost,
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        tracing::debug!("{key} not set, using default: {default}");
        return default;
    };

    raw.trim().parse().unwrap_or_else(|e| {
        tracing::warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
