//! Configuration module.
//!
//! Loads settings from environment variables (and a `.env` file, if present).

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::cache::DEFAULT_TTL_SECS;
use crate::data::source::DEFAULT_STANDINGS_URL;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Port the HTTP server listens on
    pub port: u16,
    /// Standings page to scrape
    pub standings_url: String,
    /// Saved page to serve instead of fetching `standings_url`
    pub fixture: Option<PathBuf>,
    /// How long a rendered page is served from cache
    pub cache_ttl: Duration,
    /// Timeout for the upstream request
    pub fetch_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            standings_url: DEFAULT_STANDINGS_URL.to_string(),
            fixture: None,
            cache_ttl: Duration::from_secs(DEFAULT_TTL_SECS),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset variables take their defaults; values that fail to parse are
    /// logged and also fall back to the default.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            port: parse_var(&lookup, "PORT").unwrap_or(defaults.port),
            standings_url: lookup("STANDINGS_URL")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.standings_url),
            fixture: lookup("STANDINGS_FIXTURE")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            cache_ttl: parse_var(&lookup, "CACHE_TTL_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.cache_ttl),
            fetch_timeout: parse_var(&lookup, "FETCH_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.fetch_timeout),
        }
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(%key, value = %raw, "Ignoring unparseable setting");
            None
        }
    }
}
