//! Command-line interface parsing for the standings server
//!
//! Flags override the environment configuration. Without `--once` the binary
//! serves the standings over HTTP; with it, the standings are rendered a
//! single time and written to stdout.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::config::Config;

/// Error types for CLI argument handling
#[derive(Debug, Error)]
pub enum CliError {
    /// Output options only make sense for a one-shot render
    #[error("--{0} requires --once")]
    RequiresOnce(&'static str),
}

/// Output format for `--once`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The HTML page served at /standings
    #[default]
    Html,
    /// A plain-text table per conference
    Text,
    /// Extracted standings as JSON
    Json,
}

/// NFL Stats API - scrape conference standings and serve them as HTML
#[derive(Parser, Debug)]
#[command(name = "nflstats")]
#[command(about = "Scrape NFL conference standings and serve them as a cached HTML table")]
#[command(version)]
pub struct Cli {
    /// Read the standings page from a saved HTML file instead of fetching it
    #[arg(long, value_name = "PATH")]
    pub fixture: Option<PathBuf>,

    /// Standings page to fetch
    #[arg(long, value_name = "URL", conflicts_with = "fixture")]
    pub url: Option<String>,

    /// Port to listen on
    #[arg(long, short)]
    pub port: Option<u16>,

    /// How long a rendered page is cached, in seconds
    #[arg(long, value_name = "SECS")]
    pub ttl_secs: Option<u64>,

    /// Render the standings once to stdout instead of serving them
    #[arg(long)]
    pub once: bool,

    /// Output format for --once
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Also save the fetched page to PATH, for later use with --fixture
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,
}

impl Cli {
    /// Applies command-line overrides on top of `config`
    ///
    /// # Returns
    /// * `Ok(Config)` with the overrides applied
    /// * `Err(CliError)` if output options were given without `--once`
    pub fn apply(&self, mut config: Config) -> Result<Config, CliError> {
        if !self.once {
            if self.format.is_some() {
                return Err(CliError::RequiresOnce("format"));
            }
            if self.save.is_some() {
                return Err(CliError::RequiresOnce("save"));
            }
        }

        if let Some(url) = &self.url {
            config.standings_url = url.clone();
            config.fixture = None;
        }
        if let Some(fixture) = &self.fixture {
            config.fixture = Some(fixture.clone());
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(ttl) = self.ttl_secs {
            config.cache_ttl = Duration::from_secs(ttl);
        }

        Ok(config)
    }

    /// The output format, defaulting to HTML
    pub fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["nflstats"]);
        assert!(cli.fixture.is_none());
        assert!(cli.url.is_none());
        assert!(!cli.once);
        assert_eq!(cli.output_format(), OutputFormat::Html);
    }

    #[test]
    fn test_cli_parse_once_with_format() {
        let cli = Cli::parse_from(["nflstats", "--once", "--format", "json"]);
        assert!(cli.once);
        assert_eq!(cli.output_format(), OutputFormat::Json);
    }

    #[test]
    fn test_cli_fixture_conflicts_with_url() {
        let result = Cli::try_parse_from(["nflstats", "--fixture", "a.html", "--url", "http://x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let result = Cli::try_parse_from(["nflstats", "--once", "--format", "csv"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_without_overrides_keeps_config() {
        let cli = Cli::parse_from(["nflstats"]);
        let config = cli.apply(Config::default()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_apply_overrides() {
        let cli = Cli::parse_from([
            "nflstats",
            "--fixture",
            "api/test.html",
            "--port",
            "8080",
            "--ttl-secs",
            "30",
        ]);

        let config = cli.apply(Config::default()).unwrap();

        assert_eq!(config.fixture, Some(PathBuf::from("api/test.html")));
        assert_eq!(config.port, 8080);
        assert_eq!(config.cache_ttl, Duration::from_secs(30));
    }

    #[test]
    fn test_url_override_clears_env_fixture() {
        let env_config = Config {
            fixture: Some(PathBuf::from("from-env.html")),
            ..Config::default()
        };
        let cli = Cli::parse_from(["nflstats", "--url", "http://localhost:9000/"]);

        let config = cli.apply(env_config).unwrap();

        assert_eq!(config.standings_url, "http://localhost:9000/");
        assert!(config.fixture.is_none());
    }

    #[test]
    fn test_format_requires_once() {
        let cli = Cli::parse_from(["nflstats", "--format", "text"]);
        let err = cli.apply(Config::default()).unwrap_err();
        assert!(err.to_string().contains("--format requires --once"));
    }

    #[test]
    fn test_save_requires_once() {
        let cli = Cli::parse_from(["nflstats", "--save", "page.html"]);
        assert!(cli.apply(Config::default()).is_err());
    }
}
