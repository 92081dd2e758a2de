//! NFL Stats API - serve scraped conference standings as HTML
//!
//! Fetches the standings page (or reads a saved copy), renders both
//! conferences as tables and serves the result from an in-memory cache.

use std::io::{self, Write};
use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nflstats::cache::CacheManager;
use nflstats::cli::{Cli, OutputFormat};
use nflstats::config::Config;
use nflstats::data::{save_html, StandingsSource};
use nflstats::render::render_text;
use nflstats::server;
use nflstats::service::{conferences, render_standings, StandingsService};

/// Renders the standings a single time and writes them to stdout
async fn run_once(cli: &Cli, source: &StandingsSource) -> Result<(), Box<dyn std::error::Error>> {
    let html = source.fetch_html().await?;

    if let Some(path) = &cli.save {
        save_html(path, &html).await?;
        info!(path = %path.display(), "Saved standings page");
    }

    let output = match cli.output_format() {
        OutputFormat::Html => render_standings(&html),
        OutputFormat::Text => conferences(&html)
            .iter()
            .map(|standings| {
                let records: Vec<_> = standings
                    .divisions
                    .iter()
                    .flat_map(|d| d.teams.iter().cloned())
                    .collect();
                format!("{}\n{}", standings.conference, render_text(&records))
            })
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(&conferences(&html))?,
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so --once output stays clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("nflstats=info,tower_http=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = cli.apply(Config::from_env())?;

    let source = match &config.fixture {
        Some(path) => StandingsSource::fixture(path),
        None => StandingsSource::live(&config.standings_url, config.fetch_timeout)?,
    };

    if cli.once {
        return run_once(&cli, &source).await;
    }

    let cache = Arc::new(CacheManager::new(config.cache_ttl));
    info!(
        source = %source.describe(),
        ttl_secs = config.cache_ttl.as_secs(),
        "Standings cache initialized"
    );
    let service = Arc::new(StandingsService::new(source, cache));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    server::serve(addr, service).await?;

    Ok(())
}
