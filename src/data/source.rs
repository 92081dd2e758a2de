//! Upstream standings page source
//!
//! The page is either fetched live from the stats site or read from a saved
//! copy on disk. Either way the rest of the pipeline only sees the raw HTML.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

/// Default standings page
pub const DEFAULT_STANDINGS_URL: &str = "https://www.pro-football-reference.com/years/2023";

/// Errors that can occur when obtaining the standings page
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Upstream returned {status} for {url}")]
    Status { status: StatusCode, url: String },

    /// Saved page could not be read or written
    #[error("Failed to access fixture {path}: {source}")]
    Fixture {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where the raw standings page comes from
#[derive(Debug, Clone)]
pub enum StandingsSource {
    /// Fetch the page over HTTP
    Live {
        /// HTTP client for making requests
        client: Client,
        /// Page URL
        url: String,
    },
    /// Read a previously saved page
    Fixture {
        /// Path to the saved HTML file
        path: PathBuf,
    },
}

impl StandingsSource {
    /// Creates a live source with a request timeout
    pub fn live(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("nflstats/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(StandingsSource::Live {
            client,
            url: url.into(),
        })
    }

    /// Creates a source that reads a saved page
    pub fn fixture(path: impl Into<PathBuf>) -> Self {
        StandingsSource::Fixture { path: path.into() }
    }

    /// Human-readable origin, for logging
    pub fn describe(&self) -> String {
        match self {
            StandingsSource::Live { url, .. } => url.clone(),
            StandingsSource::Fixture { path } => path.display().to_string(),
        }
    }

    /// Obtains the raw HTML of the standings page
    ///
    /// # Returns
    /// * `Ok(String)` - The page body
    /// * `Err(FetchError)` - If the request fails, the status is not 2xx,
    ///   or the fixture cannot be read
    pub async fn fetch_html(&self) -> Result<String, FetchError> {
        match self {
            StandingsSource::Live { client, url } => {
                debug!(%url, "Fetching standings page");
                let response = client.get(url).send().await?;

                let status = response.status();
                if !status.is_success() {
                    return Err(FetchError::Status {
                        status,
                        url: url.clone(),
                    });
                }

                Ok(response.text().await?)
            }
            StandingsSource::Fixture { path } => {
                debug!(path = %path.display(), "Reading standings fixture");
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| FetchError::Fixture {
                        path: path.clone(),
                        source,
                    })
            }
        }
    }
}

/// Saves a fetched page so it can be replayed later as a fixture
pub async fn save_html(path: &Path, html: &str) -> Result<(), FetchError> {
    tokio::fs::write(path, html)
        .await
        .map_err(|source| FetchError::Fixture {
            path: path.to_path_buf(),
            source,
        })
}
