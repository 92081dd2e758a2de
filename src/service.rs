//! Standings pipeline
//!
//! Ties the pieces together: on a cache miss the upstream page is fetched,
//! each conference is extracted, grouped and rendered, and the combined page
//! is cached under [`STANDINGS_CACHE_KEY`].

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::cache::CacheManager;
use crate::data::{
    extract, group_by_division, Conference, ConferenceStandings, FetchError, HtmlDocument,
    StandingsSource,
};
use crate::render::render_page;

/// Cache key for the rendered standings page
pub const STANDINGS_CACHE_KEY: &str = "standings";

/// Extracts and groups every conference from a raw page
///
/// Conferences whose table is missing are logged and come back with no
/// divisions, so they render as the "no data" placeholder.
pub fn conferences(html: &str) -> Vec<ConferenceStandings> {
    let document = HtmlDocument::parse(html);

    Conference::ALL
        .iter()
        .map(|&conference| {
            let records = extract(conference, &document).unwrap_or_else(|| {
                warn!(%conference, "Standings table with ID {} can not be found", conference);
                Vec::new()
            });
            debug!(%conference, teams = records.len(), "Extracted standings");

            ConferenceStandings {
                conference,
                divisions: group_by_division(records),
            }
        })
        .collect()
}

/// Renders the full standings page from a raw upstream document
pub fn render_standings(html: &str) -> String {
    render_page(&conferences(html))
}

/// Serves the rendered standings page, regenerating it when the cache is cold
#[derive(Debug)]
pub struct StandingsService {
    source: StandingsSource,
    cache: Arc<CacheManager>,
    /// Held while regenerating so concurrent misses fetch upstream only once
    refresh: Mutex<()>,
}

impl StandingsService {
    pub fn new(source: StandingsSource, cache: Arc<CacheManager>) -> Self {
        Self {
            source,
            cache,
            refresh: Mutex::new(()),
        }
    }

    pub fn cache(&self) -> &Arc<CacheManager> {
        &self.cache
    }

    /// Returns the rendered standings page
    ///
    /// # Returns
    /// * `Ok(Arc<str>)` - The cached page, or a freshly rendered one
    /// * `Err(FetchError)` - If the page had to be regenerated and the
    ///   upstream document could not be obtained; nothing is cached then
    pub async fn standings(&self) -> Result<Arc<str>, FetchError> {
        if let Some(cached) = self.cache.read(STANDINGS_CACHE_KEY) {
            debug!("Found cached standings");
            return Ok(cached);
        }

        let _guard = self.refresh.lock().await;

        // Another request may have refreshed while we waited
        if let Some(cached) = self.cache.read(STANDINGS_CACHE_KEY) {
            debug!("Standings refreshed by a concurrent request");
            return Ok(cached);
        }

        info!(source = %self.source.describe(), "Regenerating standings");
        let html = self.source.fetch_html().await.map_err(|e| {
            error!(error = %e, "Error getting standings page");
            e
        })?;

        let page: Arc<str> = render_standings(&html).into();
        self.cache.write(STANDINGS_CACHE_KEY, Arc::clone(&page));
        Ok(page)
    }
}
