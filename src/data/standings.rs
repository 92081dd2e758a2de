//! Standings extraction
//!
//! Walks the cells of a conference table once, carrying the division currently
//! in effect and the record currently being filled in.

use tracing::{debug, warn};

use super::document::{HtmlDocument, StandingsDocument, Stat, StatCell};
use super::{Conference, StandingRecord, NO_DIVISION};

/// State threaded through the extraction fold
#[derive(Debug, Default)]
struct Walk {
    records: Vec<StandingRecord>,
    /// Division set by the last separator, if any
    division: Option<String>,
    /// Index into `records` of the team whose cells are being read
    current: Option<usize>,
}

impl Walk {
    fn step(mut self, cell: &StatCell) -> Self {
        match cell.role() {
            Stat::Division => {
                self.division = Some(cell.text.clone());
                self.current = None;
            }
            Stat::Team => {
                if cell.text.is_empty() {
                    debug!("Empty team cell ignored");
                    self.current = None;
                } else if self.records.iter().any(|r| r.team == cell.text) {
                    warn!(team = %cell.text, "Duplicate team row ignored");
                    self.current = None;
                } else {
                    let division = self.division.as_deref().unwrap_or(NO_DIVISION);
                    self.records.push(StandingRecord::new(cell.text.as_str(), division));
                    self.current = Some(self.records.len() - 1);
                }
            }
            Stat::Wins => {
                if let Some(record) = self.current.and_then(|i| self.records.get_mut(i)) {
                    record.wins = parse_count(&cell.text);
                }
            }
            Stat::Losses => {
                if let Some(record) = self.current.and_then(|i| self.records.get_mut(i)) {
                    record.losses = parse_count(&cell.text);
                }
            }
            Stat::Other => {}
        }
        self
    }
}

/// Parses a wins/losses cell, treating anything that isn't a count as zero
fn parse_count(text: &str) -> u32 {
    text.parse().unwrap_or_else(|_| {
        debug!(value = %text, "Non-numeric standings cell, using 0");
        0
    })
}

/// Extracts the standings of one conference from a parsed page
///
/// Returns `None` when the page has no element with the conference's id.
/// Records come back in the order their team cells appear in the page.
pub fn extract<D: StandingsDocument + ?Sized>(
    conference: Conference,
    document: &D,
) -> Option<Vec<StandingRecord>> {
    let cells = document.stat_cells(conference.id())?;
    let walk = cells.iter().fold(Walk::default(), Walk::step);
    Some(walk.records)
}

/// Parses `html` and extracts the standings of one conference
pub fn extract_standings(conference: Conference, html: &str) -> Option<Vec<StandingRecord>> {
    extract(conference, &HtmlDocument::parse(html))
}
