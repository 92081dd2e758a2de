//! Core data models for NFL standings
//!
//! This module contains the types extracted from the upstream standings page
//! and the submodules that fetch, parse and group them.

pub mod divisions;
pub mod document;
pub mod source;
pub mod standings;

pub use divisions::group_by_division;
pub use document::{HtmlDocument, StandingsDocument, Stat, StatCell};
pub use source::{save_html, FetchError, StandingsSource};
pub use standings::{extract, extract_standings};

use serde::Serialize;
use std::fmt;

/// Division name used for teams that appear before any division separator
pub const NO_DIVISION: &str = "";

/// Top-level grouping of teams, used as the id of its standings table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Conference {
    /// American Football Conference
    #[serde(rename = "AFC")]
    Afc,
    /// National Football Conference
    #[serde(rename = "NFC")]
    Nfc,
}

impl Conference {
    /// All conferences, in render order
    pub const ALL: [Conference; 2] = [Conference::Afc, Conference::Nfc];

    /// The element id of this conference's table, also used as its label
    pub fn id(self) -> &'static str {
        match self {
            Conference::Afc => "AFC",
            Conference::Nfc => "NFC",
        }
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A single team's line in the conference standings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingRecord {
    /// Team name as shown on the page (playoff markers included)
    pub team: String,
    /// Division the team was listed under, or [`NO_DIVISION`]
    pub division: String,
    /// Games won
    pub wins: u32,
    /// Games lost
    pub losses: u32,
}

impl StandingRecord {
    /// Creates a record with no games recorded yet
    pub fn new(team: impl Into<String>, division: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            division: division.into(),
            wins: 0,
            losses: 0,
        }
    }

    /// Sets the win/loss columns
    pub fn with_record(mut self, wins: u32, losses: u32) -> Self {
        self.wins = wins;
        self.losses = losses;
        self
    }
}

/// The teams of one division, in the order they appeared on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DivisionGroup {
    /// Division name ([`NO_DIVISION`] for unlabelled teams)
    pub name: String,
    /// Teams in source order
    pub teams: Vec<StandingRecord>,
}

/// Extracted and grouped standings for one conference
///
/// `divisions` is empty when the conference table was missing from the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConferenceStandings {
    pub conference: Conference,
    pub divisions: Vec<DivisionGroup>,
}

impl ConferenceStandings {
    /// Total number of teams across all divisions
    pub fn team_count(&self) -> usize {
        self.divisions.iter().map(|d| d.teams.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conference_ids() {
        assert_eq!(Conference::Afc.id(), "AFC");
        assert_eq!(Conference::Nfc.id(), "NFC");
        assert_eq!(Conference::Nfc.to_string(), "NFC");
    }

    #[test]
    fn test_conference_render_order() {
        assert_eq!(Conference::ALL, [Conference::Afc, Conference::Nfc]);
    }

    #[test]
    fn test_standing_record_defaults_to_no_games() {
        let record = StandingRecord::new("Buffalo Bills", "AFC East");

        assert_eq!(record.team, "Buffalo Bills");
        assert_eq!(record.division, "AFC East");
        assert_eq!(record.wins, 0);
        assert_eq!(record.losses, 0);
    }

    #[test]
    fn test_standing_record_serialization() {
        let record = StandingRecord::new("Miami Dolphins", "AFC East").with_record(11, 6);

        let json = serde_json::to_value(&record).expect("Failed to serialize StandingRecord");

        assert_eq!(json["team"], "Miami Dolphins");
        assert_eq!(json["division"], "AFC East");
        assert_eq!(json["wins"], 11);
        assert_eq!(json["losses"], 6);
    }

    #[test]
    fn test_conference_standings_team_count() {
        let standings = ConferenceStandings {
            conference: Conference::Afc,
            divisions: vec![
                DivisionGroup {
                    name: "AFC East".to_string(),
                    teams: vec![
                        StandingRecord::new("Team A", "AFC East"),
                        StandingRecord::new("Team B", "AFC East"),
                    ],
                },
                DivisionGroup {
                    name: "AFC North".to_string(),
                    teams: vec![StandingRecord::new("Team C", "AFC North")],
                },
            ],
        };

        assert_eq!(standings.team_count(), 3);
        let json = serde_json::to_value(&standings).expect("Failed to serialize");
        assert_eq!(json["conference"], "AFC");
    }
}
