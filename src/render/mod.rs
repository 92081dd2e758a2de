//! Presentation of grouped standings
//!
//! - `html` - The cached HTML tables served to browsers
//! - `text` - A plain-text table for terminal output

pub mod html;
pub mod text;

pub use html::{render_conference, render_page, NO_DATA_PLACEHOLDER};
pub use text::render_text;

use crate::data::StandingRecord;

/// A presented column of a [`StandingRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Team,
    Wins,
    Losses,
}

impl Field {
    /// Columns in display order; `division` is shown as a label row instead
    pub const ALL: [Field; 3] = [Field::Team, Field::Wins, Field::Losses];

    pub fn name(self) -> &'static str {
        match self {
            Field::Team => "team",
            Field::Wins => "wins",
            Field::Losses => "losses",
        }
    }

    /// Column heading; the team column is left blank
    pub fn header(self) -> String {
        match self {
            Field::Team => String::new(),
            _ => capitalize(self.name()),
        }
    }

    pub fn value(self, record: &StandingRecord) -> String {
        match self {
            Field::Team => record.team.clone(),
            Field::Wins => record.wins.to_string(),
            Field::Losses => record.losses.to_string(),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
