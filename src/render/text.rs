//! Plain-text standings table for the terminal

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::data::StandingRecord;

/// Printed when a conference has no teams
pub const NOT_AVAILABLE: &str = "Standings not available.";

#[derive(Tabled)]
struct StandingRow<'a> {
    team: &'a str,
    division: &'a str,
    wins: u32,
    losses: u32,
}

impl<'a> From<&'a StandingRecord> for StandingRow<'a> {
    fn from(record: &'a StandingRecord) -> Self {
        Self {
            team: &record.team,
            division: &record.division,
            wins: record.wins,
            losses: record.losses,
        }
    }
}

/// Renders records as a boxed table, one row per team
///
/// Counts are right-aligned.
pub fn render_text(records: &[StandingRecord]) -> String {
    if records.is_empty() {
        return format!("{NOT_AVAILABLE}\n");
    }

    let mut table = Table::new(records.iter().map(StandingRow::from));
    table
        .with(Style::ascii())
        .modify(Columns::new(2..), Alignment::right());

    format!("{table}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_with<'a>(text: &'a str, needle: &str) -> &'a str {
        text.lines()
            .find(|l| l.contains(needle))
            .unwrap_or_else(|| panic!("no line containing {needle:?} in:\n{text}"))
    }

    #[test]
    fn test_empty_records() {
        assert_eq!(render_text(&[]), "Standings not available.\n");
    }

    #[test]
    fn test_table_has_header_and_rows() {
        let records = vec![
            StandingRecord::new("Team A", "AFC East").with_record(10, 7),
            StandingRecord::new("Team B", "AFC East").with_record(9, 8),
        ];

        let text = render_text(&records);

        assert!(text.starts_with('+'));
        assert!(text.ends_with("+\n"));
        let header = line_with(&text, "team");
        assert!(header.contains("division") && header.contains("wins") && header.contains("losses"));
        assert!(line_with(&text, "Team A").contains("| AFC East |"));
        assert!(text.find("Team A").unwrap() < text.find("Team B").unwrap());
    }

    #[test]
    fn test_counts_are_right_aligned() {
        let records = vec![
            StandingRecord::new("Team A", "AFC East").with_record(10, 7),
            StandingRecord::new("Team B", "AFC East").with_record(9, 8),
        ];

        let text = render_text(&records);

        assert!(line_with(&text, "Team A").contains("|   10 |      7 |"));
        assert!(line_with(&text, "Team B").contains("|    9 |      8 |"));
    }

    #[test]
    fn test_columns_widen_for_long_names() {
        let records = vec![StandingRecord::new("Jacksonville Jaguars", "AFC South")];

        let text = render_text(&records);
        let widths: Vec<usize> = text.lines().map(|l| l.chars().count()).collect();

        assert!(widths.iter().all(|w| *w == widths[0]));
        assert!(text.contains("| Jacksonville Jaguars |"));
    }

    #[test]
    fn test_combining_marks_keep_columns_aligned() {
        // "Rene\u{301}" displays as four columns but is five chars
        let records = vec![
            StandingRecord::new("Abcd", "East"),
            StandingRecord::new("Rene\u{301}", "East"),
        ];

        let text = render_text(&records);
        let plain = line_with(&text, "Abcd").chars().count();
        let accented = line_with(&text, "Rene\u{301}").chars().count();

        assert_eq!(accented, plain + 1);
    }
}
