//! Document traversal for standings tables
//!
//! The extractor only needs one capability from a parsed page: given the id of
//! a container element, list the row and cell elements inside its table bodies
//! in document order, each with its `data-stat` marker and trimmed text.
//! [`StandingsDocument`] is that capability; [`HtmlDocument`] provides it on
//! top of `scraper`.

use scraper::{ElementRef, Html};

/// Role of a cell, taken from its `data-stat` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    /// Merged header cell naming the division for the following rows
    Division,
    /// Team name cell; starts a new record
    Team,
    /// Games won
    Wins,
    /// Games lost
    Losses,
    /// Anything else (points, SRS, ties, ...)
    Other,
}

impl Stat {
    /// Maps a `data-stat` value to its role
    pub fn from_marker(marker: &str) -> Self {
        match marker {
            "onecell" => Stat::Division,
            "team" => Stat::Team,
            "wins" => Stat::Wins,
            "losses" => Stat::Losses,
            _ => Stat::Other,
        }
    }
}

/// One row or cell element from a standings table body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCell {
    /// Raw `data-stat` attribute, if the element carries one
    pub stat: Option<String>,
    /// Text content with surrounding whitespace removed
    pub text: String,
}

impl StatCell {
    pub fn new(stat: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            stat: stat.map(str::to_string),
            text: text.into(),
        }
    }

    /// The role of this cell; elements without a marker are [`Stat::Other`]
    pub fn role(&self) -> Stat {
        self.stat.as_deref().map_or(Stat::Other, Stat::from_marker)
    }
}

/// A page that can be queried for standings cells
pub trait StandingsDocument {
    /// Returns the cells under the element whose `id` equals `container_id`,
    /// or `None` when no such element exists.
    fn stat_cells(&self, container_id: &str) -> Option<Vec<StatCell>>;
}

/// A parsed HTML page
///
/// Parsing never fails: malformed markup is repaired by the HTML5 parser the
/// same way a browser would.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    fn find_by_id(&self, id: &str) -> Option<ElementRef<'_>> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().attr("id") == Some(id))
    }
}

impl StandingsDocument for HtmlDocument {
    fn stat_cells(&self, container_id: &str) -> Option<Vec<StatCell>> {
        let container = self.find_by_id(container_id)?;

        let cells = container
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .filter(|el| matches!(el.value().name(), "tr" | "td" | "th"))
            .filter(|el| in_table_body(*el, container))
            .map(|el| {
                let text: String = el.text().collect();
                StatCell::new(el.value().attr("data-stat"), text.trim())
            })
            .collect();

        Some(cells)
    }
}

/// Whether `el` sits inside a `tbody`, so header rows in `thead` are skipped
fn in_table_body(el: ElementRef<'_>, container: ElementRef<'_>) -> bool {
    for ancestor in el.ancestors() {
        if let Some(element) = ancestor.value().as_element() {
            if element.name() == "tbody" {
                return true;
            }
        }
        if ancestor == *container {
            break;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
        <table id="AFC">
          <thead><tr><th data-stat="team">Tm</th><th data-stat="wins">W</th></tr></thead>
          <tbody>
            <tr class="thead onecell"><td data-stat="onecell" colspan="13"> AFC East </td></tr>
            <tr><th data-stat="team"><a href="/teams/mia/2023.htm">Miami Dolphins</a>*</th>
                <td data-stat="wins">11</td><td data-stat="losses">6</td><td data-stat="points">496</td></tr>
          </tbody>
        </table>
        </body></html>
    "#;

    #[test]
    fn test_stat_from_marker() {
        assert_eq!(Stat::from_marker("onecell"), Stat::Division);
        assert_eq!(Stat::from_marker("team"), Stat::Team);
        assert_eq!(Stat::from_marker("wins"), Stat::Wins);
        assert_eq!(Stat::from_marker("losses"), Stat::Losses);
        assert_eq!(Stat::from_marker("win_loss_perc"), Stat::Other);
    }

    #[test]
    fn test_cell_without_marker_is_other() {
        assert_eq!(StatCell::new(None, "x").role(), Stat::Other);
    }

    #[test]
    fn test_missing_container_returns_none() {
        let doc = HtmlDocument::parse(PAGE);
        assert!(doc.stat_cells("NFC").is_none());
    }

    #[test]
    fn test_cells_in_document_order_with_trimmed_text() {
        let doc = HtmlDocument::parse(PAGE);
        let cells = doc.stat_cells("AFC").expect("AFC table should exist");

        let marked: Vec<(&str, &str)> = cells
            .iter()
            .filter_map(|c| c.stat.as_deref().map(|s| (s, c.text.as_str())))
            .collect();

        assert_eq!(
            marked,
            vec![
                ("onecell", "AFC East"),
                ("team", "Miami Dolphins*"),
                ("wins", "11"),
                ("losses", "6"),
                ("points", "496"),
            ]
        );
    }

    #[test]
    fn test_header_rows_are_skipped() {
        let doc = HtmlDocument::parse(PAGE);
        let cells = doc.stat_cells("AFC").unwrap();
        assert!(!cells.iter().any(|c| c.text == "Tm"));
    }

    #[test]
    fn test_rows_are_listed_before_their_cells() {
        let doc = HtmlDocument::parse(PAGE);
        let cells = doc.stat_cells("AFC").unwrap();

        // The division row itself has no marker and comes first
        assert_eq!(cells[0].stat, None);
        assert_eq!(cells[0].text, "AFC East");
        assert_eq!(cells[1].role(), Stat::Division);
    }

    #[test]
    fn test_malformed_markup_does_not_fail() {
        let doc = HtmlDocument::parse("<table id='AFC'><tr><td data-stat='team'>Jets<td data-stat='wins'>7");
        let cells = doc.stat_cells("AFC").unwrap();

        let roles: Vec<Stat> = cells.iter().map(StatCell::role).collect();
        assert!(roles.contains(&Stat::Team));
        assert!(roles.contains(&Stat::Wins));
    }

    #[test]
    fn test_garbage_input_has_no_container() {
        let doc = HtmlDocument::parse("<<<not html at all>>>");
        assert!(doc.stat_cells("AFC").is_none());
    }
}
