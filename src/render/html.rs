//! HTML rendering of conference standings
//!
//! Each conference becomes a titled table with one bold label row per
//! division, followed by that division's teams. Every value taken from the
//! upstream page is escaped before it is inserted.

use crate::data::{ConferenceStandings, DivisionGroup};

use super::Field;

/// Shown in place of a conference table when it has no teams
pub const NO_DATA_PLACEHOLDER: &str = "<p>No data available</p>";

const PAGE_OPEN: &str = "<div style='display: flex; gap: 40px; justify-content: center;'>";
const CELL_STYLE: &str = "padding: 5px;";

/// Renders one conference as a titled table
///
/// Returns [`NO_DATA_PLACEHOLDER`] when `groups` holds no teams.
pub fn render_conference(groups: &[DivisionGroup], header: &str) -> String {
    if groups.iter().all(|g| g.teams.is_empty()) {
        return NO_DATA_PLACEHOLDER.to_string();
    }

    let mut table = String::from("<table>");
    table.push_str(&header_row());

    let colspan = Field::ALL.len();
    for (i, group) in groups.iter().enumerate() {
        table.push_str(&format!(
            "<tr><td style='font-weight: bold;' colspan='{}'>{}</td></tr>",
            colspan,
            escape(&group.name)
        ));

        for record in &group.teams {
            table.push_str("<tr>");
            for field in Field::ALL {
                table.push_str(&format!(
                    "<td style=\"{}\">{}</td>",
                    CELL_STYLE,
                    escape(&field.value(record))
                ));
            }
            table.push_str("</tr>");
        }

        if i + 1 < groups.len() {
            table.push_str("<tr><td></td></tr>");
        }
    }
    table.push_str("</table>");

    format!(
        "<div class='conference_wrapper'><h1 style=\"font-size: 28px;\">{}</h1>{}</div>",
        escape(header),
        table
    )
}

/// Renders every conference side by side
pub fn render_page(conferences: &[ConferenceStandings]) -> String {
    let mut page = String::from(PAGE_OPEN);
    for standings in conferences {
        page.push_str(&render_conference(
            &standings.divisions,
            standings.conference.id(),
        ));
    }
    page.push_str("</div>");
    page
}

fn header_row() -> String {
    let mut row = String::from("<tr>");
    for field in Field::ALL {
        match field {
            Field::Team => row.push_str("<th></th>"),
            _ => row.push_str(&format!(
                "<th style=\"{}\">{}</th>",
                CELL_STYLE,
                escape(&field.header())
            )),
        }
    }
    row.push_str("</tr>");
    row
}

/// Escapes text for use in element content or quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
