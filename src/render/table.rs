//! Fixed-width table rendering
//!
//! Every line of a table has the same length whatever the content:
//! fields are trimmed, fit into their column and padded with spaces.

use crate::core::normalize::clean_text;
use crate::core::record::PlayerRecord;

/// Width of the name column; names are fit into one less than this
pub const NAME_WIDTH: usize = 35;
pub const ID_WIDTH: usize = 12;
pub const STATE_WIDTH: usize = 6;
pub const RATING_WIDTH: usize = 10;

/// Notice rendered instead of a table when there are no records
pub const NO_PLAYERS: &str = "No players found.";

const ELLIPSIS: &str = "...";

/// How text longer than its column is shortened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truncation {
    /// Cut at the column width
    Hard,
    /// Cut early and end with `...`
    Ellipsis,
}

impl Truncation {
    /// Shorten `text` to at most `width` characters
    pub fn fit(&self, text: &str, width: usize) -> String {
        if text.chars().count() <= width {
            return text.to_string();
        }

        match self {
            Truncation::Ellipsis if width > ELLIPSIS.len() => {
                let kept: String = text.chars().take(width - ELLIPSIS.len()).collect();
                format!("{}{}", kept, ELLIPSIS)
            }
            _ => text.chars().take(width).collect(),
        }
    }
}

/// Table conventions, applied uniformly to a whole rendering call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStyle {
    /// `ID` header, 92-column rules, ellipsis, missing state as `N/A`
    #[default]
    Compact,
    /// `Member ID` header, 120-column rules, hard cut, missing state empty
    Wide,
}

impl TableStyle {
    pub fn id_label(&self) -> &'static str {
        match self {
            TableStyle::Compact => "ID",
            TableStyle::Wide => "Member ID",
        }
    }

    /// Width of the `=` rules bounding the table
    pub fn rule_width(&self) -> usize {
        match self {
            TableStyle::Compact => 92,
            TableStyle::Wide => 120,
        }
    }

    pub fn truncation(&self) -> Truncation {
        match self {
            TableStyle::Compact => Truncation::Ellipsis,
            TableStyle::Wide => Truncation::Hard,
        }
    }

    /// Text shown for an absent state
    pub fn missing_state(&self) -> &'static str {
        match self {
            TableStyle::Compact => "N/A",
            TableStyle::Wide => "",
        }
    }

    pub fn rule(&self) -> String {
        "=".repeat(self.rule_width())
    }
}

/// Pad each cell to its width and join with single spaces
fn layout(cells: [(&str, usize); 6]) -> String {
    cells
        .iter()
        .map(|(text, width)| format!("{:<width$}", text, width = *width))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Header line of a table
pub fn render_header(style: TableStyle) -> String {
    layout([
        ("Name", NAME_WIDTH),
        (style.id_label(), ID_WIDTH),
        ("State", STATE_WIDTH),
        ("Regular", RATING_WIDTH),
        ("Quick", RATING_WIDTH),
        ("Blitz", RATING_WIDTH),
    ])
}

/// Line of a table for one record
pub fn render_row(record: &PlayerRecord, style: TableStyle) -> String {
    let cut = style.truncation();
    let fit = |value: Option<&str>, width: usize| cut.fit(&clean_text(value.unwrap_or("")), width);

    let name = fit(Some(record.name()), NAME_WIDTH - 1);
    let member_id = fit(Some(record.member_id()), ID_WIDTH);
    let state = fit(record.state().or(Some(style.missing_state())), STATE_WIDTH);
    let ratings = record.ratings();
    let regular = fit(ratings.regular.as_deref(), RATING_WIDTH);
    let quick = fit(ratings.quick.as_deref(), RATING_WIDTH);
    let blitz = fit(ratings.blitz.as_deref(), RATING_WIDTH);

    layout([
        (name.as_str(), NAME_WIDTH),
        (member_id.as_str(), ID_WIDTH),
        (state.as_str(), STATE_WIDTH),
        (regular.as_str(), RATING_WIDTH),
        (quick.as_str(), RATING_WIDTH),
        (blitz.as_str(), RATING_WIDTH),
    ])
}

/// Render records as a table
///
/// Produces the header, a rule, one line per record and a closing
/// rule, or the single [`NO_PLAYERS`] line when `records` is empty.
pub fn render_table(records: &[PlayerRecord], style: TableStyle) -> String {
    if records.is_empty() {
        return NO_PLAYERS.to_string();
    }

    let rule = style.rule();
    let mut lines = Vec::with_capacity(records.len() + 3);
    lines.push(render_header(style));
    lines.push(rule.clone());
    lines.extend(records.iter().map(|r| render_row(r, style)));
    lines.push(rule);
    lines.join("\n")
}

/// Closing line reporting how many records were rendered
pub fn summary_line(count: usize) -> String {
    format!("Found {} player(s)", count)
}
