//! Detailed per-player rendering
//!
//! One numbered block per record with every field, including the
//! expiration date that the table leaves out.

use prettytable::{format, Cell, Row, Table};
use crate::core::record::PlayerRecord;

const MISSING: &str = "N/A";

/// Ratings joined as `category value` pairs, `N/A` when none is known
fn ratings_text(record: &PlayerRecord) -> String {
    let known: Vec<String> = record
        .ratings()
        .categories()
        .iter()
        .filter_map(|(category, value)| value.map(|v| format!("{} {}", category, v)))
        .collect();

    if known.is_empty() {
        MISSING.to_string()
    } else {
        known.join(", ")
    }
}

fn or_missing(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => MISSING,
    }
}

/// Render the detail block of one record
pub fn render_detail(index: usize, record: &PlayerRecord) -> String {
    let name = if record.name().is_empty() { "Unknown" } else { record.name() };

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);

    let ratings = ratings_text(record);
    let fields = [
        ("ID", or_missing(Some(record.member_id()))),
        ("State", or_missing(record.state())),
        ("Ratings", ratings.as_str()),
        ("Expiration", or_missing(record.expiration_date())),
    ];
    for (label, value) in fields {
        table.add_row(Row::new(vec![Cell::new(label), Cell::new(value)]));
    }

    format!("{}. {}\n{}", index, name, table)
}

/// Render every record, numbered from 1
pub fn render_details(records: &[PlayerRecord]) -> String {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| render_detail(i + 1, record))
        .collect::<Vec<_>>()
        .join("\n")
}
