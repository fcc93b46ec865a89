//! CSV export of report rows

use crate::error::Result;
use crate::reports::types::{is_empty_like, Column, ReportRow};
use csv::{Terminator, WriterBuilder};
use serde_json::Value;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const NO_DATA_WARNING: &str = "Warning: No data to export.";

/// Raw cost text; empty-like costs are written as an empty field
pub fn raw_cost(value: Option<&Value>) -> String {
    if is_empty_like(value) {
        return String::new();
    }

    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn record(row: &ReportRow) -> [String; 5] {
    [
        row.text(Column::Day),
        row.text(Column::Campaign),
        row.text(Column::CampaignIdExternal),
        row.text(Column::Country),
        raw_cost(row.get(Column::Cost)),
    ]
}

/// Write the header and one record per row, CRLF-terminated; returns the row count
pub fn write_csv<W: Write>(rows: &[ReportRow], writer: W) -> Result<usize> {
    let mut csv_writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    csv_writer.write_record(Column::headers())?;
    for row in rows {
        csv_writer.write_record(record(row))?;
    }

    csv_writer.flush()?;
    Ok(rows.len())
}

/// Export rows to a CSV file. Nothing is created when there are no rows.
pub fn export_csv(rows: &[ReportRow], path: &Path) -> Result<Option<usize>> {
    if rows.is_empty() {
        return Ok(None);
    }

    let file = File::create(path)?;
    let count = write_csv(rows, file)?;
    Ok(Some(count))
}
