//! Bordered text table for terminal output

use crate::error::{AppError, Result};
use crate::reports::types::{is_empty_like, Column, ReportRow};
use serde_json::Value;
use std::io::Write;
use unicode_width::UnicodeWidthStr;

pub const NO_DATA: &str = "No data found.";

/// Display cells of one row, in column order
pub type Cells = [String; 5];

/// Cost cell for the table: two decimals, `0.00` when absent or falsy
pub fn format_cost(value: Option<&Value>) -> Result<String> {
    if is_empty_like(value) {
        return Ok("0.00".to_string());
    }

    let amount = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(Value::Bool(true)) => Some(1.0),
        _ => None,
    };

    match amount {
        Some(amount) => Ok(format!("{:.2}", amount)),
        None => Err(AppError::InvalidCost(
            value.map(Value::to_string).unwrap_or_default(),
        )),
    }
}

fn cells(row: &ReportRow) -> Result<Cells> {
    Ok([
        row.text(Column::Day),
        row.text(Column::Campaign),
        row.text(Column::CampaignIdExternal),
        row.text(Column::Country),
        format_cost(row.get(Column::Cost))?,
    ])
}

/// Widest display width per column, headers included
pub fn column_widths(rows: &[Cells]) -> [usize; 5] {
    let mut widths = Column::headers().map(UnicodeWidthStr::width);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }
    widths
}

fn separator(widths: &[usize; 5]) -> String {
    let runs: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    format!("+{}+", runs.join("+"))
}

fn line<S: AsRef<str>>(cells: &[S], widths: &[usize; 5]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let cell = cell.as_ref();
            let pad = width.saturating_sub(cell.width());
            format!(" {}{} ", cell, " ".repeat(pad))
        })
        .collect();
    format!("|{}|", padded.join("|"))
}

/// Print rows as an aligned table, or just the no-data notice
pub fn render_table<W: Write>(rows: &[ReportRow], out: &mut W) -> Result<()> {
    if rows.is_empty() {
        writeln!(out, "{}", NO_DATA)?;
        return Ok(());
    }

    let body = rows.iter().map(cells).collect::<Result<Vec<_>>>()?;
    let widths = column_widths(&body);
    let sep = separator(&widths);

    writeln!(out, "{}", sep)?;
    writeln!(out, "{}", line(&Column::headers(), &widths))?;
    writeln!(out, "{}", sep)?;
    for row in &body {
        writeln!(out, "{}", line(row, &widths))?;
    }
    writeln!(out, "{}", sep)?;
    writeln!(out)?;
    writeln!(out, "{} rows", body.len())?;

    Ok(())
}
