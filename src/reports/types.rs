//! Common report types

use crate::error::{AppError, Result};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Report column, in the fixed order used for both the query and the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Column {
    Day,
    Campaign,
    CampaignIdExternal,
    Country,
    Cost,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::Day,
        Column::Campaign,
        Column::CampaignIdExternal,
        Column::Country,
        Column::Cost,
    ];

    /// Column name as requested from and returned by the API
    pub fn api_key(self) -> &'static str {
        match self {
            Column::Day => "day",
            Column::Campaign => "campaign",
            Column::CampaignIdExternal => "campaign_id_external",
            Column::Country => "country",
            Column::Cost => "cost",
        }
    }

    /// Header shown in the table and written to the CSV
    pub fn header(self) -> &'static str {
        match self {
            Column::Day => "Date",
            Column::Campaign => "campaign_name",
            Column::CampaignIdExternal => "campaign_id",
            Column::Country => "country",
            Column::Cost => "spend",
        }
    }

    pub fn headers() -> [&'static str; 5] {
        Column::ALL.map(Column::header)
    }

    /// Comma-joined API keys for the `columns` query parameter
    pub fn query_list() -> String {
        Column::ALL.map(Column::api_key).join(",")
    }
}

/// One entry of the report result set, keyed by API column name
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportRow {
    fields: Map<String, Value>,
}

impl ReportRow {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, column: Column) -> Option<&Value> {
        self.fields.get(column.api_key())
    }

    /// Cell text for a column; absent and null values render empty
    pub fn text(&self, column: Column) -> String {
        match self.get(column) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

impl From<Map<String, Value>> for ReportRow {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

/// Falsy values (null, false, zero, empty) count as an absent cost
pub fn is_empty_like(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(a)) => a.is_empty(),
        Some(Value::Object(o)) => o.is_empty(),
    }
}

/// Short name of a JSON value's shape, for diagnostics
pub fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Four-digit year, then a calendar-valid `-MM-DD`. chrono alone would
/// also take a signed or longer year.
fn is_iso_date(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() > 4
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[4] == b'-'
        && bytes.iter().all(|b| b.is_ascii_digit() || *b == b'-')
        && NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok()
}

/// Start or end of the report window: an ISO date or the literal `now`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateBoundary {
    raw: String,
}

impl DateBoundary {
    pub const NOW: &'static str = "now";

    /// Parse a boundary, naming it (`start` / `end`) in the error
    pub fn parse(label: &str, raw: &str) -> Result<Self> {
        if raw != Self::NOW && !is_iso_date(raw) {
            return Err(AppError::Validation(format!(
                "Invalid {} date format: {}. Use YYYY-MM-DD.",
                label, raw
            )));
        }

        Ok(Self {
            raw: raw.to_string(),
        })
    }

    pub fn is_now(&self) -> bool {
        self.raw == Self::NOW
    }

    /// Operator's text, passed to the API verbatim
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for DateBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Validated report request
#[derive(Clone, PartialEq, Eq)]
pub struct ReportQuery {
    pub api_key: String,
    pub start: DateBoundary,
    pub end: DateBoundary,
}

impl ReportQuery {
    pub fn new(api_key: &str, start: &str, end: &str) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(AppError::Validation("API key must not be empty".to_string()));
        }

        Ok(Self {
            api_key: api_key.to_string(),
            start: DateBoundary::parse("start", start)?,
            end: DateBoundary::parse("end", end)?,
        })
    }
}

// Keeps the API key out of debug logs
impl fmt::Debug for ReportQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportQuery")
            .field("api_key", &"***")
            .field("start", &self.start.as_str())
            .field("end", &self.end.as_str())
            .finish()
    }
}
