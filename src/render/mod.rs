//! Report renderers
//!
//! - `table` - aligned text table for the terminal
//! - `csv_export` - CSV file with raw values
//!
//! The two modes format cost differently: the table rounds and
//! defaults it to `0.00`, the CSV passes it through and leaves empty costs blank.

pub mod table;
pub mod csv_export;

use std::path::PathBuf;

/// Where a report goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Table on standard output
    Table,
    /// CSV file at the given path
    Csv(PathBuf),
}

impl From<Option<PathBuf>> for OutputTarget {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => OutputTarget::Csv(path),
            None => OutputTarget::Table,
        }
    }
}
