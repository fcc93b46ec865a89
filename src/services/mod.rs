//! Services Layer
//!
//! Business logic between the command line and the report sources.
//!
//! ```text
//! CLI --> ReportService --> ReportSource (Axon API)
//!                      \--> Renderer (table / CSV)
//! ```

pub mod report_service;

pub use report_service::{ReportResult, ReportService};
