//! Report Service
//!
//! Validates the requested window, fetches rows from the active source,
//! and hands them to the selected renderer.

use crate::error::Result;
use crate::render::{csv_export, table, OutputTarget};
use crate::reports::types::{ReportQuery, ReportRow};
use crate::state::AppState;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// Result of a report run
#[derive(Debug, Clone, Serialize)]
pub struct ReportResult {
    pub rows: usize,
    pub mode: String,
    pub exported_to: Option<PathBuf>,
}

/// Report service for business logic
pub struct ReportService;

impl ReportService {
    /// Fetch and render the configured report.
    ///
    /// `out` receives the table; `err` receives operator notices.
    pub async fn run<O: Write, E: Write>(
        state: &AppState,
        out: &mut O,
        err: &mut E,
    ) -> Result<ReportResult> {
        let rows = Self::fetch_report(state).await?;
        Self::render(&rows, &state.config.output, out, err)
    }

    /// Validate dates and fetch rows. Nothing is sent when validation fails.
    pub async fn fetch_report(state: &AppState) -> Result<Vec<ReportRow>> {
        let config = &state.config;
        let query = ReportQuery::new(&config.api_key, &config.start, &config.end)?;

        info!(
            "ReportService::fetch_report - {} from {} to {}{}",
            state.source.id(),
            query.start,
            query.end,
            if query.end.is_now() { " (open-ended)" } else { "" }
        );

        let rows = state.source.fetch_report(&query).await?;
        info!("Fetched {} rows", rows.len());
        Ok(rows)
    }

    /// Render rows to the table or a CSV file
    pub fn render<O: Write, E: Write>(
        rows: &[ReportRow],
        target: &OutputTarget,
        out: &mut O,
        err: &mut E,
    ) -> Result<ReportResult> {
        match target {
            OutputTarget::Table => {
                table::render_table(rows, out)?;
                Ok(ReportResult {
                    rows: rows.len(),
                    mode: "table".to_string(),
                    exported_to: None,
                })
            }
            OutputTarget::Csv(path) => match csv_export::export_csv(rows, path)? {
                Some(count) => {
                    writeln!(err, "Exported {} rows to {}", count, path.display())?;
                    Ok(ReportResult {
                            rows: count,
                        mode: "csv".to_string(),
                        exported_to: Some(path.clone()),
                    })
                }
                None => {
                    warn!("Empty report, skipped writing {}", path.display());
                    writeln!(err, "{}", csv_export::NO_DATA_WARNING)?;
                    Ok(ReportResult {
                            rows: 0,
                        mode: "csv".to_string(),
                        exported_to: None,
                    })
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportConfig;
    use crate::error::AppError;
    use crate::reports::ReportSource;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Source that returns canned rows and counts calls
    struct StubSource {
        body: Value,
        calls: AtomicUsize,
    }

    impl StubSource {
        fn new(body: Value) -> Arc<Self> {
            Arc::new(Self {
                body,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ReportSource for StubSource {
        fn id(&self) -> &'static str {
            "stub"
        }

        fn name(&self) -> &'static str {
            "Stub"
        }

        async fn fetch_report(&self, _query: &ReportQuery) -> Result<Vec<ReportRow>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.body {
                Value::String(message) => Err(AppError::Api(message.clone())),
                Value::Array(entries) => Ok(entries
                    .iter()
                    .map(|e| ReportRow::new(e.as_object().cloned().unwrap_or_default()))
                    .collect()),
                _ => Ok(Vec::new()),
            }
        }
    }

    fn config(start: &str, output: OutputTarget) -> ReportConfig {
        ReportConfig {
            api_key: "test-key".to_string(),
            start: start.to_string(),
            end: "now".to_string(),
            output,
            base_url: "http://unused.invalid/report".to_string(),
        }
    }

    async fn run(state: &AppState) -> (Result<ReportResult>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = ReportService::run(state, &mut out, &mut err).await;
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_invalid_date_never_reaches_source() {
        let source = StubSource::new(json!([{"day": "2025-12-24"}]));
        let state = AppState::with_source(config("2025-13-40", OutputTarget::Table), source.clone());

        let (result, out, _) = run(&state).await;

        match result {
            Err(AppError::Validation(message)) => assert!(message.contains("2025-13-40")),
            other => panic!("expected ValidationError, got {:?}", other),
        }
        assert_eq!(source.calls(), 0);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_end_never_reaches_source() {
        let source = StubSource::new(json!([]));
        let mut cfg = config("2025-12-24", OutputTarget::Table);
        cfg.end = "yesterday".to_string();
        let state = AppState::with_source(cfg, source.clone());

        let (result, _, _) = run(&state).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_table_run() {
        let source = StubSource::new(json!([
            {"day": "2025-12-24", "campaign": "Spring", "campaign_id_external": "c1", "country": "US", "cost": 12.5}
        ]));
        let state = AppState::with_source(config("2025-12-24", OutputTarget::Table), source.clone());

        let (result, out, err) = run(&state).await;
        let result = result.unwrap();

        assert_eq!(source.calls(), 1);
        assert_eq!(result.rows, 1);
        assert_eq!(result.mode, "table");
        assert!(out.contains("| 2025-12-24 | Spring "));
        assert!(out.ends_with("\n1 rows\n"));
        assert!(err.is_empty());
    }

    #[tokio::test]
    async fn test_empty_table_prints_notice_only() {
        let source = StubSource::new(json!([]));
        let state = AppState::with_source(config("2025-12-24", OutputTarget::Table), source);

        let (result, out, _) = run(&state).await;

        assert_eq!(result.unwrap().rows, 0);
        assert_eq!(out, "No data found.\n");
        assert!(!out.contains('+'));
    }

    #[tokio::test]
    async fn test_csv_run_reports_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let source = StubSource::new(json!([
            {"day": "2025-12-24", "cost": 1.25},
            {"day": "2025-12-25"}
        ]));
        let state = AppState::with_source(
            config("2025-12-24", OutputTarget::Csv(path.clone())),
            source,
        );

        let (result, out, err) = run(&state).await;
        let result = result.unwrap();

        assert_eq!(result.rows, 2);
        assert_eq!(result.exported_to.as_deref(), Some(path.as_path()));
        assert!(out.is_empty());
        assert_eq!(err, format!("Exported 2 rows to {}\n", path.display()));

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "Date,campaign_name,campaign_id,country,spend\r\n2025-12-24,,,,1.25\r\n2025-12-25,,,,\r\n"
        );
    }

    #[tokio::test]
    async fn test_empty_csv_warns_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let source = StubSource::new(json!([]));
        let state = AppState::with_source(
            config("2025-12-24", OutputTarget::Csv(path.clone())),
            source,
        );

        let (result, _, err) = run(&state).await;

        assert_eq!(result.unwrap().exported_to, None);
        assert_eq!(err, "Warning: No data to export.\n");
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_source_errors_propagate() {
        let source = StubSource::new(json!("quota exceeded"));
        let state = AppState::with_source(config("2025-12-24", OutputTarget::Table), source);

        let (result, out, _) = run(&state).await;

        assert!(matches!(result, Err(AppError::Api(ref m)) if m == "quota exceeded"));
        assert!(out.is_empty());
    }
}
