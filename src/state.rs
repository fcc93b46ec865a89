//! Application state for a single invocation

use crate::config::ReportConfig;
use crate::error::Result;
use crate::reports::axon::AxonReporter;
use crate::reports::ReportSource;
use std::sync::Arc;

/// State shared by the service layer
pub struct AppState {
    /// Resolved configuration
    pub config: ReportConfig,

    /// Backend that produces report rows
    pub source: Arc<dyn ReportSource>,
}

impl AppState {
    /// Create state backed by the Axon reporting API
    pub fn new(config: ReportConfig) -> Result<Self> {
        let source = Arc::new(AxonReporter::new(config.base_url.clone())?);
        tracing::debug!("Report source: {}", source.name());
        Ok(Self::with_source(config, source))
    }

    /// Create state with an explicit source
    pub fn with_source(config: ReportConfig, source: Arc<dyn ReportSource>) -> Self {
        Self { config, source }
    }
}
