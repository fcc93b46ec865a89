//! Report sources module

pub mod types;
pub mod axon;

use crate::error::Result;
use async_trait::async_trait;
use types::{ReportQuery, ReportRow};

/// Trait that every report backend implements
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Source ID (e.g., "axon")
    fn id(&self) -> &'static str;

    /// Source display name
    fn name(&self) -> &'static str;

    /// Fetch the advertiser report for a validated query
    async fn fetch_report(&self, query: &ReportQuery) -> Result<Vec<ReportRow>>;
}
