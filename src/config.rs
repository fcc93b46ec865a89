//! Resolved run configuration

use crate::cli::Cli;
use crate::render::OutputTarget;

/// Default report window start
pub const DEFAULT_START: &str = "2025-12-24";

/// Default report window end
pub const DEFAULT_END: &str = "now";

/// Everything one invocation needs. Date strings are validated by the
/// service before any request is made.
#[derive(Clone)]
pub struct ReportConfig {
    pub api_key: String,
    pub start: String,
    pub end: String,
    pub output: OutputTarget,
    pub base_url: String,
}

impl From<Cli> for ReportConfig {
    fn from(cli: Cli) -> Self {
        Self {
            api_key: cli.api_key,
            start: cli.start,
            end: cli.end,
            output: cli.output.into(),
            base_url: cli.base_url,
        }
    }
}
