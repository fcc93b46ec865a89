//! Axon Report - advertiser report fetcher
//!
//! Fetches advertiser reports from the Axon (AppLovin) reporting API and
//! prints them as a terminal table or exports them to CSV.

pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod reports;
pub mod services;
pub mod state;

use clap::Parser;
use cli::Cli;
use config::ReportConfig;
use error::{AppError, ErrorResponse};
use services::ReportService;
use state::AppState;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Log filter used when `RUST_LOG` is unset. Logging is off by default so
/// stderr carries only operator notices and the `Error:` line.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "axon_report=debug"
    } else {
        "axon_report=off"
    }
}

fn init_tracing(verbose: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(verbose).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn execute(config: ReportConfig) -> Result<(), AppError> {
    let state = AppState::new(config)?;
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr();

    let result = ReportService::run(&state, &mut stdout, &mut stderr).await?;
    tracing::info!("Report rendered in {} mode ({} rows)", result.mode, result.rows);
    Ok(())
}

/// Parse arguments, run the report, and map the outcome to an exit status
pub async fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(cli.verbose);
    tracing::debug!("Starting axon-report v{}", env!("CARGO_PKG_VERSION"));

    match execute(ReportConfig::from(cli)).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let response = ErrorResponse::from(&e);
            tracing::error!(code = %response.code, "{}", response.message);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
