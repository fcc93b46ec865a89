use crate::config::{DEFAULT_END, DEFAULT_START};
use crate::reports::axon::BASE_URL;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "axon-report",
    version,
    about = "Fetch Axon (AppLovin) advertiser reports",
    after_help = "Examples:\n    axon-report --api-key YOUR_API_KEY\n    axon-report --api-key YOUR_API_KEY -o report.csv"
)]
pub struct Cli {
    #[arg(
        long,
        env = "AXON_API_KEY",
        hide_env_values = true,
        help = "Axon API key (get from https://ads.axon.ai/account/api-keys)"
    )]
    pub api_key: String,
    #[arg(long, default_value = DEFAULT_START, help = "Start date in YYYY-MM-DD format")]
    pub start: String,
    #[arg(long, default_value = DEFAULT_END, help = "End date in YYYY-MM-DD format or 'now'")]
    pub end: String,
    #[arg(
        short,
        long,
        help = "Output CSV file path (if not specified, prints table to stdout)"
    )]
    pub output: Option<PathBuf>,
    #[arg(
        long,
        env = "AXON_REPORT_URL",
        default_value = BASE_URL,
        help = "Reporting endpoint"
    )]
    pub base_url: String,
    #[arg(short, long, help = "Enable debug logging on stderr")]
    pub verbose: bool,
}
