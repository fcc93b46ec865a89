use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    axon_report::run().await
}
