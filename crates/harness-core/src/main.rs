mod cli;
mod config;
mod fetch;
mod report;
mod runner;
mod timestamp;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cli::Cli;
use config::HarnessConfig;
use runner::prompt::StdinPrompt;
use search_client::Client;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    let config = HarnessConfig::load(&cli)?;

    let client = Client::new(&config.server_addr(), config.credentials())?
        .with_search_poll(Duration::from_secs(config.search_poll_secs))
        .with_ingest_wait(
            Duration::from_secs(config.ingest_poll_secs),
            Duration::from_secs(config.ingest_timeout_secs),
        );
    client
        .ping()
        .await
        .context("unable to connect to the search platform")?;

    info!(
        server = %config.server_addr(),
        test_file = %config.test_file.display(),
        content_root = %config.content_root.display(),
        wait_on_failure = config.wait_on_failure,
        wait_on_completion = config.wait_on_completion,
        "detcheck started"
    );

    let results = runner::test_detection(&client, &config, &StdinPrompt).await?;
    let failed = report::emit(&results)?;
    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
