use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use noid_client::DsnSearchClient;
use noid_config::Config;
use noid_harvest::IndexWalker;

pub mod cli;
pub mod logging;

use self::cli::Cli;

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> ExitCode {
    // .env is optional
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.json_logs);

    let mut config = Config::new();
    cli.apply(&mut config);

    match harvest(&config).await {
        Ok(rows) => {
            tracing::info!("Wrote {rows} entries to {}", config.export.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Walk the whole alphabet and write the TSV. Nothing is written if any letter fails.
pub async fn harvest(config: &Config) -> anyhow::Result<usize> {
    let client = DsnSearchClient::new(&config.search).context("Failed to build HTTP client")?;
    let mut walker = IndexWalker::new(client, &config.search);

    walker
        .run(&config.export.output)
        .await
        .context("Harvest aborted, no output written")
}
