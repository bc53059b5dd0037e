use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use terminal::app::App;
use terminal::cli::{self, Cli};
use terminal::config::ClientConfig;
use terminal::debug::{self, DebugConfig};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let _log_guard = debug::init_logger(&DebugConfig::from_env());

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli
        .apply(ClientConfig::from_env()?)
        .context("Invalid configuration")?;

    let app = App::new(config);
    let result = cli::run(&app, cli.command).await;

    cli::print_notifications(&app.notifications.drain());
    result.map_err(Into::into)
}
