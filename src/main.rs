use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use config::Config;
use tracing::error;

mod cli;
mod config;
mod error;
mod logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    let result = match Config::from_env() {
        Ok(config) => cli.run(config).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
