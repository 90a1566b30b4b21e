use std::io;
use std::process::ExitCode;

use live_scoreboard::cli::run_session;
use live_scoreboard::config::{AppConfig, DEFAULT_LOG_FILTER};
use live_scoreboard::domain::scoreboard::Scoreboard;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing on stderr; stdout carries command output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Invalid configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(output = %config.output, "Scoreboard session starting");

    let mut scoreboard = Scoreboard::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    match run_session(stdin.lock(), &mut stdout, &mut scoreboard, config.output) {
        Ok(failures) => {
            tracing::info!(
                failures,
                active_matches = scoreboard.len(),
                "Scoreboard session finished"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("Session aborted: {}", err);
            ExitCode::FAILURE
        }
    }
}
