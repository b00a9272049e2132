//! User Service - command-line front end for the in-memory user directory.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_service_lib::cli::Cli;
use user_service_lib::config::UserServiceConfig;

fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = UserServiceConfig::from_env();
    if cli.no_seed {
        config.seed = false;
    }

    init_tracing(cli.verbose, &config.log_level);
    tracing::debug!(?config, "Configuration loaded");

    let command = cli.command.into();

    let rendered = user_service_lib::run(&config, command).and_then(|output| output.to_json());

    match rendered {
        Ok(json) => println!("{}", json),
        Err(e) => {
            tracing::error!(code = e.code(), "Command failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool, log_level: &str) {
    let filter = if verbose { "debug" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
