//! Cytewise CLI - citation generator and HTTP service.

mod cli;
mod commands;
mod logging;
mod server;

use clap::Parser;
use cli::{Cli, Commands};
use logging::LogConfig;
use tracing::Level;

fn main() {
    let cli = Cli::parse();

    // The long-running server reports at info by default; one-shot commands stay quiet
    let base = match cli.command {
        Commands::Serve { .. } => Level::INFO,
        _ => Level::WARN,
    };
    let log_config = LogConfig::from_verbosity(cli.verbose, base).with_format(cli.log_format);
    if let Err(e) = logging::init_logging(&log_config) {
        eprintln!("Warning: could not initialize logging: {}", e);
    }

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Styles { json } => commands::styles::run(json),
        Commands::Serve { host, port } => commands::serve::run(host, port),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
