//! Serve command - run the citation HTTP API.

use colored::Colorize;

use crate::server::{app, config::ServerConfig, state::AppState};

pub fn run(host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::new(&host, port)?;
    let state = AppState::new();

    let url = format!("http://{}", config.socket_addr());
    println!();
    println!(
        "{} {}",
        "Starting citation server at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("  POST {}/api/generate-citation", url);
    println!("  GET  {}/api/styles", url);
    println!("  GET  {}/api/health", url);
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(app::run_server(state, &config))?;

    println!("{}", "Server stopped.".yellow());
    Ok(())
}
