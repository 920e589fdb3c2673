use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use employee_directory::api::{AppState, create_router};
use employee_directory::client::HttpEmployeeSource;
use employee_directory::config::ConfigLoader;

#[derive(Parser)]
#[command(name = "employee-directory")]
#[command(about = "Serve the employee directory over HTTP", long_about = None)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "./config/directory.yaml")]
    config: PathBuf,

    /// Override the listen address from the configuration
    #[arg(long)]
    listen: Option<String>,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    // RUST_LOG wins over -v when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("Started with verbosity level: {}", cli.verbose);

    let config = ConfigLoader::load(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?
        .into_config();

    let source = HttpEmployeeSource::new(&config.data_source)
        .context("Failed to build data source client")?;
    let listen_addr = cli
        .listen
        .unwrap_or_else(|| config.server.listen_addr.clone());

    info!(
        listen_addr = %listen_addr,
        data_source = %source.base_url(),
        "Starting employee directory"
    );

    let router = create_router(AppState::new(config, source));
    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", listen_addr))?;

    axum::serve(listener, router)
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}
