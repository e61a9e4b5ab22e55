//! routekit demo server.
//!
//! ```text
//! GET  {base}/status   negotiated JSON / XML / plain status document
//! POST {base}/users/   JSON body bound and validated; field failures are
//!                      aggregated into one 400 body
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use routekit::config::{load_config, ServerConfig};
use routekit::observability::logging;
use routekit::AppServer;

#[derive(Parser)]
#[command(name = "routekit")]
#[command(about = "Serve the routekit demo API", long_about = None)]
struct Cli {
    /// Path to a TOML config file; built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };

    logging::init(&config.observability.log_filter)?;

    tracing::info!("routekit v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_path = ?cli.config,
        bind_address = %config.listener.bind_address,
        base_path = %config.routes.base_path,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let server = AppServer::new(&config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
