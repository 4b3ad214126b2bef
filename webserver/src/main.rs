//! Lead-capture webserver entry point
//!
//! Serves the savings estimation API and appends lead submissions to the
//! JSONL lead log under the configured data directory.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use webserver::{core::EstimatorEngine, JsonlLeadRecorder, WebServer};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "Automation ROI estimator and lead-capture server")]
struct Args {
    /// Port for the HTTP server
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    bind: IpAddr,

    /// Directory holding the lead log
    #[arg(long, default_value = "./data")]
    data_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    shared::logging::init_tracing(&args.log_level)?;

    let bind_address = SocketAddr::new(args.bind, args.port);
    info!("🚀 Starting webserver on {}", bind_address);
    info!("📁 Lead log directory: {}", args.data_dir.display());

    let estimator = EstimatorEngine::new();
    let lead_recorder = JsonlLeadRecorder::with_data_dir(args.data_dir);

    let webserver = WebServer::new(estimator, lead_recorder);
    webserver.run(bind_address).await?;

    info!("Webserver stopped gracefully");
    Ok(())
}
