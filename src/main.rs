//! Dashboard API server
//!
//! Loads the datasets once at startup, then serves every view as JSON.
//!
//! Usage:
//!   ./target/release/olist_dashboard [--data-dir DIR] [--host HOST] [--port PORT]
//!
//! REST endpoints:
//!   GET /api/v1/health             - Health check
//!   GET /api/v1/stats              - Row count per dataset
//!   GET /api/v1/menu               - Menu entries
//!   GET /api/v1/views/:view        - One view (?category=..&city=..)

use anyhow::Result;
use clap::Parser;
use olist_dashboard::api::{self, DashboardService};
use olist_dashboard::config::{
    DashboardConfig, DEFAULT_DATA_DIR, DEFAULT_HISTOGRAM_BINS, DEFAULT_HOST, DEFAULT_PORT,
};
use olist_dashboard::views::View;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// E-commerce analytics dashboard server
#[derive(Parser, Debug)]
#[command(name = "olist_dashboard")]
#[command(about = "Serve e-commerce analytics views over a local REST API")]
struct Args {
    /// Directory holding the eight dataset CSV files
    #[arg(long, env = "DASHBOARD_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Address to bind
    #[arg(long, env = "DASHBOARD_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Port to listen on
    #[arg(long, env = "DASHBOARD_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Bin count of the delivery time histogram
    #[arg(long, env = "DASHBOARD_HISTOGRAM_BINS", default_value_t = DEFAULT_HISTOGRAM_BINS)]
    histogram_bins: usize,
}

impl From<Args> for DashboardConfig {
    fn from(args: Args) -> Self {
        Self {
            data_dir: args.data_dir,
            host: args.host,
            port: args.port,
            histogram_bins: args.histogram_bins,
        }
    }
}

fn print_banner(config: &DashboardConfig) {
    println!("============================================================");
    println!("         E-COMMERCE DATA ANALYTICS DASHBOARD");
    println!("============================================================");
    println!();
    println!("  Data:     {}", config.data_dir.display());
    println!("  REST:     http://{}:{}/api/v1/", config.host, config.port);
    println!();
    println!("Views:");
    for view in View::ALL {
        println!("  GET /api/v1/views/{:20} {}", view.key(), view.label());
    }
    println!("============================================================");
}

#[tokio::main]
async fn main() -> Result<()> {
    olist_dashboard::init_tracing();

    let config = DashboardConfig::from(Args::parse());
    let addr = config.socket_addr()?;

    // Nothing is served until all eight datasets are in memory
    let service = Arc::new(DashboardService::from_config(&config)?);
    info!("Datasets loaded: {:?}", service.stats());

    print_banner(&config);

    let app = api::router(service);
    info!("Starting REST server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
