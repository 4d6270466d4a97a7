//! Spectral Index API Server
//!
//! Computes NDVI, NDWI, EVI, SAVI and GNDVI over a requested bounding box
//! and returns a classified PNG with its legend.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use index_api::app::build_router;
use index_api::config::load_band_config;
use index_api::state::AppState;

/// Spectral Index API Server
#[derive(Parser, Debug)]
#[command(name = "index-api")]
#[command(about = "Spectral index computation and rendering server")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:5000", env = "INDEX_LISTEN_ADDR")]
    listen: String,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// YAML band configuration (defaults to the Sentinel-2 layout under data/sentinel)
    #[arg(long, env = "INDEX_BANDS_CONFIG")]
    bands_config: Option<PathBuf>,

    /// Directory of static front-end files
    #[arg(long, default_value = "static", env = "INDEX_STATIC_DIR")]
    static_dir: PathBuf,

    /// Number of worker threads
    #[arg(long, env = "INDEX_WORKER_THREADS")]
    worker_threads: Option<usize>,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Build runtime with configured threads
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder
        .build()
        .context("Failed to create Tokio runtime")?;

    runtime.block_on(run_server(args))
}

async fn run_server(args: Args) -> Result<()> {
    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    info!("Starting spectral index API server");

    let config = load_band_config(args.bands_config.as_deref())?;
    let state = Arc::new(AppState::new(config));

    let static_dir = if args.static_dir.is_dir() {
        Some(args.static_dir.as_path())
    } else {
        warn!(path = %args.static_dir.display(), "Static directory not found, front-end disabled");
        None
    };

    let app = build_router(state, static_dir);

    let addr: SocketAddr = args
        .listen
        .parse()
        .with_context(|| format!("Invalid listen address {}", args.listen))?;

    info!(address = %addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server failed")?;

    Ok(())
}
