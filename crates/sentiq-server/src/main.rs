//! Sentiq Server
//!
//! HTTP API for the Sentiq resilient sentiment service.
//!
//! Startup loads the model artifact and tokenizer through their fallback
//! tiers before the listener binds, so the service always comes up able to
//! answer, even with no artifacts on disk.

use anyhow::Result;
use clap::Parser;
use metrics_exporter_prometheus::PrometheusHandle;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::signal;
use tracing::{info, warn};

mod config;
mod routes;
mod state;

use config::ServerConfig;
use state::AppState;

#[derive(Parser, Debug)]
#[command(name = "sentiq-server")]
#[command(about = "Sentiq sentiment analysis API server", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Model checkpoint path
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// Tokenizer file path
    #[arg(short, long)]
    tokenizer: Option<PathBuf>,

    /// Listen address
    #[arg(short = 'l', long, default_value = "0.0.0.0")]
    listen: String,

    /// Listen port
    #[arg(short = 'P', long, default_value = "8000")]
    port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose);

    info!("Starting Sentiq server");

    // Load configuration
    let config = ServerConfig::load(&cli.config, &cli)?;
    info!("Configuration loaded successfully");
    info!("Model: {}", config.model_path.display());
    info!("Tokenizer: {}", config.tokenizer_path.display());
    info!(
        "Alerting: {} errors / {} min",
        config.alerting.error_threshold, config.alerting.time_window_minutes
    );

    // Initialize metrics
    let metrics_handle = init_metrics()?;

    // Initialize application state (artifact + tokenizer fallback ladders)
    info!("Initializing application state...");
    let state = AppState::initialize(&config, metrics_handle).await?;
    info!("Application state initialized successfully");

    // Create the server
    let addr: SocketAddr = format!("{}:{}", cli.listen, cli.port).parse()?;
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Listen for shutdown signals (SIGTERM, SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    warn!("Shutdown signal received, stopping server...");
}

/// Initialize tracing/logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("sentiq=debug,tower_http=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sentiq=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Initialize metrics exporter and return handle for rendering
fn init_metrics() -> Result<PrometheusHandle> {
    use metrics_exporter_prometheus::PrometheusBuilder;

    let builder = PrometheusBuilder::new();
    let handle = builder
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    metrics::describe_counter!(
        "sentiq_predictions_total",
        "Total number of predictions served by sentiment label"
    );
    metrics::describe_counter!(
        "sentiq_feedback_total",
        "Total number of feedback submissions by outcome"
    );
    metrics::describe_counter!("sentiq_errors_total", "Total number of surfaced errors");
    metrics::describe_counter!(
        "sentiq_alerts_total",
        "Total number of error-window alerts emitted"
    );
    metrics::describe_histogram!(
        "sentiq_prediction_confidence",
        "Confidence of served predictions"
    );

    info!("Metrics exporter initialized");
    Ok(handle)
}
