//! Triage blame service - serves commit/author blame for untriaged digests
//!
//! # Usage
//! ```bash
//! triage-blame --tile tile.json                           # Start server
//! triage-blame --tile tile.json --expectations exp.json   # With triage labels
//! triage-blame --tile tile.json --repo /path/to/checkout  # Commits from git
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use triage_blame::blame::{BlameSnapshot, FirstSeenPolicy};
use triage_blame::config::ServiceConfig;
use triage_blame::refresh::{refresh_once, spawn_refresh_loop};
use triage_blame::routes;
use triage_blame::store::{BlameStore, SharedStore};

/// Triage blame - which commits introduced untriaged digests
#[derive(Parser)]
#[command(name = "triage-blame")]
#[command(about = "Serves commit and author blame for untriaged test digests", long_about = None)]
struct Cli {
    /// JSON tile with commits and traces
    #[arg(long, value_name = "PATH")]
    tile: PathBuf,

    /// JSON expectations; everything is untriaged when omitted
    #[arg(long, value_name = "PATH")]
    expectations: Option<PathBuf>,

    /// Git repository to read commits from when the tile lists none
    #[arg(long, value_name = "PATH")]
    repo: Option<PathBuf>,

    /// Port to run the server on
    #[arg(short, long, default_value = "3001")]
    port: u16,

    /// Seconds between snapshot rebuilds, 0 to disable
    #[arg(long, default_value = "300")]
    refresh_secs: u64,

    /// How to blame digests already untriaged at a trace's first data point
    #[arg(long, value_enum, default_value_t = FirstSeenPolicy::SingleCommit)]
    policy: FirstSeenPolicy,
}

impl Cli {
    fn into_config(self) -> (ServiceConfig, u16) {
        let config = ServiceConfig {
            tile_path: self.tile,
            expectations_path: self.expectations,
            repo_path: self.repo,
            refresh_interval: Duration::from_secs(self.refresh_secs),
            policy: self.policy,
        };
        (config, self.port)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, port) = Cli::parse().into_config();

    // Initialize tracing (quieter for production)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store: SharedStore = Arc::new(BlameStore::new(BlameSnapshot::empty()));
    if let Err(e) = refresh_once(&store, &config).await {
        eprintln!("✗ Failed to build initial blame snapshot: {}", e);
        eprintln!("  Tile: {}", config.tile_path.display());
        std::process::exit(1);
    }

    let refresh_task = spawn_refresh_loop(store.clone(), config);

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::create_router(store)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = format!("127.0.0.1:{}", port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("✗ Failed to bind to port {}: {}", port, e);
            eprintln!("  Try a different port with --port <PORT>");
            std::process::exit(1);
        }
    };

    println!("  triage-blame listening on http://{}", addr);
    println!("  Press Ctrl+C to stop");

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
        }
        println!("\n  Shutting down...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    if let Some(task) = refresh_task {
        task.abort();
    }

    Ok(())
}
