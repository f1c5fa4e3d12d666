//! Periodic snapshot rebuilds.
//!
//! Each cycle reloads the tile and expectations, runs the calculation on a
//! blocking worker and publishes the result. A failed cycle leaves the
//! previous snapshot in place.

use std::time::{Duration, Instant};

use tokio::time::{Interval, MissedTickBehavior};

use crate::blame::{calculate, BlameSnapshot};
use crate::config::ServiceConfig;
use crate::error::{AppError, Result};
use crate::ingest::{load_expectations, load_tile};
use crate::models::Expectations;
use crate::store::SharedStore;

/// Load inputs from disk and compute a new snapshot.
pub fn build_snapshot(config: &ServiceConfig) -> Result<BlameSnapshot> {
    let tile = load_tile(&config.tile_path, config.repo_path.as_deref())?;
    let expectations = match &config.expectations_path {
        Some(path) => load_expectations(path)?,
        None => Expectations::new(),
    };
    Ok(calculate(&tile.commits, &tile.traces, &expectations, config.policy))
}

/// Build a snapshot off the async runtime and publish it.
pub async fn refresh_once(store: &SharedStore, config: &ServiceConfig) -> Result<()> {
    let start = Instant::now();
    let cfg = config.clone();
    let snapshot = tokio::task::spawn_blocking(move || build_snapshot(&cfg))
        .await
        .map_err(|e| AppError::Internal(format!("Blame calculation panicked: {}", e)))??;

    let stats = snapshot.stats();
    store.publish(snapshot)?;
    tracing::info!(
        "Published snapshot: {} commits, {} tests, {} digests in {:?}",
        stats.total_commits,
        stats.tests,
        stats.digests,
        start.elapsed()
    );
    Ok(())
}

/// Ticks that fall behind a slow rebuild are pushed back, not replayed.
fn refresh_interval(period: Duration) -> Interval {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

/// Spawn the refresh loop. Returns `None` when refresh is disabled.
pub fn spawn_refresh_loop(store: SharedStore, config: ServiceConfig) -> Option<tokio::task::JoinHandle<()>> {
    if config.refresh_interval.is_zero() {
        return None;
    }

    Some(tokio::spawn(async move {
        let mut interval = refresh_interval(config.refresh_interval);
        // the first tick fires immediately and startup already built a snapshot
        interval.tick().await;
        loop {
            interval.tick().await;
            if let Err(e) = refresh_once(&store, &config).await {
                tracing::warn!("Blame refresh failed, keeping previous snapshot: {}", e);
            }
        }
    }))
}
