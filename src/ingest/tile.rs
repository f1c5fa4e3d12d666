//! JSON tile files.
//!
//! ```json
//! {
//!   "commits": [{ "hash": "abc", "author": "alice", "timestamp": 1700000000 }],
//!   "traces": [{ "id": "t1", "params": { "name": "circle" }, "digests": ["aaa"] }]
//! }
//! ```
//!
//! `commits` may be omitted when a git repository supplies them instead.
//! Positions are assigned from list order.

use serde::Deserialize;
use std::path::Path;

use crate::error::{AppError, Result};
use crate::ingest::commits_from_repo;
use crate::models::{Commit, Tile, Trace};

#[derive(Debug, Deserialize)]
struct TileFile {
    #[serde(default)]
    commits: Option<Vec<TileCommit>>,
    #[serde(default)]
    traces: Vec<Trace>,
}

#[derive(Debug, Deserialize)]
struct TileCommit {
    hash: String,
    author: String,
    timestamp: i64,
}

/// Load and validate a tile. When the file lists no commits, they are read
/// from `repo`, as many as the widest trace needs.
pub fn load_tile<P: AsRef<Path>>(path: P, repo: Option<&Path>) -> Result<Tile> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    let file: TileFile = serde_json::from_str(&contents)?;

    let commits = match (file.commits, repo) {
        (Some(commits), _) => commits
            .into_iter()
            .enumerate()
            .map(|(position, c)| Commit {
                position,
                hash: c.hash,
                author: c.author,
                timestamp: c.timestamp,
            })
            .collect(),
        (None, Some(repo)) => {
            let width = file.traces.iter().map(|t| t.digests.len()).max().unwrap_or(0);
            commits_from_repo(repo, width)?
        }
        (None, None) => {
            return Err(AppError::InvalidTile(
                "tile has no commits and no repository was given".to_string(),
            ));
        }
    };

    let tile = Tile {
        commits,
        traces: file.traces,
    };
    validate_tile(&tile)?;

    tracing::info!(
        "Loaded tile {}: {} commits, {} traces",
        path.as_ref().display(),
        tile.commits.len(),
        tile.traces.len()
    );
    Ok(tile)
}

/// Check the assumptions the blame engine makes about its input: commit
/// timestamps never decrease, and every trace names its test and fits
/// inside the commit sequence.
pub fn validate_tile(tile: &Tile) -> Result<()> {
    if let Some(pair) = tile.commits.windows(2).find(|w| w[1].timestamp < w[0].timestamp) {
        return Err(AppError::InvalidTile(format!(
            "commit {} at position {} is older than its predecessor {}",
            pair[1].hash, pair[1].position, pair[0].hash
        )));
    }

    for trace in &tile.traces {
        if trace.test_name().is_none() {
            return Err(AppError::InvalidTile(format!("trace {} has no test name", trace.id)));
        }
        if trace.digests.len() > tile.commits.len() {
            return Err(AppError::InvalidTile(format!(
                "trace {} has {} digests but the tile has {} commits",
                trace.id,
                trace.digests.len(),
                tile.commits.len()
            )));
        }
    }

    Ok(())
}
