use std::path::PathBuf;
use std::time::Duration;

use crate::blame::FirstSeenPolicy;

/// Everything the refresh loop needs to rebuild a snapshot.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub tile_path: PathBuf,
    pub expectations_path: Option<PathBuf>,
    pub repo_path: Option<PathBuf>,
    /// Zero disables periodic refresh
    pub refresh_interval: Duration,
    pub policy: FirstSeenPolicy,
}
