//! Blame data transfer objects.
//!
//! `WeightedBlame` is the per-author result of aggregating a whole test.
//! The response structs are what the HTTP layer serializes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::CommitInfo;

/// Frequency vector aligned to the tail of the commit sequence
pub type FrequencyVector = Vec<u32>;

/// test name -> digest -> frequency vector
pub type BlameLists = BTreeMap<String, BTreeMap<String, FrequencyVector>>;

/// Probability that one author introduced the untriaged digests of a test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedBlame {
    pub author: String,
    pub prob: f64,
}

/// Response for the full blame listing
#[derive(Debug, Serialize)]
pub struct BlameListsResponse {
    pub commits: Vec<CommitInfo>,
    pub blame: BlameLists,
}

/// Response for the weighted blame of one test
#[derive(Debug, Serialize)]
pub struct TestBlameResponse {
    pub test: String,
    pub authors: Vec<WeightedBlame>,
}

/// Response for the blamed commits of one digest
#[derive(Debug, Serialize)]
pub struct DigestBlameResponse {
    pub test: String,
    pub digest: String,
    /// Number of traces agreeing on the most likely commit
    pub max_count: u32,
    pub commits: Vec<CommitInfo>,
}

/// Snapshot statistics
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub total_commits: usize,
    pub tests: usize,
    pub digests: usize,
    pub unattributable: usize,
    pub age_secs: u64,
}
