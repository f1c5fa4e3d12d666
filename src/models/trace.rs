//! Trace and tile types.
//!
//! A trace is one device/config variant of a test: a digest per commit
//! position, keyed by a parameter map that always carries the test name.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::Commit;

/// Digest value recorded when a trace has no data at a commit.
pub const MISSING_DIGEST: &str = "";

/// Param key holding the test name.
pub const TEST_NAME_PARAM: &str = "name";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    pub id: String,
    pub params: BTreeMap<String, String>,
    /// One digest per commit position, aligned to a prefix of the commit sequence
    pub digests: Vec<String>,
}

impl Trace {
    pub fn new(test_name: &str, id: impl Into<String>, digests: &[&str]) -> Self {
        let mut params = BTreeMap::new();
        params.insert(TEST_NAME_PARAM.to_string(), test_name.to_string());
        Self {
            id: id.into(),
            params,
            digests: digests.iter().map(|d| d.to_string()).collect(),
        }
    }

    pub fn test_name(&self) -> Option<&str> {
        self.params.get(TEST_NAME_PARAM).map(String::as_str)
    }
}

pub fn is_missing(digest: &str) -> bool {
    digest == MISSING_DIGEST
}

/// Commit sequence plus the traces aligned to it.
#[derive(Debug, Clone, Default)]
pub struct Tile {
    pub commits: Vec<Commit>,
    pub traces: Vec<Trace>,
}
