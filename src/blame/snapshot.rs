//! Immutable result of one blame calculation.
//!
//! A snapshot pairs the commit list it was computed against with the
//! frequency vectors, so query-time alignment always has its source list.
//! Unknown tests or digests yield empty results, never errors.

use std::time::Instant;

use crate::blame::{align, weighted_blame, AlignedBlame};
use crate::models::{BlameLists, Commit, FrequencyVector, StatusResponse, WeightedBlame};

#[derive(Debug, Clone)]
pub struct BlameSnapshot {
    commits: Vec<Commit>,
    blame_lists: BlameLists,
    created_at: Instant,
}

impl BlameSnapshot {
    pub fn new(commits: Vec<Commit>, blame_lists: BlameLists) -> Self {
        Self {
            commits,
            blame_lists,
            created_at: Instant::now(),
        }
    }

    /// Snapshot with no commits and no blame, served before the first calculation
    pub fn empty() -> Self {
        Self::new(Vec::new(), BlameLists::new())
    }

    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    pub fn blame_lists(&self) -> &BlameLists {
        &self.blame_lists
    }

    /// All frequency vectors together with the commit list they refer to.
    pub fn all_blame_lists(&self) -> (&BlameLists, &[Commit]) {
        (&self.blame_lists, &self.commits)
    }

    /// Frequency vector for one pair; empty when unknown.
    pub fn frequencies(&self, test_name: &str, digest: &str) -> &[u32] {
        self.blame_lists
            .get(test_name)
            .and_then(|digests| digests.get(digest))
            .map(FrequencyVector::as_slice)
            .unwrap_or(&[])
    }

    /// Weighted author blame for every untriaged digest of a test.
    pub fn blames_for_test(&self, test_name: &str) -> Vec<WeightedBlame> {
        match self.blame_lists.get(test_name) {
            Some(digests) => weighted_blame(digests, &self.commits),
            None => Vec::new(),
        }
    }

    /// Indices into `target` of the commits blamed for one digest.
    pub fn blame(&self, test_name: &str, digest: &str, target: &[Commit]) -> Vec<usize> {
        self.aligned_blame(test_name, digest, target).indices
    }

    /// Like [`BlameSnapshot::blame`], keeping the frequency of the chosen commits.
    pub fn aligned_blame(&self, test_name: &str, digest: &str, target: &[Commit]) -> AlignedBlame {
        align(self.frequencies(test_name, digest), &self.commits, target)
    }

    /// Get snapshot statistics
    pub fn stats(&self) -> StatusResponse {
        let digests = self.blame_lists.values().map(|d| d.len()).sum();
        let unattributable = self
            .blame_lists
            .values()
            .flat_map(|d| d.values())
            .filter(|freq| freq.is_empty())
            .count();

        StatusResponse {
            total_commits: self.commits.len(),
            tests: self.blame_lists.len(),
            digests,
            unattributable,
            age_secs: self.created_at.elapsed().as_secs(),
        }
    }
}

impl Default for BlameSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn snapshot() -> BlameSnapshot {
        let commits = vec![
            Commit::new(0, "c0", "alice", 10),
            Commit::new(1, "c1", "bob", 20),
            Commit::new(2, "c2", "carol", 30),
        ];
        let mut digests = BTreeMap::new();
        digests.insert("aaa".to_string(), vec![1, 0]);
        digests.insert("bbb".to_string(), vec![]);
        let mut lists = BlameLists::new();
        lists.insert("circle".to_string(), digests);
        BlameSnapshot::new(commits, lists)
    }

    #[test]
    fn unknown_pairs_are_empty() {
        let snapshot = snapshot();
        assert!(snapshot.frequencies("square", "aaa").is_empty());
        assert!(snapshot.frequencies("circle", "zzz").is_empty());
        assert!(snapshot.blames_for_test("square").is_empty());
        assert!(snapshot.blame("square", "aaa", snapshot.commits()).is_empty());
    }

    #[test]
    fn blame_uses_snapshot_commits_as_source() {
        let snapshot = snapshot();
        assert_eq!(snapshot.blame("circle", "aaa", snapshot.commits()), vec![1]);

        let target = vec![Commit::new(0, "c1", "bob", 20)];
        assert_eq!(snapshot.blame("circle", "aaa", &target), vec![0]);
    }

    #[test]
    fn stats_count_unattributable_pairs() {
        let stats = snapshot().stats();
        assert_eq!(stats.total_commits, 3);
        assert_eq!(stats.tests, 1);
        assert_eq!(stats.digests, 2);
        assert_eq!(stats.unattributable, 1);
    }
}
