//! Interval and distribution builder.
//!
//! Scans every trace once. When a trace shows an untriaged digest for the
//! first time, the commits between the previous known data point and that
//! commit form the candidate window for introducing it. Windows from all
//! traces of a test are merged into one frequency vector per digest.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::time::Instant;

use clap::ValueEnum;

use crate::blame::BlameSnapshot;
use crate::models::{is_missing, BlameLists, Commit, ExpectationLookup, FrequencyVector, Label, Trace};

/// What to do when a trace's first data point is already untriaged, i.e.
/// the digest may have appeared before the loaded commit window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FirstSeenPolicy {
    /// Blame the commit where the digest was first observed.
    #[default]
    SingleCommit,
    /// Publish an empty vector for the whole (test, digest) pair.
    Unattributable,
}

/// Running record for one (test, digest) pair
#[derive(Debug)]
struct PairRecord {
    start: usize,
    end: usize,
    windows: Vec<(usize, usize)>,
    unattributable: bool,
}

impl PairRecord {
    fn new() -> Self {
        Self {
            start: usize::MAX,
            end: usize::MAX,
            windows: Vec::new(),
            unattributable: false,
        }
    }

    fn merge(&mut self, start: usize, end: usize) {
        self.start = self.start.min(start);
        // The tightest end wins so a looser trace never dilutes a tighter one.
        self.end = self.end.min(end);
        self.windows.push((start, end));
    }

    fn frequencies(&self, total_commits: usize) -> FrequencyVector {
        if self.unattributable || self.windows.is_empty() {
            return Vec::new();
        }

        let mut freq = vec![0u32; total_commits - self.start];
        for &(start, end) in &self.windows {
            let end = end.min(self.end);
            for pos in start..=end {
                freq[pos - self.start] += 1;
            }
        }
        freq
    }
}

/// Build a fresh snapshot from the given commits, traces and expectations.
///
/// Traces longer than the commit sequence are only scanned up to its end.
/// Traces without a test name are ignored.
pub fn calculate(
    commits: &[Commit],
    traces: &[Trace],
    expectations: &impl ExpectationLookup,
    policy: FirstSeenPolicy,
) -> BlameSnapshot {
    let start_time = Instant::now();
    let total_commits = commits.len();

    let mut records: HashMap<(&str, &str), PairRecord> = HashMap::new();

    for trace in traces {
        let Some(test_name) = trace.test_name() else {
            tracing::debug!("Skipping trace without test name: {}", trace.id);
            continue;
        };

        let mut last_seen: Option<usize> = None;
        let mut opened: HashSet<&str> = HashSet::new();

        for (pos, digest) in trace.digests.iter().take(total_commits).enumerate() {
            let digest = digest.as_str();
            if is_missing(digest) {
                continue;
            }

            if expectations.label(test_name, digest) == Label::Untriaged && opened.insert(digest) {
                let record = records.entry((test_name, digest)).or_insert_with(PairRecord::new);
                match last_seen {
                    Some(last) => record.merge(last + 1, pos),
                    None => match policy {
                        FirstSeenPolicy::SingleCommit => record.merge(pos, pos),
                        FirstSeenPolicy::Unattributable => record.unattributable = true,
                    },
                }
            }

            last_seen = Some(pos);
        }
    }

    let mut blame_lists = BlameLists::new();
    for ((test_name, digest), record) in &records {
        blame_lists
            .entry(test_name.to_string())
            .or_insert_with(BTreeMap::new)
            .insert(digest.to_string(), record.frequencies(total_commits));
    }

    tracing::info!(
        "Blame lists calculated: {} traces, {} commits, {} digests in {:?}",
        traces.len(),
        total_commits,
        records.len(),
        start_time.elapsed()
    );

    BlameSnapshot::new(commits.to_vec(), blame_lists)
}
