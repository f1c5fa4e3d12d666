//! Weighted aggregator: per-author blame for a whole test.

use std::collections::{BTreeMap, HashMap};

use crate::blame::align;
use crate::models::{Commit, FrequencyVector, WeightedBlame};

/// Spread the blame of every digest of one test over the commit authors.
///
/// Each blamed commit contributes the digest's max count to its author.
/// Results are sorted by probability descending, then author ascending.
pub fn weighted_blame(digests: &BTreeMap<String, FrequencyVector>, commits: &[Commit]) -> Vec<WeightedBlame> {
    let mut author_totals: HashMap<&str, u64> = HashMap::new();
    let mut grand_total: u64 = 0;

    for freq in digests.values() {
        let aligned = align(freq, commits, commits);
        let count = u64::from(aligned.max_count);
        for &idx in &aligned.indices {
            *author_totals.entry(commits[idx].author.as_str()).or_insert(0) += count;
        }
        grand_total += count * aligned.indices.len() as u64;
    }

    if grand_total == 0 {
        return Vec::new();
    }

    let mut blames: Vec<WeightedBlame> = author_totals
        .into_iter()
        .map(|(author, total)| WeightedBlame {
            author: author.to_string(),
            prob: total as f64 / grand_total as f64,
        })
        .collect();

    blames.sort_by(|a, b| b.prob.total_cmp(&a.prob).then_with(|| a.author.cmp(&b.author)));
    blames
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commits(authors: &[&str]) -> Vec<Commit> {
        authors
            .iter()
            .enumerate()
            .map(|(i, author)| Commit::new(i, format!("c{}", i), *author, 100 + i as i64))
            .collect()
    }

    fn digests(entries: &[(&str, &[u32])]) -> BTreeMap<String, FrequencyVector> {
        entries.iter().map(|(d, f)| (d.to_string(), f.to_vec())).collect()
    }

    #[test]
    fn no_blamed_commits_yields_empty_list() {
        let commits = commits(&["alice", "bob"]);
        assert!(weighted_blame(&BTreeMap::new(), &commits).is_empty());
        assert!(weighted_blame(&digests(&[("aaa", &[])]), &commits).is_empty());
    }

    #[test]
    fn equal_blame_breaks_ties_by_author() {
        let commits = commits(&["zoe", "bob", "carol"]);
        let blames = weighted_blame(&digests(&[("aaa", &[0, 1, 0]), ("bbb", &[1, 0, 0])]), &commits);

        assert_eq!(
            blames,
            vec![
                WeightedBlame { author: "bob".to_string(), prob: 0.5 },
                WeightedBlame { author: "zoe".to_string(), prob: 0.5 },
            ]
        );
    }

    #[test]
    fn max_count_weights_each_commit() {
        let commits = commits(&["alice", "bob", "alice", "carol"]);
        // aaa: anchor at 1 (count 3), walk covers bob and alice => 3 each
        // bbb: anchor at 3 (count 1) => carol 1
        let blames = weighted_blame(&digests(&[("aaa", &[0, 3, 1, 0]), ("bbb", &[1])]), &commits);

        let authors: Vec<(&str, f64)> = blames.iter().map(|b| (b.author.as_str(), b.prob)).collect();
        assert_eq!(authors, vec![("alice", 3.0 / 7.0), ("bob", 3.0 / 7.0), ("carol", 1.0 / 7.0)]);
        let sum: f64 = blames.iter().map(|b| b.prob).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }
}
