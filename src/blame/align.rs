//! Commit aligner.
//!
//! A frequency vector is positional: index 0 is the commit `vector.len()`
//! steps from the end of the list it was computed against. Callers usually
//! hold a different list (filtered by author, truncated, newer), so the most
//! likely commit is re-located in the target list by timestamp.

use crate::models::Commit;

/// Indices into a target commit list plus the frequency that selected them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignedBlame {
    pub indices: Vec<usize>,
    pub max_count: u32,
}

/// Align `freq`, computed against `source`, onto `target`.
///
/// The walk starts at the earliest maximum and only moves forward; nonzero
/// entries before the anchor are never included. `target` must be sorted by
/// timestamp.
pub fn align(freq: &[u32], source: &[Commit], target: &[Commit]) -> AlignedBlame {
    let Some(&max_count) = freq.iter().max() else {
        return AlignedBlame::default();
    };
    if max_count == 0 || freq.len() > source.len() {
        return AlignedBlame::default();
    }

    // position() returns the first hit, so ties resolve to the oldest commit
    let Some(anchor_idx) = freq.iter().position(|&count| count == max_count) else {
        return AlignedBlame::default();
    };
    let anchor = &source[source.len() - freq.len() + anchor_idx];
    let start = anchor_index(anchor, target);

    let indices: Vec<usize> = freq[anchor_idx..]
        .iter()
        .zip(start..target.len())
        .take_while(|&(&count, _)| count > 0)
        .map(|(_, target_idx)| target_idx)
        .collect();

    tracing::debug!(
        "Aligned anchor {} (count {}) to {} target commits",
        anchor.hash,
        max_count,
        indices.len()
    );

    AlignedBlame { indices, max_count }
}

/// First target commit at or after the anchor's timestamp. Within a run of
/// equal timestamps the anchor itself is preferred when the target has it.
fn anchor_index(anchor: &Commit, target: &[Commit]) -> usize {
    let first = target.partition_point(|commit| commit.timestamp < anchor.timestamp);
    target[first..]
        .iter()
        .take_while(|commit| commit.timestamp == anchor.timestamp)
        .position(|commit| commit.hash == anchor.hash)
        .map_or(first, |offset| first + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commits(timestamps: &[i64]) -> Vec<Commit> {
        timestamps
            .iter()
            .enumerate()
            .map(|(i, &ts)| Commit::new(i, format!("c{}", i), format!("author{}", i), ts))
            .collect()
    }

    #[test]
    fn empty_vector_aligns_to_nothing() {
        let source = commits(&[10, 20, 30]);
        assert_eq!(align(&[], &source, &source), AlignedBlame::default());
    }

    #[test]
    fn same_list_returns_same_commits() {
        let source = commits(&[10, 20, 30, 40, 50]);
        let aligned = align(&[0, 3, 1], &source, &source);
        // vector index 1 is source position 3
        assert_eq!(aligned.indices, vec![3, 4]);
        assert_eq!(aligned.max_count, 3);
    }

    #[test]
    fn walk_stops_at_first_zero() {
        let source = commits(&[10, 20, 30, 40, 50]);
        let aligned = align(&[2, 1, 0, 1, 1], &source, &source);
        assert_eq!(aligned.indices, vec![0, 1]);
    }

    #[test]
    fn walk_never_extends_left_of_anchor() {
        let source = commits(&[10, 20, 30, 40]);
        let aligned = align(&[1, 1, 2, 1], &source, &source);
        assert_eq!(aligned.indices, vec![2, 3]);
        assert_eq!(aligned.max_count, 2);
    }

    #[test]
    fn ties_anchor_on_earliest_maximum() {
        let source = commits(&[10, 20, 30, 40]);
        let aligned = align(&[0, 2, 0, 2], &source, &source);
        assert_eq!(aligned.indices, vec![1]);
    }

    #[test]
    fn realigns_by_timestamp() {
        let source = commits(&[10, 20, 30, 40, 50]);
        // the target drops the commit at 20 and adds newer ones
        let target = commits(&[10, 30, 40, 50, 60]);
        let aligned = align(&[0, 1, 1, 1], &source, &target);
        // anchor is source position 2 (ts 30) => target index 1
        assert_eq!(aligned.indices, vec![1, 2, 3]);
    }

    #[test]
    fn missing_anchor_timestamp_aligns_to_next_commit() {
        let source = commits(&[10, 20, 30]);
        let target = commits(&[10, 25, 35]);
        let aligned = align(&[1, 0], &source, &target);
        assert_eq!(aligned.indices, vec![1]);
    }

    #[test]
    fn equal_timestamps_resolve_to_anchor_commit() {
        let source = commits(&[10, 10, 10, 20]);
        let aligned = align(&[0, 1, 0], &source, &source);
        assert_eq!(aligned.indices, vec![2]);
    }

    #[test]
    fn equal_timestamps_fall_back_to_first_when_anchor_absent() {
        let source = commits(&[10, 20, 20]);
        let mut target = commits(&[10, 20, 20]);
        target[1].hash = "other1".to_string();
        target[2].hash = "other2".to_string();
        let aligned = align(&[1], &source, &target);
        assert_eq!(aligned.indices, vec![1]);
    }

    #[test]
    fn target_entirely_before_anchor_is_empty() {
        let source = commits(&[10, 20, 30, 40, 50]);
        let target = commits(&[1, 2, 3]);
        let aligned = align(&[1, 1, 1], &source, &target);
        assert!(aligned.indices.is_empty());
    }

    #[test]
    fn vector_longer_than_source_is_ignored() {
        let source = commits(&[10, 20]);
        assert!(align(&[1, 1, 1], &source, &source).indices.is_empty());
    }

    #[test]
    fn walk_is_bounded_by_target_length() {
        let source = commits(&[10, 20, 30, 40]);
        let target = commits(&[10, 20, 30]);
        let aligned = align(&[1, 1, 1, 1], &source, &target);
        assert_eq!(aligned.indices, vec![0, 1, 2]);
    }
}
