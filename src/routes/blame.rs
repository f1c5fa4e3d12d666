//! Blame endpoints.
//!
//! GET /api/v1/blame
//! GET /api/v1/blame/{test}
//! GET /api/v1/blame/{test}/{digest}?exclude_authors=<a,b>&limit=<n>
//!
//! The per-digest endpoint aligns against the snapshot's commits after
//! dropping excluded authors and keeping only the newest `limit`, so the
//! returned commits may differ from the ones the vector was computed on.
//! Unknown tests and digests return empty results.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::collections::HashSet;

use crate::error::Result;
use crate::models::{BlameListsResponse, Commit, DigestBlameResponse, TestBlameResponse};
use crate::store::SharedStore;

pub fn routes(store: SharedStore) -> Router {
    Router::new()
        .route("/api/v1/blame", get(get_all_blame_lists))
        .route("/api/v1/blame/{test}", get(get_test_blame))
        .route("/api/v1/blame/{test}/{digest}", get(get_digest_blame))
        .with_state(store)
}

#[derive(Debug, Deserialize)]
struct DigestBlameQuery {
    /// Comma-separated author names to leave out of the target commits
    exclude_authors: Option<String>,
    limit: Option<usize>,
}

async fn get_all_blame_lists(State(store): State<SharedStore>) -> Result<Json<BlameListsResponse>> {
    let snapshot = store.current()?;
    let (blame, commits) = snapshot.all_blame_lists();
    Ok(Json(BlameListsResponse {
        commits: commits.iter().map(|c| c.to_commit_info()).collect(),
        blame: blame.clone(),
    }))
}

async fn get_test_blame(
    State(store): State<SharedStore>,
    Path(test): Path<String>,
) -> Result<Json<TestBlameResponse>> {
    let snapshot = store.current()?;
    let authors = snapshot.blames_for_test(&test);
    Ok(Json(TestBlameResponse { test, authors }))
}

async fn get_digest_blame(
    State(store): State<SharedStore>,
    Path((test, digest)): Path<(String, String)>,
    Query(query): Query<DigestBlameQuery>,
) -> Result<Json<DigestBlameResponse>> {
    let snapshot = store.current()?;
    let target = target_commits(snapshot.commits(), &query);
    let aligned = snapshot.aligned_blame(&test, &digest, &target);

    tracing::debug!(
        "Blame for {}/{}: {} commits against {} targets",
        test,
        digest,
        aligned.indices.len(),
        target.len()
    );

    Ok(Json(DigestBlameResponse {
        commits: aligned.indices.iter().map(|&i| target[i].to_commit_info()).collect(),
        max_count: aligned.max_count,
        test,
        digest,
    }))
}

fn target_commits(commits: &[Commit], query: &DigestBlameQuery) -> Vec<Commit> {
    let excluded: HashSet<&str> = query
        .exclude_authors
        .as_deref()
        .map(|authors| authors.split(',').map(str::trim).filter(|a| !a.is_empty()).collect())
        .unwrap_or_default();

    let filtered: Vec<Commit> = commits
        .iter()
        .filter(|c| !excluded.contains(c.author.as_str()))
        .cloned()
        .collect();

    match query.limit {
        Some(limit) if limit < filtered.len() => filtered[filtered.len() - limit..].to_vec(),
        _ => filtered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commits() -> Vec<Commit> {
        vec![
            Commit::new(0, "c0", "alice", 10),
            Commit::new(1, "c1", "bob", 20),
            Commit::new(2, "c2", "alice", 30),
        ]
    }

    #[test]
    fn target_filters_authors_and_keeps_newest() {
        let query = DigestBlameQuery {
            exclude_authors: Some("bob, ".to_string()),
            limit: Some(1),
        };
        let target = target_commits(&commits(), &query);
        assert_eq!(target, vec![Commit::new(2, "c2", "alice", 30)]);
    }

    #[test]
    fn target_defaults_to_all_commits() {
        let query = DigestBlameQuery {
            exclude_authors: None,
            limit: None,
        };
        assert_eq!(target_commits(&commits(), &query), commits());
    }
}
