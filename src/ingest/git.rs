//! Commit sequences read from a git repository.
//!
//! Walks the first-parent history of HEAD, newest first, and keeps the
//! newest `limit` commits. The result is returned oldest first with
//! positions assigned, ready to be paired with traces.

use git2::{Repository, Sort};
use std::path::Path;

use crate::error::Result;
use crate::models::Commit;

pub fn commits_from_repo<P: AsRef<Path>>(path: P, limit: usize) -> Result<Vec<Commit>> {
    let repo = Repository::discover(path)?;

    let mut revwalk = repo.revwalk()?;
    revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
    revwalk.push_head()?;
    revwalk.simplify_first_parent()?;

    let mut newest_first = Vec::with_capacity(limit);
    for oid in revwalk.take(limit) {
        let commit = repo.find_commit(oid?)?;
        newest_first.push((
            commit.id().to_string(),
            commit.author().name().unwrap_or("Unknown").to_string(),
            commit.time().seconds(),
        ));
    }

    let commits: Vec<Commit> = newest_first
        .into_iter()
        .rev()
        .enumerate()
        .map(|(position, (hash, author, timestamp))| Commit {
            position,
            hash,
            author,
            timestamp,
        })
        .collect();

    tracing::info!("Loaded {} commits from {}", commits.len(), repo.path().display());
    Ok(commits)
}
