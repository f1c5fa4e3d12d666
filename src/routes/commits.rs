use axum::{extract::State, routing::get, Json, Router};

use crate::error::Result;
use crate::models::CommitListResponse;
use crate::store::SharedStore;

pub fn routes(store: SharedStore) -> Router {
    Router::new()
        .route("/api/v1/commits", get(get_commits))
        .with_state(store)
}

async fn get_commits(State(store): State<SharedStore>) -> Result<Json<CommitListResponse>> {
    let snapshot = store.current()?;
    let commits: Vec<_> = snapshot.commits().iter().map(|c| c.to_commit_info()).collect();
    Ok(Json(CommitListResponse {
        total: commits.len(),
        commits,
    }))
}
