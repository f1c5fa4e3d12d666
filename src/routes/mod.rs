//! API route handlers - maps HTTP endpoints to blame queries.
//!
//! Each submodule defines routes for a feature area:
//! - `blame`: Frequency vectors, weighted test blame, per-digest commits
//! - `commits`: Commit list of the current snapshot
//! - `status`: Snapshot statistics

pub mod blame;
pub mod commits;
pub mod status;

use axum::Router;

use crate::store::SharedStore;

pub fn create_router(store: SharedStore) -> Router {
    Router::new()
        .merge(blame::routes(store.clone()))
        .merge(commits::routes(store.clone()))
        .merge(status::routes(store))
}
