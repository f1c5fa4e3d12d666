//! Snapshot status endpoint.
//!
//! GET /api/v1/status
//!
//! Returns commit, test and digest counts of the current snapshot and how
//! long ago it was computed.

use axum::{extract::State, routing::get, Json, Router};

use crate::error::Result;
use crate::models::StatusResponse;
use crate::store::SharedStore;

pub fn routes(store: SharedStore) -> Router {
    Router::new()
        .route("/api/v1/status", get(get_status))
        .with_state(store)
}

async fn get_status(State(store): State<SharedStore>) -> Result<Json<StatusResponse>> {
    Ok(Json(store.current()?.stats()))
}
