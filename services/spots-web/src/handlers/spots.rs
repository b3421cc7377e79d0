//! Shared spot list endpoint.

use axum::{extract::Extension, Json};
use serde::Serialize;
use spot_common::Spot;
use std::sync::Arc;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SpotListResponse {
    pub spots: Vec<Spot>,
    pub capacity: usize,
}

/// GET /api/spots - Snapshot of all stored spots, oldest first
pub async fn list_spots_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Json<SpotListResponse> {
    let spots = state
        .store
        .all()
        .await
        .iter()
        .map(|s| s.as_ref().clone())
        .collect();

    Json(SpotListResponse {
        spots,
        capacity: state.store.capacity(),
    })
}
