//! Map view endpoints: open a view, report clicks, save spots.

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    Json,
};
use leaflet_map::{ClientEvent, MapCommand};
use metrics::counter;
use serde::{Deserialize, Serialize};
use spot_common::{validate_coordinates, Spot, SpotError};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;
use crate::registry::SharedView;
use crate::state::AppState;
use crate::view::{MainView, ViewReaction};

/// Response for a newly opened view.
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub view_id: String,
    pub commands: Vec<MapCommand>,
}

/// Response to a client event.
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum EventResponse {
    /// The page should ask for a name for this point.
    MapClicked {
        latitude: f64,
        longitude: f64,
        prompt: String,
    },

    /// `spot` and `notification` are null when the marker was unknown.
    MarkerClicked {
        spot: Option<Spot>,
        notification: Option<String>,
    },
}

/// Request body for saving a clicked point.
#[derive(Debug, Deserialize)]
pub struct SaveSpotRequest {
    #[serde(default)]
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Response for a saved spot.
#[derive(Debug, Serialize)]
pub struct SaveSpotResponse {
    pub spot: Spot,
    pub commands: Vec<MapCommand>,
}

/// POST /api/views - Open a map view
pub async fn create_view_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> (StatusCode, Json<ViewResponse>) {
    let mut view = MainView::open(&state.store, &state.config.tile_layer).await;
    let commands = view.take_commands();
    let markers = view.marker_count();

    let (id, _) = state.views.insert(view).await;
    info!(view_id = %id, markers = markers, "Opened map view");

    (
        StatusCode::CREATED,
        Json(ViewResponse {
            view_id: id.to_string(),
            commands,
        }),
    )
}

/// POST /api/views/:view_id/events - Dispatch a click from the page
pub async fn view_event_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(view_id): Path<String>,
    payload: Result<Json<ClientEvent>, JsonRejection>,
) -> Result<Json<EventResponse>, ApiError> {
    let Json(event) = payload?;
    let shared = find_view(&state, &view_id).await?;

    let reaction = shared.lock().await.handle_event(event);

    let response = match reaction {
        ViewReaction::PromptForName {
            latitude,
            longitude,
            prompt,
        } => EventResponse::MapClicked {
            latitude,
            longitude,
            prompt,
        },
        ViewReaction::Notify { spot, message } => {
            counter!("marker_clicks_total", "resolved" => "true").increment(1);
            EventResponse::MarkerClicked {
                spot: Some(spot.as_ref().clone()),
                notification: Some(message),
            }
        }
        ViewReaction::Ignore => {
            counter!("marker_clicks_total", "resolved" => "false").increment(1);
            EventResponse::MarkerClicked {
                spot: None,
                notification: None,
            }
        }
    };

    Ok(Json(response))
}

/// POST /api/views/:view_id/spots - Name and save a clicked point
pub async fn save_spot_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(view_id): Path<String>,
    payload: Result<Json<SaveSpotRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SaveSpotResponse>), ApiError> {
    let Json(request) = payload?;
    validate_coordinates(request.latitude, request.longitude)?;
    let shared = find_view(&state, &view_id).await?;

    let mut view = shared.lock().await;
    let spot = view
        .save_spot(&state.store, &request.name, request.latitude, request.longitude)
        .await;
    let commands = view.take_commands();
    drop(view);

    info!(view_id = %view_id, name = %spot.name, "Saved spot");

    Ok((
        StatusCode::CREATED,
        Json(SaveSpotResponse {
            spot: spot.as_ref().clone(),
            commands,
        }),
    ))
}

async fn find_view(state: &AppState, view_id: &str) -> Result<SharedView, ApiError> {
    let id = Uuid::parse_str(view_id).map_err(|_| {
        SpotError::invalid_parameter("view_id", format!("'{}' is not a valid view id", view_id))
    })?;

    state
        .views
        .get(&id)
        .await
        .ok_or_else(|| SpotError::ViewNotFound(view_id.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_response_json() {
        let response = EventResponse::MarkerClicked {
            spot: None,
            notification: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["event"], "marker-clicked");
        assert!(json["spot"].is_null());
    }
}
