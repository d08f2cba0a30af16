use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Json, Router, routing::{get, patch}};
use serde::{Serialize, Deserialize};
use skate_contest_backend::{actions::*, View};
use skate_contest_entities::prelude::*;

use crate::response::APIError;
use crate::state::{AppState, SharedStore};


#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateHeatStatusRequest {
    pub status: HeatStatus,
}

async fn list_heats(State(store): State<SharedStore>) -> Result<Json<serde_json::Value>, APIError> {
    let store = store.lock().await;
    Ok(Json(View::Heats.load_json(store.state())?))
}

async fn update_heat_status(
    State(store): State<SharedStore>,
    Path(heat_id): Path<Uuid>,
    Json(request): Json<UpdateHeatStatusRequest>,
) -> Result<Json<Heat>, APIError> {
    let mut store = store.lock().await;
    store.execute(Action::SetHeatStatus { action: SetHeatStatusAction { heat_id, status: request.status } })?;

    store.state()
        .heat(heat_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| APIError::from((StatusCode::NOT_FOUND, "Heat not found")))
}

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/heats", get(list_heats))
        .route("/heats/:heat_id/status", patch(update_heat_status))
}
