use axum::extract::State;
use axum::{Json, Router, routing::get};
use skate_contest_backend::View;

use crate::response::APIError;
use crate::state::{AppState, SharedStore};

async fn load_view(store: &SharedStore, view: View) -> Result<Json<serde_json::Value>, APIError> {
    let store = store.lock().await;
    Ok(Json(view.load_json(store.state())?))
}

async fn get_overview(State(store): State<SharedStore>) -> Result<Json<serde_json::Value>, APIError> {
    load_view(&store, View::ParticipantsOverview).await
}

async fn get_announcements(State(store): State<SharedStore>) -> Result<Json<serde_json::Value>, APIError> {
    load_view(&store, View::Announcements).await
}

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/overview", get(get_overview))
        .route("/announcements", get(get_announcements))
}
