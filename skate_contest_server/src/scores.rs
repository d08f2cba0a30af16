use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::{Json, Router, routing::post};
use serde::{Serialize, Deserialize};
use skate_contest_backend::actions::*;
use skate_contest_entities::prelude::*;

use crate::response::APIError;
use crate::state::{AppState, SharedStore};


#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunHistoryQuery {
    pub participant_id: Option<Uuid>,
}

async fn submit_score(
    State(store): State<SharedStore>,
    Json(action): Json<AddScoreAction>,
) -> Result<(StatusCode, Json<ScoredRun>), APIError> {
    let run_id = action.run_id;
    let mut store = store.lock().await;
    store.execute(Action::AddScore { action })?;

    let run = store.state()
        .scored_run(run_id)
        .cloned()
        .ok_or_else(|| APIError::from((StatusCode::INTERNAL_SERVER_ERROR, "Scored run was not stored")))?;
    tracing::info!("Run {} of {} scored {:.2}", run.run_id, run.participant_id, run.final_score);

    Ok((StatusCode::CREATED, Json(run)))
}

async fn list_runs(
    State(store): State<SharedStore>,
    Query(query): Query<RunHistoryQuery>,
) -> Json<Vec<ScoredRun>> {
    let store = store.lock().await;
    let runs = match query.participant_id {
        Some(participant_id) => store.state().scored_runs_for(participant_id).into_iter().cloned().collect(),
        None => store.state().scored_runs.clone(),
    };
    Json(runs)
}

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/scores", post(submit_score).get(list_runs))
}
