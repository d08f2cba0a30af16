use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Json, Router, routing::get, routing::post};
use serde::{Serialize, Deserialize};
use skate_contest_backend::actions::*;
use skate_contest_backend::registration::RegistrationData;
use skate_contest_backend::View;
use skate_contest_entities::prelude::*;

use crate::response::APIError;
use crate::state::{AppState, SharedStore};


#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

fn participant_or_not_found(state: &ContestState, participant_id: Uuid) -> Result<Participant, APIError> {
    state.participant(participant_id)
        .cloned()
        .ok_or_else(|| APIError::from((StatusCode::NOT_FOUND, "Participant not found")))
}

async fn register_participant(
    State(store): State<SharedStore>,
    Json(registration): Json<RegistrationData>,
) -> Result<(StatusCode, Json<Participant>), APIError> {
    let mut store = store.lock().await;
    let changes = store.execute(Action::AddParticipant { action: AddParticipantAction { registration } })?;

    let participant = changes.participants()
        .first()
        .map(|p| (*p).clone())
        .ok_or_else(|| APIError::from((StatusCode::INTERNAL_SERVER_ERROR, "Registration produced no participant")))?;
    tracing::info!("Registered participant {} with start number {}", participant.uuid, participant.start_number);

    Ok((StatusCode::CREATED, Json(participant)))
}

async fn list_participants(
    State(store): State<SharedStore>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<serde_json::Value>, APIError> {
    let store = store.lock().await;
    let participants = match query.search {
        Some(term) => View::ParticipantSearch { term }.load_json(store.state())?,
        None => serde_json::to_value(&store.state().participants).map_err(anyhow::Error::from)?,
    };
    Ok(Json(participants))
}

async fn update_participant(
    State(store): State<SharedStore>,
    Path(participant_id): Path<Uuid>,
    Json(update): Json<ParticipantUpdate>,
) -> Result<Json<Participant>, APIError> {
    let mut store = store.lock().await;
    store.execute(Action::UpdateParticipant { action: UpdateParticipantAction { participant_id, update } })?;
    Ok(Json(participant_or_not_found(store.state(), participant_id)?))
}

async fn get_participant_by_access_code(
    State(store): State<SharedStore>,
    Path(code): Path<String>,
) -> Result<Json<Participant>, APIError> {
    let store = store.lock().await;
    store.state()
        .find_by_access_code(&code)
        .cloned()
        .map(Json)
        .ok_or_else(|| APIError::from((StatusCode::NOT_FOUND, "No participant with this access code")))
}

async fn toggle_payment(
    State(store): State<SharedStore>,
    Path((participant_id, category)): Path<(Uuid, String)>,
) -> Result<Json<Participant>, APIError> {
    let category: Category = category.parse()?;
    let mut store = store.lock().await;
    store.execute(Action::ToggleCategoryPayment { action: ToggleCategoryPaymentAction { participant_id, category } })?;
    Ok(Json(participant_or_not_found(store.state(), participant_id)?))
}

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/participants", post(register_participant).get(list_participants))
        .route("/participants/:participant_id", axum::routing::patch(update_participant))
        .route("/participants/by-access-code/:code", get(get_participant_by_access_code))
        .route("/participants/:participant_id/payments/:category", post(toggle_payment))
}
