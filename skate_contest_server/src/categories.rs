use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Json, Router, routing::{delete, get, patch, post}};
use serde::{Serialize, Deserialize};
use skate_contest_backend::{actions::*, View};
use skate_contest_entities::prelude::*;

use crate::response::APIError;
use crate::state::{AppState, SharedStore};


#[derive(Debug, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub category: Category,
}

fn contest_category_or_not_found(state: &ContestState, category: &Category) -> Result<ContestCategory, APIError> {
    state.contest_category(category)
        .cloned()
        .ok_or_else(|| APIError::from((StatusCode::NOT_FOUND, "Category not found")))
}

async fn list_categories(State(store): State<SharedStore>) -> Json<Vec<ContestCategory>> {
    Json(store.lock().await.state().categories.clone())
}

async fn create_category(
    State(store): State<SharedStore>,
    Json(request): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<ContestCategory>), APIError> {
    let mut store = store.lock().await;
    store.execute(Action::AddCategory { action: AddCategoryAction { category: request.category.clone() } })?;
    tracing::info!("Added category {}", request.category);
    Ok((StatusCode::CREATED, Json(contest_category_or_not_found(store.state(), &request.category)?)))
}

async fn delete_category(
    State(store): State<SharedStore>,
    Path(category): Path<String>,
) -> Result<StatusCode, APIError> {
    let category: Category = category.parse()?;
    store.lock().await.execute(Action::RemoveCategory { action: RemoveCategoryAction { category: category.clone() } })?;
    tracing::info!("Removed category {}", category);
    Ok(StatusCode::NO_CONTENT)
}

async fn update_heat_config(
    State(store): State<SharedStore>,
    Path(category): Path<String>,
    Json(update): Json<HeatConfigUpdate>,
) -> Result<Json<ContestCategory>, APIError> {
    let category: Category = category.parse()?;
    let mut store = store.lock().await;
    store.execute(Action::SetHeatConfig { action: SetHeatConfigAction { category: category.clone(), update } })?;
    Ok(Json(contest_category_or_not_found(store.state(), &category)?))
}

async fn generate_heats(
    State(store): State<SharedStore>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Heat>>, APIError> {
    let category: Category = category.parse()?;
    let mut store = store.lock().await;
    let changes = store.execute(Action::generate_heats(category.clone()))?;
    let heats = changes.heats().into_iter().cloned().collect::<Vec<_>>();
    tracing::info!("Generated {} heats for {}", heats.len(), category);
    Ok(Json(heats))
}

async fn get_paid_participants(
    State(store): State<SharedStore>,
    Path(category): Path<String>,
) -> Result<Json<serde_json::Value>, APIError> {
    let category: Category = category.parse()?;
    let store = store.lock().await;
    Ok(Json(View::PaidParticipants { category }.load_json(store.state())?))
}

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route("/categories/:category", delete(delete_category))
        .route("/categories/:category/heat-config", patch(update_heat_config))
        .route("/categories/:category/heats", post(generate_heats))
        .route("/categories/:category/paid-participants", get(get_paid_participants))
}
