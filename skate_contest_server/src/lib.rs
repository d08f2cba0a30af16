use axum::Router;
use tower_http::trace::TraceLayer;

pub mod categories;
pub mod config;
pub mod heats;
pub mod overview;
pub mod participants;
pub mod response;
pub mod scores;
pub mod state;

use state::AppState;

pub fn app_with_state(state: AppState) -> Router {
    let api = Router::new()
        .merge(participants::router())
        .merge(categories::router())
        .merge(heats::router())
        .merge(scores::router())
        .merge(overview::router());

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
