use std::sync::Arc;

use axum::extract::FromRef;
use skate_contest_backend::ContestStore;
use skate_contest_entities::ContestState;
use tokio::sync::Mutex;

use crate::config::Config;

pub type SharedStore = Arc<Mutex<ContestStore>>;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
}

impl AppState {
    pub fn new(config: &Config) -> AppState {
        let state = if config.builtin_categories {
            ContestState::with_built_in_categories()
        } else {
            ContestState::new()
        };
        let store = match config.seed {
            Some(seed) => ContestStore::new_with_seed(state, seed),
            None => ContestStore::new(state),
        };
        Self::new_with_store(store)
    }

    pub fn new_with_store(store: ContestStore) -> AppState {
        AppState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Built-in categories and a fixed seed.
    pub fn new_test_app() -> AppState {
        Self::new(&Config { seed: Some(1), ..Default::default() })
    }
}

impl FromRef<AppState> for SharedStore {
    fn from_ref(app_state: &AppState) -> SharedStore {
        app_state.store.clone()
    }
}
