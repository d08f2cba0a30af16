use std::borrow::BorrowMut;

use axum::{body::Body, http::{Request, request::Builder}, response::Response};
use rand::{rngs::StdRng, SeedableRng};
use skate_contest_backend::ContestStore;
use skate_contest_entities::{mock::{self, MockOption}, ContestState};
use skate_contest_server::state::AppState;
use tower::Service;


#[derive(Default)]
pub struct FixtureOptions {
    /// Twelve riders with uuids from 1000 that have not paid yet.
    pub mock_default_contest: bool,
}

pub struct Fixture {
    pub app: axum::Router,
}

pub struct APIResponse {
    response: Response,
}

impl APIResponse {
    pub fn status(&self) -> axum::http::StatusCode {
        self.response.status()
    }

    pub async fn json<T: serde::de::DeserializeOwned>(self) -> T {
        let buf = hyper::body::to_bytes(self.response.into_body()).await.unwrap();
        serde_json::from_slice(&buf).unwrap()
    }
}

impl From<Response> for APIResponse {
    fn from(response: Response) -> Self {
        Self { response }
    }
}

impl Fixture {
    pub fn new(options: FixtureOptions) -> Self {
        let state = if options.mock_default_contest {
            let group = mock::make_mock_contest_with_options(
                MockOption {
                    deterministic_uuids: true,
                    num_participants: 12,
                    pay_all: false,
                    ..Default::default()
                },
                &mut StdRng::seed_from_u64(1),
            );
            AppState::new_with_store(ContestStore::new_with_seed(ContestState::new().apply(&group), 1))
        }
        else {
            AppState::new_test_app()
        };

        Self {
            app: skate_contest_server::app_with_state(state),
        }
    }

    #[allow(dead_code)]
    pub fn default() -> Self {
        Self::new(FixtureOptions::default())
    }

    async fn send(&mut self, request: Request<Body>) -> APIResponse {
        self.app.borrow_mut()
            .call(request)
            .await
            .unwrap().into()
    }

    fn json_request<T: serde::Serialize>(method: &str, path: &str, body: T) -> Request<Body> {
        Builder::new()
            .method(method)
            .header("Content-Type", "application/json")
            .uri(path)
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap()
    }

    #[allow(dead_code)]
    pub async fn get(&mut self, path: &str) -> APIResponse {
        let request = Builder::new()
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    #[allow(dead_code)]
    pub async fn delete(&mut self, path: &str) -> APIResponse {
        let request = Builder::new()
            .method("DELETE")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    #[allow(dead_code)]
    pub async fn post_json_no_body(&mut self, path: &str) -> APIResponse {
        let request = Builder::new()
            .method("POST")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    #[allow(dead_code)]
    pub async fn post_json<T>(&mut self, path: &str, body: T) -> APIResponse where T: serde::Serialize {
        self.send(Self::json_request("POST", path, body)).await
    }

    #[allow(dead_code)]
    pub async fn patch_json<T>(&mut self, path: &str, body: T) -> APIResponse where T: serde::Serialize {
        self.send(Self::json_request("PATCH", path, body)).await
    }
}
