//! Test utilities for building AppState and reading handler responses

use axum::response::Response;
use chrono::Duration;
use serde::de::DeserializeOwned;
use slotwarden::server::{model::app::AppState, service::capacity::policy::CapacityPolicy};
use slotwarden_test_utils::TestContext;

/// Extension trait for TestContext to create AppState with the default capacity policy
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        AppState {
            db: self.db.clone(),
            policy: CapacityPolicy::default(),
            reservation_ttl: Duration::minutes(15),
        }
    }
}

/// Deserialize the JSON body of a handler response
pub async fn read_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not the expected JSON")
}
