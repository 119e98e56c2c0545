use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde_json::Value;

use super::request_id::RequestIdSource;
use super::service::{PrivacyIntake, PrivacyReceipt};

pub const PRIVACY_REQUEST_PATH: &str = "/api/privacy-request";

/// Router exposing the privacy intake endpoint.
pub fn privacy_router<S>(intake: Arc<PrivacyIntake<S>>) -> Router
where
    S: RequestIdSource + 'static,
{
    Router::new()
        .route(PRIVACY_REQUEST_PATH, post(privacy_request_handler::<S>))
        .with_state(intake)
}

/// Always answers 200 for a well-formed JSON body.
pub async fn privacy_request_handler<S>(
    State(intake): State<Arc<PrivacyIntake<S>>>,
    Json(payload): Json<Value>,
) -> Json<PrivacyReceipt>
where
    S: RequestIdSource + 'static,
{
    Json(intake.receive(&payload))
}
