use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use direct_title_loans::intake::{
    privacy_router, ClockedRequestIds, PrivacyIntake, PRIVACY_ACKNOWLEDGEMENT,
    PRIVACY_REQUEST_PATH,
};
use regex::Regex;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn post_privacy_request(body: &Value) -> (StatusCode, Value) {
    let app = privacy_router(Arc::new(PrivacyIntake::new(ClockedRequestIds)));
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(PRIVACY_REQUEST_PATH)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("router responds");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

fn sample_request() -> Value {
    json!({
        "residentType": "CA",
        "requestTypes": ["Delete my data"],
        "name": "Jane Doe",
        "email": "jane@example.com",
        "phone": ""
    })
}

#[tokio::test]
async fn acknowledges_with_request_id() {
    let (status, body) = post_privacy_request(&sample_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], PRIVACY_ACKNOWLEDGEMENT);

    let id_shape = Regex::new(r"^PR-\d+-[a-z0-9]{9}$").expect("regex");
    let request_id = body["requestId"].as_str().expect("requestId string");
    assert!(id_shape.is_match(request_id), "unexpected id {request_id}");
}

#[tokio::test]
async fn identical_requests_get_distinct_ids() {
    let request = sample_request();
    let (_, first) = post_privacy_request(&request).await;
    let (_, second) = post_privacy_request(&request).await;
    assert_ne!(first["requestId"], second["requestId"]);
}

#[tokio::test]
async fn accepts_any_json_shape() {
    let (status, body) = post_privacy_request(&json!({"unexpected": [1, 2, 3]})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}
