// API Integration Tests
//
// Exercise the router end to end with tower's oneshot, using inline
// threshold records so no database is required.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use plant_monitor::{create_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt; // for oneshot

// Unroutable base URL: these tests must never touch a real database
fn test_app() -> axum::Router {
    create_router(AppState::new("http://127.0.0.1:9", None))
}

async fn json_response(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&body).expect("Failed to parse JSON")
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn plant_json(ph: f64, humidity: &str, n: &str, p: &str, k: &str) -> Value {
    json!({
        "name": "Kitchen Basil",
        "type": "Basil",
        "metrics": {
            "pHLevel": ph,
            "humidity": humidity,
            "nutrients": { "nitrogen": n, "phosphorus": p, "potassium": k }
        }
    })
}

fn ideal_json() -> Value {
    json!({
        "metrics": {
            "pHLevel": 6.3,
            "humidity": 50,
            "nutrients": { "nitrogen": 100, "phosphorus": 60, "potassium": 80 }
        }
    })
}

#[tokio::test]
async fn health_check_reports_status_and_timestamp() {
    let response = test_app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn inline_thresholds_evaluate_without_store_access() {
    let request = post_json(
        "/api/plants/health",
        json!({
            "plant": plant_json(6.0, "45%", "70%", "50%", "60%"),
            "idealConditions": ideal_json()
        }),
    );

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["healthy"], json!(true));
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["thresholdsFound"], json!(true));
    assert_eq!(body["checks"]["ph"], json!(true));
    assert_eq!(body["checks"]["potassium"], json!(true));
}

#[tokio::test]
async fn failing_metric_flips_verdict_and_is_identified() {
    // Humidity 25 vs ideal 50: diff 25 > 10
    let request = post_json(
        "/api/plants/health",
        json!({
            "plant": plant_json(6.0, "25%", "70%", "50%", "60%"),
            "idealConditions": ideal_json()
        }),
    );

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["healthy"], json!(false));
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["checks"]["humidity"], json!(false));
    assert_eq!(body["checks"]["ph"], json!(true));
}

#[tokio::test]
async fn malformed_percentage_is_rejected() {
    let request = post_json(
        "/api/plants/health",
        json!({
            "plant": plant_json(6.0, "damp", "70%", "50%", "60%"),
            "idealConditions": ideal_json()
        }),
    );

    let response = test_app().oneshot(request).await.unwrap();
    // Axum rejects the body during deserialization
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn invalid_profile_picture_is_unprocessable() {
    let request = Request::builder()
        .method("PATCH")
        .uri("/api/users/3/profile-picture")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "profilePicture": "not-a-data-url" }).to_string(),
        ))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = json_response(response).await;
    assert!(body["error"].as_str().unwrap().contains("data URL"));
}
