mod common;

use common::{AMBULANCE_ID, seeded_app, send};
use http::{Method, StatusCode};

#[tokio::test]
async fn test_register_and_remove_ambulance() {
    let (app, _store) = seeded_app().await;

    let body = r#"{"name": "Ward 2", "roomNumber": "202"}"#;
    let (status, json) = send(&app, Method::POST, "/api/ambulances", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    let id = json["id"].as_str().unwrap().to_string();
    assert_eq!(json["roomNumber"], "202");

    let orders = format!("/api/ambulances/{}/meal-orders", id);
    let (status, json) = send(&app, Method::GET, &orders, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!([]));

    let (status, _) = send(&app, Method::DELETE, &format!("/api/ambulances/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, &orders, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_register_existing_id_is_conflict() {
    let (app, _store) = seeded_app().await;

    let body = format!(r#"{{"id": "{}", "name": "Again"}}"#, AMBULANCE_ID);
    let (status, json) = send(&app, Method::POST, "/api/ambulances", Some(&body)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], 1002);
}

#[tokio::test]
async fn test_register_without_name_is_bad_request() {
    let (app, _store) = seeded_app().await;

    let (status, json) = send(&app, Method::POST, "/api/ambulances", Some("{}")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Name is required");
}

#[tokio::test]
async fn test_remove_unknown_ambulance_is_not_found() {
    let (app, _store) = seeded_app().await;

    let (status, _) = send(&app, Method::DELETE, "/api/ambulances/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_reports_store() {
    let (app, _store) = seeded_app().await;

    let (status, json) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["store"], "memory");
}
