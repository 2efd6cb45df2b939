//! Integration tests for the drivers API
//!
//! These tests drive the full router: routing, extraction, validation,
//! store mutation and response mapping.

mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{send, setup_test_app};

fn driver_attributes(name: &str) -> Value {
    json!({
        "name": name,
        "phoneNumber": "123-456-7890",
        "email": "valentin@example.com",
        "vehicleMake": "BMW",
        "vehicleModel": "X5",
        "vehicleYear": 2021,
        "vehicleLicensePlate": "ABC-123",
        "vehicleDescription": null,
        "vehicleFeatures": []
    })
}

fn create_payload(name: &str) -> Value {
    json!({ "data": { "type": "drivers", "attributes": driver_attributes(name) } })
}

#[tokio::test]
async fn test_create_driver() {
    let app = setup_test_app();

    let (status, body) = send(&app, "POST", "/api/drivers", Some(create_payload("Fedor"))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["type"], "drivers");
    assert!(body["id"].as_str().unwrap().parse::<i64>().is_ok());
    assert_eq!(body["attributes"], driver_attributes("Fedor"));
    assert!(body.get("createdAt").is_none());
}

#[tokio::test]
async fn test_list_drivers_in_creation_order() {
    let app = setup_test_app();

    for name in ["Another Driver1", "Another Driver2"] {
        let (status, _) = send(&app, "POST", "/api/drivers", Some(create_payload(name))).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, "GET", "/api/drivers", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"], json!({}));
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["attributes"]["name"], "Another Driver1");
    assert_eq!(data[1]["attributes"]["name"], "Another Driver2");
}

#[tokio::test]
async fn test_get_driver_by_id_matches_created() {
    let app = setup_test_app();

    let (_, created) = send(
        &app,
        "POST",
        "/api/drivers",
        Some(create_payload("Another Driver3")),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(&app, "GET", &format!("/api/drivers/{id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

#[tokio::test]
async fn test_get_driver_not_found() {
    let app = setup_test_app();

    let (status, body) = send(&app, "GET", "/api/drivers/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "errorMessages": [{ "field": "id", "message": "Driver not found" }] })
    );

    let (status, _) = send(&app, "GET", "/api/drivers/not-a-number", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_driver_replaces_attributes() {
    let app = setup_test_app();

    let (_, created) = send(
        &app,
        "POST",
        "/api/drivers",
        Some(create_payload("Another Driver3")),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let update = json!({
        "data": {
            "id": id,
            "type": "drivers",
            "attributes": {
                "name": "Updated Name",
                "phoneNumber": "999-888-7777",
                "email": "updated@example.com",
                "vehicleMake": "Tesla",
                "vehicleModel": "Model S",
                "vehicleYear": 2022,
                "vehicleLicensePlate": "NEW-789",
                "vehicleDescription": "Updated vehicle description",
                "vehicleFeatures": ["child-seat"]
            }
        }
    });

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/drivers/{id}"),
        Some(update.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, fetched) = send(&app, "GET", &format!("/api/drivers/{id}"), None).await;
    assert_eq!(fetched, update["data"]);
}

#[tokio::test]
async fn test_update_unknown_driver_is_not_found_before_validation() {
    let app = setup_test_app();

    // Body is invalid too, but the missing id wins
    let payload = json!({ "data": { "type": "drivers", "attributes": { "name": "" } } });
    let (status, body) = send(&app, "PUT", "/api/drivers/12345", Some(payload)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errorMessages"].as_array().unwrap().len(), 1);
    assert_eq!(body["errorMessages"][0]["field"], "id");
}

#[tokio::test]
async fn test_delete_driver_then_not_found() {
    let app = setup_test_app();

    let (_, created) = send(
        &app,
        "POST",
        "/api/drivers",
        Some(create_payload("Another Driver4")),
    )
    .await;
    let uri = format!("/api/drivers/{}", created["id"].as_str().unwrap());

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_driver_ids_are_unique() {
    let app = setup_test_app();

    let mut ids = Vec::new();
    for i in 0..5 {
        let (_, created) = send(
            &app,
            "POST",
            "/api/drivers",
            Some(create_payload(&format!("Driver {i}"))),
        )
        .await;
        ids.push(created["id"].as_str().unwrap().to_string());
    }

    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
}

#[tokio::test]
async fn test_reads_do_not_change_the_store() {
    let app = setup_test_app();

    let (_, created) = send(&app, "POST", "/api/drivers", Some(create_payload("Reader"))).await;
    let by_id = format!("/api/drivers/{}", created["id"].as_str().unwrap());

    let (_, first) = send(&app, "GET", "/api/drivers", None).await;
    for _ in 0..3 {
        send(&app, "GET", &by_id, None).await;
        send(&app, "GET", "/api/drivers", None).await;
    }
    let (_, last) = send(&app, "GET", "/api/drivers", None).await;

    assert_eq!(first, last);
    assert_eq!(last["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_clear_all_data_resets_both_stores() {
    let app = setup_test_app();

    send(
        &app,
        "POST",
        "/api/drivers",
        Some(create_payload("To Be Cleared")),
    )
    .await;
    let video = json!({
        "title": "Clip",
        "author": "Someone",
        "canBeDownloaded": false,
        "minAgeRestriction": null,
        "publicationDate": "2024-05-01T10:00:00.000Z",
        "availableResolutions": []
    });
    send(&app, "POST", "/api/videos", Some(video)).await;

    let (status, _) = send(&app, "DELETE", "/api/testing/all-data", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, drivers) = send(&app, "GET", "/api/drivers", None).await;
    let (_, videos) = send(&app, "GET", "/api/videos", None).await;
    assert_eq!(drivers["data"], json!([]));
    assert_eq!(videos, json!([]));
}

#[tokio::test]
async fn test_root_greeting() {
    let app = setup_test_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"hello world!!!");
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let app = setup_test_app();

    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    let paths = body["paths"].as_object().unwrap();
    for path in [
        "/api/drivers",
        "/api/drivers/{id}",
        "/api/videos",
        "/api/videos/{id}",
        "/api/testing/all-data",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
}

#[tokio::test]
async fn test_swagger_ui_is_served() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/swagger-ui/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"), "got {content_type}");
}

#[tokio::test]
async fn test_omitted_optional_attributes_are_returned_explicitly() {
    let app = setup_test_app();

    let mut attributes = driver_attributes("Minimal");
    let record = attributes.as_object_mut().unwrap();
    record.remove("vehicleDescription");
    record.remove("vehicleFeatures");
    let payload = json!({ "data": { "type": "drivers", "attributes": attributes } });

    let (status, created) = send(&app, "POST", "/api/drivers", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);

    // Output always carries every attribute; omitted ones come back as null / []
    let uri = format!("/api/drivers/{}", created["id"].as_str().unwrap());
    let (_, fetched) = send(&app, "GET", &uri, None).await;
    assert_eq!(fetched["attributes"], driver_attributes("Minimal"));
    assert_eq!(fetched["attributes"]["vehicleDescription"], Value::Null);
    assert_eq!(fetched["attributes"]["vehicleFeatures"], json!([]));
}
