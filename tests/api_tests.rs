//! HTTP tests driving the router directly

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use event_graph::api::{create_router, AppState};
use event_graph::engine::Engine;

fn app() -> Router {
    create_router(Arc::new(AppState::new(Engine::in_memory())))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn create(app: &Router, collection: &str, input: Value) -> Value {
    let (status, body) = send(app, Method::POST, &format!("/api/{}", collection), Some(input)).await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"].clone()
}

#[tokio::test]
async fn test_crud_round() {
    let app = app();

    let user = create(&app, "users", json!({"username": "ana", "email": "a@x.com"})).await;
    let id = user["id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, Method::GET, &format!("/api/users/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], user);
    assert_eq!(body["sequence_id"], 1);

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/api/users/{}", id),
        Some(json!({"email": "ana@x.com", "id": "hijack"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id.as_str());
    assert_eq!(body["data"]["email"], "ana@x.com");
    assert_eq!(body["data"]["username"], "ana");

    let (status, body) = send(&app, Method::GET, "/api/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);

    let (status, body) = send(&app, Method::DELETE, &format!("/api/users/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], "ana@x.com");
    assert_eq!(body["sequence_id"], 3);

    let (status, body) = send(&app, Method::GET, &format!("/api/users/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_missing_ids_on_mutation() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/locations/nope",
        Some(json!({"name": "x"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let (status, _) = send(&app, Method::DELETE, "/api/events/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, Method::GET, "/api/locations", None).await;
    assert_eq!(body["total"], 0);
    assert_eq!(body["sequence_id"], 0);
}

#[tokio::test]
async fn test_malformed_input_is_rejected() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/api/users", Some(json!({"username": "ana"}))).await;
    assert!(status.is_client_error());
    assert_eq!(body["code"], "BAD_REQUEST");

    let (_, body) = send(&app, Method::GET, "/api/users", None).await;
    assert_eq!(body["total"], 0);

    // PATCH and batch bodies go through the same rejection path
    let ana = create(&app, "users", json!({"username": "ana", "email": "a@x.com"})).await;
    let uri = format!("/api/users/{}", ana["id"].as_str().unwrap());
    let (status, body) = send(&app, Method::PATCH, &uri, Some(json!({"email": null}))).await;
    assert!(status.is_client_error());
    assert_eq!(body["code"], "BAD_REQUEST");

    let (status, body) = send(&app, Method::POST, "/api/batch", Some(json!({"ops": []}))).await;
    assert!(status.is_client_error());
    assert_eq!(body["code"], "BAD_REQUEST");

    let (_, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(body["data"], ana);
    assert_eq!(body["sequence_id"], 1);
}

#[tokio::test]
async fn test_relationship_endpoints() {
    let app = app();

    let loc = create(
        &app,
        "locations",
        json!({"name": "HQ", "desc": "Main office", "lat": 1.0, "lng": 2.0}),
    )
    .await;
    let user = create(&app, "users", json!({"username": "ana", "email": "a@x.com"})).await;
    let event = create(
        &app,
        "events",
        json!({
            "title": "Sync", "desc": "d", "date": "2024-01-01", "from": "10:00", "to": "11:00",
            "location_id": loc["id"], "user_id": user["id"]
        }),
    )
    .await;
    let event_id = event["id"].as_str().unwrap();
    let user_id = user["id"].as_str().unwrap();

    let (_, body) = send(&app, Method::GET, &format!("/api/events/{}/user", event_id), None).await;
    assert_eq!(body["data"], user);

    let (_, body) = send(&app, Method::GET, &format!("/api/users/{}/events", user_id), None).await;
    assert_eq!(body["data"], json!([event]));

    let (_, body) = send(
        &app,
        Method::GET,
        &format!("/api/events/{}/participants", event_id),
        None,
    )
    .await;
    assert_eq!(body["data"], json!([]));

    send(&app, Method::DELETE, &format!("/api/users/{}", user_id), None).await;

    let (status, body) =
        send(&app, Method::GET, &format!("/api/events/{}/user", event_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], Value::Null);

    let (status, _) = send(&app, Method::GET, &format!("/api/users/{}/events", user_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_batch_resolves_siblings_independently() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/batch",
        Some(json!({
            "operations": [
                {"op": "create", "entity": "user", "input": {"username": "ana", "email": "a@x.com"}},
                {"op": "update", "entity": "user", "id": "missing", "input": {"email": "x"}},
                {"op": "list", "entity": "users", "include": ["events"]}
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["data"]["username"], "ana");
    assert!(results[0].get("error").is_none());
    assert_eq!(results[1]["data"], Value::Null);
    assert_eq!(results[1]["error"]["code"], "NOT_FOUND");
    assert_eq!(results[2]["data"][0]["events"], json!([]));
    assert_eq!(body["sequence_id"], 1);
}

#[tokio::test]
async fn test_batch_nested_include() {
    let app = app();

    let ana = create(&app, "users", json!({"username": "ana", "email": "a@x.com"})).await;
    let bob = create(&app, "users", json!({"username": "bob", "email": "b@x.com"})).await;
    let hq = create(
        &app,
        "locations",
        json!({"name": "HQ", "desc": "Main office", "lat": 1.0, "lng": 2.0}),
    )
    .await;
    let sync = create(
        &app,
        "events",
        json!({
            "title": "Sync", "desc": "d", "date": "2024-01-01", "from": "10:00", "to": "11:00",
            "location_id": hq["id"], "user_id": ana["id"]
        }),
    )
    .await;
    create(
        &app,
        "participants",
        json!({"user_id": bob["id"], "event_id": sync["id"]}),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/batch",
        Some(json!({
            "operations": [
                {"op": "get", "entity": "event", "id": sync["id"],
                 "include": ["participants.user", "user"]},
                {"op": "delete", "entity": "event", "id": sync["id"],
                 "include": ["participants.location"]}
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results[0]["data"]["user"]["username"], "ana");
    assert_eq!(results[0]["data"]["participants"][0]["user"]["username"], "bob");
    assert_eq!(results[1]["error"]["code"], "BAD_REQUEST");

    // The rejected delete never ran
    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/api/events/{}", sync["id"].as_str().unwrap()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sequence_id"], 5);
}
