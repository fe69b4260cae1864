//! Router tests against an in-memory repository and cache.

use addrbook_config::{AppMetadata, ServerConfig};
use addrbook_repository::{ContactRepositoryImpl, InMemoryContactDaoImpl};
use addrbook_rest::{create_router, AppState};
use addrbook_service::{AddressBookImpl, CacheRegistry, ContactCachePartition, InMemoryCache, PartitionedCache};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

fn app() -> Router {
    let repository = Arc::new(ContactRepositoryImpl::new(Arc::new(InMemoryContactDaoImpl::new())));
    let cache = Arc::new(PartitionedCache::new(
        Arc::new(InMemoryCache::new(100)),
        Arc::new(CacheRegistry::new()),
        Duration::from_secs(1),
    ));
    let partition = ContactCachePartition::register(cache, Duration::from_secs(60)).unwrap();
    let address_book = Arc::new(AddressBookImpl::new(repository, partition));

    let state = AppState::new(address_book, Vec::new(), AppMetadata::default());
    create_router(state, &ServerConfig::default())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn ann_lee() -> Value {
    json!({
        "first_name": "Ann",
        "last_name": "Lee",
        "phones": [{"phone_type": "mobile", "phone_number": "123"}]
    })
}

#[tokio::test]
async fn test_create_then_get() {
    let app = app();

    let (status, created) = send(&app, Method::POST, "/api/contacts", Some(ann_lee())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["success"], true);
    assert_eq!(created["data"]["first_name"], "Ann");
    assert_eq!(created["data"]["phones"][0]["phone_type"], "mobile");

    let id = created["data"]["id"].as_str().unwrap().to_string();
    let (status, fetched) = send(&app, Method::GET, &format!("/api/contacts/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"], created["data"]);
}

#[tokio::test]
async fn test_list_contacts() {
    let app = app();
    send(&app, Method::POST, "/api/contacts", Some(ann_lee())).await;
    send(
        &app,
        Method::POST,
        "/api/contacts",
        Some(json!({"first_name": "Bo", "last_name": "Kim"})),
    )
    .await;

    let (status, list) = send(&app, Method::GET, "/api/contacts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_unknown_and_malformed_ids_are_404() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/contacts/01920000-0000-7000-8000-000000000000",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let (status, _) = send(&app, Method::GET, "/api/contacts/malformed-id", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/api/contacts/malformed-id", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_contact() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/api/contacts", Some(ann_lee())).await;
    let uri = format!("/api/contacts/{}", created["data"]["id"].as_str().unwrap());

    let (status, updated) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({"first_name": "Ann", "last_name": "Lee-Park", "phones": []})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["last_name"], "Lee-Park");
    assert_eq!(updated["data"]["id"], created["data"]["id"]);

    let (_, fetched) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(fetched["data"]["last_name"], "Lee-Park");
}

#[tokio::test]
async fn test_update_unknown_contact_is_404() {
    let app = app();
    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/contacts/01920000-0000-7000-8000-000000000000",
        Some(ann_lee()),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_contact() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/api/contacts", Some(ann_lee())).await;
    let uri = format!("/api/contacts/{}", created["data"]["id"].as_str().unwrap());

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_body_is_rejected() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/contacts",
        Some(json!({"first_name": " ", "last_name": "Lee", "phones": [{"phone_type": "home", "phone_number": "abc"}]})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    let fields: Vec<&str> = body["error"]["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, ["first_name", "phones[0].phone_number"]);

    let (status, body) = send(&app, Method::POST, "/api/contacts", Some(json!({"first_name": "Ann"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "INVALID_JSON");
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contacts")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_request_id_is_echoed_and_used_as_trace_id() {
    let request = Request::builder()
        .uri("/api/contacts/malformed-id")
        .header("x-request-id", "req-42")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-42");

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"]["trace_id"], "req-42");
}

#[tokio::test]
async fn test_request_id_is_generated_when_absent() {
    let request = Request::builder().uri("/live").body(Body::empty()).unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_version_and_health() {
    let app = app();

    let (status, version) = send(&app, Method::GET, "/api/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(version["service"], "addrbook/http");
    assert_eq!(version["build"], "1");

    let (status, health) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "healthy");

    let (status, ready) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ready["status"], "ready");
}
