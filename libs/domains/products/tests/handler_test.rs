//! Handler tests for the Products domain
//!
//! These verify the HTTP surface end to end against the in-memory
//! repository: request deserialization, validation, status codes, and
//! response serialization — without a running database.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // for oneshot()

fn app() -> Router {
    let repository = InMemoryProductRepository::new();
    let service = ProductService::new(repository);
    handlers::router(service)
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn put_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

async fn create_widget(app: &Router) -> ProductResponse {
    let response = app
        .clone()
        .oneshot(post_json("/", json!({"name": "Widget", "price": 9.99})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_product_returns_201_with_defaults() {
    let app = app();

    let response = app
        .oneshot(post_json("/", json!({"name": "Widget", "price": 9.99})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["name"], "Widget");
    assert_eq!(body["price"], 9.99);
    assert_eq!(body["stock"], 0);
    assert!(body.get("description").is_none());
    assert!(body["id"].is_i64());
    assert_eq!(body["createdAt"], body["updatedAt"]);
}

#[tokio::test]
async fn test_create_product_echoes_submitted_values() {
    let app = app();

    let response = app
        .oneshot(post_json(
            "/",
            json!({
                "name": "Gadget",
                "description": "A fine gadget",
                "price": 19.5,
                "stock": 7
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let product: ProductResponse = json_body(response.into_body()).await;
    assert_eq!(product.name, "Gadget");
    assert_eq!(product.description.as_deref(), Some("A fine gadget"));
    assert_eq!(product.price, 19.5);
    assert_eq!(product.stock, 7);
}

#[tokio::test]
async fn test_create_product_rejects_empty_name() {
    let app = app();

    let response = app
        .oneshot(post_json("/", json!({"name": "", "price": 10.0})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert!(body["details"].get("name").is_some());
}

#[tokio::test]
async fn test_create_product_reports_all_violations() {
    let app = app();

    let response = app
        .oneshot(post_json("/", json!({"name": "", "price": -5.0, "stock": -1})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    let details = body["details"].as_object().unwrap();
    assert!(details.contains_key("name"));
    assert!(details.contains_key("price"));
    assert!(details.contains_key("stock"));
}

#[tokio::test]
async fn test_create_product_rejects_unknown_fields() {
    let app = app();

    // Attempting to forge the id must fail, not be silently dropped
    let response = app
        .oneshot(post_json(
            "/",
            json!({"name": "Widget", "price": 9.99, "id": 7}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_product_returns_200() {
    let app = app();
    let created = create_widget(&app).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let product: ProductResponse = json_body(response.into_body()).await;
    assert_eq!(product.id, created.id);
    assert_eq!(product.name, "Widget");
}

#[tokio::test]
async fn test_get_missing_product_returns_404_naming_id() {
    let app = app();

    let response = app
        .oneshot(Request::builder().uri("/999").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert!(body["message"].as_str().unwrap().contains("999"));
}

#[tokio::test]
async fn test_non_integer_id_is_rejected_before_handler() {
    let app = app();

    let response = app
        .oneshot(Request::builder().uri("/abc").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_merges_only_supplied_fields() {
    let app = app();
    let created = create_widget(&app).await;

    let response = app
        .clone()
        .oneshot(put_json(&format!("/{}", created.id), json!({"stock": 5})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let updated: ProductResponse = json_body(response.into_body()).await;
    assert_eq!(updated.stock, 5);
    assert_eq!(updated.name, "Widget");
    assert_eq!(updated.price, 9.99);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[tokio::test]
async fn test_update_rejects_invalid_present_field() {
    let app = app();
    let created = create_widget(&app).await;

    let response = app
        .clone()
        .oneshot(put_json(&format!("/{}", created.id), json!({"price": -2.0})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // The stored record is untouched
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let product: ProductResponse = json_body(response.into_body()).await;
    assert_eq!(product.price, 9.99);
}

#[tokio::test]
async fn test_update_missing_product_returns_404_without_upsert() {
    let app = app();

    let response = app
        .clone()
        .oneshot(put_json("/41", json!({"name": "Ghost"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(Request::builder().uri("/41").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_product_returns_204_then_404() {
    let app = app();
    let created = create_widget(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_product_returns_404_naming_id() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert!(body["message"].as_str().unwrap().contains("999"));
}

#[tokio::test]
async fn test_list_is_capped_at_20_and_ordered_by_name_desc() {
    let app = app();

    for i in 0..25 {
        let response = app
            .clone()
            .oneshot(post_json(
                "/",
                json!({"name": format!("product-{:02}", i), "price": 1.0}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<ProductResponse> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 20);
    assert_eq!(products[0].name, "product-24");
    assert!(products.windows(2).all(|w| w[0].name >= w[1].name));
}
