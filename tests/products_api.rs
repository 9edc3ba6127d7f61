use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use coffee_catalog::AppModule;
use coffee_catalog::di::{Container, ContainerBuilder};
use coffee_catalog::infrastructure::Database;
use coffee_catalog::module::Module;
use coffee_catalog::modules::product::{InMemoryProductGateway, ProductModule};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    let mut container = Container::new();
    ProductModule::provide_gateway(&mut container, InMemoryProductGateway::new());
    ProductModule::register(&mut container).unwrap();
    AppModule::router(&container).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn test_product() -> Value {
    json!({
        "name": "Test Product",
        "price": 100,
        "description": "A test product",
        "stock": 10
    })
}

#[tokio::test]
async fn create_then_fetch() {
    let app = app();

    let (status, created) = send(&app, "POST", "/products", Some(test_product())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["name"], "Test Product");
    assert_eq!(created["price"], 100.0);
    assert_eq!(created["description"], "A test product");
    assert_eq!(created["stock"], 10);
    assert!(created["dateAdded"].is_string());

    let (status, fetched) = send(&app, "GET", "/products/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn list_returns_every_product() {
    let app = app();

    let (status, empty) = send(&app, "GET", "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(empty, json!([]));

    for _ in 0..3 {
        send(&app, "POST", "/products", Some(test_product())).await;
    }
    let (_, all) = send(&app, "GET", "/products", None).await;
    assert_eq!(all.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn missing_product_is_404_with_id_in_message() {
    let app = app();

    for (method, body) in [
        ("GET", None),
        ("PUT", Some(json!({ "name": "Ghost" }))),
        ("DELETE", None),
    ] {
        let (status, error) = send(&app, method, "/products/999", body).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method}");
        assert_eq!(error["statusCode"], 404);
        assert_eq!(error["message"], "Product with ID 999 not found");
        assert_eq!(error["error"], "Not Found");
    }
}

#[tokio::test]
async fn update_replaces_only_patched_fields() {
    let app = app();
    let (_, before) = send(&app, "POST", "/products", Some(test_product())).await;

    let (status, after) = send(
        &app,
        "PUT",
        "/products/1",
        Some(json!({ "name": "Updated Product", "price": 150, "id": 5, "dateAdded": "1999-12-31T23:59:59Z" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(after["name"], "Updated Product");
    assert_eq!(after["price"], 150.0);
    assert_eq!(after["id"], 1);
    assert_eq!(after["dateAdded"], before["dateAdded"]);
    for field in ["description", "stock", "origin", "type", "weight", "availability", "averageRating"] {
        assert_eq!(after[field], before[field], "{field}");
    }
}

#[tokio::test]
async fn delete_returns_snapshot_then_404() {
    let app = app();
    let (_, created) = send(&app, "POST", "/products", Some(test_product())).await;

    let (status, deleted) = send(&app, "DELETE", "/products/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, created);

    let (status, _) = send(&app, "GET", "/products/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let app = app();
    let (status, error) = send(&app, "GET", "/products/latte", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], "Validation failed (numeric string is expected)");
}

#[tokio::test]
async fn creation_without_required_fields_is_rejected() {
    let app = app();
    let (status, error) = send(&app, "POST", "/products", Some(json!({ "name": "No price" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error["statusCode"], 422);
    assert_eq!(error["error"], "Unprocessable Entity");
    assert!(error["message"].as_str().unwrap().contains("missing field"));
    assert!(error["timestamp"].is_string());

    let (_, all) = send(&app, "GET", "/products", None).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn malformed_json_uses_the_error_body() {
    let app = app();
    let request = Request::builder()
        .method("PUT")
        .uri("/products/1")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"stock\": "))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(error["statusCode"], 400);
    assert_eq!(error["error"], "Bad Request");
}

#[tokio::test]
async fn sea_orm_backed_app_round_trip() {
    let database = Database::connect_url("sqlite::memory:").await.unwrap();
    database.sync_schema().await.unwrap();

    let container = ContainerBuilder::new()
        .register(database)
        .import::<AppModule>()
        .unwrap()
        .build();
    let app = AppModule::router(&container).unwrap();

    let (status, created) = send(&app, "POST", "/products", Some(test_product())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);

    let (status, updated) = send(&app, "PUT", "/products/1", Some(json!({ "stock": 4 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["stock"], 4);
    assert_eq!(updated["name"], "Test Product");

    let (status, _) = send(&app, "DELETE", "/products/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "GET", "/products/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    container.resolve::<Database>().unwrap().close().await.unwrap();
}
