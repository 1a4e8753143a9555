use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use storefront_api::{
    config::{AdminConfig, AppConfig, TokenMode},
    db::{Store, bootstrap},
    routes::build_app,
    state::AppState,
};
use tower::ServiceExt;

const PASSWORD: &str = "password123";

async fn app_with(admin: AdminConfig) -> Router {
    let store = Store::in_memory().await.expect("in-memory store");
    bootstrap(&store).await.expect("bootstrap");
    build_app(AppState::api_only(store, admin))
}

async fn app() -> Router {
    app_with(AdminConfig::default()).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn send_text(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("x-admin-auth", token);
    }
    builder.body(Body::empty()).unwrap()
}

fn post_json(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("x-admin-auth", token);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn delete(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("DELETE").uri(uri);
    if let Some(token) = token {
        builder = builder.header("x-admin-auth", token);
    }
    builder.body(Body::empty()).unwrap()
}

async fn product_count(app: &Router) -> usize {
    let (status, body) = send(app, get("/api/products", None)).await;
    assert_eq!(status, StatusCode::OK);
    body.as_array().expect("product array").len()
}

#[tokio::test]
async fn login_echoes_password_as_token() {
    let app = app().await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/login",
            None,
            json!({ "username": "admin", "password": PASSWORD }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "token": PASSWORD }));
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let app = app().await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/login",
            None,
            json!({ "username": "admin", "password": "guess" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body,
        json!({ "success": false, "message": "Invalid credentials" })
    );
}

#[tokio::test]
async fn product_create_and_delete_round_trip() {
    let app = app().await;
    assert_eq!(product_count(&app).await, 4);

    let (status, body) = send(
        &app,
        post_json(
            "/api/products",
            Some(PASSWORD),
            json!({
                "name": "Test",
                "price": "AED 100",
                "image": "http://x",
                "material": "Silk",
                "description": ""
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "id": 5 }));

    let (_, products) = send(&app, get("/api/products", None)).await;
    let products = products.as_array().unwrap();
    assert_eq!(products.len(), 5);
    assert_eq!(
        products[4],
        json!({
            "id": 5,
            "name": "Test",
            "material": "Silk",
            "price": "AED 100",
            "image": "http://x",
            "description": ""
        })
    );

    let (status, body) = send(&app, delete("/api/products/5", Some(PASSWORD))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));
    assert_eq!(product_count(&app).await, 4);

    // Deleting again still succeeds.
    let (status, body) = send(&app, delete("/api/products/5", Some(PASSWORD))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));
}

#[tokio::test]
async fn product_update_keeps_id() {
    let app = app().await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/products",
            Some(PASSWORD),
            json!({
                "id": 1,
                "name": "Midnight Silk",
                "material": "Pure Italian Crepe",
                "price": "AED 3,990",
                "image": "https://cdn.example.com/midnight.jpg",
                "description": "Restocked"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "id": 1 }));

    let (_, products) = send(&app, get("/api/products", None)).await;
    let products = products.as_array().unwrap();
    assert_eq!(products.len(), 4);
    assert_eq!(products[0]["price"], "AED 3,990");
    assert_eq!(products[0]["description"], "Restocked");
}

#[tokio::test]
async fn admin_routes_reject_missing_or_wrong_credentials() {
    let app = app().await;

    for token in [None, Some("wrong"), Some("")] {
        let (status, body) = send(&app, delete("/api/products/1", token)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "error": "Unauthorized" }));

        let (status, _) = send(
            &app,
            post_json(
                "/api/products",
                token,
                json!({ "name": "Sneaky", "price": "AED 1", "image": "http://x" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(&app, get("/api/orders", token)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    let (_, products) = send(&app, get("/api/products", None)).await;
    let products = products.as_array().unwrap();
    assert_eq!(products.len(), 4);
    assert_eq!(products[0]["id"], 1);
    assert!(products.iter().all(|p| p["name"] != "Sneaky"));
}

#[tokio::test]
async fn checkout_order_shows_up_for_admin() {
    let app = app().await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/orders",
            None,
            json!({
                "productId": 2,
                "customerName": "Aisha",
                "customerEmail": "aisha@example.com",
                "customerPhone": "+971 50 123 4567",
                "customerAddress": "Jumeirah 1, Dubai",
                "paymentMethod": "cod"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "id": 1 }));

    let (status, orders) = send(&app, get("/api/orders", Some(PASSWORD))).await;
    assert_eq!(status, StatusCode::OK);
    let orders = orders.as_array().unwrap();
    assert_eq!(orders.len(), 1);

    let order = &orders[0];
    assert_eq!(order["id"], 1);
    assert_eq!(order["productId"], 2);
    assert_eq!(order["productName"], "Emerald Velvet");
    assert_eq!(order["customerName"], "Aisha");
    assert_eq!(order["customerEmail"], "aisha@example.com");
    assert_eq!(order["customerPhone"], "+971 50 123 4567");
    assert_eq!(order["customerAddress"], "Jumeirah 1, Dubai");
    assert_eq!(order["paymentMethod"], "cod");
    assert_eq!(order["status"], "pending");
    assert!(order["createdAt"].is_string());
}

#[tokio::test]
async fn order_survives_product_deletion() {
    let app = app().await;

    send(
        &app,
        post_json(
            "/api/orders",
            None,
            json!({
                "productId": 3,
                "customerName": "Mariam",
                "customerEmail": "mariam@example.com",
                "customerAddress": "Al Barsha"
            }),
        ),
    )
    .await;

    let (status, _) = send(&app, delete("/api/products/3", Some(PASSWORD))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, orders) = send(&app, get("/api/orders", Some(PASSWORD))).await;
    let orders = orders.as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["productId"], 3);
    assert!(orders[0]["productName"].is_null());
    assert!(orders[0]["customerPhone"].is_null());
}

#[tokio::test]
async fn unknown_api_path_is_json_not_found() {
    let app = app().await;

    let (status, body) = send(&app, get("/api/nope", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not Found", "path": "/api/nope" }));
}

#[tokio::test]
async fn signed_mode_issues_expiring_tokens() {
    let app = app_with(AdminConfig {
        token_mode: TokenMode::Signed,
        token_secret: "signing-secret".into(),
        ..AdminConfig::default()
    })
    .await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/login",
            None,
            json!({ "username": "admin", "password": PASSWORD }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().expect("token").to_string();
    assert_ne!(token, PASSWORD);

    let (status, _) = send(&app, get("/api/orders", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, get("/api/orders", Some(PASSWORD))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn client_routes_fall_back_to_index_html() {
    let dist = tempfile::TempDir::new().expect("temp dir");
    std::fs::write(dist.path().join("index.html"), "<div id=\"root\"></div>").unwrap();
    std::fs::write(dist.path().join("app.js"), "console.log('storefront');").unwrap();

    let static_dir = dist.path().to_string_lossy().into_owned();
    let config = AppConfig::from_lookup(|key| match key {
        "STATIC_DIR" => Some(static_dir.clone()),
        _ => None,
    })
    .unwrap();
    let store = Store::in_memory().await.unwrap();
    bootstrap(&store).await.unwrap();
    let app = build_app(AppState::new(store, &config));

    let (status, body) = send_text(&app, get("/some/client/route", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<div id=\"root\"></div>");

    let (status, body) = send_text(&app, get("/app.js", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "console.log('storefront');");

    // The API keeps its own JSON answers.
    let (status, body) = send(&app, get("/api/nope", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not Found", "path": "/api/nope" }));

    let (status, _) = send(&app, get("/api/products", None)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn delete_with_non_numeric_id_is_a_no_op() {
    let app = app().await;

    let (status, body) = send(&app, delete("/api/products/abc", Some(PASSWORD))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));
    assert_eq!(product_count(&app).await, 4);

    let (status, body) = send(&app, delete("/api/products/abc", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Unauthorized" }));
}
