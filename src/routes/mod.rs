use axum::{
    Json, Router,
    extract::OriginalUri,
    http::StatusCode,
    routing::get,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::{response::ErrorResponse, state::AppState};

pub mod auth;
pub mod doc;
pub mod health;
pub mod orders;
pub mod products;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/products", products::router())
        .nest("/orders", orders::router())
        .fallback(not_found)
}

/// The whole application: health, `/api`, docs and, when the build directory exists, the
/// storefront client with `index.html` as the fallback for client-side routes.
pub fn build_app(state: AppState) -> Router {
    let static_dir = state.static_dir.clone().filter(|dir| dir.is_dir());

    let app = Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .merge(doc::scalar_docs());

    let app = match static_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "serving storefront client");
            let index = ServeFile::new(dir.join("index.html"));
            app.fallback_service(ServeDir::new(dir).fallback(index))
        }
        None => app.fallback(not_found),
    };

    app.with_state(state)
}

// `OriginalUri` keeps the `/api` prefix that nesting strips from `Uri`.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> (StatusCode, Json<ErrorResponse>) {
    let body = ErrorResponse {
        error: "Not Found".to_string(),
        path: Some(uri.path().to_string()),
    };
    (StatusCode::NOT_FOUND, Json(body))
}
