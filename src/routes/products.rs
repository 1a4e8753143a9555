use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};

use crate::{
    dto::products::UpsertProductRequest,
    error::AppResult,
    middleware::auth::AdminGuard,
    models::Product,
    response::WriteResponse,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(upsert_product))
        .route("/{id}", delete(delete_product))
}

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "Full catalog in storage order", body = Vec<Product>)
    ),
    tag = "Products"
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let items = product_service::list_products(&state.store).await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = UpsertProductRequest,
    responses(
        (status = 200, description = "Product created, or overwritten when `id` is given", body = WriteResponse),
        (status = 401, description = "Unauthorized"),
    ),
    security(("admin_auth" = [])),
    tag = "Products"
)]
pub async fn upsert_product(
    State(state): State<AppState>,
    _admin: AdminGuard,
    Json(payload): Json<UpsertProductRequest>,
) -> AppResult<Json<WriteResponse>> {
    let id = product_service::upsert_product(&state.store, payload).await?;
    Ok(Json(WriteResponse::created(id)))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Deleted, or already absent", body = WriteResponse),
        (status = 401, description = "Unauthorized"),
    ),
    security(("admin_auth" = [])),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    _admin: AdminGuard,
    Path(id): Path<String>,
) -> AppResult<Json<WriteResponse>> {
    // An id that cannot name a row is the same no-op as one that names a missing row.
    match id.parse::<i64>() {
        Ok(id) => {
            product_service::delete_product(&state.store, id).await?;
        }
        Err(_) => tracing::debug!(id = %id, "delete with non-numeric product id ignored"),
    }
    Ok(Json(WriteResponse::ok()))
}
