use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::orders::CreateOrderRequest,
    error::AppResult,
    middleware::auth::AdminGuard,
    models::Order,
    response::WriteResponse,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_orders).post(create_order))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "All orders with product name, newest first", body = Vec<Order>),
        (status = 401, description = "Unauthorized"),
    ),
    security(("admin_auth" = [])),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    _admin: AdminGuard,
) -> AppResult<Json<Vec<Order>>> {
    let orders = order_service::list_orders(&state.store).await?;
    Ok(Json(orders))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order recorded", body = WriteResponse)
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<Json<WriteResponse>> {
    let id = order_service::create_order(&state.store, payload).await?;
    Ok(Json(WriteResponse::created(id)))
}
