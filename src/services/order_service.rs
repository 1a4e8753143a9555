use chrono::Utc;
use sea_orm::{ActiveValue::NotSet, EntityTrait, QueryOrder, Set, sea_query::Expr};

use crate::{
    db::Store,
    dto::orders::CreateOrderRequest,
    entity::{
        orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as Orders},
        products::Entity as Products,
    },
    error::AppResult,
    models::Order,
};

pub const STATUS_PENDING: &str = "pending";

/// All orders with their product name, newest first.
pub async fn list_orders(store: &Store) -> AppResult<Vec<Order>> {
    let orders = Orders::find()
        .find_also_related(Products)
        // Rows written by the column default use `YYYY-MM-DD HH:MM:SS`, rows written here use
        // RFC 3339; compare them as instants, not text.
        .order_by_desc(Expr::cust("julianday(\"orders\".\"created_at\")"))
        .order_by_desc(OrderCol::Id)
        .all(&store.orm)
        .await?
        .into_iter()
        .map(|(order, product)| Order::from_entity(order, product))
        .collect();
    Ok(orders)
}

/// Record a checkout. The product id is stored as given, whether or not it exists.
pub async fn create_order(store: &Store, payload: CreateOrderRequest) -> AppResult<i64> {
    let active = OrderActive {
        id: NotSet,
        product_id: Set(payload.product_id),
        customer_name: Set(payload.customer_name),
        customer_email: Set(payload.customer_email),
        customer_phone: Set(payload.customer_phone),
        customer_address: Set(payload.customer_address),
        payment_method: Set(payload.payment_method),
        status: Set(STATUS_PENDING.to_string()),
        created_at: Set(Utc::now()),
    };

    let id = Orders::insert(active)
        .exec(&store.orm)
        .await?
        .last_insert_id;
    tracing::info!(order_id = id, product_id = ?payload.product_id, "order created");
    Ok(id)
}
