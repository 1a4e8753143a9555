use sea_orm::{ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::{
    db::Store,
    dto::products::UpsertProductRequest,
    entity::products::{ActiveModel, Column, Entity as Products},
    error::AppResult,
    models::Product,
};

pub async fn list_products(store: &Store) -> AppResult<Vec<Product>> {
    let items = Products::find()
        .order_by_asc(Column::Id)
        .all(&store.orm)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();
    Ok(items)
}

/// Overwrite the product named by `payload.id`, or insert a new one when no id is given.
/// Returns the id written to. Overwriting an id that matches no row is not an error.
pub async fn upsert_product(store: &Store, payload: UpsertProductRequest) -> AppResult<i64> {
    let target = payload.target_id();
    let active = active_from_request(payload);

    match target {
        Some(id) => {
            let result = Products::update_many()
                .set(active)
                .filter(Column::Id.eq(id))
                .exec(&store.orm)
                .await?;
            if result.rows_affected == 0 {
                tracing::debug!(product_id = id, "product update matched no rows");
            } else {
                tracing::info!(product_id = id, "product updated");
            }
            Ok(id)
        }
        None => {
            let id = Products::insert(active)
                .exec(&store.orm)
                .await?
                .last_insert_id;
            tracing::info!(product_id = id, "product created");
            Ok(id)
        }
    }
}

/// Delete a product. Orders referencing it are left untouched. Returns the affected row count.
pub async fn delete_product(store: &Store, id: i64) -> AppResult<u64> {
    let result = Products::delete_by_id(id).exec(&store.orm).await?;
    if result.rows_affected > 0 {
        tracing::info!(product_id = id, "product deleted");
    }
    Ok(result.rows_affected)
}

fn active_from_request(payload: UpsertProductRequest) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        material: Set(payload.material),
        price: Set(payload.price),
        image: Set(payload.image),
        description: Set(payload.description),
    }
}
