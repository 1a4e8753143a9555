use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{orders::Model as OrderModel, products::Model as ProductModel};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub material: Option<String>,
    /// Display string such as `AED 3,850`; never parsed.
    pub price: String,
    pub image: String,
    pub description: Option<String>,
}

/// An order as seen by the admin panel, joined with the product name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub product_id: Option<i64>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub customer_address: String,
    pub payment_method: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    /// `None` when the referenced product no longer exists.
    pub product_name: Option<String>,
}

impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            material: model.material,
            price: model.price,
            image: model.image,
            description: model.description,
        }
    }
}

impl Order {
    pub fn from_entity(model: OrderModel, product: Option<ProductModel>) -> Self {
        Self {
            id: model.id,
            product_id: model.product_id,
            customer_name: model.customer_name,
            customer_email: model.customer_email,
            customer_phone: model.customer_phone,
            customer_address: model.customer_address,
            payment_method: model.payment_method,
            status: model.status,
            created_at: model.created_at,
            product_name: product.map(|p| p.name),
        }
    }
}
