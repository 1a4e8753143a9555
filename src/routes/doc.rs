use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, LoginResponse},
        orders::CreateOrderRequest,
        products::UpsertProductRequest,
    },
    middleware::auth::ADMIN_AUTH_HEADER,
    models::{Order, Product},
    response::{ErrorResponse, LoginFailure, WriteResponse},
    routes::{auth, health, orders, products},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "admin_auth",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(ADMIN_AUTH_HEADER))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        products::list_products,
        products::upsert_product,
        products::delete_product,
        orders::list_orders,
        orders::create_order,
    ),
    components(
        schemas(
            Product,
            Order,
            UpsertProductRequest,
            CreateOrderRequest,
            LoginRequest,
            LoginResponse,
            LoginFailure,
            WriteResponse,
            ErrorResponse,
            health::HealthData,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Admin login"),
        (name = "Products", description = "Catalog endpoints"),
        (name = "Orders", description = "Order intake and admin order list"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
