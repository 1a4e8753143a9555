use serde::Deserialize;
use utoipa::ToSchema;

/// Body of `POST /api/products`. An `id` turns the insert into a full overwrite.
#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
pub struct UpsertProductRequest {
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    pub material: Option<String>,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub image: String,
    pub description: Option<String>,
}

impl UpsertProductRequest {
    /// The id to overwrite, if any. `0` is treated as "no id", as the admin client sends it
    /// for unsaved products.
    pub fn target_id(&self) -> Option<i64> {
        self.id.filter(|id| *id != 0)
    }
}
