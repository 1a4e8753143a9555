use std::{path::PathBuf, sync::Arc};

use crate::{
    config::{AdminConfig, AppConfig},
    db::Store,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub admin: Arc<AdminConfig>,
    pub static_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(store: Store, config: &AppConfig) -> Self {
        Self {
            store,
            admin: Arc::new(config.admin.clone()),
            static_dir: Some(config.static_dir.clone()),
        }
    }

    /// State without static file hosting, for tests and API-only deployments.
    pub fn api_only(store: Store, admin: AdminConfig) -> Self {
        Self {
            store,
            admin: Arc::new(admin),
            static_dir: None,
        }
    }
}
