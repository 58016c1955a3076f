use std::sync::Arc;

use sqlx::PgPool;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::config::firebase::FirebaseConfig;
use crate::utils::firebase::{FirebaseAuth, IdentityProvider};

/// Shared application state, built once at startup and cloned into every
/// handler. The identity delegate is held behind a trait object so tests
/// can substitute a stub provider.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub identity: Arc<dyn IdentityProvider>,
    pub cors_config: CorsConfig,
}

pub async fn init_app_state() -> AppState {
    AppState {
        db: init_db_pool().await,
        identity: Arc::new(FirebaseAuth::new(FirebaseConfig::from_env())),
        cors_config: CorsConfig::from_env(),
    }
}
