use std::sync::Arc;

use chrono::Duration;

use crate::auth::{SessionSettings, TokenService};
use crate::config::Config;
use crate::error::AppError;
use crate::store::{CredentialStore, MemoryStore, PgStore, TaskStore};

/// Everything a handler needs, created once at startup and shared as `web::Data<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn CredentialStore>,
    pub tasks: Arc<dyn TaskStore>,
    pub tokens: TokenService,
    pub session: SessionSettings,
    pub bcrypt_cost: u32,
}

impl AppState {
    /// Builds state over a single backend that serves both accounts and tasks.
    pub fn new<S>(store: Arc<S>, config: &Config) -> Result<Self, AppError>
    where
        S: CredentialStore + TaskStore + 'static,
    {
        let tokens = TokenService::new(&config.jwt_secret, Duration::days(config.token_ttl_days))?;
        Ok(Self {
            users: store.clone(),
            tasks: store,
            session: SessionSettings {
                secure: config.cookie_secure,
                max_age_secs: tokens.ttl().num_seconds(),
            },
            tokens,
            bcrypt_cost: config.bcrypt_cost,
        })
    }

    /// Connects the backend named by `config.database_url`.
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        if config.uses_memory_store() {
            log::warn!("using the in-memory store; data is lost on restart");
            return Self::new(Arc::new(MemoryStore::new()), config);
        }

        let store = PgStore::connect(&config.database_url, config.database_max_connections).await?;
        Self::new(Arc::new(store), config)
    }
}
