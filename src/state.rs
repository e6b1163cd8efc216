use std::sync::Arc;

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::accounts::service::AccountService;
use crate::accounts::store::{AccountStore, PgAccountStore};
use crate::auth::authenticate::Authenticator;
use crate::auth::jwt::{JwtKeys, TokenIssuer};
use crate::auth::password::{Argon2Hasher, CredentialHasher};
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<AppConfig>,
    pub service: AccountService,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let db = PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;
        Ok(Self::from_parts(db, config))
    }

    /// Wires the service graph explicitly: store, hasher, token issuer and
    /// authenticator are constructed here and handed to the service.
    pub fn from_parts(db: PgPool, config: Arc<AppConfig>) -> Self {
        let store: Arc<dyn AccountStore> = Arc::new(PgAccountStore::new(db.clone()));
        let hasher: Arc<dyn CredentialHasher> = Arc::new(Argon2Hasher);
        let tokens: Arc<dyn TokenIssuer> = Arc::new(JwtKeys::from_config(&config.jwt));
        let authenticator = Authenticator::new(store.clone(), hasher.clone());
        let service = AccountService::new(store, hasher, tokens, authenticator);
        Self {
            db,
            config,
            service,
        }
    }
}
