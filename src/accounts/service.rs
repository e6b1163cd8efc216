use std::sync::Arc;

use tracing::info;

use crate::accounts::dto::{AccountView, AuthResponse, Credentials};
use crate::accounts::mapper;
use crate::accounts::store::AccountStore;
use crate::auth::authenticate::{AuthenticatedIdentity, Authenticator};
use crate::auth::jwt::TokenIssuer;
use crate::auth::password::CredentialHasher;
use crate::error::AccountError;

/// Orchestrates account CRUD and authentication flows. Stateless; holds only
/// its collaborators, all injected at construction.
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn AccountStore>,
    hasher: Arc<dyn CredentialHasher>,
    tokens: Arc<dyn TokenIssuer>,
    authenticator: Authenticator,
    hash_password_on_create: bool,
}

impl AccountService {
    pub fn new(
        store: Arc<dyn AccountStore>,
        hasher: Arc<dyn CredentialHasher>,
        tokens: Arc<dyn TokenIssuer>,
        authenticator: Authenticator,
    ) -> Self {
        Self {
            store,
            hasher,
            tokens,
            authenticator,
            hash_password_on_create: false,
        }
    }

    /// The direct create path historically stores the password exactly as
    /// supplied, unlike `register_account`. That behavior is kept as the
    /// default; enable this to hash on create as well.
    pub fn hash_password_on_create(mut self, enabled: bool) -> Self {
        self.hash_password_on_create = enabled;
        self
    }

    // TODO: pagination for list_accounts once the listing UI needs it
    pub async fn list_accounts(&self) -> Result<Vec<AccountView>, AccountError> {
        let accounts = self.store.find_all().await?;
        Ok(accounts.iter().map(mapper::to_view).collect())
    }

    pub async fn get_account(&self, id: i64) -> Result<AccountView, AccountError> {
        let account = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AccountError::NotFound(format!("account with id {id} not found")))?;
        Ok(mapper::to_view(&account))
    }

    pub async fn create_account(&self, view: AccountView) -> Result<AccountView, AccountError> {
        let mut account = mapper::to_account(&view);
        if self.hash_password_on_create {
            account.password = self
                .hasher
                .hash(&account.password)
                .map_err(AccountError::Internal)?;
        }
        self.store.save(account).await?;
        Ok(view)
    }

    pub async fn update_account(&self, view: AccountView) -> Result<AccountView, AccountError> {
        let id = view
            .id
            .ok_or_else(|| AccountError::NotFound("account with no id".to_string()))?;
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AccountError::NotFound(format!("account with id {id} not found")))?;

        // Overwrite semantics: every mutable field is replaced, id preserved.
        let mut account = mapper::to_account(&view);
        account.id = Some(id);
        self.store.save(account).await?;
        Ok(view)
    }

    pub async fn delete_account(&self, id: i64) -> Result<(), AccountError> {
        let account = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AccountError::NotFound(format!("account with id {id} not found")))?;
        self.store.delete(&account).await
    }

    pub async fn register_account(&self, view: AccountView) -> Result<AuthResponse, AccountError> {
        let mut account = mapper::to_account(&view);
        if self.store.find_by_email(&account.email).await?.is_some() {
            return Err(AccountError::AlreadyExists(account.email));
        }

        account.password = self
            .hasher
            .hash(&account.password)
            .map_err(AccountError::Internal)?;
        // The store's unique constraint backstops the check above; a lost
        // race surfaces as AlreadyExists from save.
        let saved = self.store.save(account).await?;

        let identity = AuthenticatedIdentity {
            account_id: saved.id.ok_or_else(|| {
                AccountError::Internal(anyhow::anyhow!("store returned account without id"))
            })?,
            email: saved.email.clone(),
        };
        let token = self
            .tokens
            .issue(&identity)
            .map_err(AccountError::Internal)?;
        info!(account_id = identity.account_id, email = %identity.email, "account registered");
        Ok(AuthResponse { token })
    }

    pub async fn login_account(&self, credentials: Credentials) -> Result<AuthResponse, AccountError> {
        let identity = self
            .authenticator
            .authenticate(&credentials.email, &credentials.password)
            .await?;

        // Narrow race: the account may vanish between authentication and
        // this lookup, in which case NotFound is the documented outcome.
        let account = self
            .store
            .find_by_email(&credentials.email)
            .await?
            .ok_or_else(|| {
                AccountError::NotFound(format!(
                    "account with email {} not found",
                    credentials.email
                ))
            })?;

        let identity = AuthenticatedIdentity {
            account_id: account.id.unwrap_or(identity.account_id),
            email: account.email,
        };
        let token = self
            .tokens
            .issue(&identity)
            .map_err(AccountError::Internal)?;
        info!(account_id = identity.account_id, email = %identity.email, "account logged in");
        Ok(AuthResponse { token })
    }
}
