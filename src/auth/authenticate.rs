use std::sync::Arc;

use tracing::warn;

use crate::accounts::store::AccountStore;
use crate::auth::password::CredentialHasher;
use crate::error::AccountError;

/// Proof of a successful credential check, passed explicitly to whatever
/// needs it (token issuance) instead of living in ambient per-request state.
#[derive(Debug, Clone)]
pub struct AuthenticatedIdentity {
    pub account_id: i64,
    pub email: String,
}

/// Verifies login credentials against the stored password hash.
#[derive(Clone)]
pub struct Authenticator {
    store: Arc<dyn AccountStore>,
    hasher: Arc<dyn CredentialHasher>,
}

impl Authenticator {
    pub fn new(store: Arc<dyn AccountStore>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { store, hasher }
    }

    /// Returns the authenticated identity, or `AuthenticationFailed` for an
    /// unknown email or a password mismatch. The two cases are deliberately
    /// indistinguishable to the caller.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedIdentity, AccountError> {
        let account = match self.store.find_by_email(email).await? {
            Some(account) => account,
            None => {
                warn!(email = %email, "login unknown email");
                return Err(AccountError::AuthenticationFailed);
            }
        };

        let ok = self
            .hasher
            .verify(password, &account.password)
            .map_err(AccountError::Internal)?;
        if !ok {
            warn!(email = %email, "login invalid password");
            return Err(AccountError::AuthenticationFailed);
        }

        let account_id = account
            .id
            .ok_or_else(|| AccountError::Internal(anyhow::anyhow!("stored account missing id")))?;
        Ok(AuthenticatedIdentity {
            account_id,
            email: account.email,
        })
    }
}
