use async_trait::async_trait;
use sqlx::PgPool;

use crate::accounts::model::Account;
use crate::error::AccountError;

/// Persistence abstraction over account records. Each mutating operation is
/// atomic on its own: either the write commits or nothing is observable.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Account>, AccountError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, AccountError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError>;
    /// Inserts when `account.id` is absent, otherwise fully replaces the row.
    async fn save(&self, account: Account) -> Result<Account, AccountError>;
    async fn delete(&self, account: &Account) -> Result<(), AccountError>;
}

const ACCOUNT_COLUMNS: &str = "id, email, password, full_name, phone_number, date_of_birth, gender";

/// Postgres-backed store. The `accounts.email` unique constraint is the
/// atomic arbiter for duplicate registrations; `save` surfaces a violation as
/// `AlreadyExists` regardless of who won the service-level pre-check race.
pub struct PgAccountStore {
    db: PgPool,
}

impl PgAccountStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    fn map_write_err(email: &str, e: sqlx::Error) -> AccountError {
        match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AccountError::AlreadyExists(email.to_string())
            }
            other => AccountError::Internal(other.into()),
        }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn find_all(&self) -> Result<Vec<Account>, AccountError> {
        let accounts = sqlx::query_as::<_, Account>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts ORDER BY id"
        ))
        .fetch_all(&self.db)
        .await?;
        Ok(accounts)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, AccountError> {
        let account = sqlx::query_as::<_, Account>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError> {
        let account = sqlx::query_as::<_, Account>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.db)
        .await?;
        Ok(account)
    }

    async fn save(&self, account: Account) -> Result<Account, AccountError> {
        let mut tx = self.db.begin().await?;
        let saved = match account.id {
            Some(id) => {
                // Full replace, identifier preserved.
                sqlx::query_as::<_, Account>(&format!(
                    "UPDATE accounts
                     SET email = $2, password = $3, full_name = $4,
                         phone_number = $5, date_of_birth = $6, gender = $7
                     WHERE id = $1
                     RETURNING {ACCOUNT_COLUMNS}"
                ))
                .bind(id)
                .bind(&account.email)
                .bind(&account.password)
                .bind(&account.full_name)
                .bind(&account.phone_number)
                .bind(account.date_of_birth)
                .bind(account.gender)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| Self::map_write_err(&account.email, e))?
                .ok_or_else(|| {
                    AccountError::NotFound(format!("account with id {id} not found"))
                })?
            }
            None => sqlx::query_as::<_, Account>(&format!(
                "INSERT INTO accounts
                     (email, password, full_name, phone_number, date_of_birth, gender)
                 VALUES ($1, $2, $3, $4, $5, $6)
                 RETURNING {ACCOUNT_COLUMNS}"
            ))
            .bind(&account.email)
            .bind(&account.password)
            .bind(&account.full_name)
            .bind(&account.phone_number)
            .bind(account.date_of_birth)
            .bind(account.gender)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| Self::map_write_err(&account.email, e))?,
        };
        tx.commit().await?;
        Ok(saved)
    }

    async fn delete(&self, account: &Account) -> Result<(), AccountError> {
        let id = account.id.ok_or_else(|| {
            AccountError::NotFound("account without id cannot be deleted".to_string())
        })?;
        let mut tx = self.db.begin().await?;
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AccountError::NotFound(format!(
                "account with id {id} not found"
            )));
        }
        tx.commit().await?;
        Ok(())
    }
}
