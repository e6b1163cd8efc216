use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::Date;

/// Account record in the database.
///
/// `id` is `None` until the row is persisted; the store inserts on a missing
/// identifier and fully updates otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Account {
    pub id: Option<i64>,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String, // Argon2 hash on the register path, not exposed in JSON
    pub full_name: String,
    pub phone_number: String,
    #[serde(with = "crate::accounts::dates")]
    pub date_of_birth: Date,
    pub gender: bool,
}
