use serde::{Deserialize, Serialize};
use time::Date;

/// Externally-facing account representation.
///
/// `password` is only ever populated on inbound create/update/register
/// requests; read-facing responses carry `None` and the field is omitted from
/// JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    #[serde(default)]
    pub id: Option<i64>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub full_name: String,
    pub phone_number: String,
    #[serde(with = "crate::accounts::dates")]
    pub date_of_birth: Date,
    pub gender: bool,
}

/// Login request body. Ephemeral; never persisted.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Response returned after successful registration or login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
}
