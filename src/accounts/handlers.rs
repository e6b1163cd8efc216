use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::{
    accounts::dto::{AccountView, AuthResponse, Credentials},
    auth::extract::AuthUser,
    error::AccountError,
    state::AppState,
};

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/accounts", get(list_accounts).post(create_account))
        .route(
            "/accounts/:id",
            get(get_account).put(update_account).delete(delete_account),
        )
}

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

#[instrument(skip(state))]
pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountView>>, AccountError> {
    let accounts = state.service.list_accounts().await?;
    Ok(Json(accounts))
}

#[instrument(skip(state))]
pub async fn get_account(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AccountView>, AccountError> {
    let account = state.service.get_account(id).await?;
    Ok(Json(account))
}

#[instrument(skip(state, payload))]
pub async fn create_account(
    State(state): State<AppState>,
    Json(mut payload): Json<AccountView>,
) -> Result<(StatusCode, Json<AccountView>), AccountError> {
    payload.email = payload.email.trim().to_lowercase();
    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(AccountError::Invalid("Invalid email".into()));
    }

    let created = state.service.create_account(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[instrument(skip(state, payload))]
pub async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(mut payload): Json<AccountView>,
) -> Result<Json<AccountView>, AccountError> {
    payload.id = Some(id);
    payload.email = payload.email.trim().to_lowercase();
    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(AccountError::Invalid("Invalid email".into()));
    }

    let updated = state.service.update_account(payload).await?;
    Ok(Json(updated))
}

#[instrument(skip(state))]
pub async fn delete_account(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AccountError> {
    state.service.delete_account(id).await?;
    info!(account_id = id, "account deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<AccountView>,
) -> Result<Json<AuthResponse>, AccountError> {
    payload.email = payload.email.trim().to_lowercase();
    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(AccountError::Invalid("Invalid email".into()));
    }
    if payload.password.as_deref().map_or(0, str::len) < 8 {
        warn!("password too short");
        return Err(AccountError::Invalid("Password too short".into()));
    }

    let response = state.service.register_account(payload).await?;
    Ok(Json(response))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<Credentials>,
) -> Result<Json<AuthResponse>, AccountError> {
    payload.email = payload.email.trim().to_lowercase();
    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(AccountError::Invalid("Invalid email".into()));
    }

    let response = state.service.login_account(payload).await?;
    Ok(Json(response))
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(account_id): AuthUser,
) -> Result<Json<AccountView>, AccountError> {
    let account = state.service.get_account(account_id).await?;
    Ok(Json(account))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_check_accepts_plausible_addresses() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
    }

    #[test]
    fn email_check_rejects_garbage() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("spaces in@x.com"));
        assert!(!is_valid_email("missing@tld"));
    }
}
