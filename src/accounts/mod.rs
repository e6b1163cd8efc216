use crate::state::AppState;
use axum::Router;

pub mod dates;
pub mod dto;
pub mod handlers;
pub mod mapper;
pub mod model;
pub mod service;
pub mod store;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::account_routes())
        .merge(handlers::auth_routes())
        .merge(handlers::me_routes())
}
