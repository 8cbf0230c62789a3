use crate::state::AppState;
use axum::Router;

pub mod dto;
pub mod handlers;
pub mod repo;
mod validate;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
