use axum::Router;

use crate::state::AppState;

pub mod cache;
pub mod dto;
pub mod handlers;
pub mod service;
pub mod upstream;

pub fn router() -> Router<AppState> {
    handlers::flight_routes()
}
