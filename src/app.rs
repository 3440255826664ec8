use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/review", get(handlers::get_review))
        .route("/api/months", get(handlers::get_months))
        .route("/api/days/:date", get(handlers::get_day))
        .with_state(state)
}
