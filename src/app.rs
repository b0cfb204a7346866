use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/sheet", get(handlers::get_sheet))
        .route("/api/start", post(handlers::start))
        .route("/api/days/:day/toggle", post(handlers::toggle_day))
        .route("/api/submit", post(handlers::submit))
        .with_state(state)
}
