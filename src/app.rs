use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/index.html", get(handlers::index))
        .route("/mcheyne-plan.json", get(handlers::plan_document))
        .route("/service-worker.js", get(handlers::service_worker))
        .route("/api/today", get(handlers::get_today))
        .route("/api/day", get(handlers::get_day))
        .route("/api/toggle", post(handlers::toggle))
        .route("/api/progress", get(handlers::get_progress))
        .route("/api/calendar", get(handlers::get_calendar))
        .with_state(state)
}
