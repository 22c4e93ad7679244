use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/calendar", get(handlers::get_calendar))
        .route("/api/calendar/navigate", post(handlers::navigate_month))
        .route("/api/calendar/select", post(handlers::select_day))
        .route(
            "/api/events",
            get(handlers::list_events).post(handlers::add_event),
        )
        .route("/api/overview", get(handlers::get_overview))
        .with_state(state)
}
