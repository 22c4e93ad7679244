use crate::calendar::{self, Direction};
use crate::demo::Overview;
use crate::errors::AppError;
use crate::models::{CalendarSnapshot, Event, EventDraft, NavigateRequest, SelectDayRequest};
use crate::state::{AppState, CalendarState};
use crate::ui::render_index;
use axum::{Json, extract::State, response::Html};
use chrono::{Datelike, Local, NaiveDate};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.config.theme))
}

pub async fn get_calendar(State(state): State<AppState>) -> Json<CalendarSnapshot> {
    let calendar = state.calendar.lock().await;
    let events = state.events.lock().await;
    Json(snapshot(&calendar, events.events()))
}

pub async fn navigate_month(
    State(state): State<AppState>,
    Json(payload): Json<NavigateRequest>,
) -> Result<Json<CalendarSnapshot>, AppError> {
    let direction = Direction::parse(payload.direction.trim())
        .ok_or_else(|| AppError::bad_request("direction must be 'previous' or 'next'"))?;

    let mut calendar = state.calendar.lock().await;
    calendar.reference = calendar::navigate(calendar.reference, direction);

    let events = state.events.lock().await;
    Ok(Json(snapshot(&calendar, events.events())))
}

pub async fn select_day(
    State(state): State<AppState>,
    Json(payload): Json<SelectDayRequest>,
) -> Result<Json<CalendarSnapshot>, AppError> {
    let mut calendar = state.calendar.lock().await;

    let picked = NaiveDate::from_ymd_opt(
        calendar.reference.year(),
        calendar.reference.month(),
        payload.day,
    )
    .ok_or_else(|| AppError::bad_request("day does not exist in the displayed month"))?;

    calendar.selected = Some(picked);

    let events = state.events.lock().await;
    Ok(Json(snapshot(&calendar, events.events())))
}

pub async fn list_events(State(state): State<AppState>) -> Json<Vec<Event>> {
    let events = state.events.lock().await;
    Json(events.events().to_vec())
}

pub async fn add_event(
    State(state): State<AppState>,
    Json(payload): Json<EventDraft>,
) -> Result<Json<Event>, AppError> {
    if payload.title.trim().is_empty() {
        return Err(AppError::bad_request("title must not be empty"));
    }

    let mut events = state.events.lock().await;
    Ok(Json(events.add(payload)))
}

pub async fn get_overview(State(state): State<AppState>) -> Json<Overview> {
    Json((*state.overview).clone())
}

fn snapshot(calendar: &CalendarState, events: &[Event]) -> CalendarSnapshot {
    // Read the wall clock on every request so the today marker tracks the
    // date at interaction time, never a cached value.
    let today = Local::now().date_naive();
    let year = calendar.reference.year();
    let month = calendar.reference.month();

    let panel_title = match calendar.selected {
        Some(picked) => format!("{} {}", calendar::month_name(picked.month()), picked.day()),
        None => "Today's Schedule".to_string(),
    };

    CalendarSnapshot {
        year,
        month,
        month_label: format!("{} {}", calendar::month_name(month), year),
        weekdays: calendar::WEEKDAY_LABELS,
        cells: calendar::compute_grid(year, month, today, calendar.selected),
        panel_title,
        events: events.to_vec(),
    }
}
