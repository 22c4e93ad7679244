use crate::config::Config;
use crate::demo::Overview;
use crate::events::EventStore;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The displayed month plus an optional explicitly picked day. Only year and
/// month of `reference` matter downstream.
#[derive(Debug, Clone, Copy)]
pub struct CalendarState {
    pub reference: NaiveDate,
    pub selected: Option<NaiveDate>,
}

impl CalendarState {
    pub fn new(reference: NaiveDate) -> Self {
        Self {
            reference,
            selected: None,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub calendar: Arc<Mutex<CalendarState>>,
    pub events: Arc<Mutex<EventStore>>,
    pub overview: Arc<Overview>,
}

impl AppState {
    pub fn new(
        config: Config,
        calendar: CalendarState,
        events: EventStore,
        overview: Overview,
    ) -> Self {
        Self {
            config: Arc::new(config),
            calendar: Arc::new(Mutex::new(calendar)),
            events: Arc::new(Mutex::new(events)),
            overview: Arc::new(overview),
        }
    }
}
