pub mod app;
pub mod calendar;
pub mod config;
pub mod demo;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod models;
pub mod state;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::{AppState, CalendarState};
