use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Habit,
    Event,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    pub title: String,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    pub category: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub direction: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectDayRequest {
    pub day: u32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GridCell {
    pub day: Option<u32>,
    pub is_today: bool,
    pub is_selected: bool,
}

#[derive(Debug, Serialize)]
pub struct CalendarSnapshot {
    pub year: i32,
    pub month: u32,
    pub month_label: String,
    pub weekdays: [&'static str; 7],
    pub cells: Vec<GridCell>,
    pub panel_title: String,
    pub events: Vec<Event>,
}
