use crate::models::{Event, EventDraft};

/// In-memory event list. Insertion order is display order; nothing here ever
/// sorts by time or validates field contents.
#[derive(Debug)]
pub struct EventStore {
    events: Vec<Event>,
    next_id: u64,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            next_id: 1,
        }
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        let next_id = events.iter().map(|event| event.id).max().unwrap_or(0) + 1;
        Self { events, next_id }
    }

    /// Appends the draft with the next id. Every stored event starts
    /// incomplete, plain events included.
    pub fn add(&mut self, draft: EventDraft) -> Event {
        let event = Event {
            id: self.next_id,
            title: draft.title,
            time: draft.time,
            kind: draft.kind,
            completed: Some(false),
            category: draft.category,
        };

        self.next_id += 1;
        self.events.push(event.clone());
        event
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}
