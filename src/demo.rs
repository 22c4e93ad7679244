//! Demo display data. The source material fabricated streaks and completion
//! marks on every render; here they are generated once at startup from a
//! seedable RNG so the dashboard holds still for the life of the process.

use crate::models::{Event, EventKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

pub const HABIT_GRID_DAYS: usize = 30;

const HABITS: [(&str, &str); 6] = [
    ("Exercise", "#22c55e"),
    ("Meditation", "#f97316"),
    ("Reading", "#ffffff"),
    ("Writing", "#3b82f6"),
    ("Coding", "#8b5cf6"),
    ("Language Learning", "#ec4899"),
];

#[derive(Debug, Clone, Serialize)]
pub struct HabitRow {
    pub name: &'static str,
    pub color: &'static str,
    pub streak_days: u32,
    pub completions: Vec<bool>,
    /// Weekly progress percentage, always in the 60..=99 band.
    pub progress: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    pub seed: u64,
    pub habits: Vec<HabitRow>,
}

pub fn generate(seed: u64) -> Overview {
    let mut rng = StdRng::seed_from_u64(seed);

    let habits = HABITS
        .iter()
        .map(|&(name, color)| HabitRow {
            name,
            color,
            streak_days: rng.gen_range(1..=30),
            completions: (0..HABIT_GRID_DAYS).map(|_| rng.gen_bool(0.7)).collect(),
            progress: rng.gen_range(60..=99),
        })
        .collect();

    Overview { seed, habits }
}

/// The schedule the event store opens with. Plain events carry no completion
/// field; habits keep whatever state they were seeded with.
pub fn starter_schedule() -> Vec<Event> {
    [
        ("Morning Meditation", "7:00", EventKind::Habit, Some(true), "Wellness"),
        ("Workout Session", "8:00", EventKind::Habit, Some(false), "Fitness"),
        ("Team Meeting", "10:00", EventKind::Event, None, "Work"),
        ("Reading", "19:00", EventKind::Habit, Some(true), "Personal Development"),
        ("Evening Run", "18:00", EventKind::Habit, Some(false), "Fitness"),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (title, time, kind, completed, category))| Event {
        id: index as u64 + 1,
        title: title.to_string(),
        time: time.to_string(),
        kind,
        completed,
        category: category.to_string(),
    })
    .collect()
}
