use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

const THEMES: [Theme; 4] = [
    Theme {
        id: "emerald",
        name: "Emerald",
        color: "#22c55e",
    },
    Theme {
        id: "violet",
        name: "Violet",
        color: "#8b5cf6",
    },
    Theme {
        id: "amber",
        name: "Amber",
        color: "#f97316",
    },
    Theme {
        id: "sky",
        name: "Sky",
        color: "#3b82f6",
    },
];

/// Resolved once at startup and never mutated afterwards. Every component
/// that needs the theme gets it from here instead of reaching into shared
/// mutable state.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub theme: Theme,
    pub demo_seed: u64,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080);

        let theme = match env::var("HABIT_THEME") {
            Ok(id) => THEMES
                .iter()
                .find(|theme| theme.id == id)
                .cloned()
                .unwrap_or_else(|| {
                    warn!("unknown theme {id:?}, falling back to {}", THEMES[0].id);
                    THEMES[0].clone()
                }),
            Err(_) => THEMES[0].clone(),
        };

        let demo_seed = env::var("HABIT_DEMO_SEED")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or_else(rand::random);

        Self {
            port,
            theme,
            demo_seed,
        }
    }
}
