//! Game settings and preferences
//!
//! Nothing is stored between visits; the mode comes from the `mode` URL
//! query parameter of the current page load.

/// Which ruleset a round is played under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Collect kegs and outlast the timer
    #[default]
    Survival,
    /// Cross the field and reach the goal zone before time runs out
    Goal,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Survival => "Survival",
            GameMode::Goal => "Goal",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "survival" | "survive" => Some(GameMode::Survival),
            "goal" | "run" => Some(GameMode::Goal),
            _ => None,
        }
    }

    /// Goal mode has a destination zone
    pub fn has_goal(&self) -> bool {
        matches!(self, GameMode::Goal)
    }

    /// Obstacles in goal mode patrol horizontal lanes and only bounce off the
    /// side walls.
    pub fn reflects_vertically(&self) -> bool {
        matches!(self, GameMode::Survival)
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Settings {
    /// Ruleset for new rounds
    pub mode: GameMode,
}

impl Settings {
    /// Settings from a `?mode=...` style query string, defaults otherwise
    pub fn from_query(query: &str) -> Self {
        let mut settings = Self::default();
        settings.apply_query(query);
        settings
    }

    /// Apply a `?mode=...` style query string on top of these settings
    pub fn apply_query(&mut self, query: &str) {
        let query = query.trim_start_matches('?');
        for pair in query.split('&') {
            let mut parts = pair.splitn(2, '=');
            if parts.next() != Some("mode") {
                continue;
            }
            match parts.next().and_then(GameMode::from_str) {
                Some(mode) => self.mode = mode,
                None => log::warn!("Unknown mode in query: {}", pair),
            }
        }
    }

    /// Settings for this page load, read from the URL query (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        match web_sys::window().and_then(|w| w.location().search().ok()) {
            Some(query) => Self::from_query(&query),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}
