//! Runtime configuration loaded from the environment.

use std::path::PathBuf;

use crate::use_cases::action::DEFAULT_MINUTES_PER_ACTION;

const DEFAULT_DATA_DIR: &str = "data";

/// Where the engine keeps its files and how much in-game time an action costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub stats_dir: PathBuf,
    pub scenario_dir: PathBuf,
    /// `time_spent` added for every choice taken.
    pub minutes_per_action: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::rooted_at(DEFAULT_DATA_DIR)
    }
}

impl AppConfig {
    fn rooted_at(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            stats_dir: data_dir.join("player_stats"),
            scenario_dir: data_dir.join("scenarios"),
            data_dir,
            minutes_per_action: DEFAULT_MINUTES_PER_ACTION,
        }
    }

    /// Read `STORYLOOM_*` variables, falling back to defaults.
    ///
    /// Stats and scenario directories default to children of the data dir.
    /// An unparseable or negative `STORYLOOM_MINUTES_PER_ACTION` keeps the default.
    pub fn from_env() -> Self {
        let data_dir =
            std::env::var("STORYLOOM_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.into());
        let mut config = Self::rooted_at(data_dir);

        if let Ok(dir) = std::env::var("STORYLOOM_STATS_DIR") {
            config.stats_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("STORYLOOM_SCENARIO_DIR") {
            config.scenario_dir = PathBuf::from(dir);
        }
        if let Ok(raw) = std::env::var("STORYLOOM_MINUTES_PER_ACTION") {
            match raw.trim().parse::<i64>() {
                Ok(minutes) if minutes >= 0 => config.minutes_per_action = minutes,
                _ => tracing::warn!(
                    value = %raw,
                    default = DEFAULT_MINUTES_PER_ACTION,
                    "Ignoring invalid STORYLOOM_MINUTES_PER_ACTION"
                ),
            }
        }

        config
    }

    pub fn with_data_dir(self, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            minutes_per_action: self.minutes_per_action,
            ..Self::rooted_at(data_dir)
        }
    }

    pub fn with_stats_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.stats_dir = dir.into();
        self
    }

    pub fn with_scenario_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scenario_dir = dir.into();
        self
    }

    pub fn with_minutes_per_action(mut self, minutes: i64) -> Self {
        self.minutes_per_action = minutes;
        self
    }
}
