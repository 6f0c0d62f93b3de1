//! Run configuration read from `CRAZY_ROAD_*` environment variables.

use std::path::PathBuf;
use std::str::FromStr;

use bevy::log::warn;
use save::SaveSettings;

pub const SEED_VAR: &str = "CRAZY_ROAD_SEED";
pub const SAVE_PATH_VAR: &str = "CRAZY_ROAD_SAVE_PATH";
pub const FRAMES_VAR: &str = "CRAZY_ROAD_FRAMES";

/// Save path value that keeps the store in memory.
pub const IN_MEMORY: &str = ":memory:";

/// Frames the autopilot plays before exiting when no limit is configured.
pub const DEFAULT_FRAME_LIMIT: u32 = 3_600;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunConfig {
    pub seed: Option<u64>,
    pub save_path: Option<String>,
    pub frame_limit: Option<u32>,
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            seed: parse_var(SEED_VAR, lookup(SEED_VAR)),
            save_path: lookup(SAVE_PATH_VAR).filter(|p| !p.trim().is_empty()),
            frame_limit: parse_var(FRAMES_VAR, lookup(FRAMES_VAR)),
        }
    }

    pub fn save_settings(&self) -> SaveSettings {
        match self.save_path.as_deref() {
            None => SaveSettings::default(),
            Some(IN_MEMORY) => SaveSettings::in_memory(),
            Some(path) => SaveSettings {
                path: Some(PathBuf::from(path)),
            },
        }
    }

    pub fn frame_limit(&self) -> u32 {
        self.frame_limit.unwrap_or(DEFAULT_FRAME_LIMIT)
    }
}

fn parse_var<T: FromStr>(name: &str, value: Option<String>) -> Option<T> {
    let value = value?;
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("Ignoring {name}={value:?}: not a valid number");
            None
        }
    }
}
