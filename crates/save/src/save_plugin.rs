use std::path::PathBuf;

use bevy::prelude::*;
use simulation::game_state::{HighscoreBeaten, Scoreboard};

use crate::kv_store::{KeyValueStore, HIGHSCORE_KEY};

/// Default store location, relative to the working directory.
pub const DEFAULT_SAVE_PATH: &str = "crazy_road.sav";

/// Where the store lives. `path: None` keeps it in memory.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct SaveSettings {
    pub path: Option<PathBuf>,
}

impl Default for SaveSettings {
    fn default() -> Self {
        Self {
            path: Some(PathBuf::from(DEFAULT_SAVE_PATH)),
        }
    }
}

impl SaveSettings {
    pub fn in_memory() -> Self {
        Self { path: None }
    }
}

/// The opened store, available after `Startup`.
#[derive(Resource, Debug, Default)]
pub struct HighscoreStore(pub KeyValueStore);

fn open_store(settings: &SaveSettings) -> KeyValueStore {
    let Some(path) = &settings.path else {
        return KeyValueStore::in_memory();
    };
    match KeyValueStore::open(path) {
        Ok(store) => store,
        Err(e) => {
            warn!("Ignoring unreadable store {}: {e}", path.display());
            KeyValueStore::empty_at(path)
        }
    }
}

/// Seeds `Scoreboard.highscore` from the store.
pub fn load_highscore(
    mut commands: Commands,
    settings: Res<SaveSettings>,
    mut scoreboard: ResMut<Scoreboard>,
) {
    let store = open_store(&settings);
    let stored = store.get_int(HIGHSCORE_KEY);
    scoreboard.highscore = stored.clamp(0, i64::from(u32::MAX)) as u32;
    info!("Loaded high score {}", scoreboard.highscore);
    commands.insert_resource(HighscoreStore(store));
}

/// Writes a beaten high score through to the store.
pub fn persist_highscore(mut beaten: EventReader<HighscoreBeaten>, mut store: ResMut<HighscoreStore>) {
    let Some(best) = beaten.read().map(|HighscoreBeaten(score)| *score).max() else {
        return;
    };
    let best = i64::from(best);
    if best <= store.0.get_int(HIGHSCORE_KEY) {
        return;
    }

    store.0.set_int(HIGHSCORE_KEY, best);
    if let Err(e) = store.0.flush() {
        warn!("Failed to persist high score {best}: {e}");
    }
}

/// Loads and saves the high score. Add after `SimulationPlugin`.
pub struct SavePlugin;

impl Plugin for SavePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SaveSettings>()
            .add_systems(Startup, load_highscore)
            .add_systems(
                Update,
                persist_highscore.run_if(resource_exists::<HighscoreStore>),
            );
    }
}
