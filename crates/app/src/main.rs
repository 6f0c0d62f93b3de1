use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use simulation::sim_rng::SimRng;

mod autopilot;
mod config;

use autopilot::AutopilotPlugin;
use config::RunConfig;

/// Seed for the autopilot when the run is not seeded explicitly.
const DEFAULT_PILOT_SEED: u64 = 7;

fn main() -> AppExit {
    let config = RunConfig::from_env();
    let mut app = App::new();

    app.add_plugins(
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
            1.0 / 60.0,
        ))),
    )
    .add_plugins((LogPlugin::default(), StatesPlugin));

    // Before SimulationPlugin, whose init_resource keeps an existing RNG.
    if let Some(seed) = config.seed {
        app.insert_resource(SimRng::from_seed_u64(seed));
    }
    app.insert_resource(config.save_settings());

    app.add_plugins((
        simulation::SimulationPlugin,
        save::SavePlugin,
        AutopilotPlugin {
            seed: config.seed.map_or(DEFAULT_PILOT_SEED, |s| s.wrapping_add(1)),
            frame_limit: config.frame_limit(),
        },
    ));

    info!("Crazy Road starting ({config:?})");
    app.run()
}
