use bevy::prelude::*;

pub mod config;
pub mod contacts;
pub mod game_state;
pub mod gameplay_sets;
pub mod lane_world;
pub mod lanes;
pub mod player;
pub mod sim_rng;
pub mod traffic;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub mod test_harness;

/// All gameplay state and systems. Needs `StatesPlugin` (part of
/// `DefaultPlugins`, added separately with `MinimalPlugins`).
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // State and ordering first: every feature plugin schedules into them.
        app.add_plugins((
            game_state::GameStatePlugin,
            gameplay_sets::GameplaySetsPlugin,
        ));

        app.add_plugins((
            sim_rng::SimRngPlugin,
            lane_world::LaneWorldPlugin,
            player::PlayerPlugin,
            traffic::TrafficPlugin,
            contacts::ContactsPlugin,
        ));
    }
}
