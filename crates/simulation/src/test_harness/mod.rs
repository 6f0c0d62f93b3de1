//! # TestGame: headless integration test harness
//!
//! Wraps `bevy::app::App` + `SimulationPlugin` so integration tests can drive
//! whole runs without a window, renderer or input device.
//!
//! Virtual time is paused, so `app.update()` never runs `FixedUpdate` on its
//! own: gameplay only advances through [`TestGame::tick`], one fixed step at a
//! time, which keeps every test deterministic for a given seed.

mod queries;

use bevy::app::App;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::game_state::{GameState, StartGame};
use crate::player::{HopDirection, HopRequest};
use crate::sim_rng::SimRng;
use crate::SimulationPlugin;

pub struct TestGame {
    app: App,
}

impl TestGame {
    /// A freshly bootstrapped world in the menu, seeded with the default seed.
    pub fn new() -> Self {
        Self::with_seed(42)
    }

    pub fn with_seed(seed: u64) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(StatesPlugin);

        // Insert the RNG BEFORE SimulationPlugin so init_resource keeps it.
        app.insert_resource(SimRng::from_seed_u64(seed));
        app.add_plugins(SimulationPlugin);

        app.world_mut().resource_mut::<Time<Virtual>>().pause();

        // Run one update so Startup systems build the first lanes.
        app.update();

        Self { app }
    }

    /// Leave the menu and enter `Playing`.
    pub fn start(mut self) -> Self {
        self.send(StartGame);
        // First update queues the transition, the second applies it.
        self.update();
        self.update();
        self
    }

    // -----------------------------------------------------------------------
    // Driving the app
    // -----------------------------------------------------------------------

    /// Run N fixed-update ticks by directly executing the `FixedUpdate`
    /// schedule.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    /// One full app update: applies pending state transitions and runs
    /// `OnEnter` / `Update` systems.
    pub fn update(&mut self) {
        self.app.update();
    }

    pub fn send<E: Event>(&mut self, event: E) {
        self.app.world_mut().send_event(event);
    }

    /// Request a hop and process it with a single tick.
    pub fn hop(&mut self, direction: HopDirection) {
        self.send(HopRequest(direction));
        self.tick(1);
    }

    pub fn state(&self) -> GameState {
        *self.app.world().resource::<State<GameState>>().get()
    }
}

impl Default for TestGame {
    fn default() -> Self {
        Self::new()
    }
}
