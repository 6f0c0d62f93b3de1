//! Integration tests driving whole runs through the `TestGame` harness.
//!
//! These spin up a headless Bevy App with `SimulationPlugin` and verify the
//! behaviour that emerges from lanes, hops, traffic, contacts and the run
//! lifecycle working together.

mod game_over_tests;
mod traffic_tests;
