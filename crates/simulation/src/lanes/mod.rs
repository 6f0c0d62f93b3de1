//! Procedural lane generation.
//!
//! [`LaneGenerator`] picks the surface of each new row and [`LaneContentPlacer`]
//! fills it with obstacles. Both are pure over an injected [`RandomSource`]
//! and know nothing about entities; `lane_world` turns their output into ECS
//! state.
//!
//! [`RandomSource`]: crate::sim_rng::RandomSource

mod error;
mod generator;
mod placer;
mod types;

pub use error::LaneError;
pub use generator::LaneGenerator;
pub use placer::LaneContentPlacer;
pub use types::{
    offset_to_world_x, Heading, LaneDescriptor, LanePlan, LaneType, PlacedKind, PlacedObject,
    TrafficDescriptor, Vegetation, VehicleClass,
};
