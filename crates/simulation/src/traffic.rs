use bevy::prelude::*;

use crate::config::{VEHICLE_BASE_SPEED, VEHICLE_WRAP_MAX_X, VEHICLE_WRAP_MIN_X};
use crate::gameplay_sets::GameplaySet;
use crate::lane_world::{LanePosition, Vehicle};

/// Wrap a vehicle that left the driving span back to the opposite side.
#[inline]
pub fn wrap_x(x: f32) -> f32 {
    if x > VEHICLE_WRAP_MAX_X {
        VEHICLE_WRAP_MIN_X
    } else if x < VEHICLE_WRAP_MIN_X {
        VEHICLE_WRAP_MAX_X
    } else {
        x
    }
}

/// Position of `vehicle` after driving for `dt` seconds from `x`.
pub fn advance_vehicle(vehicle: &Vehicle, x: f32, dt: f32) -> f32 {
    let step = vehicle.heading.sign() * VEHICLE_BASE_SPEED * vehicle.speed_factor * dt;
    wrap_x(x + step)
}

/// Moves every vehicle by one fixed timestep. Uses the configured step rather
/// than the measured delta so traffic stays deterministic per tick.
pub fn drive_traffic(fixed: Res<Time<Fixed>>, mut vehicles: Query<(&Vehicle, &mut LanePosition)>) {
    let dt = fixed.timestep().as_secs_f32();
    for (vehicle, mut pos) in &mut vehicles {
        pos.x = advance_vehicle(vehicle, pos.x, dt);
    }
}

pub struct TrafficPlugin;

impl Plugin for TrafficPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, drive_traffic.in_set(GameplaySet::Motion));
    }
}
