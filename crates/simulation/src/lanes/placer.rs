use crate::config::{
    DIRECTION_RIGHT_ODDS, MIN_VEHICLE_GAP, TREE_ODDS, VEGETATION_ODDS, VEHICLE_ODDS,
};
use crate::sim_rng::RandomSource;

use super::error::LaneError;
use super::types::{
    LaneDescriptor, LanePlan, LaneType, PlacedKind, PlacedObject, TrafficDescriptor, Vegetation,
    VehicleClass,
};

/// Populates a lane with vegetation (grass) or vehicles (road).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaneContentPlacer;

impl LaneContentPlacer {
    pub fn place(
        &self,
        descriptor: &LaneDescriptor,
        rng: &mut dyn RandomSource,
    ) -> Result<LanePlan, LaneError> {
        if descriptor.width == 0 {
            return Err(LaneError::InvalidWidth(descriptor.width));
        }

        let (traffic, objects) = match descriptor.lane_type {
            LaneType::Grass => (None, place_vegetation(descriptor, rng)),
            LaneType::Road => {
                let traffic = roll_traffic(rng);
                (Some(traffic), place_vehicles(descriptor, &traffic, rng))
            }
        };

        Ok(LanePlan {
            descriptor: *descriptor,
            traffic,
            objects,
        })
    }
}

fn roll_traffic(rng: &mut dyn RandomSource) -> TrafficDescriptor {
    // Out-of-range draws from a misbehaving source fall back to cars.
    let class = VehicleClass::ALL
        .get(rng.random_index(VehicleClass::ALL.len()))
        .copied()
        .unwrap_or(VehicleClass::Car);
    let direction_right = rng.random_bool(DIRECTION_RIGHT_ODDS);
    TrafficDescriptor::new(class, direction_right)
}

fn roll_vegetation(rng: &mut dyn RandomSource) -> Vegetation {
    if rng.random_bool(TREE_ODDS) {
        Vegetation::Tree
    } else {
        Vegetation::Hedge
    }
}

/// Dense edge zone below `width / 8`, dense far zone above `width / 2`, and a
/// sparse middle band that stays empty on clear-start lanes.
fn place_vegetation(descriptor: &LaneDescriptor, rng: &mut dyn RandomSource) -> Vec<PlacedObject> {
    let width = descriptor.width;
    let mut objects = Vec::new();

    for offset in 0..width {
        let occupied = if offset < width / 8 || offset > width / 2 {
            true
        } else if !descriptor.clear_start {
            rng.random_bool(VEGETATION_ODDS)
        } else {
            false
        };

        if occupied {
            objects.push(PlacedObject {
                offset,
                kind: PlacedKind::Vegetation(roll_vegetation(rng)),
            });
        }
    }

    objects
}

fn place_vehicles(
    descriptor: &LaneDescriptor,
    traffic: &TrafficDescriptor,
    rng: &mut dyn RandomSource,
) -> Vec<PlacedObject> {
    let heading = traffic.heading();
    let mut objects = Vec::new();
    let mut gap_since_last_spawn = 0u32;

    for offset in 0..descriptor.width {
        gap_since_last_spawn += 1;
        if gap_since_last_spawn <= MIN_VEHICLE_GAP {
            continue;
        }
        if rng.random_bool(VEHICLE_ODDS) {
            gap_since_last_spawn = 0;
            objects.push(PlacedObject {
                offset,
                kind: PlacedKind::Vehicle {
                    class: traffic.vehicle_class,
                    heading,
                },
            });
        }
    }

    objects
}
