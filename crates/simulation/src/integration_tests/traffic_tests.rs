//! Vehicles driving along their lanes.

use std::collections::HashMap;

use crate::config::{VEHICLE_WRAP_MAX_X, VEHICLE_WRAP_MIN_X};
use crate::contacts::ExternalPhysics;
use crate::lane_world::{OnLane, Traffic, Vehicle};
use crate::test_harness::TestGame;

#[test]
fn test_vehicles_move_while_playing() {
    let mut game = TestGame::new().start();
    game.world_mut().insert_resource(ExternalPhysics);
    let before: HashMap<_, _> = game.vehicle_positions().into_iter().collect();
    assert!(!before.is_empty(), "bootstrap should place some traffic");

    game.tick(10);

    for (entity, pos) in game.vehicle_positions() {
        let old = before[&entity];
        assert_eq!(pos.z, old.z, "vehicles never change lanes");
        assert_ne!(pos.x, old.x, "vehicle {entity:?} did not move");
    }
}

#[test]
fn test_vehicles_stay_inside_wrap_span() {
    let mut game = TestGame::with_seed(5).start();
    game.world_mut().insert_resource(ExternalPhysics);

    game.tick(2_000);

    for (_, pos) in game.vehicle_positions() {
        assert!(
            (VEHICLE_WRAP_MIN_X..=VEHICLE_WRAP_MAX_X).contains(&pos.x),
            "x={} escaped the wrap span",
            pos.x
        );
    }
}

#[test]
fn test_vehicles_follow_their_lane_traffic() {
    let mut game = TestGame::with_seed(11);
    let world = game.world_mut();
    let traffic: HashMap<_, _> = world
        .query::<(bevy::prelude::Entity, &Traffic)>()
        .iter(world)
        .map(|(e, t)| (e, t.0))
        .collect();
    let vehicles: Vec<(Vehicle, OnLane)> = world
        .query::<(&Vehicle, &OnLane)>()
        .iter(world)
        .map(|(v, l)| (*v, *l))
        .collect();

    assert!(!vehicles.is_empty());
    for (vehicle, on_lane) in vehicles {
        let lane_traffic = traffic
            .get(&on_lane.0)
            .expect("vehicles only spawn on road lanes");
        assert_eq!(vehicle.class, lane_traffic.vehicle_class);
        assert_eq!(vehicle.heading, lane_traffic.heading());
        assert_eq!(vehicle.speed_factor, lane_traffic.speed_factor);
    }
}
