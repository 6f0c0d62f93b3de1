//! Contact handling between the player, its direction probes, vehicles and
//! vegetation.
//!
//! Contacts arrive as [`ContactEvent`]s carrying the category bits of both
//! bodies, the same shape a host physics engine reports them in. Without a
//! host engine, [`detect_grid_contacts`] derives them from entity positions;
//! inserting [`ExternalPhysics`] turns that detector off.

use bevy::prelude::*;

use crate::config::PLAYER_HALF_WIDTH;
use crate::game_state::{GameOverCause, GameOverEvent};
use crate::gameplay_sets::GameplaySet;
use crate::lane_world::{LanePosition, Plant, Vehicle};
use crate::player::{vegetation_cells, BlockedDirections, HopDirection, Player};

/// Category bit masks of the collision bodies.
pub struct PhysicsCategory;

impl PhysicsCategory {
    pub const CHICKEN: u32 = 1;
    pub const VEHICLE: u32 = 2;
    pub const VEGETATION: u32 = 4;
    pub const COLLISION_TEST_FRONT: u32 = 8;
    pub const COLLISION_TEST_RIGHT: u32 = 16;
    pub const COLLISION_TEST_LEFT: u32 = 32;

    pub fn probe(direction: HopDirection) -> u32 {
        match direction {
            HopDirection::Forward => Self::COLLISION_TEST_FRONT,
            HopDirection::Right => Self::COLLISION_TEST_RIGHT,
            HopDirection::Left => Self::COLLISION_TEST_LEFT,
        }
    }
}

/// Two bodies started touching.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactEvent {
    pub category_a: u32,
    pub category_b: u32,
}

impl ContactEvent {
    pub fn new(category_a: u32, category_b: u32) -> Self {
        Self {
            category_a,
            category_b,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// The player was hit by a vehicle.
    Collision,
    /// Vegetation sits in a probe cell.
    Blocked(HopDirection),
    Ignored,
}

pub fn classify_contact(contact: &ContactEvent) -> ContactOutcome {
    const HIT: u32 = PhysicsCategory::CHICKEN | PhysicsCategory::VEHICLE;
    const FRONT: u32 = PhysicsCategory::VEGETATION | PhysicsCategory::COLLISION_TEST_FRONT;
    const RIGHT: u32 = PhysicsCategory::VEGETATION | PhysicsCategory::COLLISION_TEST_RIGHT;
    const LEFT: u32 = PhysicsCategory::VEGETATION | PhysicsCategory::COLLISION_TEST_LEFT;

    match contact.category_a | contact.category_b {
        HIT => ContactOutcome::Collision,
        FRONT => ContactOutcome::Blocked(HopDirection::Forward),
        RIGHT => ContactOutcome::Blocked(HopDirection::Right),
        LEFT => ContactOutcome::Blocked(HopDirection::Left),
        _ => ContactOutcome::Ignored,
    }
}

/// Marker resource: a host physics engine sends [`ContactEvent`]s itself.
#[derive(Resource)]
pub struct ExternalPhysics;

/// Whether a vehicle at `vehicle_x` overlaps the player at `player_x`.
pub fn vehicle_overlaps(vehicle: &Vehicle, vehicle_x: f32, player_x: i64) -> bool {
    (vehicle_x - player_x as f32).abs() < vehicle.class.half_length() + PLAYER_HALF_WIDTH
}

/// Position-based stand-in for the physics engine's contact reporting.
pub fn detect_grid_contacts(
    external: Option<Res<ExternalPhysics>>,
    player: Res<Player>,
    vehicles: Query<(&Vehicle, &LanePosition)>,
    plants: Query<&LanePosition, With<Plant>>,
    mut contacts: EventWriter<ContactEvent>,
) {
    if external.is_some() {
        return;
    }

    let hit = vehicles
        .iter()
        .any(|(vehicle, pos)| pos.z == player.z && vehicle_overlaps(vehicle, pos.x, player.x));
    if hit {
        contacts.send(ContactEvent::new(
            PhysicsCategory::CHICKEN,
            PhysicsCategory::VEHICLE,
        ));
    }

    let cells = vegetation_cells(plants.iter());
    for direction in HopDirection::ALL {
        if cells.contains(&player.probe_cell(direction)) {
            contacts.send(ContactEvent::new(
                PhysicsCategory::VEGETATION,
                PhysicsCategory::probe(direction),
            ));
        }
    }
}

pub fn handle_contacts(
    mut contacts: EventReader<ContactEvent>,
    mut blocked: ResMut<BlockedDirections>,
    mut game_over: EventWriter<GameOverEvent>,
) {
    let mut hit = false;
    for contact in contacts.read() {
        match classify_contact(contact) {
            ContactOutcome::Collision => hit = true,
            ContactOutcome::Blocked(direction) => blocked.block(direction),
            ContactOutcome::Ignored => {}
        }
    }
    if hit {
        game_over.send(GameOverEvent(GameOverCause::HitByVehicle));
    }
}

pub struct ContactsPlugin;

impl Plugin for ContactsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ContactEvent>().add_systems(
            FixedUpdate,
            (detect_grid_contacts, handle_contacts)
                .chain()
                .in_set(GameplaySet::Contacts),
        );
    }
}
