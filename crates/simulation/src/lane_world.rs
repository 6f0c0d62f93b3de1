//! Live lanes as ECS entities.
//!
//! Each generated [`LanePlan`] becomes one lane entity plus one entity per
//! placed object. Objects point back at their lane through [`OnLane`]; there
//! is no parent/child hierarchy, so despawning a lane means despawning the
//! objects that reference it as well.

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::config::{
    CULL_DISTANCE_BEHIND, INITIAL_LANES, LANES_PER_HOP, LANE_ORIGIN_Z, LANE_WIDTH,
    LOOKAHEAD_LANES, MAX_LANES_AHEAD,
};
use crate::lanes::{
    Heading, LaneContentPlacer, LaneDescriptor, LaneError, LaneGenerator, LanePlan, PlacedKind,
    TrafficDescriptor, Vegetation, VehicleClass,
};
use crate::player::Player;
use crate::sim_rng::SimRng;

/// Per-run lane settings.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneConfig {
    pub width: u32,
}

impl Default for LaneConfig {
    fn default() -> Self {
        Self { width: LANE_WIDTH }
    }
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

#[derive(Component, Debug, Clone, Copy)]
pub struct Lane(pub LaneDescriptor);

/// Shared traffic settings, present on road lanes only.
#[derive(Component, Debug, Clone, Copy)]
pub struct Traffic(pub TrafficDescriptor);

/// The lane entity an object was placed on.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnLane(pub Entity);

/// World position of a placed object: continuous along the lane, row index across.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct LanePosition {
    pub x: f32,
    pub z: i64,
}

impl LanePosition {
    /// Grid cell the object occupies.
    pub fn cell(&self) -> (i64, i64) {
        (self.x.round() as i64, self.z)
    }
}

/// Static obstacle on a grass lane.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plant(pub Vegetation);

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Vehicle {
    pub class: VehicleClass,
    pub heading: Heading,
    pub speed_factor: f32,
}

// ---------------------------------------------------------------------------
// LaneWorld resource
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneHandle {
    pub index: u64,
    pub entity: Entity,
}

/// Ordered list of live lanes, oldest first, plus the next generation index.
#[derive(Resource, Debug, Default)]
pub struct LaneWorld {
    next_index: u64,
    lanes: VecDeque<LaneHandle>,
}

impl LaneWorld {
    pub fn next_index(&self) -> u64 {
        self.next_index
    }

    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    pub fn handles(&self) -> impl Iterator<Item = &LaneHandle> {
        self.lanes.iter()
    }

    /// Generated lanes in front of row `player_z`.
    pub fn lanes_ahead(&self, player_z: i64) -> u64 {
        let generated = self.next_index as i64;
        let player_index = LANE_ORIGIN_Z - player_z;
        (generated - 1 - player_index).max(0) as u64
    }

    /// Lanes a forward hop onto row `player_z` may append: `LANES_PER_HOP`,
    /// capped so at most `MAX_LANES_AHEAD` lie ahead.
    pub fn hop_budget(&self, player_z: i64) -> usize {
        let room = MAX_LANES_AHEAD.saturating_sub(self.lanes_ahead(player_z));
        LANES_PER_HOP.min(room as usize)
    }

    /// Hand out the next generation index. Indices are never reused.
    fn claim_index(&mut self) -> u64 {
        let index = self.next_index;
        self.next_index += 1;
        index
    }

    /// Remove lanes more than `CULL_DISTANCE_BEHIND` rows behind `player_z`.
    fn take_passed(&mut self, player_z: i64) -> Vec<LaneHandle> {
        let limit = player_z + CULL_DISTANCE_BEHIND;
        let mut passed = Vec::new();
        while let Some(front) = self.lanes.front() {
            if lane_row_z(front.index) <= limit {
                break;
            }
            passed.extend(self.lanes.pop_front());
        }
        passed
    }

    fn clear(&mut self) -> Vec<LaneHandle> {
        self.next_index = 0;
        self.lanes.drain(..).collect()
    }
}

/// Row of the lane with generation index `index`.
pub fn lane_row_z(index: u64) -> i64 {
    LANE_ORIGIN_Z - index as i64
}

// ---------------------------------------------------------------------------
// Spawning
// ---------------------------------------------------------------------------

/// Generate, populate and spawn the next lane.
pub fn spawn_lane(
    commands: &mut Commands,
    lanes: &mut LaneWorld,
    config: &LaneConfig,
    rng: &mut SimRng,
    is_initial: bool,
) -> Result<Entity, LaneError> {
    let generator = LaneGenerator::new(config.width)?;
    let descriptor = generator.generate(lanes.next_index(), is_initial, rng);
    let plan = LaneContentPlacer.place(&descriptor, rng)?;
    lanes.claim_index();
    Ok(spawn_plan(commands, lanes, &plan))
}

/// Spawn entities for an already generated plan and append it to the world.
pub fn spawn_plan(commands: &mut Commands, lanes: &mut LaneWorld, plan: &LanePlan) -> Entity {
    let descriptor = plan.descriptor;
    let z = lane_row_z(descriptor.index);

    let lane = match plan.traffic {
        Some(traffic) => commands.spawn((Lane(descriptor), Traffic(traffic))).id(),
        None => commands.spawn(Lane(descriptor)).id(),
    };

    for object in &plan.objects {
        let position = LanePosition {
            x: object.world_x(descriptor.width) as f32,
            z,
        };
        match object.kind {
            PlacedKind::Vegetation(variant) => {
                commands.spawn((Plant(variant), position, OnLane(lane)));
            }
            PlacedKind::Vehicle { class, heading } => {
                let speed_factor = plan
                    .traffic
                    .map(|t| t.speed_factor)
                    .unwrap_or_else(|| class.speed_factor());
                commands.spawn((
                    Vehicle {
                        class,
                        heading,
                        speed_factor,
                    },
                    position,
                    OnLane(lane),
                ));
            }
        }
    }

    debug!(
        "Spawned lane {} ({:?}, clear_start={}) at z={} with {} objects",
        descriptor.index,
        descriptor.lane_type,
        descriptor.clear_start,
        z,
        plan.objects.len()
    );

    lanes.lanes.push_back(LaneHandle {
        index: descriptor.index,
        entity: lane,
    });
    lane
}

/// Spawn `count` lanes, stopping at the first generation error.
pub fn spawn_lanes(
    commands: &mut Commands,
    lanes: &mut LaneWorld,
    config: &LaneConfig,
    rng: &mut SimRng,
    count: usize,
    is_initial: bool,
) {
    for _ in 0..count {
        if let Err(e) = spawn_lane(commands, lanes, config, rng, is_initial) {
            error!("Lane generation failed: {}", e);
            return;
        }
    }
}

/// The starting layout: a safe grass zone followed by open lanes.
pub fn bootstrap_lanes(
    commands: &mut Commands,
    lanes: &mut LaneWorld,
    config: &LaneConfig,
    rng: &mut SimRng,
) {
    spawn_lanes(commands, lanes, config, rng, INITIAL_LANES, true);
    spawn_lanes(commands, lanes, config, rng, LOOKAHEAD_LANES, false);
    info!(
        "Bootstrapped {} lanes of width {}",
        lanes.len(),
        config.width
    );
}

/// Startup system building the first lanes of a run.
pub fn setup_lanes(
    mut commands: Commands,
    mut lanes: ResMut<LaneWorld>,
    config: Res<LaneConfig>,
    mut rng: ResMut<SimRng>,
) {
    bootstrap_lanes(&mut commands, &mut lanes, &config, &mut rng);
}

// ---------------------------------------------------------------------------
// Despawning
// ---------------------------------------------------------------------------

fn despawn_handles(
    commands: &mut Commands,
    handles: &[LaneHandle],
    objects: &Query<(Entity, &OnLane)>,
) {
    if handles.is_empty() {
        return;
    }
    for (entity, on_lane) in objects {
        if handles.iter().any(|h| h.entity == on_lane.0) {
            commands.entity(entity).despawn();
        }
    }
    for handle in handles {
        commands.entity(handle.entity).despawn();
    }
}

/// Despawn lanes that fell far enough behind the player.
pub fn cull_passed_lanes(
    mut commands: Commands,
    mut lanes: ResMut<LaneWorld>,
    player: Res<Player>,
    objects: Query<(Entity, &OnLane)>,
) {
    let passed = lanes.take_passed(player.z);
    if !passed.is_empty() {
        debug!("Culling {} lanes behind z={}", passed.len(), player.z);
    }
    despawn_handles(&mut commands, &passed, &objects);
}

/// Despawn every lane and object and restart index numbering.
pub fn despawn_all_lanes(
    commands: &mut Commands,
    lanes: &mut LaneWorld,
    objects: &Query<(Entity, &OnLane)>,
) {
    let all = lanes.clear();
    despawn_handles(commands, &all, objects);
}

pub struct LaneWorldPlugin;

impl Plugin for LaneWorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LaneConfig>()
            .init_resource::<LaneWorld>()
            .add_systems(Startup, setup_lanes);
    }
}
