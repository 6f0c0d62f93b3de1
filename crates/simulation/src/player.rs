use std::collections::HashSet;

use bevy::prelude::*;

use crate::config::{PLAYER_MAX_X, PLAYER_MIN_X, PLAYER_START_X, PLAYER_START_Z};
use crate::contacts::ExternalPhysics;
use crate::game_state::Scoreboard;
use crate::gameplay_sets::GameplaySet;
use crate::lane_world::{spawn_lanes, LaneConfig, LanePosition, LaneWorld, Plant};
use crate::sim_rng::SimRng;

/// Grid position of the player character. Forward is towards -z.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub x: i64,
    pub z: i64,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: PLAYER_START_X,
            z: PLAYER_START_Z,
        }
    }
}

impl Player {
    pub fn cell(&self) -> (i64, i64) {
        (self.x, self.z)
    }

    /// The cell a hop in `direction` would land on.
    pub fn probe_cell(&self, direction: HopDirection) -> (i64, i64) {
        let (dx, dz) = direction.delta();
        (self.x + dx, self.z + dz)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HopDirection {
    Forward,
    Left,
    Right,
}

impl HopDirection {
    pub const ALL: [HopDirection; 3] = [HopDirection::Forward, HopDirection::Left, HopDirection::Right];

    pub fn delta(self) -> (i64, i64) {
        match self {
            HopDirection::Forward => (0, -1),
            HopDirection::Left => (-1, 0),
            HopDirection::Right => (1, 0),
        }
    }
}

/// Directions the player cannot hop towards because vegetation is in the way.
///
/// Flags are raised by contacts. After a hop they are lowered once the probe
/// cell of that direction is found empty, and, when the grid stands in for
/// the physics engine, raised again for occupied probe cells.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BlockedDirections {
    pub front: bool,
    pub left: bool,
    pub right: bool,
}

impl BlockedDirections {
    pub fn is_blocked(&self, direction: HopDirection) -> bool {
        match direction {
            HopDirection::Forward => self.front,
            HopDirection::Left => self.left,
            HopDirection::Right => self.right,
        }
    }

    pub fn block(&mut self, direction: HopDirection) {
        match direction {
            HopDirection::Forward => self.front = true,
            HopDirection::Left => self.left = true,
            HopDirection::Right => self.right = true,
        }
    }

    /// Lower every flag whose probe cell is free.
    pub fn refresh(&mut self, player: &Player, occupied: impl Fn((i64, i64)) -> bool) {
        for direction in HopDirection::ALL {
            if !occupied(player.probe_cell(direction)) {
                match direction {
                    HopDirection::Forward => self.front = false,
                    HopDirection::Left => self.left = false,
                    HopDirection::Right => self.right = false,
                }
            }
        }
    }

    /// Set every flag from its probe cell, raising as well as lowering.
    pub fn recompute(&mut self, player: &Player, occupied: impl Fn((i64, i64)) -> bool) {
        self.refresh(player, &occupied);
        for direction in HopDirection::ALL {
            if occupied(player.probe_cell(direction)) {
                self.block(direction);
            }
        }
    }
}

/// Input event: the player swiped in a direction.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HopRequest(pub HopDirection);

/// Emitted after an accepted hop, for animation and sound.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hopped {
    pub direction: HopDirection,
    pub x: i64,
    pub z: i64,
}

/// Whether a hop is allowed: forward needs a free front, sideways hops also
/// stay inside the lateral bounds.
pub fn can_hop(player: &Player, blocked: &BlockedDirections, direction: HopDirection) -> bool {
    if blocked.is_blocked(direction) {
        return false;
    }
    match direction {
        HopDirection::Forward => true,
        HopDirection::Right => player.x < PLAYER_MAX_X,
        HopDirection::Left => player.x > PLAYER_MIN_X,
    }
}

/// Cells currently occupied by vegetation.
pub fn vegetation_cells<'a>(plants: impl Iterator<Item = &'a LanePosition>) -> HashSet<(i64, i64)> {
    plants.map(LanePosition::cell).collect()
}

#[allow(clippy::too_many_arguments)]
pub fn process_hops(
    mut commands: Commands,
    mut requests: EventReader<HopRequest>,
    mut hopped: EventWriter<Hopped>,
    mut player: ResMut<Player>,
    mut blocked: ResMut<BlockedDirections>,
    mut scoreboard: ResMut<Scoreboard>,
    mut lanes: ResMut<LaneWorld>,
    config: Res<LaneConfig>,
    mut rng: ResMut<SimRng>,
    external: Option<Res<ExternalPhysics>>,
    plants: Query<&LanePosition, With<Plant>>,
) {
    let mut occupied: Option<HashSet<(i64, i64)>> = None;

    for &HopRequest(direction) in requests.read() {
        if !can_hop(&player, &blocked, direction) {
            debug!("Hop {:?} rejected at {:?}", direction, player.cell());
            continue;
        }

        let (dx, dz) = direction.delta();
        player.x += dx;
        player.z += dz;

        if direction == HopDirection::Forward {
            let budget = lanes.hop_budget(player.z);
            spawn_lanes(&mut commands, &mut lanes, &config, &mut rng, budget, false);
            scoreboard.score += 1;
        }

        // Later requests in this tick are gated before Contacts runs again,
        // so the flags must already describe the new cell.
        let cells = occupied.get_or_insert_with(|| vegetation_cells(plants.iter()));
        if external.is_some() {
            blocked.refresh(&player, |cell| cells.contains(&cell));
        } else {
            blocked.recompute(&player, |cell| cells.contains(&cell));
        }

        hopped.send(Hopped {
            direction,
            x: player.x,
            z: player.z,
        });
    }
}

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Player>()
            .init_resource::<BlockedDirections>()
            .add_event::<HopRequest>()
            .add_event::<Hopped>()
            .add_systems(
                FixedUpdate,
                (
                    process_hops,
                    crate::lane_world::cull_passed_lanes.after(process_hops),
                )
                    .in_set(GameplaySet::Input),
            );
    }
}
