//! Query helpers for `TestGame`.

use std::collections::HashSet;

use bevy::ecs::event::Events;
use bevy::prelude::*;

use crate::game_state::Scoreboard;
use crate::lane_world::{Lane, LanePosition, LaneWorld, OnLane, Plant, Vehicle};
use crate::lanes::LaneDescriptor;
use crate::player::{BlockedDirections, Player};

use super::TestGame;

impl TestGame {
    // -----------------------------------------------------------------------
    // Resources (note: Bevy's World::query() requires &mut World)
    // -----------------------------------------------------------------------

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<R: Resource>(&self) -> &R {
        self.app.world().resource::<R>()
    }

    pub fn resource_mut<R: Resource>(&mut self) -> Mut<'_, R> {
        self.app.world_mut().resource_mut::<R>()
    }

    pub fn player(&self) -> Player {
        *self.resource::<Player>()
    }

    pub fn blocked(&self) -> BlockedDirections {
        *self.resource::<BlockedDirections>()
    }

    pub fn scoreboard(&self) -> Scoreboard {
        *self.resource::<Scoreboard>()
    }

    pub fn lanes(&self) -> &LaneWorld {
        self.resource::<LaneWorld>()
    }

    /// Take every pending event of type `E`.
    pub fn drain_events<E: Event>(&mut self) -> Vec<E> {
        self.app
            .world_mut()
            .resource_mut::<Events<E>>()
            .drain()
            .collect()
    }

    // -----------------------------------------------------------------------
    // Entities
    // -----------------------------------------------------------------------

    /// Descriptors of the live lanes in `LaneWorld` order.
    pub fn lane_descriptors(&mut self) -> Vec<LaneDescriptor> {
        let handles: Vec<Entity> = self.lanes().handles().map(|h| h.entity).collect();
        let world = self.app.world_mut();
        handles
            .into_iter()
            .filter_map(|entity| world.get::<Lane>(entity).map(|lane| lane.0))
            .collect()
    }

    pub fn lane_entity_count(&mut self) -> usize {
        let world = self.app.world_mut();
        world.query_filtered::<Entity, With<Lane>>().iter(world).count()
    }

    pub fn vehicle_positions(&mut self) -> Vec<(Entity, LanePosition)> {
        let world = self.app.world_mut();
        world
            .query_filtered::<(Entity, &LanePosition), With<Vehicle>>()
            .iter(world)
            .map(|(e, p)| (e, *p))
            .collect()
    }

    pub fn plant_cells(&mut self) -> HashSet<(i64, i64)> {
        let world = self.app.world_mut();
        world
            .query_filtered::<&LanePosition, With<Plant>>()
            .iter(world)
            .map(LanePosition::cell)
            .collect()
    }

    /// Lane entities referenced by placed objects.
    pub fn referenced_lanes(&mut self) -> HashSet<Entity> {
        let world = self.app.world_mut();
        world
            .query::<&OnLane>()
            .iter(world)
            .map(|on_lane| on_lane.0)
            .collect()
    }

    /// The lane entity on the player's row, if it is live.
    pub fn lane_under_player(&mut self) -> Option<Entity> {
        let z = self.player().z;
        self.lanes()
            .handles()
            .find(|h| crate::lane_world::lane_row_z(h.index) == z)
            .map(|h| h.entity)
    }
}
