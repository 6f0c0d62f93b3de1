use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// Surface of one row of the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode)]
pub enum LaneType {
    Grass,
    Road,
}

/// One generated row. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct LaneDescriptor {
    pub lane_type: LaneType,
    pub width: u32,
    /// Generation ordinal. Never reused within a run.
    pub index: u64,
    /// Keeps the middle band of grass lanes walkable.
    pub clear_start: bool,
}

impl LaneDescriptor {
    pub fn is_road(&self) -> bool {
        self.lane_type == LaneType::Road
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode)]
pub enum VehicleClass {
    Car,
    Truck,
    FireTruck,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 3] = [VehicleClass::Car, VehicleClass::Truck, VehicleClass::FireTruck];

    pub fn ordinal(self) -> usize {
        match self {
            VehicleClass::Car => 0,
            VehicleClass::Truck => 1,
            VehicleClass::FireTruck => 2,
        }
    }

    /// Drive speed multiplier: smaller vehicles are faster.
    pub fn speed_factor(self) -> f32 {
        1.0 / (self.ordinal() as f32 + 1.0) + 0.5
    }

    /// Half of the vehicle's length along the lane, in world units.
    pub fn half_length(self) -> f32 {
        match self {
            VehicleClass::Car => 0.6,
            VehicleClass::Truck | VehicleClass::FireTruck => 1.0,
        }
    }
}

/// Which way a vehicle faces along its lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub enum Heading {
    /// Towards +x.
    Right,
    /// Towards -x, i.e. rotated half a turn about the vertical axis.
    Left,
}

impl Heading {
    pub fn from_direction_right(direction_right: bool) -> Self {
        if direction_right {
            Heading::Right
        } else {
            Heading::Left
        }
    }

    /// Yaw in radians for the renderer.
    pub fn yaw(self) -> f32 {
        match self {
            Heading::Right => 0.0,
            Heading::Left => std::f32::consts::PI,
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            Heading::Right => 1.0,
            Heading::Left => -1.0,
        }
    }
}

/// Shared traffic settings of a road lane, rolled once per lane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct TrafficDescriptor {
    pub vehicle_class: VehicleClass,
    pub direction_right: bool,
    pub speed_factor: f32,
}

impl TrafficDescriptor {
    pub fn new(vehicle_class: VehicleClass, direction_right: bool) -> Self {
        Self {
            vehicle_class,
            direction_right,
            speed_factor: vehicle_class.speed_factor(),
        }
    }

    pub fn heading(&self) -> Heading {
        Heading::from_direction_right(self.direction_right)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode)]
pub enum Vegetation {
    Tree,
    Hedge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub enum PlacedKind {
    Vegetation(Vegetation),
    Vehicle { class: VehicleClass, heading: Heading },
}

/// An obstacle at a lane-relative cell, before it becomes an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct PlacedObject {
    /// Cell index in `0..width`.
    pub offset: u32,
    pub kind: PlacedKind,
}

impl PlacedObject {
    pub fn is_vehicle(&self) -> bool {
        matches!(self.kind, PlacedKind::Vehicle { .. })
    }

    pub fn is_vegetation(&self) -> bool {
        matches!(self.kind, PlacedKind::Vegetation(_))
    }

    pub fn world_x(&self, width: u32) -> i64 {
        offset_to_world_x(width, self.offset)
    }
}

/// Lane-centred world x of a cell offset: `width / 2 - offset`.
pub fn offset_to_world_x(width: u32, offset: u32) -> i64 {
    i64::from(width / 2) - i64::from(offset)
}

/// A fully populated lane: descriptor, optional traffic, and placements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct LanePlan {
    pub descriptor: LaneDescriptor,
    pub traffic: Option<TrafficDescriptor>,
    pub objects: Vec<PlacedObject>,
}

impl LanePlan {
    pub fn vehicles(&self) -> impl Iterator<Item = &PlacedObject> {
        self.objects.iter().filter(|o| o.is_vehicle())
    }

    pub fn vegetation(&self) -> impl Iterator<Item = &PlacedObject> {
        self.objects.iter().filter(|o| o.is_vegetation())
    }

    /// Compact binary form, e.g. for replays or snapshots.
    pub fn encode(&self) -> Vec<u8> {
        bitcode::encode(self)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, bitcode::Error> {
        bitcode::decode(bytes)
    }
}
