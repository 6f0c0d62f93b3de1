/// Number of cells across every lane. Fixed for a whole run.
pub const LANE_WIDTH: u32 = 40;

/// Lanes generated before this index use the clear-start placement rules.
pub const CLEAR_START_LANES: u64 = 8;

/// A lane is grass with probability 1/GRASS_ODDS (always grass when initial).
pub const GRASS_ODDS: u32 = 3;
/// Middle-band vegetation chance on non-clear-start grass lanes (1/N).
pub const VEGETATION_ODDS: u32 = 7;
/// Tree vs hedge (1/N for a tree).
pub const TREE_ODDS: u32 = 2;
/// Spawn chance of a vehicle once the gap allows one (1/N).
pub const VEHICLE_ODDS: u32 = 4;
/// Traffic heading (1/N for rightwards).
pub const DIRECTION_RIGHT_ODDS: u32 = 2;
/// A spawn is only attempted once the gap counter exceeds this value.
pub const MIN_VEHICLE_GAP: u32 = 3;

/// Lanes generated with `is_initial = true` when a run starts.
pub const INITIAL_LANES: usize = 6;
/// Non-initial lanes generated after the initial ones when a run starts.
pub const LOOKAHEAD_LANES: usize = 16;
/// Lanes appended for every successful forward hop.
pub const LANES_PER_HOP: usize = 2;
/// Forward hops stop appending lanes once this many lie ahead of the player.
pub const MAX_LANES_AHEAD: u64 = 24;

/// Row of lane 0. Lane `i` sits on row `LANE_ORIGIN_Z - i`.
pub const LANE_ORIGIN_Z: i64 = 5;
/// Lanes further than this many rows behind the player are culled.
pub const CULL_DISTANCE_BEHIND: i64 = 6;

// Player-space bounds. The lane centre is x = 0 and cell offset `o` maps to
// x = LANE_WIDTH / 2 - o, so the clear-start band (offsets 5..=20) spans
// x = 0..=15.
pub const PLAYER_START_X: i64 = 7;
pub const PLAYER_START_Z: i64 = 0;
/// Right hops are allowed while `x < PLAYER_MAX_X`.
pub const PLAYER_MAX_X: i64 = 18;
/// Left hops are allowed while `x > PLAYER_MIN_X`.
pub const PLAYER_MIN_X: i64 = -1;

/// Units per second a vehicle with speed factor 1.0 covers.
pub const VEHICLE_BASE_SPEED: f32 = 2.0;
/// Vehicles past this x re-enter at `VEHICLE_WRAP_MIN_X`.
pub const VEHICLE_WRAP_MAX_X: f32 = 23.0;
/// Vehicles past this x re-enter at `VEHICLE_WRAP_MAX_X`.
pub const VEHICLE_WRAP_MIN_X: f32 = -11.0;
/// Half the player's footprint along x, added to a vehicle's half length.
pub const PLAYER_HALF_WIDTH: f32 = 0.25;
