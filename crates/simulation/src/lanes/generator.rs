use crate::config::{CLEAR_START_LANES, GRASS_ODDS};
use crate::sim_rng::RandomSource;

use super::error::LaneError;
use super::types::{LaneDescriptor, LaneType};

/// Decides the surface and spawn policy of each new row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneGenerator {
    width: u32,
}

impl LaneGenerator {
    pub fn new(width: u32) -> Result<Self, LaneError> {
        if width == 0 {
            return Err(LaneError::InvalidWidth(width));
        }
        Ok(Self { width })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Describe the lane with generation ordinal `index`.
    ///
    /// Initial lanes are always grass. The grass roll is drawn even then, so
    /// the random stream advances identically for initial and later lanes.
    /// `clear_start` follows the generation ordinal, not the row's distance
    /// from the player.
    pub fn generate(
        &self,
        index: u64,
        is_initial: bool,
        rng: &mut dyn RandomSource,
    ) -> LaneDescriptor {
        let grass_roll = rng.random_bool(GRASS_ODDS);
        let lane_type = if grass_roll || is_initial {
            LaneType::Grass
        } else {
            LaneType::Road
        };

        LaneDescriptor {
            lane_type,
            width: self.width,
            index,
            clear_start: index < CLEAR_START_LANES,
        }
    }
}
