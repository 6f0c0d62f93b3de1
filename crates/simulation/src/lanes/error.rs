use std::fmt;

/// Precondition failures of the lane generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaneError {
    /// A lane must be at least one cell wide.
    InvalidWidth(u32),
}

impl fmt::Display for LaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaneError::InvalidWidth(width) => {
                write!(f, "Invalid lane width {width}: must be greater than zero")
            }
        }
    }
}

impl std::error::Error for LaneError {}
