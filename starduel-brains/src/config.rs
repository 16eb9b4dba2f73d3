//! Validation for archetype configuration.
//!
//! Brains never fail at decision time; the only thing worth rejecting is
//! a nonsensical tuning struct, and that happens once, up front, when a
//! driver builds its roster.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// A distance or threshold that must be strictly positive is not.
    NonPositive { field: &'static str, value: f32 },
    /// An angular threshold outside `(0, 180]` degrees.
    ConeOutOfRange { field: &'static str, value: f32 },
    /// Two thresholds in the wrong order (named lesser must not exceed
    /// named greater).
    Misordered {
        lesser: &'static str,
        greater: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            Self::ConeOutOfRange { field, value } => {
                write!(f, "{field} must be within (0, 180] degrees, got {value}")
            }
            Self::Misordered { lesser, greater } => {
                write!(f, "{lesser} must not exceed {greater}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

pub(crate) fn check_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

pub(crate) fn check_cone(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 180.0 {
        Ok(())
    } else {
        Err(ConfigError::ConeOutOfRange { field, value })
    }
}

pub(crate) fn check_order(
    lesser: &'static str,
    a: f32,
    greater: &'static str,
    b: f32,
) -> Result<(), ConfigError> {
    if a <= b {
        Ok(())
    } else {
        Err(ConfigError::Misordered { lesser, greater })
    }
}
