use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::angle::AngleDeg;

/// Closed travel range of a rotary axis, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLimits {
    pub min: AngleDeg,
    pub max: AngleDeg,
}

impl AxisLimits {
    pub const fn new(min: AngleDeg, max: AngleDeg) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: AngleDeg) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

impl fmt::Display for AxisLimits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}, {:.3}]", self.min, self.max)
    }
}

/// Tilt-axis limits for both supported kinematic chains. C is continuous.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MachineLimits {
    #[serde(default = "default_a")]
    pub a: AxisLimits,
    #[serde(default = "default_b")]
    pub b: AxisLimits,
}

fn default_a() -> AxisLimits {
    AxisLimits::new(-120.0, 120.0)
}

fn default_b() -> AxisLimits {
    AxisLimits::new(-120.0, 120.0)
}

impl Default for MachineLimits {
    fn default() -> Self {
        Self {
            a: default_a(),
            b: default_b(),
        }
    }
}
