//! Machine travel envelope.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The maximum reachable coordinate range of the machine on each axis,
/// plus the safety margin kept clear of the physical limit switches.
///
/// All values are millimetres. The envelope is immutable input: it is built
/// once from the command line (or defaults) and every derived quantity is
/// computed from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TravelEnvelope {
    /// Maximum X travel (mm)
    pub x_max: f64,
    /// Maximum Y travel (mm)
    pub y_max: f64,
    /// Maximum Z travel (mm)
    pub z_max: f64,
    /// Inset subtracted from the raw limits to stay clear of limit switches (mm)
    pub safety_margin: f64,
}

impl TravelEnvelope {
    /// Create an envelope with the default 25mm safety margin.
    pub fn new(x_max: f64, y_max: f64, z_max: f64) -> Self {
        Self {
            x_max,
            y_max,
            z_max,
            safety_margin: 25.0,
        }
    }

    /// Create an envelope with an explicit safety margin.
    pub fn with_margin(x_max: f64, y_max: f64, z_max: f64, safety_margin: f64) -> Self {
        Self {
            x_max,
            y_max,
            z_max,
            safety_margin,
        }
    }
}

impl Default for TravelEnvelope {
    fn default() -> Self {
        Self::new(500.0, 500.0, 200.0)
    }
}

impl fmt::Display for TravelEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}x{:.0}x{:.0}mm", self.x_max, self.y_max, self.z_max)
    }
}
