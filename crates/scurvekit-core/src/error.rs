//! Error types for envelope partitioning.
//!
//! All errors use `thiserror`. An invalid envelope is fatal to generation:
//! the catalog is produced all-or-nothing, so callers surface these directly.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Machine axis identifier, used in error reporting and bounds summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::Y => write!(f, "Y"),
            Self::Z => write!(f, "Z"),
        }
    }
}

/// Errors raised while deriving test geometry from a travel envelope.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The usable range of an axis collapsed to zero or inverted, usually
    /// because the safety margin is too large for the machine's travel.
    #[error("Degenerate usable range on {axis}: {min}mm to {max}mm (margin too large for travel?)")]
    DegenerateAxis {
        /// The axis whose usable range collapsed.
        axis: Axis,
        /// The computed usable minimum (mm).
        min: f64,
        /// The computed usable maximum (mm).
        max: f64,
    },

    /// A travel limit is zero or negative.
    #[error("Travel limit for {axis} must be positive, got {value}mm")]
    NonPositiveLimit {
        /// The axis with the invalid limit.
        axis: Axis,
        /// The offending value (mm).
        value: f64,
    },

    /// The safety margin is negative.
    #[error("Safety margin must not be negative, got {value}mm")]
    NegativeMargin {
        /// The offending margin (mm).
        value: f64,
    },

    /// An input is NaN or infinite.
    #[error("Envelope input '{name}' is not finite: {value}")]
    NonFiniteInput {
        /// The name of the offending field.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
}

/// Result type alias for geometry derivation.
pub type Result<T> = std::result::Result<T, GeometryError>;
