//! Envelope partitioning.
//!
//! Derives the reusable test geometry from a raw travel envelope: per-axis
//! usable bounds, the XY center point, and three nested test range sizes.
//! All test generators consume this read-only; it is computed once per run.

use crate::envelope::TravelEnvelope;
use crate::error::{Axis, GeometryError, Result};
use serde::{Deserialize, Serialize};

/// Z keeps a fixed conservative floor independent of the safety margin.
const Z_USABLE_MIN: f64 = 5.0;
/// Headroom subtracted from the Z travel limit.
const Z_HEADROOM: f64 = 10.0;
/// Most tests need very little vertical travel; cap usable Z here.
const Z_USABLE_CAP: f64 = 100.0;

/// Absolute cap and usable-span fraction per range tier.
const SMALL_TIER: (f64, f64) = (150.0, 0.3);
const MEDIUM_TIER: (f64, f64) = (300.0, 0.6);
const LARGE_TIER: (f64, f64) = (450.0, 0.9);

/// Usable coordinate bounds of one axis (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    /// Lowest coordinate test motion may command.
    pub min: f64,
    /// Highest coordinate test motion may command.
    pub max: f64,
}

impl AxisBounds {
    /// Length of the usable range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Midpoint of the usable range.
    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Whether a coordinate lies within the bounds.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Test geometry derived from a [`TravelEnvelope`].
///
/// The three range sizes are concentric around the XY center and never
/// exceed the usable X span; `small_range <= medium_range <= large_range`
/// holds for every valid envelope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedGeometry {
    /// The envelope this geometry was derived from.
    pub envelope: TravelEnvelope,
    /// Usable X bounds: margin inset from both travel limits.
    pub x: AxisBounds,
    /// Usable Y bounds: margin inset from both travel limits.
    pub y: AxisBounds,
    /// Usable Z bounds: fixed conservative policy, independent of the margin.
    pub z: AxisBounds,
    /// Midpoint of the usable X range.
    pub x_center: f64,
    /// Midpoint of the usable Y range.
    pub y_center: f64,
    /// Smallest test range: min(150mm, 30% of usable X span).
    pub small_range: f64,
    /// Medium test range: min(300mm, 60% of usable X span).
    pub medium_range: f64,
    /// Largest test range: min(450mm, 90% of usable X span).
    pub large_range: f64,
}

impl DerivedGeometry {
    /// Partition a travel envelope into test geometry.
    ///
    /// Fails fast when the margin is too large for the machine's travel or
    /// when any input is non-finite or non-positive; no silent clamping of
    /// degenerate envelopes.
    pub fn from_envelope(envelope: &TravelEnvelope) -> Result<Self> {
        validate_inputs(envelope)?;

        let x = AxisBounds {
            min: envelope.safety_margin,
            max: envelope.x_max - envelope.safety_margin,
        };
        let y = AxisBounds {
            min: envelope.safety_margin,
            max: envelope.y_max - envelope.safety_margin,
        };
        let z = AxisBounds {
            min: Z_USABLE_MIN,
            max: (envelope.z_max - Z_HEADROOM).min(Z_USABLE_CAP),
        };

        for (axis, bounds) in [(Axis::X, x), (Axis::Y, y), (Axis::Z, z)] {
            if bounds.max <= bounds.min {
                return Err(GeometryError::DegenerateAxis {
                    axis,
                    min: bounds.min,
                    max: bounds.max,
                });
            }
        }

        let span = x.span();
        Ok(Self {
            envelope: *envelope,
            x,
            y,
            z,
            x_center: x.center(),
            y_center: y.center(),
            small_range: range_tier(span, SMALL_TIER),
            medium_range: range_tier(span, MEDIUM_TIER),
            large_range: range_tier(span, LARGE_TIER),
        })
    }
}

/// Size of one range tier: the lesser of the absolute cap and the fraction
/// of the usable span, clamped to the span itself.
fn range_tier(span: f64, (cap, fraction): (f64, f64)) -> f64 {
    (span * fraction).min(cap).min(span)
}

fn validate_inputs(envelope: &TravelEnvelope) -> Result<()> {
    let fields = [
        ("x_max", envelope.x_max),
        ("y_max", envelope.y_max),
        ("z_max", envelope.z_max),
        ("safety_margin", envelope.safety_margin),
    ];
    for (name, value) in fields {
        if !value.is_finite() {
            return Err(GeometryError::NonFiniteInput { name, value });
        }
    }
    for (axis, value) in [
        (Axis::X, envelope.x_max),
        (Axis::Y, envelope.y_max),
        (Axis::Z, envelope.z_max),
    ] {
        if value <= 0.0 {
            return Err(GeometryError::NonPositiveLimit { axis, value });
        }
    }
    if envelope.safety_margin < 0.0 {
        return Err(GeometryError::NegativeMargin {
            value: envelope.safety_margin,
        });
    }
    Ok(())
}
