//! # SCurveKit Core
//!
//! Core types for the S-curve test program generator.
//! Provides the travel-envelope model, the derived test geometry computed
//! from it, and the G-code document builder shared by every test generator.

pub mod document;
pub mod envelope;
pub mod error;
pub mod geometry;

pub use document::DocumentBuilder;
pub use envelope::TravelEnvelope;
pub use error::{Axis, GeometryError, Result};
pub use geometry::{AxisBounds, DerivedGeometry};
