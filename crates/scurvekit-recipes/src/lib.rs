//! # SCurveKit Recipes
//!
//! This crate provides the catalog of S-curve tuning test programs. Each
//! generator maps the derived test geometry to one complete, self-contained
//! G-code document meant to be run on hardware while an operator observes
//! vibration, positioning accuracy and motor sound.
//!
//! ## Tests Included
//!
//! - **1A Comparison**: S-curve vs near-linear motion over a medium-range square
//! - **1B Parameter Response**: jerk and multiplier changes over short moves
//! - **2A Jerk Sweep**: five motor-class jerk presets over a fixed stress polyline
//! - **3C Long-Move Stress**: near-full-envelope moves at conservative and aggressive presets
//! - **5A Aluminum Cutting**: material-specific validation on a workpiece-sized zone
//!
//! Generators are pure: the same geometry always yields byte-identical
//! output, and every phase's motion pattern returns to its starting point so
//! repeated runs do not drift.

pub mod aluminum_cutting;
pub mod catalog;
pub mod comparison;
pub mod jerk_sweep;
pub mod long_move_stress;
pub mod parameter_response;

pub use aluminum_cutting::AluminumCuttingGenerator;
pub use catalog::{CatalogEntry, GeneratedFile, TestCatalog};
pub use comparison::ComparisonTestGenerator;
pub use jerk_sweep::JerkSweepGenerator;
pub use long_move_stress::LongMoveStressGenerator;
pub use parameter_response::ParameterResponseGenerator;
