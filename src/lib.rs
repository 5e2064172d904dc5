//! # SCurveKit
//!
//! Generates parameterized S-curve (jerk-limited) motion tuning test
//! programs for CNC machines from a travel envelope.
//!
//! ## Architecture
//!
//! SCurveKit is organized as a workspace:
//!
//! 1. **scurvekit-core** - travel envelope, derived test geometry, G-code
//!    document builder, error types
//! 2. **scurvekit-recipes** - the five test generators and the ordered
//!    catalog with its configuration report
//! 3. **scurvekit** - the command-line binary that writes the generated
//!    files to disk
//!
//! The core is pure: the same envelope always produces byte-identical test
//! programs. All filesystem work happens in this crate's writer.

pub mod writer;

pub use scurvekit_core::{
    Axis, AxisBounds, DerivedGeometry, DocumentBuilder, GeometryError, TravelEnvelope,
};

pub use scurvekit_recipes::{
    AluminumCuttingGenerator, CatalogEntry, ComparisonTestGenerator, GeneratedFile,
    JerkSweepGenerator, LongMoveStressGenerator, ParameterResponseGenerator, TestCatalog,
};

pub use writer::write_catalog;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and RUST_LOG environment
/// variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
