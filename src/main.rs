use anyhow::Result;
use clap::Parser;
use scurvekit::{init_logging, write_catalog, DerivedGeometry, TestCatalog, TravelEnvelope};
use std::path::PathBuf;
use tracing::info;

/// Version string shown by `--version`, with the build date appended.
const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

/// Generate S-curve motion tuning test G-code for a machine's travel envelope.
#[derive(Parser, Debug)]
#[command(name = "scurvekit", version, long_version = LONG_VERSION, about)]
struct Cli {
    /// Maximum X travel (mm)
    #[arg(default_value_t = 500.0)]
    x_max: f64,

    /// Maximum Y travel (mm)
    #[arg(default_value_t = 500.0)]
    y_max: f64,

    /// Maximum Z travel (mm)
    #[arg(default_value_t = 200.0)]
    z_max: f64,

    /// Safety margin kept clear of the limit switches (mm)
    #[arg(short, long, default_value_t = 25.0)]
    margin: f64,

    /// Directory the test programs are written into
    #[arg(short, long, default_value = "test_gcode_generated")]
    output: PathBuf,
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    let envelope = TravelEnvelope::with_margin(cli.x_max, cli.y_max, cli.z_max, cli.margin);
    info!(%envelope, "generating S-curve test programs");

    let geometry = DerivedGeometry::from_envelope(&envelope)?;
    let catalog = TestCatalog::standard();
    let written = write_catalog(&cli.output, &catalog, &geometry)?;

    info!(
        count = written.len() - 1,
        dir = %cli.output.display(),
        "test files ready for CNC testing"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_long_version_carries_build_date() {
        let cmd = Cli::command();
        let long = cmd.get_long_version().unwrap();
        assert!(long.contains(scurvekit::VERSION));
        assert!(long.contains(scurvekit::BUILD_DATE));
    }
}
