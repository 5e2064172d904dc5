//! Writes a generated test catalog to disk.
//!
//! This is the only place in the workspace that touches the filesystem; the
//! core and recipe crates hand back named documents and never open files.

use anyhow::{Context, Result};
use scurvekit_core::DerivedGeometry;
use scurvekit_recipes::TestCatalog;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Name of the human-readable summary written next to the test programs.
const REPORT_FILE: &str = "configuration.txt";

/// Generate every catalog document for the given geometry and write it into
/// `output_dir` (created if missing), plus the configuration report.
/// Returns the paths written, in catalog order with the report last.
pub fn write_catalog(
    output_dir: &Path,
    catalog: &TestCatalog,
    geometry: &DerivedGeometry,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;

    let files = catalog.generate_all(geometry)?;
    let mut written = Vec::with_capacity(files.len() + 1);

    for file in &files {
        let path = output_dir.join(&file.file_name);
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(test = %file.id, path = %path.display(), "generated");
        written.push(path);
    }

    let report_path = output_dir.join(REPORT_FILE);
    fs::write(&report_path, catalog.configuration_report(geometry))
        .with_context(|| format!("failed to write {}", report_path.display()))?;
    info!(path = %report_path.display(), "configuration saved");
    written.push(report_path);

    Ok(written)
}
