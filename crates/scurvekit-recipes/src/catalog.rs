//! The ordered test catalog and its configuration report.
//!
//! The catalog maps stable file identifiers to generators. Order matters
//! only for human reading (tests are meant to be run 1A through 5A); each
//! generator is independent and may be invoked in any order.

use crate::{
    AluminumCuttingGenerator, ComparisonTestGenerator, JerkSweepGenerator,
    LongMoveStressGenerator, ParameterResponseGenerator,
};
use anyhow::Result;
use scurvekit_core::DerivedGeometry;
use tracing::debug;

/// One catalog entry: a stable identifier, its output file name, and the
/// generator that produces the document.
pub struct CatalogEntry {
    /// Short test id used in run ordering ("1A", "1B", ...).
    pub id: &'static str,
    /// Stable output file identifier.
    pub file_name: &'static str,
    /// Human-readable test title.
    pub title: &'static str,
    generate: fn(DerivedGeometry) -> Result<String>,
}

impl CatalogEntry {
    /// Generate this entry's document for the given geometry.
    pub fn generate(&self, geometry: &DerivedGeometry) -> Result<String> {
        (self.generate)(*geometry)
    }
}

/// A generated document paired with its output file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Test id of the entry that produced this file.
    pub id: String,
    /// File name the writer should use.
    pub file_name: String,
    /// Complete document text.
    pub content: String,
}

/// The ordered catalog of S-curve test programs.
pub struct TestCatalog {
    entries: Vec<CatalogEntry>,
}

impl TestCatalog {
    /// The standard five-test catalog in recommended run order.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                CatalogEntry {
                    id: "1A",
                    file_name: "test_1a_scurve_verification.gcode",
                    title: "S-curve vs Linear Motion Comparison",
                    generate: |g| ComparisonTestGenerator::new(g).generate(),
                },
                CatalogEntry {
                    id: "1B",
                    file_name: "test_1b_parameter_response.gcode",
                    title: "Parameter Response Verification",
                    generate: |g| ParameterResponseGenerator::new(g).generate(),
                },
                CatalogEntry {
                    id: "2A",
                    file_name: "test_2a_jerk_optimization.gcode",
                    title: "Systematic Jerk Value Testing",
                    generate: |g| JerkSweepGenerator::new(g).generate(),
                },
                CatalogEntry {
                    id: "3C",
                    file_name: "test_3c_stress_long_moves.gcode",
                    title: "High-Speed Long Move Stress Test",
                    generate: |g| LongMoveStressGenerator::new(g).generate(),
                },
                CatalogEntry {
                    id: "5A",
                    file_name: "test_5a_aluminum_cutting.gcode",
                    title: "Aluminum Machining Optimization",
                    generate: |g| AluminumCuttingGenerator::new(g).generate(),
                },
            ],
        }
    }

    /// The catalog entries in reading order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Look up an entry by test id.
    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Number of entries in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Generate every document in the catalog. All-or-nothing: a failure in
    /// any generator aborts the whole run.
    pub fn generate_all(&self, geometry: &DerivedGeometry) -> Result<Vec<GeneratedFile>> {
        let mut files = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            debug!(id = entry.id, file = entry.file_name, "generating test program");
            let content = entry.generate(geometry)?;
            files.push(GeneratedFile {
                id: entry.id.to_string(),
                file_name: entry.file_name.to_string(),
                content,
            });
        }
        Ok(files)
    }

    /// Human-readable configuration summary: travel limits, margins, derived
    /// ranges, the center point and the list of generated files.
    pub fn configuration_report(&self, geometry: &DerivedGeometry) -> String {
        let env = &geometry.envelope;
        let mut report = String::new();
        report.push_str("S-Curve Test G-Code Configuration\n");
        report.push_str("=====================================\n\n");
        report.push_str("Machine Travel Limits:\n");
        report.push_str(&format!("- X-axis: 0 to {:.0}mm\n", env.x_max));
        report.push_str(&format!("- Y-axis: 0 to {:.0}mm\n", env.y_max));
        report.push_str(&format!("- Z-axis: 0 to {:.0}mm\n\n", env.z_max));
        report.push_str(&format!("Safety Margin: {:.0}mm\n", env.safety_margin));
        report.push_str("Usable Ranges:\n");
        report.push_str(&format!(
            "- X: {:.0}mm to {:.0}mm\n",
            geometry.x.min, geometry.x.max
        ));
        report.push_str(&format!(
            "- Y: {:.0}mm to {:.0}mm\n",
            geometry.y.min, geometry.y.max
        ));
        report.push_str(&format!(
            "- Z: {:.0}mm to {:.0}mm\n\n",
            geometry.z.min, geometry.z.max
        ));
        report.push_str("Test Ranges:\n");
        report.push_str(&format!("- Small: {:.0}mm\n", geometry.small_range));
        report.push_str(&format!("- Medium: {:.0}mm\n", geometry.medium_range));
        report.push_str(&format!("- Large: {:.0}mm\n\n", geometry.large_range));
        report.push_str(&format!(
            "Center Point: X{:.0} Y{:.0}\n\n",
            geometry.x_center, geometry.y_center
        ));
        report.push_str("Generated Files:\n");
        for entry in &self.entries {
            report.push_str(&format!("- {} ({})\n", entry.file_name, entry.title));
        }
        report.push_str("\nUsage Instructions:\n");
        report.push_str("1. Ensure your machine has the specified travel limits\n");
        report.push_str("2. Set work coordinate system G54 to use the full travel envelope\n");
        report.push_str("3. Verify safety margins are appropriate for your setup\n");
        let order: Vec<&str> = self.entries.iter().map(|e| e.id).collect();
        report.push_str(&format!("4. Run tests in order: {}\n", order.join(", ")));
        report.push_str("5. Document observations for each test before moving on\n");
        report
    }
}

impl Default for TestCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scurvekit_core::TravelEnvelope;

    fn default_geometry() -> DerivedGeometry {
        DerivedGeometry::from_envelope(&TravelEnvelope::default()).unwrap()
    }

    #[test]
    fn test_standard_catalog_order() {
        let catalog = TestCatalog::standard();
        let ids: Vec<&str> = catalog.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, ["1A", "1B", "2A", "3C", "5A"]);
        assert_eq!(catalog.len(), 5);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = TestCatalog::standard();
        let entry = catalog.get("3C").unwrap();
        assert_eq!(entry.file_name, "test_3c_stress_long_moves.gcode");
        assert!(catalog.get("9Z").is_none());
    }

    #[test]
    fn test_generate_all_produces_every_file() {
        let catalog = TestCatalog::standard();
        let files = catalog.generate_all(&default_geometry()).unwrap();
        assert_eq!(files.len(), 5);
        assert_eq!(files[0].file_name, "test_1a_scurve_verification.gcode");
        for file in &files {
            assert!(file.content.starts_with("; Test "), "{}", file.file_name);
            assert!(file.content.contains("Generated for travel envelope: 500x500x200mm"));
        }
    }

    #[test]
    fn test_configuration_report_contents() {
        let catalog = TestCatalog::standard();
        let report = catalog.configuration_report(&default_geometry());
        assert!(report.contains("- X-axis: 0 to 500mm"));
        assert!(report.contains("Safety Margin: 25mm"));
        assert!(report.contains("- X: 25mm to 475mm"));
        assert!(report.contains("- Small: 135mm"));
        assert!(report.contains("- Medium: 270mm"));
        assert!(report.contains("- Large: 405mm"));
        assert!(report.contains("Center Point: X250 Y250"));
        assert!(report.contains("- test_1a_scurve_verification.gcode"));
        assert!(report.contains("Run tests in order: 1A, 1B, 2A, 3C, 5A"));
    }
}
