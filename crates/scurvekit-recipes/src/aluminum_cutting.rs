//! Test 5A: aluminum cutting optimization.

use anyhow::Result;
use scurvekit_core::{DerivedGeometry, DocumentBuilder};

/// Maximum workpiece edge length (mm).
const MAX_WORKPIECE: f64 = 100.0;
/// Workpiece edge as a fraction of the medium test range.
const WORKPIECE_FRACTION: f64 = 0.4;

/// Generator for the material-specific validation: a single aggressive
/// S-curve preset drives a roughing raster plus finishing contour over a
/// workpiece-sized zone at the table center. Aluminum tolerates aggressive
/// motion, so this is where cycle-time gains are measured against finish
/// quality.
pub struct AluminumCuttingGenerator {
    geometry: DerivedGeometry,
}

impl AluminumCuttingGenerator {
    /// Create a new generator for the given test geometry.
    pub fn new(geometry: DerivedGeometry) -> Self {
        Self { geometry }
    }

    /// Edge length of the test workpiece for this geometry.
    pub fn workpiece_size(&self) -> f64 {
        (self.geometry.medium_range * WORKPIECE_FRACTION).min(MAX_WORKPIECE)
    }

    /// Generate the G-code for the aluminum cutting test.
    pub fn generate(&self) -> Result<String> {
        let g = &self.geometry;
        let size = self.workpiece_size();
        let x_start = g.x_center - size / 2.0;
        let x_end = g.x_center + size / 2.0;
        let y_start = g.y_center - size / 2.0;
        let y_end = g.y_center + size / 2.0;

        let mut doc = DocumentBuilder::new();
        doc.header(
            "Test 5A: Aluminum Machining Optimization",
            &format!(
                "Optimizes S-curve for aluminum cutting on {size:.0}x{size:.0}mm workpiece"
            ),
            g,
        );

        doc.comment("SETUP REQUIRED: 6061 aluminum, appropriate end mill, speeds/feeds");
        doc.comment(&format!(
            "Workpiece positioned at machine center: X{:.0} Y{:.0}",
            g.x_center, g.y_center
        ));
        doc.comment(&format!("Test area: {size:.0}mm x {size:.0}mm"));
        doc.blank();

        doc.command("G28 G54 G90 G94", "");
        doc.comment("M3 S18000 ; High speed for aluminum (ADJUST)");
        doc.blank();

        doc.comment("Aluminum allows aggressive settings due to:");
        doc.comment("- Easy machining characteristics");
        doc.comment("- Good heat dissipation");
        doc.comment("- Minimal tool chatter concerns");
        doc.blank();

        doc.comment("Aggressive aluminum settings");
        doc.jerk(500.0, 250.0, "High jerk for aluminum");
        doc.scurve_params(1.4, 0.8, true, "Aggressive motion");
        doc.junction(1.5, 1.3, 90.0, "Fast cornering");
        doc.blending(0.02, 3.0, 75.0, 0.8, 10, "Optimized blending");
        doc.positioning(60.0, 3.0, 2.0, "Quick positioning");
        doc.blank();

        doc.rapid(Some(x_start), Some(y_start), "Rapid to workpiece corner");
        doc.rapid_z(2.0, "");
        doc.feed_z(-2.0, 400.0, "Deeper cut possible in aluminum");
        doc.blank();

        doc.comment("High-speed aluminum roughing");
        self.roughing_raster(&mut doc, x_start, x_end, y_start, size);
        doc.blank();

        doc.comment("Aluminum finishing pass");
        doc.feed_annotated(None, Some(y_end), Some(800.0), "Finishing feed");
        doc.feed_annotated(Some(x_start), None, None, "Top edge");
        doc.feed_annotated(None, Some(y_start), None, "Left edge, back to start corner");
        doc.blank();

        doc.command("G1 Z5", "Retract");
        doc.command("M5", "Stop spindle");
        doc.home("");
        doc.blank();

        doc.comment("Aluminum-Specific Metrics:");
        doc.comment("- Surface finish quality at high feed rates");
        doc.comment("- Corner sharpness with aggressive settings");
        doc.comment("- Cycle time improvements vs quality");
        doc.comment("- Tool life with optimized motion");
        doc.comment("- Chip evacuation effectiveness");

        Ok(doc.finish())
    }

    /// Serpentine roughing raster: five full-width passes with 20% step
    /// overs, ending at the far corner of the last pass.
    fn roughing_raster(
        &self,
        doc: &mut DocumentBuilder,
        x_start: f64,
        x_end: f64,
        y_start: f64,
        size: f64,
    ) {
        doc.feed_annotated(Some(x_end), None, Some(1200.0), "Roughing pass");
        for row in 1..=4 {
            let y = y_start + size * 0.2 * f64::from(row);
            doc.feed(None, Some(y), Some(300.0), "Step over");
            let target = if row % 2 == 1 { x_start } else { x_end };
            doc.feed_annotated(Some(target), None, Some(1200.0), "Roughing pass");
        }
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
    fn test_workpiece_capped_at_100mm() {
        // medium range 270: 40% = 108, capped to 100
        let gen = AluminumCuttingGenerator::new(default_geometry());
        assert_eq!(gen.workpiece_size(), 100.0);
        let text = gen.generate().unwrap();
        assert!(text.contains("on 100x100mm workpiece"));
        assert!(text.contains("Test area: 100mm x 100mm"));
    }

    #[test]
    fn test_small_machine_scales_workpiece_down() {
        let env = TravelEnvelope::new(200.0, 200.0, 100.0);
        let g = DerivedGeometry::from_envelope(&env).unwrap();
        let gen = AluminumCuttingGenerator::new(g);
        // span 150, medium = min(300, 90) = 90, 40% = 36
        assert_eq!(gen.workpiece_size(), 36.0);
    }

    #[test]
    fn test_raster_rows_and_feeds() {
        let text = AluminumCuttingGenerator::new(default_geometry())
            .generate()
            .unwrap();
        // workpiece 200..300 centered on 250; rows step 20mm
        assert!(text.contains("G0 X200 Y200        ; Rapid to workpiece corner"));
        for y in [220, 240, 260, 280] {
            assert!(text.contains(&format!("G1 F300 Y{y}")), "row {y}");
        }
        assert_eq!(text.matches("Roughing pass (100mm)").count(), 5);
        assert!(text.contains("G1 Z-2.0 F400       ; Deeper cut possible in aluminum"));
    }

    #[test]
    fn test_single_aggressive_preset() {
        let text = AluminumCuttingGenerator::new(default_geometry())
            .generate()
            .unwrap();
        assert_eq!(text.matches("M205").count(), 1);
        assert!(text.contains("M205 X500 Z250      ; High jerk for aluminum"));
        assert!(text.contains("M211 S1 P0.02 R3.0 V75 F0.8 L10"));
        assert!(text.contains("M212 V60.0 Q3.0 D2.0"));
    }

    #[test]
    fn test_phase_returns_to_start_corner() {
        let gen = AluminumCuttingGenerator::new(default_geometry());
        let text = gen.generate().unwrap();
        // last finishing move closes the pattern at the start corner
        assert!(text.contains("Left edge, back to start corner (100mm)"));
    }
}
