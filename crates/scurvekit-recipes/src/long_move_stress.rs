//! Test 3C: high-speed long move stress test.

use anyhow::Result;
use scurvekit_core::{DerivedGeometry, DocumentBuilder};

/// Additional inset from the usable bounds for the stress moves (mm).
const STRESS_INSET: f64 = 10.0;

/// Generator for the travel-limit stress test: near-full-envelope square
/// laps under conservative and then aggressive S-curve/junction presets,
/// followed by a diagonal out-and-back that loads both axes simultaneously.
pub struct LongMoveStressGenerator {
    geometry: DerivedGeometry,
}

impl LongMoveStressGenerator {
    /// Create a new generator for the given test geometry.
    pub fn new(geometry: DerivedGeometry) -> Self {
        Self { geometry }
    }

    /// Generate the G-code for the stress test.
    pub fn generate(&self) -> Result<String> {
        let g = &self.geometry;
        let x_start = g.x.min + STRESS_INSET;
        let x_end = g.x.max - STRESS_INSET;
        let y_start = g.y.min + STRESS_INSET;
        let y_end = g.y.max - STRESS_INSET;
        let move_length = x_end - x_start;

        let mut doc = DocumentBuilder::new();
        doc.header(
            "Test 3C: High-Speed Long Move Stress Test",
            "Tests S-curve performance on long moves using full travel envelope",
            g,
        );

        doc.command("G28 G90 G94", "");
        doc.reset_settings("Reset to defaults");
        doc.blank();

        doc.comment(&format!(
            "Long-distance high-speed testing using {move_length:.0}mm moves"
        ));
        doc.comment("Tests S-curve performance at machine limits");
        doc.blank();

        doc.comment("Test 1: Conservative settings for long moves");
        doc.jerk(350.0, 175.0, "Moderate jerk");
        doc.scurve_params(1.0, 0.7, true, "Conservative S-curve");
        doc.junction(1.1, 1.0, 120.0, "Gentle junction handling");
        doc.report_settings();
        doc.blank();

        doc.feed(Some(x_start), Some(y_start), Some(2000.0), "Move to start position");
        doc.blank();

        doc.comment("Execute long-distance moves");
        self.lap(&mut doc, x_start, x_end, y_start, y_end, 4000.0);
        doc.dwell(2, "");
        doc.blank();

        doc.comment("Test 2: Aggressive settings for maximum speed");
        doc.jerk(600.0, 300.0, "High jerk for speed");
        doc.scurve_params(1.4, 0.8, true, "Aggressive S-curve");
        doc.junction(1.4, 1.2, 90.0, "Fast cornering");
        doc.report_settings();
        doc.blank();

        doc.comment("Same long moves with aggressive settings");
        self.lap(&mut doc, x_start, x_end, y_start, y_end, 5000.0);
        doc.dwell(2, "");
        doc.blank();

        doc.comment("Test 3: Diagonal stress test");
        doc.comment("Long diagonal moves stress both axes simultaneously");
        doc.feed_annotated(Some(x_end), Some(y_end), Some(4000.0), "Full diagonal");
        doc.dwell(1, "");
        doc.feed_annotated(Some(x_start), Some(y_start), None, "Return diagonal");
        doc.dwell(2, "");
        doc.blank();

        doc.home("");
        doc.blank();

        doc.comment("Evaluation Points:");
        doc.comment("- Monitor for missed steps on long moves");
        doc.comment("- Check positioning accuracy after high-speed moves");
        doc.comment("- Note any vibration or mechanical stress");
        doc.comment("- Measure actual vs programmed move times");
        doc.comment("- Verify S-curve smoothness maintained at high speeds");

        Ok(doc.finish())
    }

    /// One closed square lap around the stress zone.
    fn lap(
        &self,
        doc: &mut DocumentBuilder,
        x_start: f64,
        x_end: f64,
        y_start: f64,
        y_end: f64,
        feed: f64,
    ) {
        doc.feed_annotated(Some(x_end), Some(y_start), Some(feed), "Full X travel");
        doc.dwell(1, "");
        doc.feed_annotated(Some(x_end), Some(y_end), None, "Full Y travel");
        doc.dwell(1, "");
        doc.feed_annotated(Some(x_start), Some(y_end), None, "Return X");
        doc.dwell(1, "");
        doc.feed_annotated(Some(x_start), Some(y_start), None, "Return Y");
    }
}
