//! Test 1A: S-curve vs linear motion comparison.

use anyhow::Result;
use scurvekit_core::{DerivedGeometry, DocumentBuilder};

/// Generator for the baseline functional check: the same medium-range square
/// is run twice, first with minimal jerk (approximating linear motion), then
/// with full S-curve settings, so the operator can compare the two directly.
pub struct ComparisonTestGenerator {
    geometry: DerivedGeometry,
}

impl ComparisonTestGenerator {
    /// Create a new generator for the given test geometry.
    pub fn new(geometry: DerivedGeometry) -> Self {
        Self { geometry }
    }

    /// Generate the G-code for the comparison test.
    pub fn generate(&self) -> Result<String> {
        let g = &self.geometry;
        let half = g.medium_range / 2.0;
        let x_start = g.x_center - half;
        let x_end = g.x_center + half;
        let y_start = g.y_center - half;
        let y_end = g.y_center + half;

        let mut doc = DocumentBuilder::new();
        doc.header(
            "Test 1A: S-curve vs Linear Motion Comparison",
            "Verifies S-curve system is functioning correctly",
            g,
        );

        doc.reset_settings("Reset to defaults");
        doc.home("Home all axes");
        doc.command("G90 G94", "Absolute, feed rate mode");
        doc.blank();

        doc.comment("Test 1: Very low jerk (approximates linear)");
        doc.jerk(25.0, 15.0, "Minimal jerk settings");
        doc.feed(Some(x_start), Some(y_start), Some(1000.0), "Move to start position");
        doc.dwell(2, "Pause for observation");
        doc.blank();

        doc.comment(&format!(
            "Execute test pattern with minimal S-curve - {:.0}mm square",
            g.medium_range
        ));
        self.square(&mut doc, x_start, x_end, y_start, y_end, true);
        doc.dwell(2, "");
        doc.blank();

        doc.comment("Test 2: Proper S-curve settings");
        doc.jerk(300.0, 150.0, "Proper S-curve jerk values");
        doc.scurve_params(1.2, 0.7, false, "Enable full S-curve features");
        doc.dwell(2, "Pause for comparison");
        doc.blank();

        doc.comment("Execute same pattern with full S-curve");
        self.square(&mut doc, x_start, x_end, y_start, y_end, false);
        doc.dwell(2, "");
        doc.blank();

        doc.comment("Return to home");
        doc.home("");
        doc.report_settings();
        doc.blank();

        doc.comment("Expected observations:");
        doc.comment("- Test 1: More abrupt motion, potential vibration");
        doc.comment("- Test 2: Smoother acceleration/deceleration, less vibration");
        doc.comment("- No missed steps or position errors throughout");
        doc.comment("- Clear audible differences in motor sound characteristics");

        Ok(doc.finish())
    }

    /// One lap of the comparison square, starting and ending at the
    /// bottom-left corner. The first lap documents each leg's distance; the
    /// repeat lap emits the same moves bare.
    fn square(
        &self,
        doc: &mut DocumentBuilder,
        x_start: f64,
        x_end: f64,
        y_start: f64,
        y_end: f64,
        annotate: bool,
    ) {
        let leg = |doc: &mut DocumentBuilder, x, y, feed, label: &str| {
            if annotate {
                doc.feed_annotated(x, y, feed, label);
            } else {
                doc.feed(x, y, feed, label);
            }
        };
        leg(doc, Some(x_end), Some(y_start), Some(2500.0), "Fast move in X");
        doc.dwell(1, "");
        leg(doc, None, Some(y_end), None, "Fast move in Y");
        doc.dwell(1, "");
        leg(doc, Some(x_start), None, None, "Return move");
        doc.dwell(1, "");
        leg(doc, None, Some(y_start), None, "Complete square");
    }
}
