//! Test 1B: parameter response verification.

use anyhow::Result;
use scurvekit_core::{DerivedGeometry, DocumentBuilder};

/// Maximum out-and-back move length for the response test (mm).
const MAX_MOVE: f64 = 150.0;

/// Generator for the responsiveness check: short out-and-back moves centered
/// on the table, repeated under low, medium and high jerk settings and then
/// under two S-curve multiplier values. Each phase starts and ends at the
/// same corner of the test zone so settings changes are the only variable.
pub struct ParameterResponseGenerator {
    geometry: DerivedGeometry,
}

impl ParameterResponseGenerator {
    /// Create a new generator for the given test geometry.
    pub fn new(geometry: DerivedGeometry) -> Self {
        Self { geometry }
    }

    /// Generate the G-code for the parameter response test.
    pub fn generate(&self) -> Result<String> {
        let g = &self.geometry;
        let move_distance = g.small_range.min(MAX_MOVE);
        let x_start = g.x_center - move_distance / 2.0;
        let x_end = g.x_center + move_distance / 2.0;
        let y_start = g.y_center - move_distance / 2.0;
        let y_end = g.y_center + move_distance / 2.0;

        let mut doc = DocumentBuilder::new();
        doc.header(
            "Test 1B: Parameter Response Verification",
            "Tests immediate response to parameter modifications",
            g,
        );

        doc.command("G28 G90 G94", "");
        doc.feed(
            Some(x_start),
            Some(y_start),
            Some(1000.0),
            "Move to test start corner",
        );
        doc.blank();

        doc.comment("Test 1: Low jerk response");
        doc.jerk(50.0, 25.0, "Low jerk settings");
        doc.report_settings();
        doc.feed_annotated(Some(x_end), None, Some(2000.0), "Outbound move");
        doc.dwell(2, "");
        doc.feed_annotated(Some(x_start), None, None, "Return move");
        doc.blank();

        doc.comment("Test 2: Medium jerk response");
        doc.jerk(200.0, 100.0, "Medium jerk settings");
        doc.report_settings();
        doc.feed_annotated(None, Some(y_end), None, "Outbound move");
        doc.dwell(2, "");
        doc.feed_annotated(None, Some(y_start), None, "Return move");
        doc.blank();

        doc.comment("Test 3: High jerk response");
        doc.jerk(500.0, 250.0, "High jerk settings");
        doc.report_settings();
        doc.feed_annotated(Some(x_end), None, None, "Outbound move");
        doc.dwell(2, "");
        doc.feed_annotated(Some(x_start), None, None, "Return move");
        doc.blank();

        doc.comment("Test 4: Multiplier effect");
        doc.jerk(300.0, 150.0, "Reset to medium");
        doc.scurve_multiplier(0.5, "Low multiplier");
        doc.feed_annotated(None, Some(y_end), None, "Outbound move");
        doc.dwell(1, "");
        doc.feed_annotated(None, Some(y_start), None, "Return move");
        doc.scurve_multiplier(2.0, "High multiplier");
        doc.feed_annotated(Some(x_end), None, None, "Outbound move");
        doc.dwell(1, "");
        doc.feed_annotated(Some(x_start), None, None, "Return move");
        doc.blank();

        doc.comment("Reset and return home");
        doc.reset_settings("");
        doc.home("");
        doc.blank();

        doc.comment("Expected Results:");
        doc.comment("- Clearly distinguishable motion characteristics between settings");
        doc.comment("- Low jerk: very smooth, potentially slower transitions");
        doc.comment("- High jerk: more responsive, potentially some vibration");
        doc.comment("- Multiplier effect: noticeable scaling of jerk behavior");
        doc.comment("- All moves complete accurately without position loss");

        Ok(doc.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scurvekit_core::TravelEnvelope;

    fn generate_default() -> String {
        let g = DerivedGeometry::from_envelope(&TravelEnvelope::default()).unwrap();
        ParameterResponseGenerator::new(g).generate().unwrap()
    }

    #[test]
    fn test_move_distance_uses_small_range() {
        let text = generate_default();
        // small range 135 centered on 250 renders as X182..X318, so every
        // leg commands 136mm of travel
        assert_eq!(text.matches("(136mm)").count(), 10);
        assert!(text.contains("G1 F2000 X318       ; Outbound move (136mm)"));
    }

    #[test]
    fn test_cap_applies_on_wide_machines() {
        let env = TravelEnvelope::new(1200.0, 1200.0, 200.0);
        let g = DerivedGeometry::from_envelope(&env).unwrap();
        let text = ParameterResponseGenerator::new(g).generate().unwrap();
        // small range is capped at 150, matching MAX_MOVE
        assert!(text.contains("(150mm)"));
        assert!(!text.contains("(345mm)"));
    }

    #[test]
    fn test_all_four_phases_present() {
        let text = generate_default();
        assert!(text.contains("M205 X50 Z25        ; Low jerk settings"));
        assert!(text.contains("M205 X200 Z100      ; Medium jerk settings"));
        assert!(text.contains("M205 X500 Z250      ; High jerk settings"));
        assert!(text.contains("M206 P0.5           ; Low multiplier"));
        assert!(text.contains("M206 P2.0           ; High multiplier"));
        assert_eq!(text.matches("M207").count(), 3);
    }
}
