//! Test 2A: systematic jerk value sweep.

use anyhow::Result;
use scurvekit_core::{DerivedGeometry, DocumentBuilder};

/// Jerk presets swept by the test, from conservative stepper values up to
/// servo-class settings. XY and Z jerk in mm/s^3 equivalents as the
/// controller expects them.
const JERK_PRESETS: [(&str, f64, f64); 5] = [
    ("Very conservative (NEMA17 class)", 150.0, 80.0),
    ("NEMA23 conservative", 250.0, 125.0),
    ("NEMA23 moderate", 350.0, 175.0),
    ("NEMA23/24 aggressive", 500.0, 250.0),
    ("Servo class aggressive", 700.0, 350.0),
];

/// Generator for the jerk optimization sweep: a fixed six-segment polyline
/// with full-range legs, short legs and a diagonal return is run under five
/// increasing jerk presets. Geometry stays constant across phases so the
/// operator can find the highest usable jerk before faults appear.
pub struct JerkSweepGenerator {
    geometry: DerivedGeometry,
}

impl JerkSweepGenerator {
    /// Create a new generator for the given test geometry.
    pub fn new(geometry: DerivedGeometry) -> Self {
        Self { geometry }
    }

    /// Generate the G-code for the jerk sweep.
    pub fn generate(&self) -> Result<String> {
        let g = &self.geometry;
        let half = g.medium_range / 2.0;
        let x_start = g.x_center - half;
        let x_end = g.x_center + half;
        let y_start = g.y_center - half;
        let y_end = g.y_center + half;

        let mut doc = DocumentBuilder::new();
        doc.header(
            "Test 2A: Systematic Jerk Value Testing",
            "Tests jerk values from conservative to aggressive",
            g,
        );

        doc.command("G28 G90 G94", "");
        doc.reset_settings("Reset to defaults");
        doc.blank();

        doc.comment("Fixed test pattern (complex geometry to stress jerk limits)");
        doc.feed(Some(x_start), Some(y_start), Some(1000.0), "Move to start position");
        doc.blank();

        for (index, (name, jerk_xy, jerk_z)) in JERK_PRESETS.iter().enumerate() {
            doc.comment(&format!("Test {}: {}", index + 1, name));
            doc.jerk(*jerk_xy, *jerk_z, "");
            doc.report_settings();
            if index == 0 {
                doc.comment(&format!(
                    "Pattern uses the {:.0}mm range; same geometry for every preset",
                    g.medium_range
                ));
            }
            self.pattern(&mut doc, x_start, x_end, y_start, y_end, g.x_center, g.y_center);
            doc.dwell(3, "Pause for evaluation");
            doc.blank();
        }

        doc.home("");
        doc.blank();

        doc.comment("Evaluation Criteria:");
        doc.comment("- Record vibration level (1-10 scale) for each test");
        doc.comment("- Note any missed steps or position errors");
        doc.comment("- Measure cycle time for each test sequence");
        doc.comment("- Assess motion smoothness subjectively");
        doc.comment("- Find highest jerk values before problems appear");

        Ok(doc.finish())
    }

    /// The six-segment stress polyline: three full-range corners, two short
    /// legs with a direction reversal, and a diagonal back to the start.
    #[allow(clippy::too_many_arguments)]
    fn pattern(
        &self,
        doc: &mut DocumentBuilder,
        x_start: f64,
        x_end: f64,
        y_start: f64,
        y_end: f64,
        x_mid: f64,
        y_mid: f64,
    ) {
        doc.feed_annotated(Some(x_end), Some(y_start), Some(3000.0), "Fast linear move");
        doc.feed_annotated(Some(x_end), Some(y_end), None, "90-degree corner");
        doc.feed_annotated(Some(x_start), Some(y_end), None, "Another corner");
        doc.feed_annotated(Some(x_start), Some(y_mid), None, "Shorter move");
        doc.feed_annotated(Some(x_mid), Some(y_mid), None, "Short move with direction change");
        doc.feed_annotated(Some(x_start), Some(y_start), None, "Diagonal return to start");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scurvekit_core::TravelEnvelope;

    fn generate_default() -> String {
        let g = DerivedGeometry::from_envelope(&TravelEnvelope::default()).unwrap();
        JerkSweepGenerator::new(g).generate().unwrap()
    }

    #[test]
    fn test_five_presets_emitted_in_order() {
        let text = generate_default();
        let positions: Vec<_> = [
            "M205 X150 Z80",
            "M205 X250 Z125",
            "M205 X350 Z175",
            "M205 X500 Z250",
            "M205 X700 Z350",
        ]
        .iter()
        .copied()
        .map(|needle| text.find(needle).expect(needle))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(text.matches("M207").count(), 5);
    }

    #[test]
    fn test_pattern_geometry_constant_across_phases() {
        let text = generate_default();
        // the full-range leg appears identically in all five phases
        assert_eq!(
            text.matches("G1 F3000 X385 Y115  ; Fast linear move (270mm)")
                .count(),
            5
        );
        // short legs and the diagonal return
        assert_eq!(text.matches("Shorter move (135mm)").count(), 5);
        assert_eq!(text.matches("Diagonal return to start (191mm)").count(), 5);
    }

    #[test]
    fn test_pattern_is_closed() {
        let g = DerivedGeometry::from_envelope(&TravelEnvelope::default()).unwrap();
        let gen = JerkSweepGenerator::new(g);
        let mut doc = DocumentBuilder::new();
        doc.feed(Some(115.0), Some(115.0), Some(1000.0), "");
        gen.pattern(&mut doc, 115.0, 385.0, 115.0, 385.0, 250.0, 250.0);
        assert_eq!(doc.position(), Some((115.0, 115.0)));
    }
}
