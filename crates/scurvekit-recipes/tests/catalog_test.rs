//! Catalog-wide properties checked against the generated documents
//! themselves: distance annotations must match the commanded coordinates,
//! motion patterns must return to their starting point, and generation must
//! be deterministic.

use regex::Regex;
use scurvekit_core::{DerivedGeometry, TravelEnvelope};
use scurvekit_recipes::TestCatalog;

fn default_geometry() -> DerivedGeometry {
    DerivedGeometry::from_envelope(&TravelEnvelope::default()).unwrap()
}

/// Replays the XY moves of a document the way the firmware would, from the
/// whole-millimetre coordinates in the text.
struct MotionReplay {
    annotation_re: Regex,
    position: Option<(f64, f64)>,
}

impl MotionReplay {
    fn new() -> Self {
        Self {
            annotation_re: Regex::new(r"\((\d+)mm\)").unwrap(),
            position: None,
        }
    }

    /// Process one line; returns (annotated distance, recomputed distance)
    /// when the line carries a travel annotation.
    fn step(&mut self, line: &str) -> Option<(String, String)> {
        if line.starts_with("G28") {
            self.position = None;
            return None;
        }
        if !(line.starts_with("G0 ") || line.starts_with("G1 ")) {
            return None;
        }
        let x = word_value(line, 'X');
        let y = word_value(line, 'Y');
        if x.is_none() && y.is_none() {
            return None;
        }

        let result = self.annotation_re.captures(line).and_then(|caps| {
            let (px, py) = self.position?;
            let nx = x.unwrap_or(px);
            let ny = y.unwrap_or(py);
            let distance = ((nx - px).powi(2) + (ny - py).powi(2)).sqrt();
            Some((caps[1].to_string(), format!("{distance:.0}")))
        });

        match (self.position, x, y) {
            (_, Some(nx), Some(ny)) => self.position = Some((nx, ny)),
            (Some((px, py)), _, _) => self.position = Some((x.unwrap_or(px), y.unwrap_or(py))),
            (None, _, _) => {}
        }
        result
    }
}

/// Extract a whole-number axis word ("X385") from a command line, ignoring
/// anything in the trailing comment.
fn word_value(line: &str, axis: char) -> Option<f64> {
    let command = line.split(';').next().unwrap_or("");
    let re = Regex::new(&format!(r" {axis}(-?\d+)(?:\s|$)")).unwrap();
    re.captures(command)
        .and_then(|caps| caps[1].parse::<f64>().ok())
}

#[test]
fn every_distance_annotation_matches_the_commanded_move() {
    let catalog = TestCatalog::standard();
    let files = catalog.generate_all(&default_geometry()).unwrap();
    for file in &files {
        let mut replay = MotionReplay::new();
        let mut annotated = 0;
        for line in file.content.lines() {
            if let Some((documented, recomputed)) = replay.step(line) {
                annotated += 1;
                assert_eq!(
                    documented, recomputed,
                    "{}: annotation mismatch on line: {line}",
                    file.file_name
                );
            }
        }
        assert!(annotated >= 4, "{}: no annotated moves found", file.file_name);
    }
}

#[test]
fn every_document_ends_where_its_motion_started() {
    let catalog = TestCatalog::standard();
    let files = catalog.generate_all(&default_geometry()).unwrap();
    for file in &files {
        let mut replay = MotionReplay::new();
        let mut first = None;
        let mut last = None;
        for line in file.content.lines() {
            // Track only command lines; G28 at the end clears the position,
            // so remember the last known coordinate before it.
            replay.step(line);
            if let Some(pos) = replay.position {
                first.get_or_insert(pos);
                last = Some(pos);
            }
        }
        assert_eq!(
            first, last,
            "{}: motion does not return to its starting point",
            file.file_name
        );
    }
}

#[test]
fn generation_is_deterministic() {
    let catalog = TestCatalog::standard();
    let g = default_geometry();
    let first = catalog.generate_all(&g).unwrap();
    let second = catalog.generate_all(&g).unwrap();
    assert_eq!(first, second);
}

#[test]
fn documents_never_command_outside_usable_bounds() {
    for envelope in [
        TravelEnvelope::default(),
        TravelEnvelope::new(300.0, 400.0, 80.0),
        TravelEnvelope::with_margin(900.0, 700.0, 150.0, 40.0),
    ] {
        let g = DerivedGeometry::from_envelope(&envelope).unwrap();
        let files = TestCatalog::standard().generate_all(&g).unwrap();
        for file in &files {
            for line in file.content.lines() {
                if !(line.starts_with("G0 ") || line.starts_with("G1 ")) {
                    continue;
                }
                if let Some(x) = word_value(line, 'X') {
                    assert!(
                        x >= g.x.min - 0.5 && x <= g.x.max + 0.5,
                        "{}: X{x} outside usable bounds on: {line}",
                        file.file_name
                    );
                }
                if let Some(y) = word_value(line, 'Y') {
                    assert!(
                        y >= g.y.min - 0.5 && y <= g.y.max + 0.5,
                        "{}: Y{y} outside usable bounds on: {line}",
                        file.file_name
                    );
                }
            }
        }
    }
}

#[test]
fn tight_envelope_fails_before_any_document_is_generated() {
    let envelope = TravelEnvelope::new(50.0, 50.0, 40.0);
    assert!(DerivedGeometry::from_envelope(&envelope).is_err());
}
