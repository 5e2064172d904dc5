//! G-code document assembly.
//!
//! [`DocumentBuilder`] produces the text of one test program: a comment
//! header, parameter directives, motion commands with aligned trailing
//! comments, and dwells. The builder tracks the commanded XY position so
//! that travel-distance annotations are always computed from the actual
//! coordinates rather than written by hand.
//!
//! The directive vocabulary (G0/G1/G4/G28 and the M205..M212 S-curve
//! parameter codes) is fixed protocol consumed literally by firmware and
//! operators; field mnemonics must not be altered.

use crate::geometry::DerivedGeometry;

/// Column where trailing comments start.
const COMMENT_COLUMN: usize = 20;

/// Round a coordinate to the whole-millimetre precision it is emitted at.
/// Ties round to even, matching `{:.0}` formatting, so the tracked position
/// is always exactly what the document commands.
fn round_mm(value: f64) -> f64 {
    value.round_ties_even()
}

/// Incremental builder for one G-code test document.
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    out: String,
    position: Option<(f64, f64)>,
}

impl DocumentBuilder {
    /// Create an empty document with no known position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit the standard header block: title, description and the envelope
    /// and usable-range summary, followed by a blank separator.
    pub fn header(&mut self, title: &str, description: &str, geometry: &DerivedGeometry) {
        self.comment(title);
        self.comment(description);
        self.comment(&format!(
            "Generated for travel envelope: {}",
            geometry.envelope
        ));
        self.comment(&format!(
            "Usable range: X{:.0}-{:.0}, Y{:.0}-{:.0}, Z{:.0}-{:.0}",
            geometry.x.min,
            geometry.x.max,
            geometry.y.min,
            geometry.y.max,
            geometry.z.min,
            geometry.z.max
        ));
        self.blank();
    }

    /// Emit a comment line.
    pub fn comment(&mut self, text: &str) {
        self.out.push_str("; ");
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Emit a blank separator line.
    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Emit a command, with its trailing comment aligned to a fixed column.
    pub fn command(&mut self, cmd: &str, comment: &str) {
        if comment.is_empty() {
            self.out.push_str(cmd);
        } else if cmd.len() < COMMENT_COLUMN {
            self.out
                .push_str(&format!("{cmd:<width$}; {comment}", width = COMMENT_COLUMN));
        } else {
            self.out.push_str(&format!("{}  ; {}", cmd, comment));
        }
        self.out.push('\n');
    }

    /// Home all axes. The tracked XY position becomes unknown until the next
    /// move that commands both coordinates.
    pub fn home(&mut self, comment: &str) {
        self.command("G28", comment);
        self.position = None;
    }

    /// Emit a rapid (G0) XY move and update the tracked position.
    pub fn rapid(&mut self, x: Option<f64>, y: Option<f64>, comment: &str) {
        let cmd = format!("G0{}", xy_words(x, y));
        self.command(&cmd, comment);
        self.update_position(x, y);
    }

    /// Emit a rapid (G0) Z move; XY tracking is unaffected.
    pub fn rapid_z(&mut self, z: f64, comment: &str) {
        self.command(&format!("G0 Z{z:.0}"), comment);
    }

    /// Emit a feed (G1) XY move and update the tracked position.
    pub fn feed(&mut self, x: Option<f64>, y: Option<f64>, feed: Option<f64>, comment: &str) {
        let cmd = match feed {
            Some(f) => format!("G1 F{f:.0}{}", xy_words(x, y)),
            None => format!("G1{}", xy_words(x, y)),
        };
        self.command(&cmd, comment);
        self.update_position(x, y);
    }

    /// Emit a feed move whose comment carries the travel distance computed
    /// from the tracked position, e.g. `Fast move in X (270mm)`.
    ///
    /// If the position is unknown (straight after homing) no distance can be
    /// computed and the label is emitted alone.
    pub fn feed_annotated(
        &mut self,
        x: Option<f64>,
        y: Option<f64>,
        feed: Option<f64>,
        label: &str,
    ) {
        let comment = match self.travel_to(x, y) {
            Some(distance) => format!("{label} ({distance:.0}mm)"),
            None => label.to_string(),
        };
        self.feed(x, y, feed, &comment);
    }

    /// Emit a feed (G1) Z move; XY tracking is unaffected.
    pub fn feed_z(&mut self, z: f64, feed: f64, comment: &str) {
        self.command(&format!("G1 Z{z:.1} F{feed:.0}"), comment);
    }

    /// Emit a dwell (G4) for the given number of seconds.
    pub fn dwell(&mut self, seconds: u32, comment: &str) {
        self.command(&format!("G4 P{seconds}"), comment);
    }

    /// Set XY and Z jerk (M205).
    pub fn jerk(&mut self, xy: f64, z: f64, comment: &str) {
        self.command(&format!("M205 X{xy:.0} Z{z:.0}"), comment);
    }

    /// Set advanced S-curve parameters (M206): profile multiplier, corner
    /// factor and optionally the enable flag.
    pub fn scurve_params(&mut self, multiplier: f64, corner: f64, enable: bool, comment: &str) {
        let cmd = if enable {
            format!("M206 P{multiplier:.1} Q{corner:.1} S1")
        } else {
            format!("M206 P{multiplier:.1} Q{corner:.1}")
        };
        self.command(&cmd, comment);
    }

    /// Set the S-curve profile multiplier alone (M206 P).
    pub fn scurve_multiplier(&mut self, multiplier: f64, comment: &str) {
        self.command(&format!("M206 P{multiplier:.1}"), comment);
    }

    /// Report current S-curve parameters (M207).
    pub fn report_settings(&mut self) {
        self.command("M207", "Report settings");
    }

    /// Reset S-curve parameters to firmware defaults (M208).
    pub fn reset_settings(&mut self, comment: &str) {
        self.command("M208", comment);
    }

    /// Junction velocity optimization settings (M210).
    pub fn junction(&mut self, feed_factor: f64, jerk_factor: f64, angle: f64, comment: &str) {
        self.command(
            &format!("M210 F{feed_factor:.1} J{jerk_factor:.1} A{angle:.0}"),
            comment,
        );
    }

    /// Path blending configuration (M211).
    pub fn blending(
        &mut self,
        tolerance: f64,
        radius: f64,
        velocity: f64,
        feed_factor: f64,
        lookahead: u32,
        comment: &str,
    ) {
        self.command(
            &format!("M211 S1 P{tolerance:.2} R{radius:.1} V{velocity:.0} F{feed_factor:.1} L{lookahead}"),
            comment,
        );
    }

    /// Positioning optimization settings (M212).
    pub fn positioning(&mut self, velocity: f64, accel_time: f64, decel_time: f64, comment: &str) {
        self.command(
            &format!("M212 V{velocity:.1} Q{accel_time:.1} D{decel_time:.1}"),
            comment,
        );
    }

    /// The last commanded XY position, if any move has established one.
    pub fn position(&self) -> Option<(f64, f64)> {
        self.position
    }

    /// Consume the builder and return the document text.
    pub fn finish(self) -> String {
        self.out
    }

    /// Distance from the tracked position to the given target, if known.
    /// Both ends use emitted (whole-mm) coordinates, so the annotation
    /// matches the motion the firmware will actually execute.
    fn travel_to(&self, x: Option<f64>, y: Option<f64>) -> Option<f64> {
        let (px, py) = self.position?;
        let nx = x.map(round_mm).unwrap_or(px);
        let ny = y.map(round_mm).unwrap_or(py);
        Some(((nx - px).powi(2) + (ny - py).powi(2)).sqrt())
    }

    fn update_position(&mut self, x: Option<f64>, y: Option<f64>) {
        let x = x.map(round_mm);
        let y = y.map(round_mm);
        match (self.position, x, y) {
            (_, Some(nx), Some(ny)) => self.position = Some((nx, ny)),
            (Some((px, py)), _, _) => {
                self.position = Some((x.unwrap_or(px), y.unwrap_or(py)));
            }
            // Partial move with no known starting point; stay unknown.
            (None, _, _) => {}
        }
    }
}

fn xy_words(x: Option<f64>, y: Option<f64>) -> String {
    let mut words = String::new();
    if let Some(x) = x {
        words.push_str(&format!(" X{x:.0}"));
    }
    if let Some(y) = y {
        words.push_str(&format!(" Y{y:.0}"));
    }
    words
}
