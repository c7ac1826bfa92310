use super::PathSegment;
use crate::geometry::{rotate, rotate_about};
use glam::DVec2;

/// Kreisbogen von `start` nach `end` um `center`.
///
/// `ccw` legt die Laufrichtung fest (gegen den Uhrzeigersinn = Linkskurve). Der
/// Öffnungswinkel wird aus der Sehne bestimmt und ist damit auf `[0, π]` beschränkt;
/// Ausrundungen erzeugen nie überstumpfe Bögen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPart {
    pub center: DVec2,
    pub start: DVec2,
    pub end: DVec2,
    pub ccw: bool,
}

impl ArcPart {
    pub fn new(center: DVec2, start: DVec2, end: DVec2, ccw: bool) -> Self {
        Self {
            center,
            start,
            end,
            ccw,
        }
    }

    /// Radius (Abstand Mittelpunkt-Start)
    pub fn radius(&self) -> f64 {
        self.center.distance(self.start)
    }

    /// Öffnungswinkel `2·asin(s / 2r)` aus der Sehnenlänge `s`.
    pub fn angle(&self) -> f64 {
        let radius = self.radius();
        if radius == 0.0 {
            return 0.0;
        }
        let half_chord = self.start.distance(self.end) / (2.0 * radius);
        2.0 * half_chord.min(1.0).asin()
    }

    /// Öffnungswinkel mit Vorzeichen der Laufrichtung.
    pub fn signed_angle(&self) -> f64 {
        if self.ccw { self.angle() } else { -self.angle() }
    }

    /// Vorzeichenbehaftete Krümmung: `+1/r` links herum, `−1/r` rechts herum.
    pub fn signed_curvature(&self) -> f64 {
        let radius = self.radius();
        if radius == 0.0 {
            return 0.0;
        }
        if self.ccw { 1.0 / radius } else { -1.0 / radius }
    }

    /// `steps + 1` gleichmäßig verteilte Punkte von Start bis Ende.
    pub fn sample(&self, steps: usize) -> Vec<DVec2> {
        let steps = steps.max(1);
        let signed_angle = self.signed_angle();
        (0..=steps)
            .map(|i| {
                let fraction = i as f64 / steps as f64;
                rotate_about(self.start, self.center, fraction * signed_angle)
            })
            .collect()
    }
}

impl PathSegment for ArcPart {
    fn start(&self) -> DVec2 {
        self.start
    }

    fn end(&self) -> DVec2 {
        self.end
    }

    fn length(&self) -> f64 {
        self.angle() * self.radius()
    }

    fn shifted(&self, delta: DVec2) -> Self {
        Self::new(
            self.center + delta,
            self.start + delta,
            self.end + delta,
            self.ccw,
        )
    }

    fn rotated(&self, angle: f64) -> Self {
        Self::new(
            rotate(self.center, angle),
            rotate(self.start, angle),
            rotate(self.end, angle),
            self.ccw,
        )
    }

    fn point_at(&self, position: f64) -> DVec2 {
        let length = self.length();
        if length == 0.0 {
            return self.start;
        }
        rotate_about(
            self.start,
            self.center,
            position / length * self.signed_angle(),
        )
    }

    fn curvature_at(&self, _position: f64) -> f64 {
        self.signed_curvature()
    }
}
