use super::PathSegment;
use crate::error::{Result, SmoothingError};
use crate::geometry::{normalize_angle, rotate};
use crate::special::{fresnel, three_point_curvature};
use glam::DVec2;
use std::f64::consts::PI;

/// Abstand der Stützpunkte zur Krümmungsmessung am Ende.
const END_STEP: f64 = 1e-4;
/// Länge der Hilfslinie aus `expand`.
const EXPANDED_LENGTH: f64 = 2.5;

/// Klothoide (Euler-Spirale): die Krümmung wächst linear mit der Bogenlänge.
///
/// Lokal ist die Kurve `s ↦ (S(s), C(s))` des normierten Fresnel-Integrals: sie
/// beginnt im Ursprung in Richtung +Y und erreicht nach der Länge `L` die Krümmung
/// `π·L`. `ccw` spiegelt die x-Achse (Linkskurve). Umgekehrt (`reversed`) wird die
/// Spirale vom krümmungsreichen Ende her durchlaufen, beginnt aber weiterhin bei
/// `start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClothoidPart {
    start: DVec2,
    length: f64,
    angle: f64,
    ccw: bool,
    reversed: bool,
    /// Lokaler Endpunkt `(S(L), C(L))` der Grundspirale
    end_delta: DVec2,
}

impl ClothoidPart {
    /// Erstellt eine Klothoide; negative Länge ist ungültig.
    pub fn new(start: DVec2, length: f64, angle: f64, ccw: bool, reversed: bool) -> Result<Self> {
        if length.is_nan() || length < 0.0 {
            return Err(SmoothingError::NegativeLength(length));
        }
        Ok(Self::with_length(start, length, angle, ccw, reversed))
    }

    fn with_length(start: DVec2, length: f64, angle: f64, ccw: bool, reversed: bool) -> Self {
        let f = fresnel(length);
        Self {
            start,
            length,
            angle,
            ccw,
            reversed,
            end_delta: DVec2::new(f.y, f.x),
        }
    }

    /// Klothoide ab `origin`, die am Ende die Krümmung `curvature` erreicht.
    ///
    /// Positive Krümmung ergibt eine Linkskurve.
    pub fn from_curvature(origin: DVec2, curvature: f64) -> Self {
        let length = curvature.abs() / PI;
        Self::with_length(origin, length, 0.0, curvature > 0.0, false)
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn is_ccw(&self) -> bool {
        self.ccw
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Vorzeichenbehaftete Krümmung am Ende, gemessen über drei Punkte.
    pub fn end_curvature(&self) -> f64 {
        three_point_curvature(
            self.point_at(self.length - END_STEP),
            self.point_at(self.length),
            self.point_at(self.length + END_STEP),
        )
    }

    /// Mittelpunkt des Schmiegekreises am Ende.
    pub fn osculating_center(&self) -> DVec2 {
        let before = self.point_at(self.length - END_STEP);
        let end = self.point_at(self.length);
        let after = self.point_at(self.length + END_STEP);
        let curvature = three_point_curvature(before, end, after);
        end + (after - before).perp().normalize() / curvature
    }

    /// Spiegelt die Drehrichtung.
    pub fn flip(&self) -> Self {
        Self {
            ccw: !self.ccw,
            ..*self
        }
    }

    /// Kehrt die Laufrichtung um.
    pub fn reverse(&self) -> Self {
        Self {
            reversed: !self.reversed,
            ..*self
        }
    }

    pub fn with_angle(&self, angle: f64) -> Self {
        Self {
            angle: normalize_angle(angle),
            ..*self
        }
    }

    pub fn with_start(&self, start: DVec2) -> Self {
        Self { start, ..*self }
    }

    /// Verschiebt die Klothoide so, dass ihr Ende auf `point` liegt.
    pub fn move_end_to(&self, point: DVec2) -> Self {
        self.shifted(point - self.end())
    }

    /// Verlängerte Spirale als Hilfslinie; umgekehrte bleiben am Ende verankert.
    pub fn expand(&self) -> Self {
        let expanded = Self::with_length(
            self.start,
            EXPANDED_LENGTH,
            self.angle,
            self.ccw,
            self.reversed,
        );
        if self.reversed {
            expanded.move_end_to(self.end())
        } else {
            expanded
        }
    }

    /// Punkte mit gleichem Bogenlängen-Abstand (höchstens `delta`), inklusive Ende.
    pub fn tabulate(&self, delta: f64) -> Result<Vec<DVec2>> {
        if delta.is_nan() || delta <= 0.0 {
            return Err(SmoothingError::NonPositiveDelta(delta));
        }
        let count = ((self.length / delta).ceil() as usize).max(1);
        let step = self.length / count as f64;
        Ok((0..=count)
            .map(|i| self.point_at(step * i as f64))
            .collect())
    }
}

impl PathSegment for ClothoidPart {
    fn start(&self) -> DVec2 {
        self.start
    }

    fn end(&self) -> DVec2 {
        self.point_at(self.length)
    }

    fn length(&self) -> f64 {
        self.length
    }

    fn shifted(&self, delta: DVec2) -> Self {
        Self {
            start: self.start + delta,
            ..*self
        }
    }

    fn rotated(&self, angle: f64) -> Self {
        Self {
            start: rotate(self.start, angle),
            angle: self.angle + angle,
            ..*self
        }
    }

    fn point_at(&self, position: f64) -> DVec2 {
        let p = if self.reversed {
            self.length - position
        } else {
            position
        };
        let f = fresnel(p);
        let mut local = DVec2::new(f.y, f.x);

        if self.reversed {
            local = DVec2::new(local.x - self.end_delta.x, self.end_delta.y - local.y);
        }
        if self.ccw {
            local.x = -local.x;
        }

        rotate(local, self.angle) + self.start
    }
}
