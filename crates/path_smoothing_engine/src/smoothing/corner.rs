//! Normalisierte Ecke: gemeinsame Vorarbeit aller drei Verfahren.

use super::{check_factor, NoSmoothing, Smoothing};
use crate::error::Result;
use crate::geometry::{angle_between, normalization_angle, rotate};
use glam::DVec2;

/// Ecke `p2` in normalisierter Lage: `p1` im Ursprung, `p1 → p2` zeigt nach +Y.
pub(super) struct Corner {
    /// Ursprüngliche Wegpunkte
    world: [DVec2; 3],
    /// Drehwinkel der Normalisierung
    psi: f64,
    /// `p2` normalisiert (liegt auf der +Y-Achse)
    pub p2: DVec2,
    /// `p3` normalisiert
    pub p3: DVec2,
    /// Winkel zwischen den Strecken (π = gerade Fortsetzung)
    pub angle: f64,
    /// Halbe kürzere Streckenlänge, mit dem Glättungsfaktor skaliert
    pub half_chord: f64,
}

impl Corner {
    pub fn new(p1: DVec2, p2: DVec2, p3: DVec2, factor: f64) -> Result<Self> {
        check_factor(factor)?;

        let psi = normalization_angle(p1, p2);
        let p2n = rotate(p2 - p1, psi);
        let p3n = rotate(p3 - p1, psi);
        let half_chord = factor * p1.distance(p2).min(p2.distance(p3)) / 2.0;

        Ok(Self {
            world: [p1, p2, p3],
            psi,
            p2: p2n,
            p3: p3n,
            angle: angle_between(p2n, p3n),
            half_chord,
        })
    }

    pub fn half_angle(&self) -> f64 {
        self.angle / 2.0
    }

    /// Die beiden Original-Strecken, ungeglättet.
    pub fn unsmoothed(&self) -> Smoothing {
        let [p1, p2, p3] = self.world;
        Smoothing::None(NoSmoothing::new(p1, p2, p3))
    }

    /// Bringt ein in normalisierter Lage gebautes Ergebnis zurück.
    pub fn to_world(&self, smoothing: Smoothing) -> Smoothing {
        smoothing.rotated(-self.psi).shifted(self.world[0])
    }
}
