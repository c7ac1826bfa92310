//! Abbildung Welt ↔ Bildschirm (y nach unten, Ursprung verschoben).

use anyhow::{ensure, Result};
use glam::DVec2;

/// Zoom und Verschiebung der Zeichenfläche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTransform {
    /// Pixel pro Welteinheit
    pub zoom: f64,
    /// Bildschirm-Position des Welt-Ursprungs
    pub shift: DVec2,
}

impl ScreenTransform {
    pub fn new(zoom: f64, shift: DVec2) -> Result<Self> {
        ensure!(zoom.is_finite() && zoom != 0.0, "Zoom-Faktor {} ist ungueltig", zoom);
        Ok(Self { zoom, shift })
    }

    /// `(x·zoom, −y·zoom) + shift`
    pub fn to_screen(&self, world: DVec2) -> DVec2 {
        DVec2::new(world.x * self.zoom, -world.y * self.zoom) + self.shift
    }

    /// Umkehrung von [`Self::to_screen`].
    pub fn to_world(&self, screen: DVec2) -> DVec2 {
        let local = screen - self.shift;
        DVec2::new(local.x / self.zoom, -local.y / self.zoom)
    }

    /// Länge in Welteinheiten → Pixel.
    pub fn scale_length(&self, length: f64) -> f64 {
        length * self.zoom.abs()
    }

    pub fn to_screen_all(&self, points: &[DVec2]) -> Vec<DVec2> {
        points.iter().map(|&p| self.to_screen(p)).collect()
    }
}
