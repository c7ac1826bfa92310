//! Reine Ebenen-Geometrie auf `glam::DVec2`.
//!
//! Verschieben, Differenz, Vorzeichen-Umkehr und Abstand sind direkt die
//! glam-Operatoren (`p + delta`, `p - q`, `-p`, `p.distance(q)`). Hier liegen nur
//! die Operationen, die glam nicht in dieser Form anbietet.
//!
//! Fallen zwei Punkte zusammen, liefern die Winkel-Funktionen NaN. Aufrufer glätten nie
//! über identische Wegpunkte.

use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Dreht einen Punkt um den Ursprung (Radiant, gegen den Uhrzeigersinn).
pub fn rotate(point: DVec2, angle: f64) -> DVec2 {
    let (sin, cos) = angle.sin_cos();
    DVec2::new(point.x * cos - point.y * sin, point.x * sin + point.y * cos)
}

/// Dreht einen Punkt um `pivot`.
pub fn rotate_about(point: DVec2, pivot: DVec2, angle: f64) -> DVec2 {
    rotate(point - pivot, angle) + pivot
}

/// Winkel der Geraden durch `from` und `to`, gemessen gegen die senkrechte Achse.
///
/// Liegt `from` auf der +Y-Achse über dem Ursprung, ist das Ergebnis der Winkel
/// zwischen dem Strahl nach unten (zurück zum Ursprung) und dem Strahl `from → to`,
/// gegen den Uhrzeigersinn gemessen. Gerade Fortsetzung ergibt π,
/// Rechtskurven liegen in (0, π), Linkskurven außerhalb.
pub fn angle_between(from: DVec2, to: DVec2) -> f64 {
    let delta = to - from;
    let base = if delta.y >= 0.0 { PI } else { 0.0 };
    base - (delta.x / delta.y).atan()
}

/// Winkel, der die Strecke `from → to` auf die +Y-Achse dreht.
pub fn normalization_angle(from: DVec2, to: DVec2) -> f64 {
    let delta = to - from;
    FRAC_PI_2 - delta.y.atan2(delta.x)
}

/// Reduziert einen Winkel auf `[0, 2π)`.
pub fn normalize_angle(radians: f64) -> f64 {
    radians.rem_euclid(TAU)
}
