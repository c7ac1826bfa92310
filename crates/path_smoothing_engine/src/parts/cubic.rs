use super::PathSegment;
use crate::error::{Result, SmoothingError};
use crate::geometry::{normalize_angle, rotate};
use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Anzahl der Intervalle der Bogenlängen-Tabelle.
const TABLE_INTERVALS: usize = 10_000;
/// Maximale Korrekturschritte in `from_radius`.
const MAX_RADIUS_CORRECTIONS: usize = 10_000;
/// Faktor, um den K pro Korrekturschritt wächst.
const RADIUS_CORRECTION_FACTOR: f64 = 1.01;
/// Zulässige Abweichung des erreichten Krümmungsradius nach oben.
const RADIUS_TOLERANCE: f64 = 1.1;
/// Faktor, um den `extend` die Ausdehnung vergrößert.
const EXTEND_FACTOR: f64 = 10.0;

/// Stützstelle der Tabelle: (Bogenlänge ab Start, lokaler Punkt).
type TableEntry = (f64, DVec2);

/// Kubische Parabel `y = K·x³` über `x ∈ [0, width]`.
///
/// Lokal beginnt die Kurve im Ursprung; in der Ebene liegt sie bei `start`, um
/// `angle` gedreht. Umgekehrt (`reversed`) verläuft sie als
/// `y = K·w³ − K·(w − x)³`: gleiche Endpunkte, aber die Krümmung fällt vom Start zum
/// Ende ab statt anzusteigen.
///
/// Die Bogenlänge hat keine geschlossene Form. Beim ersten Zugriff wird eine Tabelle
/// mit 10 000 Intervallen in lokalen Koordinaten aufgebaut und eingefroren. Starrkörper-
/// Bewegungen übernehmen die Tabelle, Form-Änderungen (Breite, K, Richtung) nicht.
#[derive(Clone)]
pub struct CubicPart {
    start: DVec2,
    width: f64,
    angle: f64,
    reversed: bool,
    k: f64,
    table: OnceLock<Arc<[TableEntry]>>,
}

impl CubicPart {
    /// Erstellt eine Parabel; `width < 0` und `k == 0` sind ungültig.
    pub fn new(start: DVec2, width: f64, angle: f64, reversed: bool, k: f64) -> Result<Self> {
        if width.is_nan() || width < 0.0 {
            return Err(SmoothingError::NegativeWidth(width));
        }
        if k == 0.0 {
            return Err(SmoothingError::ZeroShapeCoefficient);
        }
        Ok(Self::with_shape(start, width, angle, reversed, k))
    }

    fn with_shape(start: DVec2, width: f64, angle: f64, reversed: bool, k: f64) -> Self {
        Self {
            start,
            width,
            angle,
            reversed,
            k,
            table: OnceLock::new(),
        }
    }

    /// Parabel ab Ursprung, deren Endkrümmung `1/radius` erreicht.
    ///
    /// Die Breite folgt aus der Näherung `w = 1 / (6·R·|k|)`. Liegt der tatsächliche
    /// Krümmungsradius am Ende mehr als 10 % darüber, wird `k` um 1 % erhöht und neu
    /// gerechnet, höchstens `MAX_RADIUS_CORRECTIONS` Mal.
    pub fn from_radius(radius: f64, k: f64) -> Result<Self> {
        if radius.is_nan() || radius <= 0.0 {
            return Err(SmoothingError::NonPositiveRadius(radius));
        }

        let mut k = k;
        let mut reached = f64::NAN;
        for iteration in 0..MAX_RADIUS_CORRECTIONS {
            let width = 1.0 / (radius * k.abs() * 6.0);
            let part = Self::new(DVec2::ZERO, width, 0.0, false, k)?;
            reached = part.osculating_center().y.abs();
            if reached <= radius * RADIUS_TOLERANCE {
                if iteration > 0 {
                    log::debug!(
                        "Kubische Parabel für Radius {radius}: {iteration} Korrekturschritte (K = {k})"
                    );
                }
                return Ok(part);
            }
            k *= RADIUS_CORRECTION_FACTOR;
        }

        log::warn!(
            "Kubische Parabel: Radius {radius} nach {MAX_RADIUS_CORRECTIONS} Schritten nicht erreicht (zuletzt {reached})"
        );
        Err(SmoothingError::RadiusNotConverged {
            radius,
            reached,
            iterations: MAX_RADIUS_CORRECTIONS,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Form-Koeffizient K
    pub fn k(&self) -> f64 {
        self.k
    }

    fn cubic(&self, x: f64) -> f64 {
        self.k * x * x * x
    }

    /// Lokaler Kurvenpunkt über `x` (berücksichtigt die Richtung).
    fn local_point(&self, x: f64) -> DVec2 {
        if self.reversed {
            DVec2::new(x, self.cubic(self.width) - self.cubic(self.width - x))
        } else {
            DVec2::new(x, self.cubic(x))
        }
    }

    fn to_world(&self, local: DVec2) -> DVec2 {
        rotate(local, self.angle) + self.start
    }

    /// Mittelpunkt des Schmiegekreises im Punkt `(w, K·w³)` der Grundparabel.
    pub fn osculating_center(&self) -> DVec2 {
        let x = self.width;
        let k2x4 = self.k * self.k * x.powi(4);
        let center = DVec2::new(
            x * (1.0 - 9.0 * k2x4) / 2.0,
            (15.0 * k2x4 + 1.0) / (6.0 * self.k * x),
        );
        self.to_world(center)
    }

    /// Tatsächlicher Krümmungsradius `(1 + y'²)^{3/2} / |y''|` bei `x = w`.
    pub fn end_curvature_radius(&self) -> f64 {
        let x = self.width;
        let slope = 3.0 * self.k * x * x;
        (1.0 + slope * slope).powf(1.5) / (6.0 * self.k.abs() * x)
    }

    /// Spiegelung an der Geraden `y = x`: 90° weiter drehen und K negieren.
    pub fn flip(&self) -> Self {
        Self::with_shape(
            self.start,
            self.width,
            normalize_angle(self.angle + FRAC_PI_2),
            self.reversed,
            -self.k,
        )
    }

    /// Kehrt die Laufrichtung um (Start und Ende bleiben).
    pub fn reverse(&self) -> Self {
        Self::with_shape(self.start, self.width, self.angle, !self.reversed, self.k)
    }

    pub fn with_angle(&self, angle: f64) -> Self {
        Self {
            angle: normalize_angle(angle),
            ..self.clone()
        }
    }

    pub fn with_start(&self, start: DVec2) -> Self {
        Self {
            start,
            ..self.clone()
        }
    }

    /// Verschiebt die Parabel so, dass ihr Ende auf `point` liegt.
    pub fn move_end_to(&self, point: DVec2) -> Self {
        self.shifted(point - self.end())
    }

    /// Zehnfache Ausdehnung als Hilfslinie; umgekehrte Parabeln bleiben am Ende verankert.
    pub fn extend(&self) -> Self {
        let extended = Self::with_shape(
            self.start,
            self.width * EXTEND_FACTOR,
            self.angle,
            self.reversed,
            self.k,
        );
        if self.reversed {
            extended.move_end_to(self.end())
        } else {
            extended
        }
    }

    /// Punktspiegelung am Startpunkt (bzw. am Ende, wenn umgekehrt).
    ///
    /// Liefert die Fortsetzung der Parabel auf der anderen Seite des Übergangs.
    pub fn rotate180(&self) -> Self {
        let turned = Self {
            start: DVec2::ZERO,
            angle: self.angle + PI,
            ..self.clone()
        };
        if self.reversed {
            turned.move_end_to(self.end())
        } else {
            turned.shifted(self.start)
        }
    }

    /// Punkte mit gleichem x-Abstand (höchstens `delta`), inklusive Ende.
    pub fn tabulate(&self, delta: f64) -> Result<Vec<DVec2>> {
        if delta.is_nan() || delta <= 0.0 {
            return Err(SmoothingError::NonPositiveDelta(delta));
        }
        let count = ((self.width / delta).ceil() as usize).max(1);
        let step = self.width / count as f64;
        Ok((0..=count)
            .map(|i| self.to_world(self.local_point(step * i as f64)))
            .collect())
    }

    fn table(&self) -> &[TableEntry] {
        self.table.get_or_init(|| {
            let step = self.width / TABLE_INTERVALS as f64;
            let mut entries = Vec::with_capacity(TABLE_INTERVALS + 1);
            let mut previous = self.local_point(0.0);
            let mut position = 0.0;
            entries.push((position, previous));
            for i in 1..=TABLE_INTERVALS {
                let point = self.local_point(step * i as f64);
                position += previous.distance(point);
                entries.push((position, point));
                previous = point;
            }
            entries.into()
        })
    }
}

impl PathSegment for CubicPart {
    fn start(&self) -> DVec2 {
        self.start
    }

    fn end(&self) -> DVec2 {
        self.to_world(DVec2::new(self.width, self.cubic(self.width)))
    }

    fn length(&self) -> f64 {
        self.table().last().map_or(0.0, |&(position, _)| position)
    }

    fn shifted(&self, delta: DVec2) -> Self {
        Self {
            start: self.start + delta,
            ..self.clone()
        }
    }

    fn rotated(&self, angle: f64) -> Self {
        Self {
            start: rotate(self.start, angle),
            angle: self.angle + angle,
            ..self.clone()
        }
    }

    /// Erste Stützstelle mit Bogenlänge ≥ `position`, linear zur vorherigen interpoliert.
    fn point_at(&self, position: f64) -> DVec2 {
        let table = self.table();
        let last = table.len() - 1;
        let idx = table
            .partition_point(|&(len, _)| len < position)
            .min(last)
            .max(1);

        let (len_before, before) = table[idx - 1];
        let (len_after, after) = table[idx];
        let frac = if len_after - len_before > f64::EPSILON {
            ((position - len_before) / (len_after - len_before)).clamp(0.0, 1.0)
        } else {
            1.0
        };
        self.to_world(before.lerp(after, frac))
    }
}

impl PartialEq for CubicPart {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.width == other.width
            && self.angle == other.angle
            && self.reversed == other.reversed
            && self.k == other.k
    }
}

impl fmt::Debug for CubicPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CubicPart")
            .field("start", &self.start)
            .field("width", &self.width)
            .field("angle", &self.angle)
            .field("reversed", &self.reversed)
            .field("k", &self.k)
            .finish_non_exhaustive()
    }
}
