//! Pfad-Teile: Strecke, Kreisbogen, kubische Parabel und Klothoide.
//!
//! Alle Varianten erfüllen denselben Vertrag (`PathSegment`): Start, Ende, Länge,
//! Verschieben, Drehen und Punkt nach Bogenlänge. `PathPart` ist die geschlossene
//! Summe über die vier Varianten und wird überall exhaustiv behandelt
//! (Verkettung, Tabellierung, Anzeige).
//!
//! Aufgeteilt in:
//! - `line`: Strecke
//! - `arc`: Kreisbogen
//! - `cubic`: kubische Parabel `y = K·x³` mit Bogenlängen-Tabelle
//! - `clothoid`: Klothoide über das Fresnel-Integral
//! - `sequence`: Operationen über Folgen von Pfad-Teilen

mod arc;
mod clothoid;
mod cubic;
mod line;
mod sequence;

pub use arc::ArcPart;
pub use clothoid::ClothoidPart;
pub use cubic::CubicPart;
pub use line::LinePart;
pub use sequence::{find_position, tabulate, total_length, PathSample};

use crate::special::{curvature_or_zero, three_point_curvature};
use glam::DVec2;

/// Abstand der Stützpunkte für die numerische Krümmung entlang eines Teils.
pub const CURVATURE_STEP: f64 = 1e-3;

/// Gemeinsamer geometrischer Vertrag aller Pfad-Teile.
///
/// `shifted`/`rotated` sind Starrkörper-Bewegungen: `point_at` auf dem bewegten Teil
/// entspricht der Bewegung von `point_at` auf dem Original. Gedreht wird immer um den
/// Ursprung.
pub trait PathSegment {
    /// Startpunkt
    fn start(&self) -> DVec2;

    /// Endpunkt
    fn end(&self) -> DVec2;

    /// Bogenlänge (≥ 0)
    fn length(&self) -> f64;

    /// Kopie, um `delta` verschoben
    fn shifted(&self, delta: DVec2) -> Self
    where
        Self: Sized;

    /// Kopie, um den Ursprung gedreht
    fn rotated(&self, angle: f64) -> Self
    where
        Self: Sized;

    /// Punkt im Abstand `position` (Bogenlänge) vom Start.
    fn point_at(&self, position: f64) -> DVec2;

    /// Vorzeichenbehaftete Krümmung bei `position` (Linkskurve positiv).
    ///
    /// Standard: Drei-Punkte-Krümmung mit Abstand `CURVATURE_STEP`, in den Teil
    /// hinein verschoben, wenn `position` zu nah am Rand liegt.
    fn curvature_at(&self, position: f64) -> f64 {
        let length = self.length();
        let step = CURVATURE_STEP.min(length / 2.0);
        if step.is_nan() || step <= 0.0 {
            return 0.0;
        }
        let center = position.clamp(step, length - step);
        curvature_or_zero(three_point_curvature(
            self.point_at(center - step),
            self.point_at(center),
            self.point_at(center + step),
        ))
    }
}

/// Ein Teil eines geglätteten Pfads.
#[derive(Debug, Clone, PartialEq)]
pub enum PathPart {
    Line(LinePart),
    Arc(ArcPart),
    Cubic(CubicPart),
    Clothoid(ClothoidPart),
}

impl PathPart {
    /// Kurzname der Variante (Anzeige, Report).
    pub fn kind(&self) -> &'static str {
        match self {
            PathPart::Line(_) => "line",
            PathPart::Arc(_) => "arc",
            PathPart::Cubic(_) => "cubic",
            PathPart::Clothoid(_) => "clothoid",
        }
    }

    /// Gibt die Strecke zurück, falls das Teil eine ist.
    pub fn as_line(&self) -> Option<&LinePart> {
        match self {
            PathPart::Line(line) => Some(line),
            _ => None,
        }
    }
}

impl PathSegment for PathPart {
    fn start(&self) -> DVec2 {
        match self {
            PathPart::Line(p) => p.start(),
            PathPart::Arc(p) => p.start(),
            PathPart::Cubic(p) => p.start(),
            PathPart::Clothoid(p) => p.start(),
        }
    }

    fn end(&self) -> DVec2 {
        match self {
            PathPart::Line(p) => p.end(),
            PathPart::Arc(p) => p.end(),
            PathPart::Cubic(p) => p.end(),
            PathPart::Clothoid(p) => p.end(),
        }
    }

    fn length(&self) -> f64 {
        match self {
            PathPart::Line(p) => p.length(),
            PathPart::Arc(p) => p.length(),
            PathPart::Cubic(p) => p.length(),
            PathPart::Clothoid(p) => p.length(),
        }
    }

    fn shifted(&self, delta: DVec2) -> Self {
        match self {
            PathPart::Line(p) => PathPart::Line(p.shifted(delta)),
            PathPart::Arc(p) => PathPart::Arc(p.shifted(delta)),
            PathPart::Cubic(p) => PathPart::Cubic(p.shifted(delta)),
            PathPart::Clothoid(p) => PathPart::Clothoid(p.shifted(delta)),
        }
    }

    fn rotated(&self, angle: f64) -> Self {
        match self {
            PathPart::Line(p) => PathPart::Line(p.rotated(angle)),
            PathPart::Arc(p) => PathPart::Arc(p.rotated(angle)),
            PathPart::Cubic(p) => PathPart::Cubic(p.rotated(angle)),
            PathPart::Clothoid(p) => PathPart::Clothoid(p.rotated(angle)),
        }
    }

    fn point_at(&self, position: f64) -> DVec2 {
        match self {
            PathPart::Line(p) => p.point_at(position),
            PathPart::Arc(p) => p.point_at(position),
            PathPart::Cubic(p) => p.point_at(position),
            PathPart::Clothoid(p) => p.point_at(position),
        }
    }

    fn curvature_at(&self, position: f64) -> f64 {
        match self {
            PathPart::Line(p) => p.curvature_at(position),
            PathPart::Arc(p) => p.curvature_at(position),
            PathPart::Cubic(p) => p.curvature_at(position),
            PathPart::Clothoid(p) => p.curvature_at(position),
        }
    }
}

impl From<LinePart> for PathPart {
    fn from(part: LinePart) -> Self {
        PathPart::Line(part)
    }
}

impl From<ArcPart> for PathPart {
    fn from(part: ArcPart) -> Self {
        PathPart::Arc(part)
    }
}

impl From<CubicPart> for PathPart {
    fn from(part: CubicPart) -> Self {
        PathPart::Cubic(part)
    }
}

impl From<ClothoidPart> for PathPart {
    fn from(part: ClothoidPart) -> Self {
        PathPart::Clothoid(part)
    }
}
