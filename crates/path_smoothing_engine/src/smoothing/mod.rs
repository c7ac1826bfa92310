//! Eck-Glättung: Ergebnis-Typen, die drei Verfahren und die Pfad-Verkettung.
//!
//! Jedes Verfahren nimmt drei aufeinanderfolgende Wegpunkte und liefert eine
//! `Smoothing`: Eingangsstrecke, Ausgangsstrecke und die Kurven dazwischen.
//! `join_smoothings` setzt die Ergebnisse aller Ecken zu einem Pfad zusammen.

mod arc_fillet;
mod corner;
mod join;
mod transition_blend;

pub use arc_fillet::smooth_c1_arc;
pub use join::join_smoothings;
pub use transition_blend::{smooth_c2_clothoid, smooth_c2_cubic};

use crate::error::{Result, SmoothingError};
use crate::parts::{ArcPart, LinePart, PathPart, PathSegment};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Glättungs-Verfahren
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SmoothingMode {
    /// Kreisbogen (Tangente stetig)
    C1Arc,
    /// Kubische Parabel / Bogen / kubische Parabel (Krümmung stetig)
    C2Cubic,
    /// Klothoide / Bogen / Klothoide (Krümmung stetig)
    #[default]
    C2Clothoid,
}

impl SmoothingMode {
    pub const ALL: [SmoothingMode; 3] = [
        SmoothingMode::C1Arc,
        SmoothingMode::C2Cubic,
        SmoothingMode::C2Clothoid,
    ];
}

impl fmt::Display for SmoothingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SmoothingMode::C1Arc => "C1 Kreisbogen",
            SmoothingMode::C2Cubic => "C2 kubische Parabel",
            SmoothingMode::C2Clothoid => "C2 Klothoide",
        };
        f.write_str(label)
    }
}

/// Keine Glättung: beide Strecken treffen sich genau im Eckpunkt.
#[derive(Debug, Clone, PartialEq)]
pub struct NoSmoothing {
    pub line1: LinePart,
    pub line2: LinePart,
}

impl NoSmoothing {
    pub fn new(p1: DVec2, p2: DVec2, p3: DVec2) -> Self {
        Self {
            line1: LinePart::new(p1, p2),
            line2: LinePart::new(p2, p3),
        }
    }
}

/// Strecke, Kreisbogen, Strecke.
#[derive(Debug, Clone, PartialEq)]
pub struct C1Smoothing {
    pub line1: LinePart,
    pub arc: ArcPart,
    pub line2: LinePart,
}

impl C1Smoothing {
    pub fn shifted(&self, delta: DVec2) -> Self {
        Self {
            line1: self.line1.shifted(delta),
            arc: self.arc.shifted(delta),
            line2: self.line2.shifted(delta),
        }
    }

    pub fn rotated(&self, angle: f64) -> Self {
        Self {
            line1: self.line1.rotated(angle),
            arc: self.arc.rotated(angle),
            line2: self.line2.rotated(angle),
        }
    }
}

/// Strecke, Übergangsbogen, Kreisbogen, Übergangsbogen, Strecke.
#[derive(Debug, Clone, PartialEq)]
pub struct C2Smoothing {
    pub line1: LinePart,
    pub transition1: PathPart,
    pub arc: ArcPart,
    pub transition2: PathPart,
    pub line2: LinePart,
}

impl C2Smoothing {
    pub fn shifted(&self, delta: DVec2) -> Self {
        Self {
            line1: self.line1.shifted(delta),
            transition1: self.transition1.shifted(delta),
            arc: self.arc.shifted(delta),
            transition2: self.transition2.shifted(delta),
            line2: self.line2.shifted(delta),
        }
    }

    pub fn rotated(&self, angle: f64) -> Self {
        Self {
            line1: self.line1.rotated(angle),
            transition1: self.transition1.rotated(angle),
            arc: self.arc.rotated(angle),
            transition2: self.transition2.rotated(angle),
            line2: self.line2.rotated(angle),
        }
    }
}

/// Ergebnis der Glättung einer Ecke.
#[derive(Debug, Clone, PartialEq)]
pub enum Smoothing {
    None(NoSmoothing),
    C1(C1Smoothing),
    C2(C2Smoothing),
}

impl Smoothing {
    /// Eingangsstrecke (endet am ersten Berührpunkt bzw. am Eckpunkt)
    pub fn line1(&self) -> &LinePart {
        match self {
            Smoothing::None(s) => &s.line1,
            Smoothing::C1(s) => &s.line1,
            Smoothing::C2(s) => &s.line1,
        }
    }

    /// Ausgangsstrecke
    pub fn line2(&self) -> &LinePart {
        match self {
            Smoothing::None(s) => &s.line2,
            Smoothing::C1(s) => &s.line2,
            Smoothing::C2(s) => &s.line2,
        }
    }

    /// Die Kurven zwischen den beiden Strecken, in Laufrichtung.
    pub fn inner_parts(&self) -> Vec<PathPart> {
        match self {
            Smoothing::None(_) => Vec::new(),
            Smoothing::C1(s) => vec![s.arc.into()],
            Smoothing::C2(s) => vec![s.transition1.clone(), s.arc.into(), s.transition2.clone()],
        }
    }

    /// `[line1, inner…, line2]`
    pub fn parts(&self) -> Vec<PathPart> {
        let mut parts = Vec::with_capacity(5);
        parts.push((*self.line1()).into());
        parts.extend(self.inner_parts());
        parts.push((*self.line2()).into());
        parts
    }

    pub fn shifted(&self, delta: DVec2) -> Self {
        match self {
            Smoothing::None(s) => Smoothing::None(NoSmoothing {
                line1: s.line1.shifted(delta),
                line2: s.line2.shifted(delta),
            }),
            Smoothing::C1(s) => Smoothing::C1(s.shifted(delta)),
            Smoothing::C2(s) => Smoothing::C2(s.shifted(delta)),
        }
    }

    pub fn rotated(&self, angle: f64) -> Self {
        match self {
            Smoothing::None(s) => Smoothing::None(NoSmoothing {
                line1: s.line1.rotated(angle),
                line2: s.line2.rotated(angle),
            }),
            Smoothing::C1(s) => Smoothing::C1(s.rotated(angle)),
            Smoothing::C2(s) => Smoothing::C2(s.rotated(angle)),
        }
    }

    pub fn is_smoothed(&self) -> bool {
        !matches!(self, Smoothing::None(_))
    }
}

/// Prüft den Glättungsfaktor auf `[0, 1]` (NaN ist ungültig).
pub(crate) fn check_factor(factor: f64) -> Result<()> {
    if (0.0..=1.0).contains(&factor) {
        Ok(())
    } else {
        Err(SmoothingError::SmoothingFactorOutOfRange(factor))
    }
}

/// Glättet die Ecke `p2` mit dem gewählten Verfahren.
pub fn smooth(mode: SmoothingMode, p1: DVec2, p2: DVec2, p3: DVec2, factor: f64) -> Result<Smoothing> {
    check_factor(factor)?;
    match mode {
        SmoothingMode::C1Arc => smooth_c1_arc(p1, p2, p3, factor),
        SmoothingMode::C2Cubic => smooth_c2_cubic(p1, p2, p3, factor),
        SmoothingMode::C2Clothoid => smooth_c2_clothoid(p1, p2, p3, factor),
    }
}

/// Glättet alle Ecken eines Wegpunkt-Zugs und verkettet die Ergebnisse.
///
/// Direkt aufeinanderfolgende identische Wegpunkte werden verworfen. Weniger als
/// zwei Punkte ergeben einen leeren Pfad, genau zwei eine einzelne Strecke.
pub fn smooth_path(waypoints: &[DVec2], mode: SmoothingMode, factor: f64) -> Result<Vec<PathPart>> {
    check_factor(factor)?;

    let mut points: Vec<DVec2> = Vec::with_capacity(waypoints.len());
    for &point in waypoints {
        if points.last() == Some(&point) {
            log::debug!("Doppelter Wegpunkt {point} verworfen");
            continue;
        }
        points.push(point);
    }

    match points.as_slice() {
        [] | [_] => Ok(Vec::new()),
        [a, b] => Ok(vec![LinePart::new(*a, *b).into()]),
        _ => {
            let smoothings = points
                .windows(3)
                .map(|w| smooth(mode, w[0], w[1], w[2], factor))
                .collect::<Result<Vec<_>>>()?;
            let smoothed = smoothings.iter().filter(|s| s.is_smoothed()).count();
            log::debug!(
                "{mode}: {smoothed} von {} Ecken geglättet",
                smoothings.len()
            );
            Ok(join_smoothings(&smoothings))
        }
    }
}

#[cfg(test)]
mod tests;
