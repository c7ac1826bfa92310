//! C2-Glättung: Übergangsbogen, Kreisbogen, Übergangsbogen.
//!
//! Beide Verfahren bauen den ersten Übergangsbogen im Ursprung auf, heben ihn samt
//! Schmiegekreis an, bis der Kreismittelpunkt auf der Winkelhalbierenden liegt, und
//! leiten den zweiten Übergangsbogen spiegelbildlich daraus ab.

use super::corner::Corner;
use super::{C2Smoothing, Smoothing};
use crate::error::{Result, SmoothingError};
use crate::geometry::rotate_about;
use crate::parts::{ArcPart, ClothoidPart, CubicPart, LinePart, PathPart, PathSegment};
use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, PI};

/// Form-Koeffizient der kubischen Parabel bei Glättungsfaktor 0 …
const K_AT_ZERO: f64 = 20.0;
/// … und bei Glättungsfaktor 1.
const K_AT_ONE: f64 = 0.2;

/// Kreis der Ecke in normalisierter Lage.
struct Fillet {
    /// x-Koordinate des Kreismittelpunkts (negativ = Linkskurve)
    center_x: f64,
    ccw: bool,
    radius: f64,
}

impl Fillet {
    fn of(corner: &Corner) -> Self {
        let center_x = corner.half_angle().tan() * corner.half_chord;
        Self {
            center_x,
            ccw: center_x < 0.0,
            radius: center_x.abs(),
        }
    }
}

/// Mittelpunkt des Schmiegekreises, auf die Winkelhalbierende angehoben, und die
/// dafür nötige Verschiebung in y.
fn raise_to_bisector(corner: &Corner, osculating_center: DVec2) -> (DVec2, f64) {
    let raised = DVec2::new(
        osculating_center.x,
        corner.p2.y - osculating_center.x / corner.half_angle().tan(),
    );
    (raised, raised.y - osculating_center.y)
}

/// Der erste Übergangsbogen muss vor `p2` auf der Strecke `p1 → p2` ansetzen.
///
/// Bei (fast) gerader Ecke ist der Schmiegekreis numerisch unbrauchbar und der
/// Ansatzpunkt wandert weit über `p2` hinaus.
fn starts_before_corner(corner: &Corner, arc_center: DVec2, start: DVec2) -> bool {
    arc_center.is_finite() && start.is_finite() && start.y <= corner.p2.y
}

/// Fügt die Teile in normalisierter Lage zusammen und transformiert zurück.
fn assemble<T>(corner: &Corner, transition1: T, arc_center: DVec2, transition2: T, ccw: bool) -> Smoothing
where
    T: PathSegment + Into<PathPart>,
{
    let blend = C2Smoothing {
        line1: LinePart::new(DVec2::ZERO, transition1.start()),
        arc: ArcPart::new(arc_center, transition1.end(), transition2.start(), ccw),
        line2: LinePart::new(transition2.end(), corner.p3),
        transition1: transition1.into(),
        transition2: transition2.into(),
    };
    corner.to_world(Smoothing::C2(blend))
}

/// C2-Glättung mit kubischen Parabeln.
///
/// Der Form-Koeffizient wird linear aus dem Glättungsfaktor interpoliert
/// (`k = (1 − f)·(20 − 0.2) + 0.2`), die Parabel erreicht am Ende den Kreisradius.
pub fn smooth_c2_cubic(p1: DVec2, p2: DVec2, p3: DVec2, factor: f64) -> Result<Smoothing> {
    let corner = Corner::new(p1, p2, p3, factor)?;
    let fillet = Fillet::of(&corner);
    if fillet.radius == 0.0 {
        return Ok(corner.unsmoothed());
    }

    let k = (1.0 - factor) * (K_AT_ZERO - K_AT_ONE) + K_AT_ONE;
    let k = if fillet.ccw { -k } else { k };
    let from_origin = match CubicPart::from_radius(fillet.radius, k) {
        Ok(part) => part.flip(),
        Err(SmoothingError::RadiusNotConverged { .. }) => {
            log::debug!("Kubische Parabel ohne passenden Radius, Ecke bleibt ungeglaettet");
            return Ok(corner.unsmoothed());
        }
        Err(e) => return Err(e),
    };

    let (arc_center, dy) = raise_to_bisector(&corner, from_origin.osculating_center());
    let transition1 = from_origin.with_start(DVec2::new(0.0, dy));
    if !starts_before_corner(&corner, arc_center, transition1.start()) {
        log::debug!("Parabel setzt hinter der Ecke an, Ecke bleibt ungeglaettet");
        return Ok(corner.unsmoothed());
    }
    let end2 = rotate_about(transition1.start(), corner.p2, corner.angle);
    let transition2 = from_origin
        .flip()
        .reverse()
        .with_angle(corner.angle - FRAC_PI_2)
        .move_end_to(end2);

    Ok(assemble(&corner, transition1, arc_center, transition2, fillet.ccw))
}

/// C2-Glättung mit Klothoiden; die Endkrümmung ist exakt, keine Korrektur nötig.
pub fn smooth_c2_clothoid(p1: DVec2, p2: DVec2, p3: DVec2, factor: f64) -> Result<Smoothing> {
    let corner = Corner::new(p1, p2, p3, factor)?;
    let fillet = Fillet::of(&corner);
    if fillet.radius == 0.0 {
        return Ok(corner.unsmoothed());
    }

    let from_origin = ClothoidPart::from_curvature(DVec2::ZERO, -1.0 / fillet.center_x);

    let (arc_center, dy) = raise_to_bisector(&corner, from_origin.osculating_center());
    let transition1 = from_origin.with_start(DVec2::new(0.0, from_origin.start().y + dy));
    if !starts_before_corner(&corner, arc_center, transition1.start()) {
        log::debug!("Klothoide setzt hinter der Ecke an, Ecke bleibt ungeglaettet");
        return Ok(corner.unsmoothed());
    }
    let end2 = rotate_about(transition1.start(), corner.p2, corner.angle);
    let transition2 = transition1
        .reverse()
        .with_angle(corner.angle - PI)
        .move_end_to(end2);

    Ok(assemble(&corner, transition1, arc_center, transition2, fillet.ccw))
}
