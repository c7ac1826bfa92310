//! C1-Glättung: Ausrundung der Ecke mit einem Kreisbogen.

use super::corner::Corner;
use super::{C1Smoothing, Smoothing};
use crate::error::Result;
use crate::parts::{ArcPart, LinePart};
use glam::DVec2;
use std::f64::consts::PI;

/// Abstand zu π, unterhalb dessen eine Ecke als gerade gilt.
const STRAIGHT_TOLERANCE: f64 = 1e-2;

/// Ersetzt die Ecke `p2` durch einen Kreisbogen, der beide Strecken berührt.
///
/// Der Berührpunkt liegt `factor · min(|p1p2|, |p2p3|) / 2` vor dem Eckpunkt.
/// Nahezu gerade Ecken, Faktor 0 und exakte Kehren bleiben ungeglättet.
pub fn smooth_c1_arc(p1: DVec2, p2: DVec2, p3: DVec2, factor: f64) -> Result<Smoothing> {
    let corner = Corner::new(p1, p2, p3, factor)?;
    if (corner.angle - PI).abs() < STRAIGHT_TOLERANCE || corner.half_chord == 0.0 {
        return Ok(corner.unsmoothed());
    }

    let r = corner.half_chord;
    let tan_half = corner.half_angle().tan();
    if tan_half * r == 0.0 {
        return Ok(corner.unsmoothed());
    }

    let center = DVec2::new(tan_half * r, corner.p2.y - r);
    let contact1 = DVec2::new(0.0, corner.p2.y - r);
    let contact2 = DVec2::new(
        r * corner.angle.sin(),
        corner.p2.y - r * corner.angle.cos(),
    );

    let fillet = C1Smoothing {
        line1: LinePart::new(DVec2::ZERO, contact1),
        arc: ArcPart::new(center, contact1, contact2, tan_half < 0.0),
        line2: LinePart::new(contact2, corner.p3),
    };
    Ok(corner.to_world(Smoothing::C1(fillet)))
}
