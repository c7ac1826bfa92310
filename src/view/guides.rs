//! Anzeige-Geometrie eines geglätteten Pfads: Polylinie und Hilfslinien.
//!
//! Alles liegt zunächst in Welt-Koordinaten; [`GuideScene::to_screen`] bildet die
//! Szene über eine [`ScreenTransform`] auf Pixel ab.

use super::ScreenTransform;
use glam::DVec2;
use path_smoothing_engine::{PathPart, PathSegment, Result};
use serde::Serialize;

/// Tabellierungs-Schritte pro Übergangsbogen (bezogen auf Breite bzw. Länge).
const TRANSITION_STEPS: f64 = 100.0;
/// Stützpunkte pro Kreisbogen.
const ARC_STEPS: usize = 32;

/// Vollkreis eines Bogens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GuideCircle {
    pub center: DVec2,
    pub radius: f64,
}

/// Geometrie für eine Zeichenfläche.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GuideScene {
    /// Der Pfad als zusammenhängende Polylinie
    pub path: Vec<DVec2>,
    /// Kreise der Bögen (nur unterhalb des Radius-Limits)
    pub circles: Vec<GuideCircle>,
    /// Verlängerte Eingangs-Übergangsbögen, je Arm eine Polylinie
    pub leading_arms: Vec<Vec<DVec2>>,
    /// Verlängerte Ausgangs-Übergangsbögen
    pub trailing_arms: Vec<Vec<DVec2>>,
    /// Anfangs- und Endpunkte der Übergangsbögen
    pub joints: Vec<DVec2>,
}

impl GuideScene {
    pub fn to_screen(&self, transform: &ScreenTransform) -> Self {
        let arms = |source: &[Vec<DVec2>]| -> Vec<Vec<DVec2>> {
            source
                .iter()
                .map(|arm| transform.to_screen_all(arm))
                .collect()
        };
        Self {
            path: transform.to_screen_all(&self.path),
            circles: self
                .circles
                .iter()
                .map(|c| GuideCircle {
                    center: transform.to_screen(c.center),
                    radius: transform.scale_length(c.radius),
                })
                .collect(),
            leading_arms: arms(&self.leading_arms),
            trailing_arms: arms(&self.trailing_arms),
            joints: transform.to_screen_all(&self.joints),
        }
    }

    pub fn arm_count(&self) -> usize {
        self.leading_arms.len() + self.trailing_arms.len()
    }
}

/// Baut die Szene aus dem verketteten Pfad.
///
/// `max_circle_radius` ist in Welteinheiten angegeben. Ohne `show_guides`
/// enthält die Szene nur die Polylinie.
pub fn build_guide_scene(
    parts: &[PathPart],
    show_guides: bool,
    max_circle_radius: f64,
) -> Result<GuideScene> {
    let mut scene = GuideScene::default();

    for part in parts {
        match part {
            PathPart::Line(line) => {
                scene.path.push(line.start);
                scene.path.push(line.end);
            }
            PathPart::Arc(arc) => {
                scene.path.extend(arc.sample(ARC_STEPS));
                if show_guides && arc.radius() < max_circle_radius {
                    scene.circles.push(GuideCircle {
                        center: arc.center,
                        radius: arc.radius(),
                    });
                }
            }
            PathPart::Cubic(cubic) => {
                let delta = cubic.width() / TRANSITION_STEPS;
                if delta <= 0.0 {
                    scene.path.push(cubic.start());
                    continue;
                }
                scene.path.extend(cubic.tabulate(delta)?);
                if show_guides {
                    let arms = if cubic.is_reversed() {
                        &mut scene.trailing_arms
                    } else {
                        &mut scene.leading_arms
                    };
                    arms.push(cubic.extend().tabulate(delta)?);
                    arms.push(cubic.rotate180().extend().tabulate(delta)?);
                    scene.joints.push(cubic.start());
                    scene.joints.push(cubic.end());
                }
            }
            PathPart::Clothoid(clothoid) => {
                let delta = clothoid.length() / TRANSITION_STEPS;
                if delta <= 0.0 {
                    scene.path.push(clothoid.start());
                    continue;
                }
                scene.path.extend(clothoid.tabulate(delta)?);
                if show_guides {
                    let arms = if clothoid.is_reversed() {
                        &mut scene.trailing_arms
                    } else {
                        &mut scene.leading_arms
                    };
                    arms.push(clothoid.expand().tabulate(delta)?);
                    scene.joints.push(clothoid.start());
                    scene.joints.push(clothoid.end());
                }
            }
        }
    }

    Ok(scene)
}
