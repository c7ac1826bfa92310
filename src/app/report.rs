//! Serialisierbare Zusammenfassung einer Sitzung (JSON-Ausgabe der Binary).

use super::PathSession;
use crate::view::GuideScene;
use anyhow::Result;
use glam::DVec2;
use path_smoothing_engine::{CurvaturePlot, PathPart, PathSegment, SmoothingMode};
use serde::Serialize;

/// Kurzbeschreibung eines Pfadteils.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartSummary {
    pub kind: &'static str,
    pub start: DVec2,
    pub end: DVec2,
    pub length: f64,
}

impl From<&PathPart> for PartSummary {
    fn from(part: &PathPart) -> Self {
        Self {
            kind: part.kind(),
            start: part.start(),
            end: part.end(),
            length: part.length(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PathReport {
    pub mode: SmoothingMode,
    pub mode_label: String,
    pub smoothing_factor: f64,
    pub total_length: f64,
    pub parts: Vec<PartSummary>,
    /// Plot in Welt-Einheiten (Bogenlänge, Krümmung)
    pub curvature: CurvaturePlot,
    /// Hilfslinien in Bildschirm-Koordinaten
    pub scene: GuideScene,
}

impl PathReport {
    pub fn from_session(session: &PathSession) -> Result<Self> {
        let options = session.options();
        let transform = session.screen_transform()?;
        Ok(Self {
            mode: options.smoothing_mode,
            mode_label: options.smoothing_mode.to_string(),
            smoothing_factor: options.smoothing_factor,
            total_length: session.total_length(),
            parts: session.parts().iter().map(PartSummary::from).collect(),
            curvature: session.plot().clone(),
            scene: session.guide_scene()?.to_screen(&transform),
        })
    }

    /// Anzahl Teile je Art, in der Reihenfolge Strecke, Bogen, kubisch, Klothoide.
    pub fn kind_counts(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for part in &self.parts {
            let slot = match part.kind {
                "line" => 0,
                "arc" => 1,
                "cubic" => 2,
                _ => 3,
            };
            counts[slot] += 1;
        }
        counts
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
