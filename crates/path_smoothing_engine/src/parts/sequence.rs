//! Operationen über eine geordnete Folge von Pfad-Teilen.

use super::{PathPart, PathSegment};
use crate::error::{Result, SmoothingError};
use glam::DVec2;
use serde::Serialize;

/// Tabellierter Pfadpunkt mit Index des Teils, aus dem er stammt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathSample {
    pub point: DVec2,
    pub part_index: usize,
}

/// Summe der Teil-Längen.
pub fn total_length(parts: &[PathPart]) -> f64 {
    parts.iter().map(PathSegment::length).sum()
}

/// Punkt im Abstand `distance` vom Pfadanfang; `None` hinter dem Ende.
pub fn find_position(parts: &[PathPart], distance: f64) -> Option<DVec2> {
    let mut remaining = distance;
    for part in parts {
        let length = part.length();
        if length >= remaining {
            return Some(part.point_at(remaining));
        }
        remaining -= length;
    }
    None
}

/// Punkte im festen Abstand `delta` entlang des ganzen Pfads.
///
/// Der Rest eines Schritts wird über Teilgrenzen hinweg übertragen, die Abstände
/// bleiben also (in Bogenlänge) gleichmäßig.
pub fn tabulate(parts: &[PathPart], delta: f64) -> Result<Vec<PathSample>> {
    if delta.is_nan() || delta <= 0.0 {
        return Err(SmoothingError::NonPositiveDelta(delta));
    }

    let mut samples = Vec::new();
    let mut position = 0.0;
    for (part_index, part) in parts.iter().enumerate() {
        let length = part.length();
        while position < length {
            samples.push(PathSample {
                point: part.point_at(position),
                part_index,
            });
            position += delta;
        }
        position -= length;
    }
    Ok(samples)
}
