//! Krümmungsverlauf über der Bogenlänge eines geglätteten Pfads.

use crate::error::{Result, SmoothingError};
use crate::parts::{tabulate, total_length, PathPart};
use crate::special::{curvature_or_zero, three_point_curvature};
use glam::DVec2;
use serde::Serialize;

/// Messungen pro Plot-Punkt (gemittelt gegen Rauschen).
const MEASUREMENTS: usize = 10;

/// Krümmung (y) über Bogenlänge (x), mit Achsgrenzen für die Skalierung.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurvaturePlot {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    /// y-Lage der Nulllinie
    pub zero_y: f64,
    pub points: Vec<DVec2>,
}

impl CurvaturePlot {
    /// Misst die Krümmung entlang des Pfads.
    ///
    /// Der Pfad wird im Abstand `Länge / points_count / 10` tabelliert. Je drei
    /// aufeinanderfolgende Punkte desselben Teils ergeben eine Messung (über
    /// Teilgrenzen hinweg wird nicht gemessen), je 10 Messungen einen Plot-Punkt.
    /// `min_y`/`max_y` schließen immer die Null ein.
    pub fn create(parts: &[PathPart], points_count: usize) -> Result<Self> {
        if points_count == 0 {
            return Err(SmoothingError::ZeroPlotPoints);
        }

        let total = total_length(parts);
        let mut plot = Self {
            min_x: 0.0,
            max_x: total,
            min_y: 0.0,
            max_y: 0.0,
            zero_y: 0.0,
            points: Vec::with_capacity(points_count),
        };
        if total.is_nan() || total <= 0.0 {
            return Ok(plot);
        }

        let delta = total / points_count as f64;
        let samples = tabulate(parts, delta / MEASUREMENTS as f64)?;

        let mut measures = Vec::with_capacity(MEASUREMENTS);
        let mut position = 0.0;
        for w in samples.windows(3) {
            if w[0].part_index != w[1].part_index || w[1].part_index != w[2].part_index {
                continue;
            }
            measures.push(curvature_or_zero(three_point_curvature(
                w[0].point, w[1].point, w[2].point,
            )));

            if measures.len() >= MEASUREMENTS {
                let average = measures.iter().sum::<f64>() / measures.len() as f64;
                measures.clear();
                plot.max_y = plot.max_y.max(average);
                plot.min_y = plot.min_y.min(average);
                plot.points.push(DVec2::new(position, average));
                position += delta;
            }
        }

        Ok(plot)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bildet den Plot auf ein Anzeige-Rechteck ab.
    ///
    /// Ein flacher Plot (`min_y == max_y`) landet auf `min_y` des Rechtecks.
    pub fn scale(&self, min_y: f64, max_y: f64, min_x: f64, max_x: f64) -> Result<Self> {
        if min_y.is_nan() || max_y.is_nan() || min_y >= max_y {
            return Err(SmoothingError::InvalidPlotRange {
                min: min_y,
                max: max_y,
            });
        }

        let old_height = self.max_y - self.min_y;
        let old_width = self.max_x - self.min_x;
        let scale_y = |y: f64| {
            if old_height == 0.0 {
                min_y
            } else {
                (y - self.min_y) / old_height * (max_y - min_y) + min_y
            }
        };
        let scale_x = |x: f64| {
            if old_width == 0.0 {
                min_x
            } else {
                (x - self.min_x) / old_width * (max_x - min_x) + min_x
            }
        };

        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
            zero_y: scale_y(self.zero_y),
            points: self
                .points
                .iter()
                .map(|p| DVec2::new(scale_x(p.x), scale_y(p.y)))
                .collect(),
        })
    }

    /// Krümmung an relativer Position `ratio ∈ [0, 1)` (Hover-Anzeige).
    pub fn value_at_ratio(&self, ratio: f64) -> Option<f64> {
        if ratio.is_nan() || ratio < 0.0 {
            return None;
        }
        let index = (self.points.len() as f64 * ratio) as usize;
        self.points.get(index).map(|p| p.y)
    }
}
