//! Kern der Pfad-Glättung.
//!
//! Ersetzt jede Ecke einer Wegpunkt-Folge durch eine Übergangskurve mit
//! beschränkter Krümmung:
//! - **C1**: Kreisbogen (Position und Tangente stetig)
//! - **C2**: Übergangsbogen / Kreisbogen / Übergangsbogen, wobei der Übergang eine
//!   kubische Parabel oder eine Klothoide ist (zusätzlich Krümmung stetig)
//!
//! Aufbau (Blätter zuerst):
//! - `geometry`: Ebenen-Geometrie auf `glam::DVec2`
//! - `special`: Fresnel-Integral und Drei-Punkte-Krümmung
//! - `parts`: Pfad-Teile (Strecke, Bogen, kubische Parabel, Klothoide)
//! - `smoothing`: Glättungs-Ergebnisse, Algorithmen und Pfad-Verkettung
//! - `plot`: Krümmungsverlauf über der Bogenlänge

pub mod error;
pub mod geometry;
pub mod parts;
pub mod plot;
pub mod smoothing;
pub mod special;

pub use error::{Result, SmoothingError};
pub use parts::{
    find_position, tabulate, total_length, ArcPart, ClothoidPart, CubicPart, LinePart, PathPart,
    PathSample, PathSegment,
};
pub use plot::CurvaturePlot;
pub use smoothing::{
    join_smoothings, smooth, smooth_c1_arc, smooth_c2_clothoid, smooth_c2_cubic, smooth_path,
    C1Smoothing, C2Smoothing, NoSmoothing, Smoothing, SmoothingMode,
};
