//! Pfadglättungs-Werkbank.
//! Sitzung, Optionen und Darstellungs-Geometrie als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod shared;
pub mod view;

pub use app::{HoverInfo, PartSummary, PathReport, PathSession};
pub use path_smoothing_engine::{CurvaturePlot, PathPart, SmoothingMode};
pub use shared::SmoothingOptions;
pub use view::{build_guide_scene, GuideCircle, GuideScene, ScreenTransform};
