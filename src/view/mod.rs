//! Darstellungs-Schicht: Bildschirm-Abbildung und Hilfslinien-Geometrie.

pub mod guides;
pub mod screen;

pub use guides::{build_guide_scene, GuideCircle, GuideScene};
pub use screen::ScreenTransform;
