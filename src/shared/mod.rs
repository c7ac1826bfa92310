//! Gemeinsam genutzte Konfiguration.

pub mod options;

pub use options::SmoothingOptions;
