//! Sitzungszustand: Optionen, geglätteter Pfad und Krümmungsplot.
//!
//! Jede Parameter-Änderung rechnet Pfad und Plot neu. Schlägt die Neuberechnung
//! fehl, bleibt der vorherige Zustand unverändert.

use crate::shared::SmoothingOptions;
use crate::view::{build_guide_scene, GuideScene, ScreenTransform};
use anyhow::{ensure, Context, Result};
use glam::DVec2;
use path_smoothing_engine::{
    find_position, smooth_path, total_length, CurvaturePlot, PathPart, SmoothingMode,
};

/// Ergebnis einer Hover-Abfrage im Krümmungsplot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverInfo {
    /// Punkt auf dem Pfad an der entsprechenden Bogenlänge
    pub point: Option<DVec2>,
    /// Krümmung des zugehörigen Plot-Punkts
    pub curvature: Option<f64>,
}

/// Berechneter Pfad samt Plot.
#[derive(Debug, Clone)]
struct Computed {
    parts: Vec<PathPart>,
    plot: CurvaturePlot,
}

impl Computed {
    fn from_options(options: &SmoothingOptions) -> Result<Self> {
        let parts = smooth_path(
            &options.waypoints,
            options.smoothing_mode,
            options.smoothing_factor,
        )
        .with_context(|| format!("Glaettung ({}) fehlgeschlagen", options.smoothing_mode))?;
        let plot = CurvaturePlot::create(&parts, options.plot_points)
            .context("Kruemmungsplot konnte nicht erstellt werden")?;
        Ok(Self { parts, plot })
    }
}

#[derive(Debug, Clone)]
pub struct PathSession {
    options: SmoothingOptions,
    computed: Computed,
}

impl PathSession {
    /// Prüft die Optionen und berechnet den Pfad erstmals.
    pub fn new(options: SmoothingOptions) -> Result<Self> {
        options.validate()?;
        let computed = Computed::from_options(&options)?;
        log::info!(
            "Sitzung mit {} Wegpunkten und {} Pfadteilen erstellt",
            options.waypoints.len(),
            computed.parts.len()
        );
        Ok(Self { options, computed })
    }

    pub fn options(&self) -> &SmoothingOptions {
        &self.options
    }

    pub fn parts(&self) -> &[PathPart] {
        &self.computed.parts
    }

    pub fn plot(&self) -> &CurvaturePlot {
        &self.computed.plot
    }

    pub fn total_length(&self) -> f64 {
        total_length(&self.computed.parts)
    }

    pub fn set_waypoints(&mut self, waypoints: Vec<DVec2>) -> Result<()> {
        self.update(|options| options.waypoints = waypoints)
    }

    pub fn set_mode(&mut self, mode: SmoothingMode) -> Result<()> {
        self.update(|options| options.smoothing_mode = mode)
    }

    pub fn set_smoothing_factor(&mut self, factor: f64) -> Result<()> {
        ensure!(
            (0.0..=1.0).contains(&factor),
            "Glaettungsfaktor {} liegt nicht in [0, 1]",
            factor
        );
        self.update(|options| options.smoothing_factor = factor)
    }

    pub fn set_show_guides(&mut self, show_guides: bool) {
        self.options.show_guides = show_guides;
    }

    fn update(&mut self, change: impl FnOnce(&mut SmoothingOptions)) -> Result<()> {
        let mut options = self.options.clone();
        change(&mut options);
        options.validate()?;
        let computed = Computed::from_options(&options)?;
        log::debug!(
            "Pfad neu berechnet: {} Teile, Laenge {:.4}",
            computed.parts.len(),
            total_length(&computed.parts)
        );
        self.options = options;
        self.computed = computed;
        Ok(())
    }

    pub fn screen_transform(&self) -> Result<ScreenTransform> {
        ScreenTransform::new(self.options.zoom_factor, self.options.shift)
    }

    /// Hilfslinien in Welt-Koordinaten; das Kreis-Limit wird aus Pixeln umgerechnet.
    pub fn guide_scene(&self) -> Result<GuideScene> {
        let transform = self.screen_transform()?;
        let max_radius = self.options.guide_circle_max_radius_px / transform.scale_length(1.0);
        Ok(build_guide_scene(
            &self.computed.parts,
            self.options.show_guides,
            max_radius,
        )?)
    }

    /// Pfadpunkt und Krümmung an relativer Position `ratio` der Gesamtlänge.
    pub fn hover(&self, ratio: f64) -> HoverInfo {
        HoverInfo {
            point: find_position(&self.computed.parts, self.total_length() * ratio),
            curvature: self.computed.plot.value_at_ratio(ratio),
        }
    }
}
