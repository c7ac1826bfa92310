//! Zentrale Konfiguration der Pfadglättungs-Werkbank.
//!
//! `SmoothingOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::{ensure, Context};
use glam::DVec2;
use path_smoothing_engine::SmoothingMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Dateiname der Optionen neben der Binary.
pub const CONFIG_FILE_NAME: &str = "path_smoothing_workbench.toml";

// ── Wegpunkte ───────────────────────────────────────────────────────

/// Start-Wegpunkte (Welteinheiten), eine S-Kurve mit zwei Ecken.
pub const DEFAULT_WAYPOINTS: [[f64; 2]; 4] = [[0.6, -0.3], [-0.3, 2.0], [3.3, 0.23], [3.5, 1.47]];

// ── Glättung ────────────────────────────────────────────────────────

/// Standard-Glättungsfaktor (1.0 = maximale Ausrundung).
pub const SMOOTHING_FACTOR: f64 = 1.0;

// ── Ansicht ─────────────────────────────────────────────────────────

/// Pixel pro Welteinheit.
pub const ZOOM_FACTOR: f64 = 200.0;
/// Bildschirm-Position des Welt-Ursprungs in Pixeln.
pub const SHIFT: [f64; 2] = [150.0, 450.0];
/// Hilfslinien (Kreise, verlängerte Übergangsbögen) standardmäßig sichtbar.
pub const SHOW_GUIDES: bool = true;
/// Kreise ab diesem Bildschirm-Radius werden nicht mehr gezeichnet.
pub const GUIDE_CIRCLE_MAX_RADIUS_PX: f64 = 1000.0;

// ── Krümmungsplot ───────────────────────────────────────────────────

/// Anzahl Punkte des Krümmungsplots.
pub const PLOT_POINTS: usize = 400;

fn default_waypoints() -> Vec<DVec2> {
    DEFAULT_WAYPOINTS.iter().map(|&p| DVec2::from_array(p)).collect()
}

fn default_smoothing_factor() -> f64 {
    SMOOTHING_FACTOR
}

fn default_zoom_factor() -> f64 {
    ZOOM_FACTOR
}

fn default_shift() -> DVec2 {
    DVec2::from_array(SHIFT)
}

fn default_show_guides() -> bool {
    SHOW_GUIDES
}

fn default_plot_points() -> usize {
    PLOT_POINTS
}

fn default_guide_circle_max_radius_px() -> f64 {
    GUIDE_CIRCLE_MAX_RADIUS_PX
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen der Werkbank.
/// Wird als `path_smoothing_workbench.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmoothingOptions {
    // ── Pfad ────────────────────────────────────────────────────
    /// Wegpunkte in Welteinheiten, als `[x, y]`
    #[serde(default = "default_waypoints")]
    pub waypoints: Vec<DVec2>,
    /// Glättungs-Verfahren
    #[serde(default)]
    pub smoothing_mode: SmoothingMode,
    /// Glättungsfaktor in [0, 1]
    #[serde(default = "default_smoothing_factor")]
    pub smoothing_factor: f64,

    // ── Ansicht ─────────────────────────────────────────────────
    /// Pixel pro Welteinheit
    #[serde(default = "default_zoom_factor")]
    pub zoom_factor: f64,
    /// Bildschirm-Position des Welt-Ursprungs
    #[serde(default = "default_shift")]
    pub shift: DVec2,
    /// Hilfslinien anzeigen
    #[serde(default = "default_show_guides")]
    pub show_guides: bool,
    /// Maximaler Bildschirm-Radius gezeichneter Kreise
    #[serde(default = "default_guide_circle_max_radius_px")]
    pub guide_circle_max_radius_px: f64,

    // ── Krümmungsplot ───────────────────────────────────────────
    /// Anzahl Plot-Punkte
    #[serde(default = "default_plot_points")]
    pub plot_points: usize,
}

impl Default for SmoothingOptions {
    fn default() -> Self {
        Self {
            waypoints: default_waypoints(),
            smoothing_mode: SmoothingMode::default(),
            smoothing_factor: SMOOTHING_FACTOR,

            zoom_factor: ZOOM_FACTOR,
            shift: default_shift(),
            show_guides: SHOW_GUIDES,
            guide_circle_max_radius_px: GUIDE_CIRCLE_MAX_RADIUS_PX,

            plot_points: PLOT_POINTS,
        }
    }
}

impl SmoothingOptions {
    /// Lädt die Werkbank-Optionen.
    ///
    /// Fehlt die Datei, ist sie kein gültiges TOML oder verletzt ein Wert die
    /// Wertebereiche aus [`Self::validate`], startet die Werkbank mit Standardwerten.
    pub fn load_from_file(path: &Path) -> Self {
        if !path.exists() {
            log::info!(
                "{} fehlt, Werkbank startet mit Standardwerten",
                path.display()
            );
            return Self::default();
        }
        match Self::read_checked(path) {
            Ok(options) => {
                log::info!(
                    "{} Wegpunkte, Modus {} aus {}",
                    options.waypoints.len(),
                    options.smoothing_mode,
                    path.display()
                );
                options
            }
            Err(e) => {
                log::warn!("{e:#}; Werkbank startet mit Standardwerten");
                Self::default()
            }
        }
    }

    fn read_checked(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("{} nicht lesbar", path.display()))?;
        let options: Self = toml::from_str(&text)
            .with_context(|| format!("{} ist kein gueltiges Optionen-TOML", path.display()))?;
        options
            .validate()
            .with_context(|| format!("{} enthaelt ungueltige Werte", path.display()))?;
        Ok(options)
    }

    /// Schreibt die Optionen als TOML.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let text = toml::to_string_pretty(self).context("Optionen nicht als TOML darstellbar")?;
        std::fs::write(path, text)
            .with_context(|| format!("{} nicht beschreibbar", path.display()))?;
        log::info!("Werkbank-Optionen in {} abgelegt", path.display());
        Ok(())
    }

    /// `path_smoothing_workbench.toml` im Verzeichnis der laufenden Binary,
    /// ersatzweise im Arbeitsverzeichnis.
    pub fn config_path() -> PathBuf {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        dir.join(CONFIG_FILE_NAME)
    }

    /// Prüft die Wertebereiche, bevor eine Sitzung damit aufgebaut wird.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            (0.0..=1.0).contains(&self.smoothing_factor),
            "Glaettungsfaktor {} liegt nicht in [0, 1]",
            self.smoothing_factor
        );
        ensure!(
            self.zoom_factor.is_finite() && self.zoom_factor != 0.0,
            "Zoom-Faktor {} ist ungueltig",
            self.zoom_factor
        );
        ensure!(self.plot_points > 0, "Kruemmungsplot braucht mindestens einen Punkt");
        ensure!(
            self.waypoints.iter().all(|p| p.is_finite()),
            "Wegpunkte enthalten nicht-endliche Koordinaten"
        );
        Ok(())
    }
}
