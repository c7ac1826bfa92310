//! Pfadglättungs-Werkbank.
//!
//! Lädt die Optionen, glättet die Wegpunkte und gibt Pfad, Krümmungsplot und
//! Hilfslinien als JSON auf stdout aus.
//!
//! Aufruf: `Path-Smoothing-Workbench [optionen.toml]`

use path_smoothing_workbench::{PathReport, PathSession, SmoothingOptions};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Pfadglaettungs-Werkbank v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let config_path = std::env::args()
            .nth(1)
            .map(PathBuf::from)
            .unwrap_or_else(SmoothingOptions::config_path);
        let options = SmoothingOptions::load_from_file(&config_path);

        let session = PathSession::new(options)?;
        let report = PathReport::from_session(&session)?;
        let [lines, arcs, cubics, clothoids] = report.kind_counts();
        log::info!(
            "{}: {} Teile ({} Strecken, {} Boegen, {} kubisch, {} Klothoiden), Laenge {:.4}",
            report.mode_label,
            report.parts.len(),
            lines,
            arcs,
            cubics,
            clothoids,
            report.total_length
        );

        println!("{}", report.to_json()?);
        Ok(())
    }
}
