use glam::DVec2;
use path_smoothing_workbench::shared::options::CONFIG_FILE_NAME;
use path_smoothing_workbench::{SmoothingMode, SmoothingOptions};
use std::path::PathBuf;

fn temp_config(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "path_smoothing_workbench_{}_{}.toml",
        name,
        std::process::id()
    ))
}

#[test]
fn test_defaults_match_constants() {
    let options = SmoothingOptions::default();
    assert_eq!(options.waypoints.len(), 4);
    assert_eq!(options.waypoints[0], DVec2::new(0.6, -0.3));
    assert_eq!(options.smoothing_mode, SmoothingMode::C2Clothoid);
    assert_eq!(options.smoothing_factor, 1.0);
    assert_eq!(options.zoom_factor, 200.0);
    assert_eq!(options.shift, DVec2::new(150.0, 450.0));
    assert!(options.show_guides);
    assert_eq!(options.plot_points, 400);
    assert_eq!(options.guide_circle_max_radius_px, 1000.0);
    options.validate().expect("Standardwerte sollten gueltig sein");
}

#[test]
fn test_save_and_load_roundtrip() {
    let path = temp_config("roundtrip");
    let options = SmoothingOptions {
        waypoints: vec![DVec2::new(1.0, 2.0), DVec2::new(-3.5, 0.25)],
        smoothing_mode: SmoothingMode::C2Cubic,
        smoothing_factor: 0.4,
        show_guides: false,
        ..SmoothingOptions::default()
    };

    options
        .save_to_file(&path)
        .expect("Optionen sollten sich speichern lassen");
    let loaded = SmoothingOptions::load_from_file(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, options);
}

#[test]
fn test_partial_file_takes_defaults() {
    let path = temp_config("partial");
    std::fs::write(&path, "smoothing_mode = \"C1Arc\"\nsmoothing_factor = 0.5\n")
        .expect("Testdatei sollte sich schreiben lassen");
    let loaded = SmoothingOptions::load_from_file(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.smoothing_mode, SmoothingMode::C1Arc);
    assert_eq!(loaded.smoothing_factor, 0.5);
    assert_eq!(loaded.waypoints, SmoothingOptions::default().waypoints);
    assert_eq!(loaded.plot_points, 400);
}

#[test]
fn test_broken_or_missing_file_falls_back_to_defaults() {
    let path = temp_config("broken");
    std::fs::write(&path, "smoothing_mode = [nicht toml")
        .expect("Testdatei sollte sich schreiben lassen");
    let loaded = SmoothingOptions::load_from_file(&path);
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded, SmoothingOptions::default());

    let missing = SmoothingOptions::load_from_file(&temp_config("missing"));
    assert_eq!(missing, SmoothingOptions::default());
}

#[test]
fn test_out_of_range_file_falls_back_to_defaults() {
    let path = temp_config("out_of_range");
    std::fs::write(&path, "smoothing_mode = \"C2Cubic\"\nsmoothing_factor = 2.5\n")
        .expect("Testdatei sollte sich schreiben lassen");
    let loaded = SmoothingOptions::load_from_file(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, SmoothingOptions::default());
}

#[test]
fn test_save_into_missing_directory_fails() {
    let path = std::env::temp_dir()
        .join(format!("path_smoothing_workbench_fehlt_{}", std::process::id()))
        .join("optionen.toml");
    let error = SmoothingOptions::default()
        .save_to_file(&path)
        .expect_err("Speichern in ein fehlendes Verzeichnis sollte scheitern");
    assert!(error.to_string().contains("optionen.toml"));
}

#[test]
fn test_validate_rejects_bad_values() {
    let factor = SmoothingOptions {
        smoothing_factor: 1.5,
        ..SmoothingOptions::default()
    };
    assert!(factor.validate().is_err());

    let zoom = SmoothingOptions {
        zoom_factor: 0.0,
        ..SmoothingOptions::default()
    };
    assert!(zoom.validate().is_err());

    let plot = SmoothingOptions {
        plot_points: 0,
        ..SmoothingOptions::default()
    };
    assert!(plot.validate().is_err());

    let waypoints = SmoothingOptions {
        waypoints: vec![DVec2::new(f64::NAN, 0.0)],
        ..SmoothingOptions::default()
    };
    assert!(waypoints.validate().is_err());
}

#[test]
fn test_config_path_points_next_to_binary() {
    let path = SmoothingOptions::config_path();
    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some(CONFIG_FILE_NAME)
    );
}
