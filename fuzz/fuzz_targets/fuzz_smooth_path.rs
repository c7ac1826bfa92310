#![no_main]

use glam::DVec2;
use libfuzzer_sys::fuzz_target;
use path_smoothing_engine::{smooth_path, CurvaturePlot, SmoothingMode};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let mode = SmoothingMode::ALL[selector as usize % SmoothingMode::ALL.len()];
    let factor = f64::from(selector >> 2) / 63.0;

    let waypoints: Vec<DVec2> = rest
        .chunks_exact(16)
        .map(|chunk| {
            let mut x = [0u8; 8];
            let mut y = [0u8; 8];
            x.copy_from_slice(&chunk[..8]);
            y.copy_from_slice(&chunk[8..]);
            DVec2::new(f64::from_le_bytes(x), f64::from_le_bytes(y))
        })
        .filter(|p| p.is_finite())
        .take(32)
        .collect();

    // smooth_path und der Plot duerfen bei keiner Eingabe paniken
    if let Ok(parts) = smooth_path(&waypoints, mode, factor) {
        let _ = CurvaturePlot::create(&parts, 16);
    }
});
