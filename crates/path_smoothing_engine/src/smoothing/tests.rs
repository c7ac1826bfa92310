use super::*;
use crate::parts::{find_position, total_length};
use approx::{assert_abs_diff_eq, assert_relative_eq};

fn assert_point_eq(actual: DVec2, expected: DVec2, epsilon: f64) {
    assert_abs_diff_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_abs_diff_eq!(actual.y, expected.y, epsilon = epsilon);
}

fn demo_waypoints() -> Vec<DVec2> {
    vec![
        DVec2::new(0.6, -0.3),
        DVec2::new(-0.3, 2.0),
        DVec2::new(3.3, 0.23),
        DVec2::new(3.5, 1.47),
    ]
}

fn right_corner() -> (DVec2, DVec2, DVec2) {
    (
        DVec2::new(0.0, 0.0),
        DVec2::new(0.0, 10.0),
        DVec2::new(10.0, 10.0),
    )
}

fn left_corner() -> (DVec2, DVec2, DVec2) {
    (
        DVec2::new(0.0, 0.0),
        DVec2::new(0.0, 10.0),
        DVec2::new(-10.0, 10.0),
    )
}

fn kinds(parts: &[PathPart]) -> Vec<&'static str> {
    parts.iter().map(PathPart::kind).collect()
}

/// Aufeinanderfolgende Teile schließen lückenlos an.
fn assert_continuous(parts: &[PathPart]) {
    for pair in parts.windows(2) {
        assert_point_eq(pair[0].end(), pair[1].start(), 1e-9);
    }
    for part in parts {
        let tolerance = match part {
            PathPart::Cubic(cubic) => 1e-3 * cubic.width(),
            _ => 1e-6,
        };
        assert_point_eq(part.point_at(part.length()), part.end(), tolerance);
    }
}

/// Krümmung am Ende eines Teils und am Anfang des nächsten.
fn boundary_curvatures(parts: &[PathPart]) -> Vec<(f64, f64)> {
    parts
        .windows(2)
        .map(|pair| (pair[0].curvature_at(pair[0].length()), pair[1].curvature_at(0.0)))
        .collect()
}

// ─── C1 ───

#[test]
fn test_c1_right_corner_geometry() {
    let (p1, p2, p3) = right_corner();
    let Smoothing::C1(fillet) = smooth_c1_arc(p1, p2, p3, 1.0).unwrap() else {
        panic!("C1-Glättung erwartet");
    };

    assert_point_eq(fillet.line1.start, p1, 1e-12);
    assert_point_eq(fillet.line1.end, DVec2::new(0.0, 5.0), 1e-12);
    assert_point_eq(fillet.arc.center, DVec2::new(5.0, 5.0), 1e-12);
    assert_point_eq(fillet.line2.start, DVec2::new(5.0, 10.0), 1e-12);
    assert_point_eq(fillet.line2.end, p3, 1e-12);
    assert!(!fillet.arc.ccw);
    assert_relative_eq!(fillet.arc.radius(), 5.0, epsilon = 1e-12);
}

#[test]
fn test_c1_left_corner_turns_counter_clockwise() {
    let (p1, p2, p3) = left_corner();
    let Smoothing::C1(fillet) = smooth_c1_arc(p1, p2, p3, 1.0).unwrap() else {
        panic!("C1-Glättung erwartet");
    };
    assert!(fillet.arc.ccw);
    assert_point_eq(fillet.arc.center, DVec2::new(-5.0, 5.0), 1e-12);
    assert_relative_eq!(fillet.arc.signed_curvature(), 0.2, epsilon = 1e-12);
}

#[test]
fn test_c1_collinear_is_not_smoothed() {
    let p1 = DVec2::new(1.0, 1.0);
    let p2 = DVec2::new(4.0, 5.0);
    let p3 = DVec2::new(7.0, 9.0);
    let result = smooth(SmoothingMode::C1Arc, p1, p2, p3, 0.7).unwrap();
    assert_eq!(result, Smoothing::None(NoSmoothing::new(p1, p2, p3)));
    assert_eq!(result.line1(), &LinePart::new(p1, p2));
    assert_eq!(result.line2(), &LinePart::new(p2, p3));
    assert!(result.inner_parts().is_empty());

    // Knick unter 1e-2 rad gilt ebenfalls als gerade
    let almost = smooth_c1_arc(
        DVec2::ZERO,
        DVec2::new(0.0, 10.0),
        DVec2::new(0.05, 20.0),
        1.0,
    )
    .unwrap();
    assert!(!almost.is_smoothed());
}

#[test]
fn test_c1_hairpin_is_not_smoothed() {
    let result = smooth_c1_arc(
        DVec2::ZERO,
        DVec2::new(0.0, 10.0),
        DVec2::new(0.0, 5.0),
        1.0,
    )
    .unwrap();
    assert!(!result.is_smoothed());
}

#[test]
fn test_c1_curvature_jumps_at_tangency() {
    let (p1, p2, p3) = right_corner();
    let parts = smooth_c1_arc(p1, p2, p3, 1.0).unwrap().parts();
    assert_eq!(kinds(&parts), vec!["line", "arc", "line"]);
    assert_continuous(&parts);

    let boundaries = boundary_curvatures(&parts);
    assert_abs_diff_eq!(boundaries[0].0, 0.0);
    assert_relative_eq!(boundaries[0].1, -0.2, epsilon = 1e-12);
    assert_relative_eq!(boundaries[1].0, -0.2, epsilon = 1e-12);
    assert_abs_diff_eq!(boundaries[1].1, 0.0);
}

// ─── C2 ───

#[test]
fn test_c2_blends_are_curvature_continuous() {
    for mode in [SmoothingMode::C2Cubic, SmoothingMode::C2Clothoid] {
        for ((p1, p2, p3), sign) in [(right_corner(), -1.0), (left_corner(), 1.0)] {
            let smoothing = smooth(mode, p1, p2, p3, 1.0).unwrap();
            let Smoothing::C2(blend) = &smoothing else {
                panic!("{mode}: C2-Glättung erwartet");
            };
            assert_eq!(blend.arc.ccw, sign > 0.0, "{mode}");
            assert_relative_eq!(blend.arc.radius(), 5.0, epsilon = 1e-2);

            let parts = smoothing.parts();
            assert_eq!(parts.len(), 5);
            assert_continuous(&parts);
            for (before, after) in boundary_curvatures(&parts) {
                assert!((before - after).abs() < 0.01, "{mode}: {before} → {after}");
            }

            let arc_curvature = parts[2].curvature_at(0.0);
            assert_relative_eq!(arc_curvature, sign * 0.2, epsilon = 1e-3);
        }
    }
}

#[test]
fn test_c2_transition_kinds() {
    let (p1, p2, p3) = right_corner();
    let cubic = smooth_c2_cubic(p1, p2, p3, 0.8).unwrap().parts();
    assert_eq!(kinds(&cubic), vec!["line", "cubic", "arc", "cubic", "line"]);

    let clothoid = smooth_c2_clothoid(p1, p2, p3, 1.0).unwrap().parts();
    assert_eq!(
        kinds(&clothoid),
        vec!["line", "clothoid", "arc", "clothoid", "line"]
    );
    assert_relative_eq!(
        clothoid[2].curvature_at(0.0),
        -0.2,
        epsilon = 1e-6
    );
}

#[test]
fn test_c2_hairpin_is_not_smoothed() {
    for mode in [SmoothingMode::C2Cubic, SmoothingMode::C2Clothoid] {
        let result = smooth(
            mode,
            DVec2::ZERO,
            DVec2::new(0.0, 10.0),
            DVec2::new(0.0, 5.0),
            1.0,
        )
        .unwrap();
        assert!(!result.is_smoothed(), "{mode}");
    }
}

// ─── Fassade ───

#[test]
fn test_zero_factor_is_not_smoothed() {
    let (p1, p2, p3) = right_corner();
    for mode in SmoothingMode::ALL {
        let result = smooth(mode, p1, p2, p3, 0.0).unwrap();
        assert_eq!(result, Smoothing::None(NoSmoothing::new(p1, p2, p3)), "{mode}");
    }
}

#[test]
fn test_factor_out_of_range_is_rejected() {
    let (p1, p2, p3) = right_corner();
    for mode in SmoothingMode::ALL {
        for factor in [-0.1, 1.5] {
            assert_eq!(
                smooth(mode, p1, p2, p3, factor).unwrap_err(),
                SmoothingError::SmoothingFactorOutOfRange(factor)
            );
        }
        assert!(smooth(mode, p1, p2, p3, f64::NAN).is_err());
    }
    assert!(smooth_c2_cubic(p1, p2, p3, 2.0).is_err());
    assert!(smooth_c2_clothoid(p1, p2, p3, -1.0).is_err());
}

#[test]
fn test_smoothing_moves_rigidly() {
    let (p1, p2, p3) = right_corner();
    let delta = DVec2::new(3.0, -2.0);
    for mode in SmoothingMode::ALL {
        let smoothing = smooth(mode, p1, p2, p3, 0.6).unwrap();
        let moved = smoothing.rotated(0.5).shifted(delta);
        for (original, moved) in smoothing.parts().iter().zip(moved.parts()) {
            let expected = crate::geometry::rotate(original.end(), 0.5) + delta;
            assert_point_eq(moved.end(), expected, 1e-9);
        }
    }
}

#[test]
fn test_mode_display_and_default() {
    assert_eq!(SmoothingMode::default(), SmoothingMode::C2Clothoid);
    assert_eq!(SmoothingMode::C1Arc.to_string(), "C1 Kreisbogen");
}

// ─── Verkettung ───

#[test]
fn test_join_empty_and_single() {
    assert!(join_smoothings(&[]).is_empty());

    let (p1, p2, p3) = right_corner();
    let smoothing = smooth_c2_clothoid(p1, p2, p3, 1.0).unwrap();
    assert_eq!(
        join_smoothings(std::slice::from_ref(&smoothing)),
        smoothing.parts()
    );
}

#[test]
fn test_join_merges_shared_segment() {
    let points = demo_waypoints();
    let first = smooth_c1_arc(points[0], points[1], points[2], 1.0).unwrap();
    let second = smooth_c1_arc(points[1], points[2], points[3], 1.0).unwrap();
    let joined = join_smoothings(&[first.clone(), second.clone()]);

    assert_eq!(kinds(&joined), vec!["line", "arc", "line", "arc", "line"]);
    let shared = joined[2].as_line().unwrap();
    assert_eq!(shared.start, first.line2().start);
    assert_eq!(shared.end, second.line1().end);
    assert_eq!(joined[0], PathPart::from(*first.line1()));
    assert_eq!(joined[4], PathPart::from(*second.line2()));
}

#[test]
fn test_smooth_path_demo_scenario() {
    let expected_lengths = [
        (SmoothingMode::C1Arc, 5, 6.0306),
        (SmoothingMode::C2Cubic, 9, 5.8462),
        (SmoothingMode::C2Clothoid, 9, 5.7479),
    ];
    for (mode, count, length) in expected_lengths {
        let parts = smooth_path(&demo_waypoints(), mode, 1.0).unwrap();
        assert_eq!(parts.len(), count, "{mode}");
        assert_point_eq(parts[0].start(), DVec2::new(0.6, -0.3), 1e-9);
        assert_point_eq(parts[count - 1].end(), DVec2::new(3.5, 1.47), 1e-9);
        assert_continuous(&parts);

        let total = total_length(&parts);
        let summed: f64 = parts.iter().map(|p| p.length()).sum();
        assert!(total > 0.0);
        assert_relative_eq!(total, summed);
        assert_abs_diff_eq!(total, length, epsilon = 1e-3);

        assert!(find_position(&parts, total * 0.5).is_some());
    }
}

#[test]
fn test_smooth_path_demo_c2_continuity() {
    for mode in [SmoothingMode::C2Cubic, SmoothingMode::C2Clothoid] {
        let parts = smooth_path(&demo_waypoints(), mode, 1.0).unwrap();
        for (before, after) in boundary_curvatures(&parts) {
            assert!((before - after).abs() < 0.02, "{mode}: {before} → {after}");
        }
    }
}

#[test]
fn test_smooth_path_short_inputs() {
    let a = DVec2::new(1.0, 2.0);
    let b = DVec2::new(4.0, 6.0);
    let mode = SmoothingMode::C1Arc;

    assert!(smooth_path(&[], mode, 1.0).unwrap().is_empty());
    assert!(smooth_path(&[a], mode, 1.0).unwrap().is_empty());
    assert_eq!(
        smooth_path(&[a, b], mode, 1.0).unwrap(),
        vec![PathPart::from(LinePart::new(a, b))]
    );
    assert_eq!(
        smooth_path(&[a, a, b, b], mode, 1.0).unwrap(),
        vec![PathPart::from(LinePart::new(a, b))]
    );
    assert!(smooth_path(&[a, b], mode, 1.2).is_err());
}

#[test]
fn test_smooth_path_drops_duplicate_waypoints() {
    let points = demo_waypoints();
    let mut doubled = Vec::new();
    for &p in &points {
        doubled.push(p);
        doubled.push(p);
    }
    let mode = SmoothingMode::C2Clothoid;
    assert_eq!(
        smooth_path(&doubled, mode, 1.0).unwrap(),
        smooth_path(&points, mode, 1.0).unwrap()
    );
}

/// Länge des ungeglätteten Polygonzugs.
fn polyline_length(points: &[DVec2]) -> f64 {
    points.windows(2).map(|pair| pair[0].distance(pair[1])).sum()
}

#[test]
fn test_c2_straight_corner_keeps_path_bounded() {
    let points = [
        DVec2::new(0.0, 0.0),
        DVec2::new(0.0, 1.0),
        DVec2::new(0.0, 2.0),
        DVec2::new(1.0, 3.0),
    ];
    for mode in [SmoothingMode::C2Cubic, SmoothingMode::C2Clothoid] {
        let parts = smooth_path(&points, mode, 1.0).unwrap();
        for pair in parts.windows(2) {
            assert_point_eq(pair[0].end(), pair[1].start(), 1e-9);
        }
        assert_point_eq(parts[0].start(), points[0], 1e-12);
        assert_point_eq(parts[parts.len() - 1].end(), points[3], 1e-9);

        let total = total_length(&parts);
        assert!(total.is_finite(), "{mode}: {total}");
        assert!(total <= polyline_length(&points) + 1e-9, "{mode}: {total}");
        assert!(total > points[0].distance(points[3]), "{mode}: {total}");
    }
}

#[test]
fn test_c2_clothoid_straight_corner_is_not_smoothed() {
    let smoothing = smooth_c2_clothoid(
        DVec2::new(0.0, 0.0),
        DVec2::new(0.0, 1.0),
        DVec2::new(0.0, 2.0),
        1.0,
    )
    .unwrap();
    assert!(!smoothing.is_smoothed());
    assert_abs_diff_eq!(total_length(&smoothing.parts()), 2.0, epsilon = 1e-12);
}

#[test]
fn test_c2_nearly_straight_corner_keeps_length() {
    let points = [
        DVec2::new(0.0, 0.0),
        DVec2::new(0.0, 1.0),
        DVec2::new(1e-10, 2.0),
    ];
    for mode in [SmoothingMode::C2Cubic, SmoothingMode::C2Clothoid] {
        let parts = smooth_path(&points, mode, 1.0).unwrap();
        for pair in parts.windows(2) {
            assert_point_eq(pair[0].end(), pair[1].start(), 1e-9);
        }
        assert_abs_diff_eq!(
            total_length(&parts),
            polyline_length(&points),
            epsilon = 1e-6
        );
    }
}

#[test]
fn test_c2_cubic_tiny_factor_keeps_every_segment() {
    let points = demo_waypoints();
    let parts = smooth_path(&points, SmoothingMode::C2Cubic, 1e-30).unwrap();

    assert_eq!(kinds(&parts), vec!["line", "line", "line"]);
    for (part, pair) in parts.iter().zip(points.windows(2)) {
        assert_point_eq(part.start(), pair[0], 1e-12);
        assert_point_eq(part.end(), pair[1], 1e-12);
    }
    assert_relative_eq!(total_length(&parts), polyline_length(&points), epsilon = 1e-12);
}
