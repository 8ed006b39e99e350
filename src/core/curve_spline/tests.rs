use super::*;
use approx::assert_abs_diff_eq;

fn is_sorted(spline: &CurveSpline) -> bool {
    spline.points().windows(2).all(|w| w[0].x() <= w[1].x())
}

#[test]
fn test_new_spline_has_default_points() {
    let spline = CurveSpline::new("Test");
    assert_eq!(spline.len(), 2);
    assert_eq!(spline.points()[0].position(), DVec2::new(0.0, 0.0));
    assert_eq!(spline.points()[1].position(), DVec2::new(1.0, 1.0));
    assert!(spline.key().is_none());
}

#[test]
fn test_from_points_with_too_few_points_falls_back() {
    let spline = CurveSpline::from_points(None, "x", vec![ControlPoint::new(0.4, 0.4)]);
    assert_eq!(spline.len(), 2);
    assert_eq!(spline.points()[1].position(), DVec2::new(1.0, 1.0));
}

#[test]
fn test_from_points_sorts_by_x() {
    let spline = CurveSpline::from_points(
        Some("k".into()),
        "x",
        vec![
            ControlPoint::new(1.0, 1.0),
            ControlPoint::new(0.5, 0.2),
            ControlPoint::new(0.0, 0.0),
        ],
    );
    assert!(is_sorted(&spline));
    assert_eq!(spline.points()[1].y(), 0.2);
}

#[test]
fn test_linear_fallback_exact_half() {
    let spline = CurveSpline::from_points(
        None,
        "linear",
        vec![ControlPoint::linear(0.0, 0.0), ControlPoint::linear(1.0, 1.0)],
    );
    assert_eq!(spline.evaluate(0.5).unwrap(), 0.5);
}

#[test]
fn test_evaluate_endpoints_match_boundary_points() {
    let spline = CurveSpline::from_points(
        None,
        "s",
        vec![
            ControlPoint::new(0.0, 0.2),
            ControlPoint::new(0.3, 0.9),
            ControlPoint::new(0.7, 0.1),
            ControlPoint::new(1.0, 0.6),
        ],
    );
    assert_eq!(spline.evaluate(0.0).unwrap(), 0.2);
    assert_eq!(spline.evaluate(1.0).unwrap(), 0.6);
}

#[test]
fn test_evaluate_clamps_outside_range() {
    let spline = CurveSpline::new("c");
    assert_eq!(spline.evaluate(-3.0).unwrap(), 0.0);
    assert_eq!(spline.evaluate(7.5).unwrap(), 1.0);
}

#[test]
fn test_evaluate_nan_returns_first_y() {
    let spline = CurveSpline::from_points(
        None,
        "n",
        vec![
            ControlPoint::new(0.0, 0.3),
            ControlPoint::new(0.5, 0.9),
            ControlPoint::new(1.0, 0.6),
        ],
    );
    assert_eq!(spline.evaluate(f64::NAN).unwrap(), 0.3);
    assert_abs_diff_eq!(spline.evaluate_in_range(f64::NAN, 0.0, 10.0).unwrap(), 3.0, epsilon = 1e-12);
    assert_eq!(CurveSpline::new("d").evaluate(f64::NAN).unwrap(), 0.0);
}

#[test]
fn test_evaluate_on_interior_point_returns_its_y() {
    let mut spline = CurveSpline::new("c");
    spline.add_point(ControlPoint::new(0.25, 0.8));
    assert_eq!(spline.evaluate(0.25).unwrap(), 0.8);
}

#[test]
fn test_smooth_default_curve_is_symmetric() {
    // Standard-Tangenten (±0.1, 0) → punktsymmetrische S-Kurve um (0.5, 0.5)
    let spline = CurveSpline::new("ease");
    let mid = spline.evaluate(0.5).unwrap();
    assert_abs_diff_eq!(mid, 0.5, epsilon = 1e-9);
    let a = spline.evaluate(0.2).unwrap();
    let b = spline.evaluate(0.8).unwrap();
    assert_abs_diff_eq!(a + b, 1.0, epsilon = 1e-6);
    assert!(a < 0.2, "Ease-In erwartet, erhalten {a}");
}

#[test]
fn test_mixed_smooth_uses_linear_segment() {
    let spline = CurveSpline::from_points(
        None,
        "m",
        vec![ControlPoint::new(0.0, 0.0), ControlPoint::linear(1.0, 1.0)],
    );
    assert_abs_diff_eq!(spline.evaluate(0.3).unwrap(), 0.3, epsilon = 1e-12);
}

#[test]
fn test_result_clamped_for_overshooting_handles() {
    let points = vec![
        ControlPoint::new(0.0, 1.0).with_tangents(DVec2::ZERO, DVec2::new(0.3, 0.7)),
        ControlPoint::new(1.0, 1.0).with_tangents(DVec2::new(-0.3, 0.7), DVec2::ZERO),
    ];
    let spline = CurveSpline::from_points(None, "o", points);
    for i in 0..=20 {
        let y = spline.evaluate(i as f64 / 20.0).unwrap();
        assert!((0.0..=1.0).contains(&y));
    }
}

#[test]
fn test_evaluate_in_range_maps_output() {
    let spline = CurveSpline::from_points(
        None,
        "l",
        vec![ControlPoint::linear(0.0, 0.0), ControlPoint::linear(1.0, 1.0)],
    );
    assert_abs_diff_eq!(spline.evaluate_in_range(0.25, 10.0, 20.0).unwrap(), 12.5);
    assert_abs_diff_eq!(spline.evaluate_in_range(1.0, 5.0, -5.0).unwrap(), -5.0);
}

#[test]
fn test_empty_points_fail_with_invalid_curve() {
    assert_eq!(
        evaluate_points(&[], 0.5),
        Err(CurveError::InvalidCurve { points: 0 })
    );
}

#[test]
fn test_remove_rejected_at_minimum() {
    let mut spline = CurveSpline::new("c");
    assert!(!spline.remove_point(0));
    assert_eq!(spline.len(), 2);

    spline.add_point(ControlPoint::new(0.5, 0.5));
    assert!(!spline.remove_point(7));
    assert!(spline.remove_point(1));
    assert_eq!(spline.len(), 2);
}

#[test]
fn test_update_point_resorts_and_tracks_identity() {
    let mut spline = CurveSpline::new("c");
    spline.add_point(ControlPoint::new(0.2, 0.2));
    spline.add_point(ControlPoint::new(0.6, 0.6));

    // 0.2 → 0.8 überholt den Punkt bei 0.6
    let new_index = spline.update_point(1, 0.8, 0.3).unwrap();
    assert_eq!(new_index, 2);
    assert!(is_sorted(&spline));
    assert_eq!(spline.points()[2].position(), DVec2::new(0.8, 0.3));
}

#[test]
fn test_update_point_ties_keep_relative_order() {
    let mut spline = CurveSpline::new("c");
    spline.add_point(ControlPoint::new(0.5, 0.5));

    // Innerer Punkt auf x = 1 bleibt vor dem letzten Punkt
    let new_index = spline.update_point(1, 1.0, 0.4).unwrap();
    assert_eq!(new_index, 1);
    assert_eq!(spline.points()[2].y(), 1.0);
    assert_eq!(spline.evaluate(1.0).unwrap(), 1.0);
}

#[test]
fn test_update_point_clamps_position() {
    let mut spline = CurveSpline::new("c");
    spline.add_point(ControlPoint::new(0.5, 0.5));
    spline.update_point(1, 0.5, 4.0);
    for p in spline.points() {
        assert!((0.0..=1.0).contains(&p.x()) && (0.0..=1.0).contains(&p.y()));
    }
}

#[test]
fn test_update_point_invalid_index() {
    let mut spline = CurveSpline::new("c");
    assert_eq!(spline.update_point(5, 0.5, 0.5), None);
}

#[test]
fn test_clone_is_deep_copy() {
    let original = CurveSpline::new("c");
    let mut copy = original.clone();
    copy.set_smooth(0, false);
    assert!(original.points()[0].smooth);
    assert!(!copy.points()[0].smooth);
}

#[test]
fn test_boundary_roles() {
    assert_eq!(Boundary::of(0, 3), Boundary::First);
    assert_eq!(Boundary::of(1, 3), Boundary::Interior);
    assert_eq!(Boundary::of(2, 3), Boundary::Last);
}
