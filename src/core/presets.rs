//! Mitgelieferte Kurven-Vorlagen für häufige Animationsmuster.

use super::control_point::ControlPoint;
use super::curve_spline::CurveSpline;

fn preset(key: &str, name: &str, positions: &[(f64, f64)]) -> CurveSpline {
    let points = positions
        .iter()
        .map(|&(x, y)| ControlPoint::new(x, y))
        .collect();
    CurveSpline::from_points(Some(key.to_string()), name, points)
}

/// Weiche S-Kurve (Ease-In-Out).
pub fn smooth_s() -> CurveSpline {
    preset(
        "smooth_s",
        "Smooth S-Curve",
        &[(0.0, 0.0), (0.25, 0.1), (0.5, 0.5), (0.75, 0.9), (1.0, 1.0)],
    )
}

/// Nachfedern kurz vor dem Ziel.
pub fn bounce() -> CurveSpline {
    preset(
        "bounce",
        "Bounce",
        &[
            (0.0, 0.0),
            (0.4, 0.8),
            (0.5, 0.9),
            (0.6, 0.85),
            (0.75, 0.95),
            (0.85, 0.98),
            (1.0, 1.0),
        ],
    )
}

/// Starke Beschleunigung am Anfang.
pub fn quick_start() -> CurveSpline {
    preset(
        "quick_start",
        "Quick Start",
        &[(0.0, 0.0), (0.2, 0.7), (0.5, 0.85), (1.0, 1.0)],
    )
}

/// Langsamer Anfang, steiles Ende.
pub fn slow_start() -> CurveSpline {
    preset(
        "slow_start",
        "Slow Start",
        &[(0.0, 0.0), (0.5, 0.15), (0.8, 0.3), (1.0, 1.0)],
    )
}

/// Wellenmuster.
pub fn wave() -> CurveSpline {
    preset(
        "wave",
        "Wave",
        &[
            (0.0, 0.0),
            (0.2, 0.4),
            (0.4, 0.3),
            (0.6, 0.7),
            (0.8, 0.6),
            (1.0, 1.0),
        ],
    )
}

/// Treppenstufen mit weichen Übergängen.
pub fn steps() -> CurveSpline {
    preset(
        "steps",
        "Steps",
        &[
            (0.0, 0.0),
            (0.2, 0.25),
            (0.3, 0.25),
            (0.5, 0.5),
            (0.6, 0.5),
            (0.8, 0.75),
            (0.9, 0.75),
            (1.0, 1.0),
        ],
    )
}

/// Näherung eines Überschwingers innerhalb von `[0,1]`.
pub fn overshoot() -> CurveSpline {
    preset(
        "overshoot",
        "Overshoot",
        &[(0.0, 0.0), (0.6, 0.85), (0.8, 0.95), (0.9, 0.98), (1.0, 1.0)],
    )
}

/// Alle Vorlagen in fester Reihenfolge.
pub fn all() -> Vec<CurveSpline> {
    vec![
        smooth_s(),
        bounce(),
        quick_start(),
        slow_start(),
        wave(),
        steps(),
        overshoot(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_have_unique_keys_and_unit_endpoints() {
        let presets = all();
        let mut keys: Vec<&str> = presets.iter().filter_map(|c| c.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), presets.len());

        for curve in &presets {
            assert_eq!(curve.evaluate(0.0).unwrap(), 0.0, "{}", curve.name());
            assert_eq!(curve.evaluate(1.0).unwrap(), 1.0, "{}", curve.name());
        }
    }
}
