//! Kubische Bézier-Funktionen für die Kurven-Auswertung (1D-Komponenten + Newton-Solver).

/// Maximale Anzahl Newton-Raphson-Iterationen pro Auswertung.
pub const NEWTON_MAX_ITERATIONS: usize = 8;
/// Unterhalb dieser Ableitung bricht der Solver ab (flache X-Komponente).
pub const NEWTON_MIN_DERIVATIVE: f64 = 1e-6;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
#[inline]
pub fn cubic_bezier(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// B'(t) = 3(1-t)²·(P1-P0) + 6(1-t)t·(P2-P1) + 3t²·(P3-P2)
#[inline]
pub fn cubic_bezier_derivative(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let inv = 1.0 - t;
    3.0 * inv * inv * (p1 - p0) + 6.0 * inv * t * (p2 - p1) + 3.0 * t * t * (p3 - p2)
}

/// Sucht den Bézier-Parameter `t`, dessen X-Komponente `target_x` ergibt.
///
/// - `xs`: X-Koordinaten der vier Steuerpunkte (P0..P3)
/// - `seed`: Startwert (üblicherweise der lineare Anteil von `target_x` im Segment)
///
/// Höchstens [`NEWTON_MAX_ITERATIONS`] Schritte; `t` wird nach jedem Schritt
/// auf `[0,1]` geklemmt. Bei nahezu degenerierten oder selbstschneidenden
/// Handle-Konfigurationen konvergiert das Verfahren nicht vollständig;
/// das Ergebnis bleibt dann der letzte geklemmte Schätzwert.
pub fn solve_t_for_x(xs: [f64; 4], target_x: f64, seed: f64) -> f64 {
    let [p0, p1, p2, p3] = xs;
    let mut t = seed.clamp(0.0, 1.0);
    for _ in 0..NEWTON_MAX_ITERATIONS {
        let dx = cubic_bezier_derivative(p0, p1, p2, p3, t);
        if dx.abs() < NEWTON_MIN_DERIVATIVE {
            break;
        }
        let current_x = cubic_bezier(p0, p1, p2, p3, t);
        t = (t - (current_x - target_x) / dx).clamp(0.0, 1.0);
    }
    t
}

/// Lineare Interpolation `a + (b - a) · t`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_cubic_bezier_endpoints() {
        assert_abs_diff_eq!(cubic_bezier(0.2, 0.9, -0.4, 0.7, 0.0), 0.2);
        assert_abs_diff_eq!(cubic_bezier(0.2, 0.9, -0.4, 0.7, 1.0), 0.7);
    }

    #[test]
    fn test_cubic_bezier_midpoint_weights() {
        // B(0.5) = (P0 + 3·P1 + 3·P2 + P3) / 8
        assert_abs_diff_eq!(cubic_bezier(0.0, 1.0, 1.0, 0.0, 0.5), 0.75, epsilon = 1e-12);
    }

    #[test]
    fn test_derivative_of_uniform_thirds_is_constant() {
        // Steuerpunkte auf Sehnen-Dritteln → X(t) = t
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let d = cubic_bezier_derivative(0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0, t);
            assert_abs_diff_eq!(d, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_solve_t_converges_for_monotonic_segment() {
        let xs = [0.0, 0.4, 0.6, 1.0];
        for i in 1..10 {
            let target = i as f64 / 10.0;
            let t = solve_t_for_x(xs, target, target);
            assert_abs_diff_eq!(cubic_bezier(xs[0], xs[1], xs[2], xs[3], t), target, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_solve_t_stays_in_unit_range_for_degenerate_handles() {
        // Handles kreuzen sich weit über die Segmentgrenzen hinaus
        let xs = [0.0, 1.4, -0.4, 1.0];
        for i in 0..=20 {
            let target = i as f64 / 20.0;
            let t = solve_t_for_x(xs, target, target);
            assert!((0.0..=1.0).contains(&t), "t={t} ausserhalb [0,1]");
        }
    }

    #[test]
    fn test_flat_derivative_aborts_at_seed() {
        // Alle X identisch → Ableitung 0 → Startwert bleibt erhalten
        let t = solve_t_for_x([0.5, 0.5, 0.5, 0.5], 0.7, 0.3);
        assert_eq!(t, 0.3);
    }
}
