//! Interpolations-Strategien: eingebaute Verläufe und benutzerdefinierte Kurven.
//!
//! Eine benutzerdefinierte Kurve ist eine Strategie unter mehreren, die über
//! ihren Registry-Key aufgelöst wird.

use super::bezier::lerp;
use super::curve_spline::CurveSpline;
use super::error::CurveError;

/// Quelle, aus der Kurven per Key aufgelöst werden (z.B. die Kurven-Registry).
pub trait CurveLookup {
    /// Gibt die Kurve unter `key` zurück, falls vorhanden.
    fn find_curve(&self, key: &str) -> Option<&CurveSpline>;
}

/// Interpolations-Art eines Keyframe-Übergangs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Linearer Übergang
    #[default]
    Linear,
    /// Sprung am Ende des Intervalls
    Constant,
    /// Benutzerdefinierte Kurve aus der Registry
    Custom(String),
}

impl Interpolation {
    /// Interpoliert zwischen `a` und `b` an Position `x`.
    ///
    /// Für [`Interpolation::Custom`] liefert ein unbekannter Key
    /// [`CurveError::CurveNotFound`]; eine Ersatzkurve wird nicht eingesetzt.
    pub fn interpolate(
        &self,
        curves: &impl CurveLookup,
        x: f64,
        a: f64,
        b: f64,
    ) -> Result<f64, CurveError> {
        match self {
            Interpolation::Linear => Ok(lerp(a, b, x)),
            Interpolation::Constant => Ok(if x >= 1.0 { b } else { a }),
            Interpolation::Custom(key) => curves
                .find_curve(key)
                .ok_or_else(|| CurveError::CurveNotFound(key.clone()))?
                .evaluate_in_range(x, a, b),
        }
    }

    /// Registry-Key einer benutzerdefinierten Kurve.
    pub fn curve_key(&self) -> Option<&str> {
        match self {
            Interpolation::Custom(key) => Some(key),
            _ => None,
        }
    }
}
