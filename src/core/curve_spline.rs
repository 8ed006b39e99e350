//! CurveSpline: sortierte Kontrollpunkt-Folge einer Ease-Kurve samt Auswertung.
//!
//! Die Kurve wird immer im Einheitsraum `[0,1]²` modelliert. Die Skalierung
//! auf einen Ausgabebereich übernimmt der Aufrufer über [`CurveSpline::evaluate_in_range`].

use super::bezier::{cubic_bezier, lerp, solve_t_for_x};
use super::control_point::{clamp_unit, ControlPoint, HandleSide};
use super::error::CurveError;
use glam::DVec2;

/// Minimale Punktanzahl eines Splines.
pub const MIN_POINTS: usize = 2;

/// Segmente schmaler als diese X-Breite gelten als senkrechte Sprünge.
const SEGMENT_WIDTH_EPSILON: f64 = 1e-12;

/// Position eines Punkts innerhalb der Folge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Erster Punkt (X fest auf 0)
    First,
    /// Letzter Punkt (X fest auf 1)
    Last,
    /// Innerer Punkt
    Interior,
}

impl Boundary {
    /// Bestimmt die Rolle des Punkts `index` in einer Folge der Länge `len`.
    pub fn of(index: usize, len: usize) -> Self {
        if index == 0 {
            Boundary::First
        } else if index + 1 >= len {
            Boundary::Last
        } else {
            Boundary::Interior
        }
    }

    pub fn is_boundary(self) -> bool {
        self != Boundary::Interior
    }
}

/// Benutzerdefinierte Ease-Kurve.
///
/// Invarianten:
/// - Punkte immer aufsteigend nach `x` sortiert (stabil)
/// - mindestens [`MIN_POINTS`] Punkte
///
/// Lesender Zugriff erfolgt über ein unveränderliches Slice oder eine Kopie,
/// Mutationen nur über die expliziten Methoden, die anschließend neu sortieren.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSpline {
    key: Option<String>,
    name: String,
    points: Vec<ControlPoint>,
}

impl CurveSpline {
    /// Erstellt eine lineare Standard-Kurve `(0,0)` → `(1,1)`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            key: None,
            name: name.into(),
            points: Self::default_points(),
        }
    }

    /// Erstellt eine Kurve aus beliebigen Punkten.
    ///
    /// Bei weniger als [`MIN_POINTS`] Punkten werden die Standard-Punkte verwendet.
    pub fn from_points(
        key: Option<String>,
        name: impl Into<String>,
        points: Vec<ControlPoint>,
    ) -> Self {
        let mut spline = Self {
            key,
            name: name.into(),
            points: Vec::new(),
        };
        spline.set_points(points);
        spline
    }

    /// Builder: setzt den Registry-Key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    fn default_points() -> Vec<ControlPoint> {
        vec![ControlPoint::new(0.0, 0.0), ControlPoint::new(1.0, 1.0)]
    }

    // ── Identität ───────────────────────────────────────────────

    /// Registry-Key (None = noch nicht gespeichert).
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = Some(key.into());
    }

    pub fn clear_key(&mut self) {
        self.key = None;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    // ── Lesender Zugriff ────────────────────────────────────────

    /// Unveränderliche Sicht auf alle Punkte (sortiert).
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Kopie aller Punkte.
    pub fn to_points(&self) -> Vec<ControlPoint> {
        self.points.clone()
    }

    pub fn point(&self, index: usize) -> Option<&ControlPoint> {
        self.points.get(index)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Immer `false` für gültige Splines; nur der Vollständigkeit halber.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Rolle des Punkts `index` (erster / letzter / innerer).
    pub fn boundary(&self, index: usize) -> Boundary {
        Boundary::of(index, self.points.len())
    }

    // ── Mutationen ──────────────────────────────────────────────

    /// Ersetzt alle Punkte (sortiert; < 2 Punkte → Standard-Punkte).
    pub fn set_points(&mut self, points: Vec<ControlPoint>) {
        if points.len() < MIN_POINTS {
            log::debug!(
                "Spline '{}': {} Punkte übergeben, verwende Standard-Punkte",
                self.name,
                points.len()
            );
            self.points = Self::default_points();
        } else {
            self.points = points;
            self.sort_points();
        }
    }

    /// Setzt die Punkte auf `(0,0)` und `(1,1)` zurück.
    pub fn reset(&mut self) {
        self.points = Self::default_points();
    }

    /// Fügt einen Punkt ein und gibt dessen Index nach dem Sortieren zurück.
    ///
    /// Bei gleichem `x` wird der neue Punkt hinter bestehenden einsortiert.
    pub fn add_point(&mut self, point: ControlPoint) -> usize {
        let index = self.points.partition_point(|p| p.x() <= point.x());
        self.points.insert(index, point);
        index
    }

    /// Entfernt den Punkt `index`.
    ///
    /// Gibt `false` zurück (ohne Änderung), wenn danach weniger als
    /// [`MIN_POINTS`] Punkte übrig blieben oder der Index ungültig ist.
    pub fn remove_point(&mut self, index: usize) -> bool {
        if self.points.len() <= MIN_POINTS || index >= self.points.len() {
            return false;
        }
        self.points.remove(index);
        true
    }

    /// Verschiebt den Punkt `index` und gibt seinen neuen Index zurück.
    ///
    /// Die Position wird geklemmt. Nach dem Verschieben wird der Punkt so
    /// einsortiert, als wäre die gesamte Folge stabil sortiert worden: Punkte
    /// mit gleichem `x` behalten ihre bisherige relative Reihenfolge.
    pub fn update_point(&mut self, index: usize, x: f64, y: f64) -> Option<usize> {
        if index >= self.points.len() {
            return None;
        }
        let mut point = self.points.remove(index);
        point.set_position(x, y);
        let x = point.x();
        let lo = self.points.partition_point(|p| p.x() < x);
        let hi = self.points.partition_point(|p| p.x() <= x);
        let new_index = index.clamp(lo, hi);
        self.points.insert(new_index, point);
        Some(new_index)
    }

    /// Setzt einen Tangenten-Offset des Punkts `index` (ohne Constraints).
    pub fn set_tangent(&mut self, index: usize, side: HandleSide, offset: DVec2) -> bool {
        match self.points.get_mut(index) {
            Some(point) => {
                point.set_tangent(side, offset);
                true
            }
            None => false,
        }
    }

    /// Setzt beide Tangenten des Punkts `index`.
    pub fn set_tangents(&mut self, index: usize, in_tangent: DVec2, out_tangent: DVec2) -> bool {
        match self.points.get_mut(index) {
            Some(point) => {
                point.in_tangent = in_tangent;
                point.out_tangent = out_tangent;
                true
            }
            None => false,
        }
    }

    /// Setzt das Smooth-Flag des Punkts `index`.
    pub fn set_smooth(&mut self, index: usize, smooth: bool) -> bool {
        match self.points.get_mut(index) {
            Some(point) => {
                point.smooth = smooth;
                true
            }
            None => false,
        }
    }

    fn sort_points(&mut self) {
        // sort_by ist stabil → gleiche X-Werte behalten ihre Reihenfolge
        self.points
            .sort_by(|a, b| a.x().partial_cmp(&b.x()).unwrap_or(std::cmp::Ordering::Equal));
    }

    // ── Auswertung ──────────────────────────────────────────────

    /// Wertet die normierte Kurve an `t` aus (Ergebnis in `[0,1]`).
    pub fn evaluate(&self, t: f64) -> Result<f64, CurveError> {
        evaluate_points(&self.points, t)
    }

    /// Wertet die Kurve aus und bildet das Ergebnis auf `[low, high]` ab.
    pub fn evaluate_in_range(&self, t: f64, low: f64, high: f64) -> Result<f64, CurveError> {
        Ok(lerp(low, high, self.evaluate(t)?))
    }
}

impl Default for CurveSpline {
    fn default() -> Self {
        Self::new("Custom Curve")
    }
}

/// Wertet eine sortierte Punktfolge an `t` aus.
///
/// Vor dem ersten Punkt (und für `NaN`) gilt dessen `y`, hinter dem letzten Punkt dessen `y`.
/// Zwischen zwei glatten Punkten wird das kubische Bézier-Segment
/// `(links, links+out, rechts+in, rechts)` über Newton-Raphson in X invertiert,
/// sonst linear interpoliert.
pub fn evaluate_points(points: &[ControlPoint], t: f64) -> Result<f64, CurveError> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Err(CurveError::InvalidCurve { points: 0 });
    };
    // NaN fällt durch beide Vergleiche und wird wie `t` vor dem ersten Punkt behandelt
    if t.is_nan() || t <= first.x() {
        return Ok(first.y());
    }
    if t >= last.x() {
        return Ok(last.y());
    }

    // Rechtester Punkt mit x ≤ t, linkester Punkt mit x ≥ t
    let left_index = points.partition_point(|p| p.x() <= t) - 1;
    let right_index = points.partition_point(|p| p.x() < t);
    if left_index == right_index {
        return Ok(points[left_index].y());
    }

    let left = &points[left_index];
    let right = &points[right_index];
    let width = right.x() - left.x();
    if width < SEGMENT_WIDTH_EPSILON {
        return Ok(left.y());
    }
    let fraction = (t - left.x()) / width;

    if !(left.smooth && right.smooth) {
        return Ok(lerp(left.y(), right.y(), fraction));
    }

    let p0 = left.position();
    let p1 = left.position() + left.out_tangent;
    let p2 = right.position() + right.in_tangent;
    let p3 = right.position();

    let bezier_t = solve_t_for_x([p0.x, p1.x, p2.x, p3.x], t, fraction);
    Ok(clamp_unit(cubic_bezier(p0.y, p1.y, p2.y, p3.y, bezier_t)))
}

#[cfg(test)]
mod tests;
