//! Fehlertypen der Kurven-Domäne.

use thiserror::Error;

/// Fehler bei Auswertung und Lookup von Kurven.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// Zu wenige Punkte erreichen den Evaluator (sollte bei gültigem Spline nie auftreten)
    #[error("ungültige Kurve: {points} Punkte, mindestens 1 erforderlich")]
    InvalidCurve { points: usize },
    /// Kein Kurven-Eintrag unter diesem Key registriert
    #[error("Kurve nicht gefunden: {0}")]
    CurveNotFound(String),
}
