//! Zentrale Konfiguration für den Kurven-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Hit-Test ────────────────────────────────────────────────────────

/// Pick-Radius für Kontrollpunkte (Einheitsraum).
pub const POINT_PICK_RADIUS: f64 = 0.02;
/// Pick-Radius für Tangenten-Handles (Einheitsraum).
pub const HANDLE_PICK_RADIUS: f64 = 0.015;

// ── Tangenten ───────────────────────────────────────────────────────

/// Maximale Handle-Länge am ersten/letzten Punkt.
pub const BOUNDARY_HANDLE_MAX_LENGTH: f64 = 1.5;
/// Maximale Handle-Länge an inneren Punkten.
pub const INTERIOR_HANDLE_MAX_LENGTH: f64 = 0.7;
/// Halbe Handle-Länge eines per "Punkt hinzufügen" eingefügten Punkts.
pub const INSERTED_HANDLE_LENGTH: f64 = 0.08;
/// Unterhalb dieser Länge gilt die Ausgangs-Tangente als richtungslos
/// (keine Winkelbegrenzung).
pub const ANGLE_REFERENCE_EPSILON: f64 = 0.01;

// ── Punkte ──────────────────────────────────────────────────────────

/// X-Position neu eingefügter Punkte.
pub const INSERT_POINT_X: f64 = 0.5;

/// Grenzen für Tangenten-Edits (explizit an die Constraint-Engine übergeben).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandleLimits {
    /// Maximale Länge am ersten/letzten Punkt
    pub boundary_max_length: f64,
    /// Maximale Länge an inneren Punkten
    pub interior_max_length: f64,
    /// Mindestlänge der Ausgangs-Tangente für die Winkelbegrenzung
    pub angle_reference_epsilon: f64,
}

impl Default for HandleLimits {
    fn default() -> Self {
        Self {
            boundary_max_length: BOUNDARY_HANDLE_MAX_LENGTH,
            interior_max_length: INTERIOR_HANDLE_MAX_LENGTH,
            angle_reference_epsilon: ANGLE_REFERENCE_EPSILON,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `ease_curve_editor.toml` gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Pick-Radius für Kontrollpunkte
    pub point_pick_radius: f64,
    /// Pick-Radius für Tangenten-Handles
    pub handle_pick_radius: f64,
    /// X-Position für "Punkt hinzufügen"
    #[serde(default = "default_insert_point_x")]
    pub insert_point_x: f64,
    /// Halbe Handle-Länge neu eingefügter Punkte
    pub inserted_handle_length: f64,
    /// Tangenten-Grenzen
    #[serde(default)]
    pub handle_limits: HandleLimits,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            point_pick_radius: POINT_PICK_RADIUS,
            handle_pick_radius: HANDLE_PICK_RADIUS,
            insert_point_x: INSERT_POINT_X,
            inserted_handle_length: INSERTED_HANDLE_LENGTH,
            handle_limits: HandleLimits::default(),
        }
    }
}

/// Serde-Default für `insert_point_x` (Abwärtskompatibilität).
fn default_insert_point_x() -> f64 {
    INSERT_POINT_X
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }
}
