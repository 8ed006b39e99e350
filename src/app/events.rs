//! Eingabe-Events des Kurven-Editors.
//! Positionen liegen bereits im Einheitsraum der Kurve (Mapping übernimmt der Host).

use glam::DVec2;

/// Modifier-Tasten, pro Event abgetastet.
///
/// Der Editor wertet sie als neutrale Flags aus:
/// - `alt`: Smooth-Flag des getroffenen Punkts umschalten
/// - `ctrl`: Bewegung auf die dominante Achse sperren
/// - `shift`: Spiegelung der Gegen-Tangente aufheben
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    /// Keine Modifier gedrückt.
    pub const NONE: Self = Self {
        alt: false,
        ctrl: false,
        shift: false,
    };

    pub fn toggle_smooth(&self) -> bool {
        self.alt
    }

    pub fn lock_axis(&self) -> bool {
        self.ctrl
    }

    pub fn break_mirror(&self) -> bool {
        self.shift
    }
}

/// Eingaben aus dem Host ohne eigene Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorInput {
    /// Maustaste gedrückt (Gesten-Beginn)
    PointerPressed { pos: DVec2, modifiers: Modifiers },
    /// Zeiger bewegt (nur während einer Geste wirksam)
    PointerMoved { pos: DVec2, modifiers: Modifiers },
    /// Maustaste losgelassen (Gesten-Ende)
    PointerReleased,
    /// Neuen Punkt bei x = 0.5 auf der aktuellen Kurve einfügen
    AddPointRequested,
    /// Selektierten Punkt entfernen
    RemovePointRequested,
    /// Kurve auf die zwei Standard-Punkte zurücksetzen
    ResetRequested,
    /// Smooth-Flag eines Punkts umschalten
    ToggleSmoothRequested { index: usize },
    /// Position aus Textfeldern übernehmen
    PointTextEdited {
        index: usize,
        x_text: String,
        y_text: String,
    },
}
