//! Editor-Sitzung: Zustandsautomat für die interaktive Kurvenbearbeitung.
//!
//! **Punkt-Drag:** Klick auf einen Punkt selektiert ihn und startet die Geste;
//! jede Zeigerbewegung verschiebt ihn (Randpunkte nur in Y) und sortiert neu.
//!
//! **Tangenten-Drag:** Bei selektiertem glatten Punkt greift ein Klick auf ein
//! Handle dessen Tangente. Die Constraint-Engine korrigiert jeden Frame;
//! ohne Shift wird die Gegen-Tangente gespiegelt, Strg sperrt die Achse.
//!
//! **Alt-Klick** auf einen Punkt schaltet nur dessen Smooth-Flag um.
//!
//! Aufgeteilt in:
//! - `state`: Structs, Enums, Konstruktor, Abfragen
//! - `drag`: Gesten-Protokoll (begin / update / end) inkl. Hit-Test
//! - `lifecycle`: Punkt hinzufügen/entfernen, Reset, Textfeld-Edits, Input-Dispatch

mod drag;
mod lifecycle;
mod state;

pub use state::{EditorSession, EditorState, PressOutcome};
