//! State-Definitionen und Konstruktor der Editor-Sitzung.

use crate::app::constraints::{HandleContext, PointContext};
use crate::app::InputLog;
use crate::core::{CurveSpline, HandleSide};
use crate::shared::EditorOptions;

/// Aktuell laufende Geste.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum DragMode {
    /// Keine Geste aktiv
    Idle,
    /// Punkt wird verschoben
    Point(PointContext),
    /// Tangenten-Handle wird verschoben
    Handle(HandleContext),
}

/// Öffentlich sichtbarer Zustand des Automaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Idle,
    PointSelected,
    DraggingPoint,
    DraggingHandle,
}

/// Ergebnis eines Maus-Drucks (Gesten-Beginn).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Tangente des selektierten Punkts gegriffen
    HandleGrabbed(HandleSide),
    /// Punkt selektiert und gegriffen (Index nach Selektion)
    PointGrabbed(usize),
    /// Smooth-Flag umgeschaltet, keine Geste gestartet
    SmoothToggled(usize),
    /// Nichts getroffen, Selektion aufgehoben
    SelectionCleared,
}

/// Transienter Interaktionszustand über einem extern gehaltenen Spline.
///
/// Hält nur Indizes in den bearbeiteten Spline, nie eine Kopie der Punktdaten.
/// Alle Mutationen laufen über die Sitzung.
#[derive(Debug)]
pub struct EditorSession {
    pub(crate) selected_point: Option<usize>,
    pub(crate) selected_handle: Option<HandleSide>,
    pub(crate) drag: DragMode,
    pub(crate) options: EditorOptions,
    pub(crate) log: InputLog,
}

impl EditorSession {
    /// Erstellt eine Sitzung ohne Selektion.
    pub fn new(options: EditorOptions) -> Self {
        Self {
            selected_point: None,
            selected_handle: None,
            drag: DragMode::Idle,
            options,
            log: InputLog::new(),
        }
    }

    /// Aktueller Automaten-Zustand.
    pub fn state(&self) -> EditorState {
        match self.drag {
            DragMode::Point(_) => EditorState::DraggingPoint,
            DragMode::Handle(_) => EditorState::DraggingHandle,
            DragMode::Idle if self.selected_point.is_some() => EditorState::PointSelected,
            DragMode::Idle => EditorState::Idle,
        }
    }

    pub fn selected_point(&self) -> Option<usize> {
        self.selected_point
    }

    pub fn selected_handle(&self) -> Option<HandleSide> {
        self.selected_handle
    }

    pub fn is_dragging(&self) -> bool {
        self.drag != DragMode::Idle
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: EditorOptions) {
        self.options = options;
    }

    /// Log aller verarbeiteten Eingaben.
    pub fn input_log(&self) -> &InputLog {
        &self.log
    }

    /// Selektierter Index, sofern er im Spline noch existiert.
    pub(crate) fn valid_selection(&self, spline: &CurveSpline) -> Option<usize> {
        self.selected_point.filter(|&index| index < spline.len())
    }

    /// Führt die Selektion nach, wenn ein Punkt von `from` nach `to` umsortiert wurde.
    ///
    /// Die Punkte dazwischen rücken um eine Stelle auf; die Selektion bleibt
    /// am selben Punkt.
    pub(crate) fn follow_point_move(&mut self, from: usize, to: usize) {
        let Some(selected) = self.selected_point else {
            return;
        };
        self.selected_point = Some(if selected == from {
            to
        } else if from < selected && selected <= to {
            selected - 1
        } else if to <= selected && selected < from {
            selected + 1
        } else {
            selected
        });
    }

    /// Hebt Selektion und laufende Geste auf.
    pub fn clear_selection(&mut self) {
        self.selected_point = None;
        self.selected_handle = None;
        self.drag = DragMode::Idle;
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorOptions::default())
    }
}
