//! Öffentliche Sitzungs-Operationen und Input-Dispatch.

use super::drag;
use super::state::{EditorSession, PressOutcome};
use crate::app::constraints;
use crate::app::{EditorInput, Modifiers};
use crate::core::{ControlPoint, CurveError, CurveSpline};
use glam::DVec2;

impl EditorSession {
    // ── Gesten-Protokoll ────────────────────────────────────────

    /// Gesten-Beginn (Maustaste gedrückt).
    pub fn begin_gesture(
        &mut self,
        spline: &mut CurveSpline,
        pos: DVec2,
        modifiers: Modifiers,
    ) -> PressOutcome {
        drag::begin(self, spline, pos, modifiers)
    }

    /// Gesten-Update (Zeiger bewegt). Gibt `true` zurück, wenn der Spline verändert wurde.
    pub fn update_gesture(
        &mut self,
        spline: &mut CurveSpline,
        pos: DVec2,
        modifiers: Modifiers,
    ) -> bool {
        drag::update(self, spline, pos, modifiers)
    }

    /// Gesten-Ende (Maustaste losgelassen).
    pub fn end_gesture(&mut self) {
        drag::end(self);
    }

    // ── Punkt-Operationen ───────────────────────────────────────

    /// Fügt bei `x = 0.5` einen Punkt genau auf der aktuellen Kurve ein.
    ///
    /// Der neue Punkt erhält kurze symmetrische horizontale Tangenten.
    /// Eine bestehende Selektion folgt ihrem Punkt. Gibt den Index des neuen Punkts zurück.
    pub fn add_point(&mut self, spline: &mut CurveSpline) -> Result<usize, CurveError> {
        let x = self.options.insert_point_x;
        let y = spline.evaluate(x)?;
        let h = self.options.inserted_handle_length;
        let point = ControlPoint::new(x, y).with_tangents(DVec2::new(-h, 0.0), DVec2::new(h, 0.0));
        let index = spline.add_point(point);
        if let Some(selected) = self.selected_point.filter(|&s| s >= index) {
            self.selected_point = Some(selected + 1);
        }
        log::debug!("Punkt eingefügt bei ({:.3}, {:.3}) → Index {}", x, y, index);
        Ok(index)
    }

    /// Entfernt den selektierten Punkt.
    ///
    /// No-op (`false`), wenn nichts selektiert ist oder weniger als 3 Punkte
    /// übrig blieben.
    pub fn remove_selected_point(&mut self, spline: &mut CurveSpline) -> bool {
        let Some(index) = self.valid_selection(spline) else {
            return false;
        };
        if !spline.remove_point(index) {
            return false;
        }
        self.clear_selection();
        true
    }

    /// Setzt die Kurve auf die zwei Standard-Punkte zurück und hebt die Selektion auf.
    pub fn reset(&mut self, spline: &mut CurveSpline) {
        spline.reset();
        self.clear_selection();
    }

    /// Schaltet das Smooth-Flag des Punkts `index` um.
    pub fn toggle_smooth(&mut self, spline: &mut CurveSpline, index: usize) -> bool {
        let Some(point) = spline.point(index) else {
            return false;
        };
        let toggled = constraints::toggle_smooth(point);
        spline.set_smooth(index, toggled.smooth)
    }

    /// Übernimmt eine Punktposition aus Textfeldern.
    ///
    /// Nicht parsebarer Text wird ignoriert (Zustand bleibt unverändert).
    /// Die Position durchläuft dieselbe Klemmung wie ein Punkt-Drag.
    pub fn set_point_from_text(
        &mut self,
        spline: &mut CurveSpline,
        index: usize,
        x_text: &str,
        y_text: &str,
    ) -> bool {
        let (Ok(x), Ok(y)) = (x_text.trim().parse::<f64>(), y_text.trim().parse::<f64>()) else {
            log::debug!("Ungültige Eingabe ignoriert: x='{}', y='{}'", x_text, y_text);
            return false;
        };
        if index >= spline.len() {
            return false;
        }
        let target = constraints::clamp_point_position(spline.boundary(index), DVec2::new(x, y));
        let Some(new_index) = spline.update_point(index, target.x, target.y) else {
            return false;
        };
        self.follow_point_move(index, new_index);
        true
    }

    // ── Dispatch ────────────────────────────────────────────────

    /// Verarbeitet eine Host-Eingabe und protokolliert sie im Eingabe-Log.
    pub fn handle_input(
        &mut self,
        spline: &mut CurveSpline,
        input: EditorInput,
    ) -> anyhow::Result<()> {
        self.log.record(input.clone());
        match input {
            EditorInput::PointerPressed { pos, modifiers } => {
                self.begin_gesture(spline, pos, modifiers);
            }
            EditorInput::PointerMoved { pos, modifiers } => {
                self.update_gesture(spline, pos, modifiers);
            }
            EditorInput::PointerReleased => self.end_gesture(),
            EditorInput::AddPointRequested => {
                self.add_point(spline)?;
            }
            EditorInput::RemovePointRequested => {
                self.remove_selected_point(spline);
            }
            EditorInput::ResetRequested => self.reset(spline),
            EditorInput::ToggleSmoothRequested { index } => {
                self.toggle_smooth(spline, index);
            }
            EditorInput::PointTextEdited {
                index,
                x_text,
                y_text,
            } => {
                self.set_point_from_text(spline, index, &x_text, &y_text);
            }
        }
        Ok(())
    }
}
