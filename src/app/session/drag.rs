//! Gesten-Logik der Editor-Sitzung (Hit-Test, Drag-Beginn, -Update, -Ende).

use super::state::{DragMode, EditorSession, PressOutcome};
use crate::app::constraints::{self, HandleContext, PointContext};
use crate::app::Modifiers;
use crate::core::{Boundary, CurveSpline, HandleSide};
use glam::DVec2;

/// Gibt die absoluten Positionen aller greifbaren Handles des selektierten Punkts zurück.
///
/// Nur glatte Punkte haben Handles; der erste Punkt hat kein In-Handle,
/// der letzte kein Out-Handle.
pub(crate) fn handle_targets(session: &EditorSession, spline: &CurveSpline) -> Vec<(HandleSide, DVec2)> {
    let Some(index) = session.valid_selection(spline) else {
        return vec![];
    };
    let Some(point) = spline.point(index) else {
        return vec![];
    };
    if !point.smooth {
        return vec![];
    }
    let boundary = spline.boundary(index);
    let mut targets = Vec::with_capacity(2);
    if boundary != Boundary::First {
        targets.push((HandleSide::In, point.handle_position(HandleSide::In)));
    }
    if boundary != Boundary::Last {
        targets.push((HandleSide::Out, point.handle_position(HandleSide::Out)));
    }
    targets
}

/// Nächster Punkt innerhalb von `radius` um `pos`.
pub(crate) fn nearest_point(spline: &CurveSpline, pos: DVec2, radius: f64) -> Option<usize> {
    spline
        .points()
        .iter()
        .enumerate()
        .map(|(index, p)| (index, p.position().distance(pos)))
        .filter(|&(_, dist)| dist <= radius)
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(index, _)| index)
}

/// Startet eine Geste an `pos`.
///
/// Handles des selektierten Punkts haben Vorrang vor Punkten; ein Alt-Klick
/// auf einen Punkt schaltet nur dessen Smooth-Flag um.
pub(crate) fn begin(
    session: &mut EditorSession,
    spline: &mut CurveSpline,
    pos: DVec2,
    modifiers: Modifiers,
) -> PressOutcome {
    let mut candidates: Vec<(HandleSide, f64)> = handle_targets(session, spline)
        .into_iter()
        .map(|(side, handle)| (side, handle.distance(pos)))
        .collect();
    candidates.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    if let (Some(&(side, dist)), Some(index)) =
        (candidates.first(), session.valid_selection(spline))
    {
        if dist <= session.options.handle_pick_radius {
            if let Some(point) = spline.point(index) {
                session.selected_handle = Some(side);
                session.drag = DragMode::Handle(HandleContext {
                    side,
                    boundary: spline.boundary(index),
                    point: point.position(),
                    original: point.tangent(side),
                });
                log::debug!("Tangenten-Drag gestartet: Punkt {} {:?}", index, side);
                return PressOutcome::HandleGrabbed(side);
            }
        }
    }

    if let Some(index) = nearest_point(spline, pos, session.options.point_pick_radius) {
        if modifiers.toggle_smooth() {
            if let Some(point) = spline.point(index) {
                let toggled = constraints::toggle_smooth(point);
                spline.set_smooth(index, toggled.smooth);
                log::debug!("Punkt {} smooth = {}", index, toggled.smooth);
            }
            return PressOutcome::SmoothToggled(index);
        }
        if let Some(point) = spline.point(index) {
            session.selected_point = Some(index);
            session.selected_handle = None;
            session.drag = DragMode::Point(PointContext {
                boundary: spline.boundary(index),
                origin: point.position(),
            });
            log::debug!("Punkt-Drag gestartet: Punkt {}", index);
            return PressOutcome::PointGrabbed(index);
        }
    }

    session.clear_selection();
    PressOutcome::SelectionCleared
}

/// Wendet eine Zeigerbewegung auf die laufende Geste an.
///
/// Gibt `true` zurück, wenn der Spline verändert wurde. Jeder Zwischenzustand
/// erfüllt alle Constraints.
pub(crate) fn update(
    session: &mut EditorSession,
    spline: &mut CurveSpline,
    pos: DVec2,
    modifiers: Modifiers,
) -> bool {
    let Some(index) = session.valid_selection(spline) else {
        session.drag = DragMode::Idle;
        return false;
    };
    match session.drag {
        DragMode::Idle => false,
        DragMode::Point(ctx) => {
            let ctx = PointContext {
                boundary: spline.boundary(index),
                ..ctx
            };
            let target = constraints::constrain_point(&ctx, pos, modifiers);
            match spline.update_point(index, target.x, target.y) {
                Some(new_index) => {
                    session.follow_point_move(index, new_index);
                    true
                }
                None => false,
            }
        }
        DragMode::Handle(ctx) => {
            let Some(point) = spline.point(index).copied() else {
                return false;
            };
            let ctx = HandleContext {
                point: point.position(),
                ..ctx
            };
            let offset = constraints::constrain_handle(
                &ctx,
                pos - point.position(),
                modifiers,
                &session.options.handle_limits,
            );
            let pair = constraints::mirror_handles(&point, ctx.side, offset, modifiers.break_mirror());
            spline.set_tangents(index, pair.in_tangent, pair.out_tangent)
        }
    }
}

/// Beendet die laufende Geste; die Selektion bleibt erhalten.
pub(crate) fn end(session: &mut EditorSession) {
    if session.drag != DragMode::Idle {
        log::debug!("Geste beendet");
    }
    session.drag = DragMode::Idle;
}
