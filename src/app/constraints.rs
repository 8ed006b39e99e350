//! Constraint-Engine: korrigiert vorgeschlagene Punkt- und Tangenten-Edits.
//!
//! Alle Regeln sind reine Funktionen `(Kontext, Vorschlag) -> korrigierter Wert`.
//! Grenzwerte kommen explizit über [`HandleLimits`] herein, nie aus globalem Zustand.
//! Verletzungen werden korrigiert (geklemmt, gespiegelt, begrenzt), nie abgewiesen.

use crate::app::events::Modifiers;
use crate::core::{Boundary, ControlPoint, HandleSide};
use crate::shared::HandleLimits;
use glam::DVec2;

/// Kontext eines Punkt-Drags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointContext {
    /// Rolle des Punkts in der Folge
    pub boundary: Boundary,
    /// Position zu Beginn der Geste (Bezug für die Achsensperre)
    pub origin: DVec2,
}

/// Kontext eines Tangenten-Drags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleContext {
    /// Bearbeitete Tangente
    pub side: HandleSide,
    /// Rolle des Besitzer-Punkts
    pub boundary: Boundary,
    /// Position des Besitzer-Punkts
    pub point: DVec2,
    /// Tangenten-Offset vor Beginn der Geste
    pub original: DVec2,
}

/// Neue Tangenten eines Punkts nach einem Handle-Edit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandlePair {
    pub in_tangent: DVec2,
    pub out_tangent: DVec2,
}

/// Klemmt eine Punktposition auf `[0,1]²`; erster/letzter Punkt erhalten `x = 0` bzw. `x = 1`.
pub fn clamp_point_position(boundary: Boundary, proposal: DVec2) -> DVec2 {
    let clamped = DVec2::new(clamp_coord(proposal.x), clamp_coord(proposal.y));
    match boundary {
        Boundary::First => DVec2::new(0.0, clamped.y),
        Boundary::Last => DVec2::new(1.0, clamped.y),
        Boundary::Interior => clamped,
    }
}

fn clamp_coord(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Hemisphären-Regel: In-Tangente `x ≤ 0`, Out-Tangente `x ≥ 0`.
pub fn enforce_hemisphere(side: HandleSide, offset: DVec2) -> DVec2 {
    match side {
        HandleSide::In => DVec2::new(offset.x.min(0.0), offset.y),
        HandleSide::Out => DVec2::new(offset.x.max(0.0), offset.y),
    }
}

/// Begrenzt die Drehung gegenüber `original` auf höchstens 90°.
///
/// Liegt der Vorschlag in der abgewandten Halbebene (Skalarprodukt < 0),
/// wird er auf die Senkrechte zu `original` gelegt, und zwar auf die Seite,
/// die dem Vorschlag näher ist. Die Länge des Vorschlags bleibt erhalten.
/// Ist `original` kürzer als `reference_epsilon`, gibt es keine Bezugsrichtung.
pub fn limit_angle(original: DVec2, proposal: DVec2, reference_epsilon: f64) -> DVec2 {
    let length = proposal.length();
    if original.length() < reference_epsilon || length == 0.0 {
        return proposal;
    }
    let reference = original.normalize();
    if reference.dot(proposal / length) >= 0.0 {
        return proposal;
    }
    let perp = reference.perp();
    let direction = if proposal.dot(perp) >= 0.0 { perp } else { -perp };
    direction * length
}

/// Achsensperre: die betragsmäßig kleinere Komponente wird genullt.
pub fn lock_axis(offset: DVec2) -> DVec2 {
    if offset.x.abs() > offset.y.abs() {
        DVec2::new(offset.x, 0.0)
    } else {
        DVec2::new(0.0, offset.y)
    }
}

/// Begrenzt die Handle-Länge (Rand-Punkte großzügiger als innere Punkte).
pub fn limit_length(boundary: Boundary, offset: DVec2, limits: &HandleLimits) -> DVec2 {
    let max = if boundary.is_boundary() {
        limits.boundary_max_length
    } else {
        limits.interior_max_length
    };
    offset.clamp_length_max(max)
}

/// Hält die absolute Handle-Position von Rand-Punkten innerhalb von `[0,1]²`.
pub fn clamp_boundary_handle(point: DVec2, offset: DVec2) -> DVec2 {
    (point + offset).clamp(DVec2::ZERO, DVec2::ONE) - point
}

/// Wendet die vollständige Regelkette auf einen Tangenten-Vorschlag an.
///
/// Reihenfolge: Winkel → Achsensperre → Hemisphäre → Länge → Rand-Klemmung.
/// Das Ergebnis erfüllt die Hemisphären-Regel.
pub fn constrain_handle(
    ctx: &HandleContext,
    proposal: DVec2,
    modifiers: Modifiers,
    limits: &HandleLimits,
) -> DVec2 {
    let mut offset = limit_angle(ctx.original, proposal, limits.angle_reference_epsilon);
    if modifiers.lock_axis() {
        offset = lock_axis(offset);
    }
    offset = enforce_hemisphere(ctx.side, offset);
    offset = limit_length(ctx.boundary, offset, limits);
    if ctx.boundary.is_boundary() {
        offset = clamp_boundary_handle(ctx.point, offset);
    }
    offset
}

/// Wendet Achsensperre (relativ zur Gesten-Startposition) und Positions-Klemmung an.
pub fn constrain_point(ctx: &PointContext, proposal: DVec2, modifiers: Modifiers) -> DVec2 {
    let target = if modifiers.lock_axis() {
        ctx.origin + lock_axis(proposal - ctx.origin)
    } else {
        proposal
    };
    clamp_point_position(ctx.boundary, target)
}

/// Setzt die bearbeitete Tangente und spiegelt sie ohne `break_mirror` auf die Gegenseite.
///
/// Die Spiegelung ist immer die exakte Negation und wird nicht geklemmt.
/// Bei Rand-Punkten zeigt die gespiegelte Tangente daher ggf. aus `[0,1]²`
/// heraus; sie ist dort aber weder greifbar noch an einem Segment beteiligt
/// (erster Punkt: nur Out wirkt, letzter Punkt: nur In wirkt).
pub fn mirror_handles(
    point: &ControlPoint,
    side: HandleSide,
    offset: DVec2,
    break_mirror: bool,
) -> HandlePair {
    let mut pair = HandlePair {
        in_tangent: point.in_tangent,
        out_tangent: point.out_tangent,
    };
    let mirrored = -offset;
    match side {
        HandleSide::In => {
            pair.in_tangent = offset;
            if !break_mirror {
                pair.out_tangent = mirrored;
            }
        }
        HandleSide::Out => {
            pair.out_tangent = offset;
            if !break_mirror {
                pair.in_tangent = mirrored;
            }
        }
    }
    pair
}

/// Schaltet nur das Smooth-Flag um.
pub fn toggle_smooth(point: &ControlPoint) -> ControlPoint {
    let mut toggled = *point;
    toggled.smooth = !toggled.smooth;
    toggled
}
