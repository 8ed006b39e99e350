//! Einzelner Kontrollpunkt einer Ease-Kurve mit In-/Out-Tangente.

use glam::DVec2;

/// Standard-Länge der horizontalen Tangenten eines neuen Punkts.
pub const DEFAULT_TANGENT_LENGTH: f64 = 0.1;

/// Welche Tangente eines Punkts wird bearbeitet?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleSide {
    /// Eingehende Tangente (zeigt zum vorherigen Segment, X ≤ 0)
    In,
    /// Ausgehende Tangente (zeigt zum nächsten Segment, X ≥ 0)
    Out,
}

impl HandleSide {
    /// Gibt die jeweils andere Seite zurück.
    pub fn opposite(self) -> Self {
        match self {
            HandleSide::In => HandleSide::Out,
            HandleSide::Out => HandleSide::In,
        }
    }
}

/// Klemmt einen Koordinatenwert auf `[0, 1]`. NaN wird zu 0.
#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Kontrollpunkt im Einheitsraum `[0,1]²`.
///
/// Die Position ist nur über klemmende Setter schreibbar, damit
/// `x ∈ [0,1]` und `y ∈ [0,1]` nach jeder Mutation gelten. Die Tangenten
/// sind Offsets relativ zum Punkt; ihre Grenzen setzt die Constraint-Engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    x: f64,
    y: f64,
    /// Offset der eingehenden Tangente (Bézier-Steuerpunkt = Punkt + Offset)
    pub in_tangent: DVec2,
    /// Offset der ausgehenden Tangente
    pub out_tangent: DVec2,
    /// `false` = angrenzende Segmente werden linear interpoliert
    pub smooth: bool,
}

impl ControlPoint {
    /// Erstellt einen glatten Punkt mit horizontalen Standard-Tangenten.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: clamp_unit(x),
            y: clamp_unit(y),
            in_tangent: DVec2::new(-DEFAULT_TANGENT_LENGTH, 0.0),
            out_tangent: DVec2::new(DEFAULT_TANGENT_LENGTH, 0.0),
            smooth: true,
        }
    }

    /// Erstellt einen Eckpunkt (lineare Segmente).
    pub fn linear(x: f64, y: f64) -> Self {
        Self {
            smooth: false,
            ..Self::new(x, y)
        }
    }

    /// Builder: setzt beide Tangenten.
    pub fn with_tangents(mut self, in_tangent: DVec2, out_tangent: DVec2) -> Self {
        self.in_tangent = in_tangent;
        self.out_tangent = out_tangent;
        self
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Position als Vektor.
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Setzt die Position (geklemmt auf `[0,1]²`).
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = clamp_unit(x);
        self.y = clamp_unit(y);
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = clamp_unit(x);
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = clamp_unit(y);
    }

    /// Tangenten-Offset der angegebenen Seite.
    pub fn tangent(&self, side: HandleSide) -> DVec2 {
        match side {
            HandleSide::In => self.in_tangent,
            HandleSide::Out => self.out_tangent,
        }
    }

    /// Setzt den Tangenten-Offset der angegebenen Seite (ohne Constraints).
    pub fn set_tangent(&mut self, side: HandleSide, offset: DVec2) {
        match side {
            HandleSide::In => self.in_tangent = offset,
            HandleSide::Out => self.out_tangent = offset,
        }
    }

    /// Absolute Position des Tangenten-Handles im Einheitsraum.
    pub fn handle_position(&self, side: HandleSide) -> DVec2 {
        self.position() + self.tangent(side)
    }
}

impl Default for ControlPoint {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl std::fmt::Display for ControlPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
