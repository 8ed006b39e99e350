//! Core-Domänentypen: Kontrollpunkte, CurveSpline, Bézier-Solver, Interpolations-Strategien.

pub mod bezier;
pub mod control_point;
pub mod curve_spline;
pub mod error;
pub mod interpolation;
pub mod presets;

pub use control_point::{ControlPoint, HandleSide, DEFAULT_TANGENT_LENGTH};
pub use curve_spline::{evaluate_points, Boundary, CurveSpline, MIN_POINTS};
pub use error::CurveError;
pub use interpolation::{CurveLookup, Interpolation};
