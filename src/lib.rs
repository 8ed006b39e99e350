//! Ease-Curve-Editor Library.
//! Modell, Auswertung, Bearbeitungs-Constraints und Persistenz benutzerdefinierter Ease-Kurven.

pub mod app;
pub mod core;
pub mod shared;
pub mod store;

pub use app::{
    CurveRegistry, EditorInput, EditorSession, EditorState, LoadReport, Modifiers, PressOutcome,
};
pub use core::{
    Boundary, ControlPoint, CurveError, CurveLookup, CurveSpline, HandleSide, Interpolation,
};
pub use shared::{EditorOptions, HandleLimits};
pub use store::{BlobStore, FsBlobStore, MemoryBlobStore};
