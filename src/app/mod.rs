//! Application-Layer: Editor-Sitzung, Constraint-Engine, Events und Kurven-Registry.

pub mod constraints;
pub mod events;
pub mod input_log;
pub mod registry;
pub mod session;

pub use events::{EditorInput, Modifiers};
pub use input_log::{InputLog, LoggedInput};
pub use registry::{CurveRegistry, LoadReport};
pub use session::{EditorSession, EditorState, PressOutcome};
