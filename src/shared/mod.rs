//! Geteilte Konfiguration für `app` und Host-Anwendung.

pub mod options;

pub use options::{EditorOptions, HandleLimits};
