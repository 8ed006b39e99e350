//! Serialisiertes Format einer Kurve (JSON, ein Record pro Key).
//!
//! Version 2 speichert Position, beide Tangenten und das Smooth-Flag.
//! Records der Version 1 enthalten nur `x`/`y`; fehlende Felder werden beim
//! Laden mit den Standard-Tangenten und `smooth = true` aufgefüllt.

use crate::core::{ControlPoint, CurveSpline, DEFAULT_TANGENT_LENGTH};
use anyhow::{bail, Context};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Aktuelle Schema-Version.
pub const RECORD_VERSION: u32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveRecord {
    /// Fehlt in Version-1-Records
    #[serde(default = "legacy_version")]
    pub version: u32,
    pub key: String,
    pub name: String,
    pub points: Vec<PointRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointRecord {
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_in_tangent_x")]
    pub in_tangent_x: f64,
    #[serde(default)]
    pub in_tangent_y: f64,
    #[serde(default = "default_out_tangent_x")]
    pub out_tangent_x: f64,
    #[serde(default)]
    pub out_tangent_y: f64,
    #[serde(default = "default_smooth")]
    pub smooth: bool,
}

fn legacy_version() -> u32 {
    1
}

fn default_in_tangent_x() -> f64 {
    -DEFAULT_TANGENT_LENGTH
}

fn default_out_tangent_x() -> f64 {
    DEFAULT_TANGENT_LENGTH
}

fn default_smooth() -> bool {
    true
}

impl From<&ControlPoint> for PointRecord {
    fn from(point: &ControlPoint) -> Self {
        Self {
            x: point.x(),
            y: point.y(),
            in_tangent_x: point.in_tangent.x,
            in_tangent_y: point.in_tangent.y,
            out_tangent_x: point.out_tangent.x,
            out_tangent_y: point.out_tangent.y,
            smooth: point.smooth,
        }
    }
}

impl From<PointRecord> for ControlPoint {
    fn from(record: PointRecord) -> Self {
        let mut point = ControlPoint::new(record.x, record.y).with_tangents(
            DVec2::new(record.in_tangent_x, record.in_tangent_y),
            DVec2::new(record.out_tangent_x, record.out_tangent_y),
        );
        point.smooth = record.smooth;
        point
    }
}

impl CurveRecord {
    /// Erstellt einen Record der aktuellen Version unter `key`.
    pub fn from_curve(key: &str, curve: &CurveSpline) -> Self {
        Self {
            version: RECORD_VERSION,
            key: key.to_string(),
            name: curve.name().to_string(),
            points: curve.points().iter().map(PointRecord::from).collect(),
        }
    }

    /// Baut den Spline (Key = Record-Key). Punkte werden sortiert und geklemmt.
    pub fn into_curve(self) -> CurveSpline {
        let points = self.points.into_iter().map(ControlPoint::from).collect();
        CurveSpline::from_points(Some(self.key), self.name, points)
    }

    pub fn to_json(&self) -> anyhow::Result<Vec<u8>> {
        serde_json::to_vec_pretty(self).context("Fehler beim Serialisieren des Kurven-Records")
    }

    /// Parst einen Record und prüft Version und Werte.
    pub fn from_json(data: &[u8]) -> anyhow::Result<Self> {
        let record: Self =
            serde_json::from_slice(data).context("Kurven-Record ist kein gueltiges JSON")?;
        if record.version == 0 || record.version > RECORD_VERSION {
            bail!("Unbekannte Record-Version {}", record.version);
        }
        if record.points.iter().any(|p| !p.is_finite()) {
            bail!("Record '{}' enthaelt nicht-endliche Werte", record.key);
        }
        Ok(record)
    }
}

impl PointRecord {
    fn is_finite(&self) -> bool {
        [
            self.x,
            self.y,
            self.in_tangent_x,
            self.in_tangent_y,
            self.out_tangent_x,
            self.out_tangent_y,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}
