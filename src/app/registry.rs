//! Kurven-Registry: Key-Vergabe, Persistenz und Auswertung per Key.
//!
//! Die Registry ist ein gewöhnlicher Wert, der an der Composition-Root mit
//! seinem [`BlobStore`] konstruiert und per Referenz weitergereicht wird.
//! Sie hält alle bekannten Kurven in Einfügereihenfolge.

use crate::core::{presets, CurveError, CurveLookup, CurveSpline};
use crate::store::{validate_key, BlobStore, CurveRecord};
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

/// Basis-Key für leere Namen.
pub const FALLBACK_KEY: &str = "custom";

static INVALID_KEY_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_]").expect("statisches Key-Pattern"));

/// Ergebnis eines `load_all`-Durchlaufs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Anzahl erfolgreich geladener Kurven
    pub loaded: usize,
    /// Keys der übersprungenen (defekten) Records
    pub skipped: Vec<String>,
}

/// Registry aller gespeicherten Kurven über einem Blob-Speicher.
#[derive(Debug)]
pub struct CurveRegistry<S: BlobStore> {
    store: S,
    curves: IndexMap<String, CurveSpline>,
}

impl<S: BlobStore> CurveRegistry<S> {
    /// Erstellt eine leere Registry. Vorhandene Records lädt erst [`Self::load_all`].
    pub fn new(store: S) -> Self {
        Self {
            store,
            curves: IndexMap::new(),
        }
    }

    /// Gibt den Speicher wieder heraus (Teardown).
    pub fn into_store(self) -> S {
        self.store
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ── Key-Vergabe ─────────────────────────────────────────────

    /// Leitet aus einem Anzeigenamen einen eindeutigen Key ab.
    ///
    /// Kleinschreibung, alles außerhalb `[a-z0-9_]` wird zu `_`. Ist der Key
    /// vergeben, wird `_1`, `_2`, … angehängt.
    pub fn generate_key(&self, name: &str) -> String {
        let base = sanitize_key(name);
        if !self.curves.contains_key(&base) {
            return base;
        }
        let mut suffix = 1;
        loop {
            let candidate = format!("{base}_{suffix}");
            if !self.curves.contains_key(&candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }

    // ── Persistenz ──────────────────────────────────────────────

    /// Speichert eine Kurve und gibt ihren Key zurück.
    ///
    /// Hat die Kurve noch keinen (oder einen leeren) Key, wird einer erzeugt
    /// und an der Kurve gesetzt. Ein bestehender Eintrag unter dem Key wird
    /// überschrieben. Keys mit Pfadtrennern werden abgewiesen.
    pub fn save(&mut self, curve: &mut CurveSpline) -> anyhow::Result<String> {
        let key = match curve.key().filter(|key| !key.trim().is_empty()) {
            Some(key) => {
                validate_key(key)?;
                key.to_string()
            }
            None => {
                let key = self.generate_key(curve.name());
                curve.set_key(key.clone());
                key
            }
        };
        self.persist(&key, curve)?;
        self.curves.insert(key.clone(), curve.clone());
        log::info!("Kurve '{}' gespeichert als '{}'", curve.name(), key);
        Ok(key)
    }

    fn persist(&mut self, key: &str, curve: &CurveSpline) -> anyhow::Result<()> {
        let data = CurveRecord::from_curve(key, curve).to_json()?;
        self.store.write(key, &data)
    }

    /// Entfernt Eintrag und Record. Gibt `true` zurück, wenn der Key bekannt war.
    pub fn delete(&mut self, key: &str) -> anyhow::Result<bool> {
        self.store.remove(key)?;
        let existed = self.curves.shift_remove(key).is_some();
        if existed {
            log::info!("Kurve '{}' gelöscht", key);
        }
        Ok(existed)
    }

    /// Verschiebt eine Kurve auf einen neuen Key.
    ///
    /// No-op (`false`), wenn `old_key` unbekannt ist. Der Record wird unter
    /// dem neuen Key neu geschrieben, damit der gespeicherte Key stimmt.
    pub fn rename(&mut self, old_key: &str, new_key: &str) -> anyhow::Result<bool> {
        validate_key(new_key)?;
        if old_key == new_key {
            return Ok(self.curves.contains_key(old_key));
        }
        let Some(mut curve) = self.curves.get(old_key).cloned() else {
            return Ok(false);
        };
        if self.curves.contains_key(new_key) {
            log::warn!("Umbenennen überschreibt bestehende Kurve '{}'", new_key);
        }
        curve.set_key(new_key);
        self.persist(new_key, &curve)?;
        self.store.remove(old_key)?;
        self.curves.shift_remove(old_key);
        self.curves.insert(new_key.to_string(), curve);
        log::info!("Kurve '{}' umbenannt in '{}'", old_key, new_key);
        Ok(true)
    }

    /// Lädt alle Records aus dem Speicher in die Registry.
    ///
    /// Defekte Records werden übersprungen und protokolliert, nicht als Fehler
    /// gemeldet. Nur Fehler des Speichers selbst brechen ab.
    pub fn load_all(&mut self) -> anyhow::Result<LoadReport> {
        let mut report = LoadReport::default();
        for key in self.store.list()? {
            let Some(data) = self.store.read(&key)? else {
                continue;
            };
            let record = match CurveRecord::from_json(&data) {
                Ok(record) => record,
                Err(e) => {
                    log::warn!("Record '{}' übersprungen: {:#}", key, e);
                    report.skipped.push(key);
                    continue;
                }
            };
            let mut curve = record.into_curve();
            if curve.key() != Some(key.as_str()) {
                log::warn!(
                    "Record '{}' enthält abweichenden Key {:?}, verwende Speicher-Key",
                    key,
                    curve.key()
                );
                curve.set_key(key.clone());
            }
            self.curves.insert(key, curve);
            report.loaded += 1;
        }
        log::info!(
            "{} Kurven geladen, {} übersprungen",
            report.loaded,
            report.skipped.len()
        );
        Ok(report)
    }

    /// Verwirft alle Einträge und lädt neu.
    pub fn reload(&mut self) -> anyhow::Result<LoadReport> {
        self.curves.clear();
        self.load_all()
    }

    /// Speichert alle mitgelieferten Vorlagen, deren Key noch fehlt.
    ///
    /// Gibt die Anzahl neu registrierter Vorlagen zurück.
    pub fn register_presets(&mut self) -> anyhow::Result<usize> {
        let mut added = 0;
        for mut preset in presets::all() {
            if preset.key().is_some_and(|key| self.curves.contains_key(key)) {
                continue;
            }
            self.save(&mut preset)?;
            added += 1;
        }
        Ok(added)
    }

    // ── Lookup / Auswertung ─────────────────────────────────────

    pub fn get(&self, key: &str) -> Option<&CurveSpline> {
        self.curves.get(key)
    }

    /// Wie [`Self::get`], aber mit [`CurveError::CurveNotFound`] statt `None`.
    pub fn curve(&self, key: &str) -> Result<&CurveSpline, CurveError> {
        self.curves
            .get(key)
            .ok_or_else(|| CurveError::CurveNotFound(key.to_string()))
    }

    /// Wertet die Kurve `key` an `x` aus und bildet auf `[low, high]` ab.
    pub fn evaluate(&self, key: &str, x: f64, low: f64, high: f64) -> Result<f64, CurveError> {
        self.curve(key)?.evaluate_in_range(x, low, high)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.curves.contains_key(key)
    }

    /// Alle Keys in Einfügereihenfolge.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.curves.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CurveSpline)> {
        self.curves.iter().map(|(k, c)| (k.as_str(), c))
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

impl<S: BlobStore> CurveLookup for CurveRegistry<S> {
    fn find_curve(&self, key: &str) -> Option<&CurveSpline> {
        self.get(key)
    }
}

/// Normalisiert einen Namen zum Basis-Key (ohne Eindeutigkeits-Suffix).
pub fn sanitize_key(name: &str) -> String {
    if name.trim().is_empty() {
        return FALLBACK_KEY.to_string();
    }
    INVALID_KEY_CHARS
        .replace_all(&name.to_lowercase(), "_")
        .into_owned()
}
