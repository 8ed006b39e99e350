//! Persistenz-Layer: schlüsseladressierter Blob-Speicher für Kurven-Records.
//!
//! Die Registry kennt nur den [`BlobStore`]-Trait; welche Implementierung
//! dahinter steht, entscheidet der Aufrufer beim Konstruieren.

pub mod fs;
pub mod memory;
pub mod record;

pub use fs::FsBlobStore;
pub use memory::MemoryBlobStore;
pub use record::{CurveRecord, PointRecord, RECORD_VERSION};

/// Prüft, ob ein Key als Blob-Name taugt.
///
/// Leere Keys, Pfadtrenner und `.`/`..` werden abgewiesen, damit ein Key nie
/// aus dem Speicherverzeichnis herausführt.
pub fn validate_key(key: &str) -> anyhow::Result<()> {
    if key.trim().is_empty() {
        anyhow::bail!("Leerer Kurven-Key");
    }
    if key == "." || key == ".." || key.contains(['/', '\\', '\0']) {
        anyhow::bail!("Ungueltiger Kurven-Key '{}'", key);
    }
    Ok(())
}

/// Synchroner Key→Bytes-Speicher.
pub trait BlobStore {
    /// Alle vorhandenen Keys (sortiert).
    fn list(&self) -> anyhow::Result<Vec<String>>;

    /// Liest einen Blob; `None`, wenn der Key nicht existiert.
    fn read(&self, key: &str) -> anyhow::Result<Option<Vec<u8>>>;

    /// Schreibt (oder überschreibt) einen Blob.
    fn write(&mut self, key: &str, data: &[u8]) -> anyhow::Result<()>;

    /// Entfernt einen Blob. Fehlt der Key, ist das kein Fehler.
    fn remove(&mut self, key: &str) -> anyhow::Result<()>;

    /// Verschiebt einen Blob auf einen neuen Key. Fehlt `from`, passiert nichts.
    fn rename(&mut self, from: &str, to: &str) -> anyhow::Result<()> {
        if let Some(data) = self.read(from)? {
            self.write(to, &data)?;
            self.remove(from)?;
        }
        Ok(())
    }
}
