//! Dateisystem-Blob-Speicher: ein `<key>.json` pro Kurve in einem Verzeichnis.

use super::{validate_key, BlobStore};
use anyhow::Context;
use std::path::{Path, PathBuf};

const EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct FsBlobStore {
    dir: PathBuf,
}

impl FsBlobStore {
    /// Öffnet (und erstellt bei Bedarf) das Speicherverzeichnis.
    pub fn open(dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Verzeichnis {} konnte nicht erstellt werden", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> anyhow::Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.{EXTENSION}")))
    }
}

impl BlobStore for FsBlobStore {
    fn list(&self) -> anyhow::Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.dir)
            .with_context(|| format!("Verzeichnis {} nicht lesbar", self.dir.display()))?;
        let mut keys = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                keys.push(stem.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }

    fn read(&self, key: &str) -> anyhow::Result<Option<Vec<u8>>> {
        let path = self.path_for(key)?;
        match std::fs::read(&path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Fehler beim Lesen von {}", path.display())),
        }
    }

    fn write(&mut self, key: &str, data: &[u8]) -> anyhow::Result<()> {
        let path = self.path_for(key)?;
        std::fs::write(&path, data)
            .with_context(|| format!("Fehler beim Schreiben von {}", path.display()))
    }

    fn remove(&mut self, key: &str) -> anyhow::Result<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Fehler beim Löschen von {}", path.display())),
        }
    }

    fn rename(&mut self, from: &str, to: &str) -> anyhow::Result<()> {
        let source = self.path_for(from)?;
        if !source.exists() {
            return Ok(());
        }
        let target = self.path_for(to)?;
        std::fs::rename(&source, &target).with_context(|| {
            format!("Fehler beim Umbenennen {} → {}", source.display(), target.display())
        })
    }
}
