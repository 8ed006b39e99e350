//! In-Memory-Blob-Speicher (Tests und Hosts ohne Dateisystem).

use super::BlobStore;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: BTreeMap<String, Vec<u8>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.blobs.contains_key(key)
    }
}

impl BlobStore for MemoryBlobStore {
    fn list(&self) -> anyhow::Result<Vec<String>> {
        Ok(self.blobs.keys().cloned().collect())
    }

    fn read(&self, key: &str) -> anyhow::Result<Option<Vec<u8>>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn write(&mut self, key: &str, data: &[u8]) -> anyhow::Result<()> {
        self.blobs.insert(key.to_string(), data.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> anyhow::Result<()> {
        self.blobs.remove(key);
        Ok(())
    }

    fn rename(&mut self, from: &str, to: &str) -> anyhow::Result<()> {
        if let Some(data) = self.blobs.remove(from) {
            self.blobs.insert(to.to_string(), data);
        }
        Ok(())
    }
}
