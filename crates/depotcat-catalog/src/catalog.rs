use crate::{fsync_dir, CatalogError};
use depotcat_manifest::FileEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// One file's recorded metadata, all fields as captured text.
///
/// Numeric fields stay decimal strings on the wire so very large byte counts
/// survive consumers that read JSON numbers as doubles.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CatalogObject {
    pub size: String,
    pub chunks: String,
    pub hash: String,
    pub flags: String,
    pub name: String,
}

/// Per-release catalog document: file name to recorded metadata.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CatalogDocument {
    pub objects: BTreeMap<String, CatalogObject>,
}

impl CatalogDocument {
    /// Builds the name-keyed document from the parsed listing. Later rows
    /// win on duplicate names; map ordering makes serialization
    /// deterministic, so rerunning the same report writes identical bytes.
    pub fn from_entries(entries: &[FileEntry]) -> Self {
        let mut objects = BTreeMap::new();
        for entry in entries {
            objects.insert(
                entry.name.clone(),
                CatalogObject {
                    size: entry.size.to_string(),
                    chunks: entry.chunks.to_string(),
                    hash: entry.hash.clone(),
                    flags: entry.flags.to_string(),
                    name: entry.name.clone(),
                },
            );
        }
        Self { objects }
    }

    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), CatalogError> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        let dir = path.parent().unwrap_or(Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| CatalogError::Io(e.error))?;
        fsync_dir(dir)?;
        Ok(())
    }

    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
