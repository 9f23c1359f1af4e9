use crate::config::LatestSeeds;
use crate::version::{is_newer, Channel};
use crate::{fsync_dir, CatalogError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// One processed release. Newest-first in [`ReleaseHistory::versions`].
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub channel: Channel,
    /// When this record entered the history.
    pub time: String,
    /// Build time reported by the depot manifest header.
    pub release_time: String,
    pub manifest_id: String,
    pub url: String,
}

/// Newest known release per channel.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LatestPointers {
    pub release: String,
    pub snapshot: String,
}

/// Ordered record of all releases processed so far. Records are only ever
/// prepended; the latest pointers move when a merged release supersedes them.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ReleaseHistory {
    pub latest: LatestPointers,
    pub versions: Vec<ReleaseRecord>,
}

impl ReleaseHistory {
    /// Fresh history for a first-ever publish, seeded with the configured
    /// newest known labels.
    pub fn seeded(latest: &LatestSeeds) -> Self {
        Self {
            latest: LatestPointers {
                release: latest.stable.clone(),
                snapshot: latest.preview.clone(),
            },
            versions: Vec::new(),
        }
    }

    /// Whether a record for this manifest id is already present.
    pub fn contains_manifest(&self, manifest_id: &str) -> bool {
        self.versions.iter().any(|r| r.manifest_id == manifest_id)
    }

    /// Prepends a release and moves whichever latest pointers it supersedes.
    ///
    /// Pointer updates are decided by the version comparator alone, not by
    /// the record's channel: a stable label that outranks the snapshot
    /// pointer moves it too.
    pub fn record(&mut self, record: ReleaseRecord) {
        if is_newer(&self.latest.release, &record.id) {
            debug!(
                "latest release {} superseded by {}",
                self.latest.release, record.id
            );
            self.latest.release = record.id.clone();
        }
        if is_newer(&self.latest.snapshot, &record.id) {
            debug!(
                "latest snapshot {} superseded by {}",
                self.latest.snapshot, record.id
            );
            self.latest.snapshot = record.id.clone();
        }
        self.versions.insert(0, record);
    }

    /// Full replacement of the history file, written atomically.
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
