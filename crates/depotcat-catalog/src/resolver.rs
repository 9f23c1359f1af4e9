use crate::config::VersionTables;
use crate::version::Channel;
use crate::CatalogError;
use serde::Serialize;
use tracing::debug;

/// A manifest id resolved to a release label and channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedVersion {
    pub label: String,
    pub channel: Channel,
}

impl ResolvedVersion {
    /// Operator-supplied label, bypassing table lookup. The channel is
    /// inferred from the preview suffix.
    pub fn pinned(label: impl Into<String>) -> Self {
        let label = label.into();
        let channel = Channel::of_label(&label);
        Self { label, channel }
    }
}

/// Looks a manifest id up in the preview table first, then the stable table.
///
/// An id in neither table is fatal: publishing under a guessed or synthetic
/// version would silently corrupt the version-to-content mapping for every
/// downstream consumer, so the run must abort before anything is written.
pub fn resolve(tables: &VersionTables, manifest_id: &str) -> Result<ResolvedVersion, CatalogError> {
    if let Some(label) = tables.preview.get(manifest_id) {
        debug!("resolved manifest id {manifest_id} to {label} (preview table)");
        return Ok(ResolvedVersion {
            label: label.clone(),
            channel: Channel::Preview,
        });
    }
    if let Some(label) = tables.stable.get(manifest_id) {
        debug!("resolved manifest id {manifest_id} to {label} (stable table)");
        return Ok(ResolvedVersion {
            label: label.clone(),
            channel: Channel::Stable,
        });
    }
    Err(CatalogError::UnresolvedVersion(manifest_id.to_owned()))
}
