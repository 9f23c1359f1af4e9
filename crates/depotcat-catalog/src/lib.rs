//! Version resolution, release history, and catalog persistence for depotcat.
//!
//! This crate turns a parsed depot report into published state: the
//! operator-maintained configuration (`CatalogConfig`) maps manifest ids to
//! release labels, the comparator in [`version`] orders labels, and
//! [`publish_release`] writes the per-version catalog document plus the
//! newest-first release history under a [`CatalogLayout`].

pub mod catalog;
pub mod config;
pub mod history;
pub mod layout;
pub mod publish;
pub mod resolver;
pub mod version;

pub use catalog::{CatalogDocument, CatalogObject};
pub use config::{parse_config_file, parse_config_str, CatalogConfig, LatestSeeds, VersionTables};
pub use history::{LatestPointers, ReleaseHistory, ReleaseRecord};
pub use layout::CatalogLayout;
pub use publish::{publish_release, PublishOutcome};
pub use resolver::{resolve, ResolvedVersion};
pub use version::{is_newer, Channel, VersionSpec, PREVIEW_SUFFIX};

use std::path::Path;
use thiserror::Error;

/// Fsync a directory to ensure that a preceding `rename()` is durable.
///
/// On Linux with ext4 `data=ordered` (the default), renames are usually
/// durable without an explicit dir fsync, but POSIX does not guarantee this.
pub(crate) fn fsync_dir(dir: &Path) -> Result<(), std::io::Error> {
    let f = std::fs::File::open(dir)?;
    f.sync_all()
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("failed to parse catalog config: {0}")]
    Config(#[from] toml::de::Error),
    #[error(
        "manifest id {0} is not present in the version tables; \
         refusing to publish under a guessed version"
    )]
    UnresolvedVersion(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_version_names_the_manifest_id() {
        let e = CatalogError::UnresolvedVersion("7649580527091758034".to_owned());
        assert!(e.to_string().contains("7649580527091758034"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let e = CatalogError::from(io);
        assert!(e.to_string().contains("gone"));
    }
}
