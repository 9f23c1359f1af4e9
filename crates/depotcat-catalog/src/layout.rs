use crate::CatalogError;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory layout for published catalog output.
///
/// `<root>/catalogs/<label>.json` holds one document per release version;
/// `<root>/history.json` is the release history. Directories are created
/// lazily by [`initialize`](Self::initialize).
#[derive(Debug, Clone)]
pub struct CatalogLayout {
    root: PathBuf,
}

impl CatalogLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[inline]
    pub fn catalogs_dir(&self) -> PathBuf {
        self.root.join("catalogs")
    }

    #[inline]
    pub fn catalog_path(&self, label: &str) -> PathBuf {
        self.catalogs_dir().join(format!("{label}.json"))
    }

    #[inline]
    pub fn history_path(&self) -> PathBuf {
        self.root.join("history.json")
    }

    pub fn initialize(&self) -> Result<(), CatalogError> {
        fs::create_dir_all(self.catalogs_dir())?;
        Ok(())
    }
}
