//! SnapshotCatalog -- [`CatalogSource`] backed by saved API responses.
//!
//! Reads `{dir}/classes.json` and `{dir}/weapons.json`, each either a full
//! API response body or a bare JSON array of records. Files are re-read on
//! every fetch.

use std::path::{Path, PathBuf};

use runeforge_core::catalog::source::CatalogSource;
use runeforge_types::character::ClassEntry;
use runeforge_types::error::CatalogError;
use runeforge_types::weapon::Weapon;

use crate::fanapi::types::{parse_payload, ApiClass, ApiWeapon};

pub struct SnapshotCatalog {
    dir: PathBuf,
}

impl SnapshotCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn classes_path(&self) -> PathBuf {
        self.dir.join("classes.json")
    }

    pub fn weapons_path(&self) -> PathBuf {
        self.dir.join("weapons.json")
    }

    async fn read(path: &Path) -> Result<Vec<u8>, CatalogError> {
        tracing::debug!(path = %path.display(), "Reading catalog snapshot");
        tokio::fs::read(path)
            .await
            .map_err(|e| CatalogError::Io(format!("{}: {e}", path.display())))
    }
}

impl CatalogSource for SnapshotCatalog {
    fn name(&self) -> &str {
        "snapshot"
    }

    async fn fetch_classes(&self) -> Result<Vec<ClassEntry>, CatalogError> {
        let bytes = Self::read(&self.classes_path()).await?;
        let classes: Vec<ApiClass> = parse_payload(&bytes)?;
        Ok(classes.into_iter().map(ClassEntry::from).collect())
    }

    async fn fetch_weapons(&self) -> Result<Vec<Weapon>, CatalogError> {
        let bytes = Self::read(&self.weapons_path()).await?;
        let weapons: Vec<ApiWeapon> = parse_payload(&bytes)?;
        Ok(weapons.into_iter().map(Weapon::from).collect())
    }
}
