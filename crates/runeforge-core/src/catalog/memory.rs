//! In-memory catalog source.

use runeforge_types::character::ClassEntry;
use runeforge_types::error::CatalogError;
use runeforge_types::weapon::Weapon;

use super::source::CatalogSource;

/// A fixed catalog held in memory. Returns clones on every fetch.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    classes: Vec<ClassEntry>,
    weapons: Vec<Weapon>,
}

impl StaticCatalog {
    pub fn new(classes: Vec<ClassEntry>, weapons: Vec<Weapon>) -> Self {
        Self { classes, weapons }
    }
}

impl CatalogSource for StaticCatalog {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_classes(&self) -> Result<Vec<ClassEntry>, CatalogError> {
        Ok(self.classes.clone())
    }

    async fn fetch_weapons(&self) -> Result<Vec<Weapon>, CatalogError> {
        Ok(self.weapons.clone())
    }
}
