//! Shared fixtures for command tests.

use std::collections::BTreeMap;
use std::path::PathBuf;

use runeforge_core::advisor::recommend::GradeFilter;
use runeforge_core::advisor::registry::PlaystyleRegistry;
use runeforge_core::catalog::box_source::BoxCatalogSource;
use runeforge_core::catalog::source::CatalogSource;
use runeforge_core::service::advisor::BuildAdvisorService;
use runeforge_types::character::ClassEntry;
use runeforge_types::error::CatalogError;
use runeforge_types::weapon::{AttributeAmount, ScalingRelation, Weapon};

use crate::state::AppState;

/// App state over an arbitrary catalog with the built-in playstyles.
pub fn state_with<C: CatalogSource + 'static>(catalog: C) -> AppState {
    AppState {
        advisor: BuildAdvisorService::new(
            BoxCatalogSource::new(catalog),
            PlaystyleRegistry::with_canonical(),
            GradeFilter::default(),
        ),
        data_dir: PathBuf::from("/tmp/runeforge-test"),
    }
}

/// Serves classes but fails every weapon fetch.
pub struct WeaponsDown {
    classes: Vec<ClassEntry>,
}

impl WeaponsDown {
    pub fn new(classes: Vec<ClassEntry>) -> Self {
        Self { classes }
    }
}

impl CatalogSource for WeaponsDown {
    fn name(&self) -> &str {
        "weapons-down"
    }

    async fn fetch_classes(&self) -> Result<Vec<ClassEntry>, CatalogError> {
        Ok(self.classes.clone())
    }

    async fn fetch_weapons(&self) -> Result<Vec<Weapon>, CatalogError> {
        Err(CatalogError::Network("down".to_string()))
    }
}

pub fn hero_entry() -> ClassEntry {
    let stats: BTreeMap<String, String> = [
        ("level", "7"),
        ("vigor", "14"),
        ("mind", "9"),
        ("endurance", "12"),
        ("strength", "16"),
        ("dexterity", "9"),
        ("intelligence", "7"),
        ("faith", "8"),
        ("arcane", "11"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    ClassEntry {
        name: "Hero".to_string(),
        description: None,
        stats,
    }
}

fn weapon(name: &str, stat: &str, grade: &str) -> Weapon {
    Weapon {
        name: name.to_string(),
        description: format!("The {name}."),
        category: None,
        attack: vec![AttributeAmount {
            name: "Phy".to_string(),
            amount: Some(110.0),
        }],
        defence: Vec::new(),
        required_attributes: Vec::new(),
        scales_with: vec![ScalingRelation {
            stat: stat.to_string(),
            grade: grade.to_string(),
        }],
    }
}

pub fn sample_weapons() -> Vec<Weapon> {
    vec![
        weapon("Claymore", "Str", "C"),
        weapon("Uchigatana", "Dex", "C"),
        weapon("Rapier", "Dex", "B+"),
    ]
}
