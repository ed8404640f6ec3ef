//! ProfileBuilder -- resolves a class name into a fresh character profile.
//!
//! The builder fetches the class catalog once per call, picks the entry whose
//! name matches exactly, and coerces its string-encoded stats to integers.
//! Failures are logged here, next to the catalog call, and returned to the
//! caller unchanged.

use std::sync::Arc;

use runeforge_types::character::{CharacterClass, CharacterProfile, ClassEntry, CreateProfileRequest};
use runeforge_types::error::ProfileError;
use runeforge_types::stats::{Stat, StatBlock};

use crate::catalog::source::CatalogSource;

/// Catalog key holding a class's starting level.
const LEVEL_KEY: &str = "level";

/// Builds [`CharacterProfile`]s from a [`CatalogSource`].
pub struct ProfileBuilder<C: CatalogSource> {
    catalog: Arc<C>,
}

impl<C: CatalogSource> ProfileBuilder<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    /// Build a profile for `request.class_name` at `request.level`.
    ///
    /// # Errors
    ///
    /// - [`ProfileError::InvalidLevel`] for level 0 (checked before fetching)
    /// - [`ProfileError::ClassNotFound`] when no class name matches exactly
    /// - [`ProfileError::InvalidStat`] when the matched class has a stat that
    ///   is missing or not an integer
    /// - [`ProfileError::Catalog`] when the catalog fetch fails
    pub async fn build(&self, request: &CreateProfileRequest) -> Result<CharacterProfile, ProfileError> {
        if request.level == 0 {
            return Err(ProfileError::InvalidLevel(request.level));
        }

        let result = self.resolve(&request.class_name).await;
        let class = match result {
            Ok(class) => class,
            Err(err) => {
                tracing::error!(
                    source = self.catalog.name(),
                    class = %request.class_name,
                    "Failed to create player: {err}"
                );
                return Err(err);
            }
        };

        Ok(CharacterProfile {
            name: request.name.clone(),
            level: request.level,
            class_name: class.name,
            stats: class.stats,
        })
    }

    /// Fetch all classes, converting each entry. Entries with unusable stats
    /// are skipped with a warning.
    pub async fn list_classes(&self) -> Result<Vec<CharacterClass>, ProfileError> {
        let entries = self.catalog.fetch_classes().await?;
        let classes = entries
            .iter()
            .filter_map(|entry| match coerce_class(entry) {
                Ok(class) => Some(class),
                Err(err) => {
                    tracing::warn!(class = %entry.name, "Skipping class: {err}");
                    None
                }
            })
            .collect();
        Ok(classes)
    }

    async fn resolve(&self, class_name: &str) -> Result<CharacterClass, ProfileError> {
        let entries = self.catalog.fetch_classes().await?;
        tracing::debug!(count = entries.len(), "Fetched class catalog");

        let entry = entries
            .iter()
            .find(|entry| entry.name == class_name)
            .ok_or_else(|| ProfileError::ClassNotFound(class_name.to_string()))?;

        coerce_class(entry)
    }
}

/// Convert a raw catalog entry into a typed [`CharacterClass`].
///
/// All eight stats must be present. Keys other than the eight stats and
/// `level` are ignored.
pub fn coerce_class(entry: &ClassEntry) -> Result<CharacterClass, ProfileError> {
    let mut stats = StatBlock::default();
    for stat in Stat::ALL {
        let raw = entry
            .stats
            .get(stat.key())
            .ok_or_else(|| ProfileError::InvalidStat {
                stat: stat.key().to_string(),
                value: "<missing>".to_string(),
            })?;
        *stats.get_mut(stat) = parse_stat_value(raw).ok_or_else(|| ProfileError::InvalidStat {
            stat: stat.key().to_string(),
            value: raw.clone(),
        })?;
    }

    let starting_level = entry.stats.get(LEVEL_KEY).and_then(|raw| parse_stat_value(raw));

    Ok(CharacterClass {
        name: entry.name.clone(),
        description: entry.description.clone(),
        starting_level,
        stats,
    })
}

/// Parse a catalog number: "14", " 14 " and "14.0" are all 14.
fn parse_stat_value(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<u32>() {
        return Some(value);
    }
    let value = trimmed.parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Some(value as u32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use runeforge_types::error::CatalogError;
    use runeforge_types::weapon::Weapon;

    use crate::catalog::memory::StaticCatalog;
    use crate::test_support::hero_entry;

    fn request(class_name: &str) -> CreateProfileRequest {
        CreateProfileRequest {
            name: "Li Yiu".to_string(),
            level: 20,
            class_name: class_name.to_string(),
        }
    }

    /// Catalog that always fails and counts fetches.
    struct FailingCatalog {
        fetches: AtomicUsize,
    }

    impl CatalogSource for FailingCatalog {
        fn name(&self) -> &str {
            "failing"
        }

        async fn fetch_classes(&self) -> Result<Vec<ClassEntry>, CatalogError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Err(CatalogError::Network("connection refused".to_string()))
        }

        async fn fetch_weapons(&self) -> Result<Vec<Weapon>, CatalogError> {
            Err(CatalogError::Network("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_build_copies_catalog_stats() {
        let builder = ProfileBuilder::new(Arc::new(StaticCatalog::new(vec![hero_entry()], Vec::new())));
        let profile = builder.build(&request("Hero")).await.unwrap();

        assert_eq!(profile.name, "Li Yiu");
        assert_eq!(profile.level, 20);
        assert_eq!(profile.class_name, "Hero");
        assert_eq!(
            profile.stats,
            StatBlock {
                vigor: 14,
                mind: 9,
                endurance: 12,
                strength: 16,
                dexterity: 9,
                intelligence: 7,
                faith: 8,
                arcane: 11,
            }
        );
    }

    #[tokio::test]
    async fn test_build_is_deterministic() {
        let builder = ProfileBuilder::new(Arc::new(StaticCatalog::new(vec![hero_entry()], Vec::new())));
        let first = builder.build(&request("Hero")).await.unwrap();
        let second = builder.build(&request("Hero")).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_build_requires_exact_name_match() {
        let builder = ProfileBuilder::new(Arc::new(StaticCatalog::new(vec![hero_entry()], Vec::new())));
        let err = builder.build(&request("hero")).await.unwrap_err();
        assert!(matches!(err, ProfileError::ClassNotFound(ref name) if name == "hero"));
    }

    #[tokio::test]
    async fn test_build_network_failure_surfaces_catalog_error() {
        let builder = ProfileBuilder::new(Arc::new(FailingCatalog {
            fetches: AtomicUsize::new(0),
        }));
        let err = builder.build(&request("Hero")).await.unwrap_err();
        match err {
            ProfileError::Catalog(inner) => assert!(inner.is_network()),
            other => panic!("Expected Catalog error, got: {other}"),
        }
    }

    #[tokio::test]
    async fn test_build_rejects_level_zero_without_fetching() {
        let catalog = FailingCatalog {
            fetches: AtomicUsize::new(0),
        };
        let builder = ProfileBuilder::new(Arc::new(catalog));
        let mut req = request("Hero");
        req.level = 0;

        let err = builder.build(&req).await.unwrap_err();
        assert!(matches!(err, ProfileError::InvalidLevel(0)));
        assert_eq!(builder.catalog.fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_build_rejects_non_numeric_stat() {
        let mut entry = hero_entry();
        entry.stats.insert("mind".to_string(), "nine".to_string());
        let builder = ProfileBuilder::new(Arc::new(StaticCatalog::new(vec![entry], Vec::new())));

        let err = builder.build(&request("Hero")).await.unwrap_err();
        match err {
            ProfileError::InvalidStat { stat, value } => {
                assert_eq!(stat, "mind");
                assert_eq!(value, "nine");
            }
            other => panic!("Expected InvalidStat, got: {other}"),
        }
    }

    #[tokio::test]
    async fn test_list_classes_skips_broken_entries() {
        let mut broken = hero_entry();
        broken.name = "Wretch".to_string();
        broken.stats.remove("arcane");
        let builder =
            ProfileBuilder::new(Arc::new(StaticCatalog::new(
                vec![hero_entry(), broken],
                Vec::new(),
            )));

        let classes = builder.list_classes().await.unwrap();
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].name, "Hero");
        assert_eq!(classes[0].starting_level, Some(7));
    }

    #[test]
    fn test_parse_stat_value_variants() {
        assert_eq!(parse_stat_value("14"), Some(14));
        assert_eq!(parse_stat_value(" 14 "), Some(14));
        assert_eq!(parse_stat_value("14.0"), Some(14));
        assert_eq!(parse_stat_value("14.5"), None);
        assert_eq!(parse_stat_value("-3"), None);
        assert_eq!(parse_stat_value(""), None);
    }
}
