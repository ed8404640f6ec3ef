//! Weapon suggestions by scaling stat and grade.
//!
//! A weapon is suggested when any of its scaling relations names the filter
//! token (substring match, so "Str" matches "Str" and "Strength") at an
//! accepted grade (also substring, so "B" accepts "B", "B+" and "B-").
//! Matches keep catalog order.

use std::sync::Arc;

use serde::Serialize;

use runeforge_types::error::CatalogError;
use runeforge_types::weapon::Weapon;

use crate::catalog::source::CatalogSource;

/// Accepted scaling grades.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeFilter {
    grades: Vec<String>,
}

impl GradeFilter {
    pub fn new(grades: Vec<String>) -> Self {
        Self { grades }
    }

    /// True when `grade` contains any accepted grade letter.
    pub fn accepts(&self, grade: &str) -> bool {
        self.grades.iter().any(|accepted| grade.contains(accepted.as_str()))
    }

    pub fn grades(&self) -> &[String] {
        &self.grades
    }
}

impl Default for GradeFilter {
    fn default() -> Self {
        Self::new(vec!["B".to_string(), "C".to_string()])
    }
}

/// Whether `weapon` scales with `token` at an accepted grade.
pub fn matches(weapon: &Weapon, token: &str, filter: &GradeFilter) -> bool {
    weapon
        .scales_with
        .iter()
        .any(|relation| relation.stat.contains(token) && filter.accepts(&relation.grade))
}

/// Every matching weapon, once each, in catalog order.
pub fn recommend<'a>(weapons: &'a [Weapon], token: &str, filter: &GradeFilter) -> Vec<&'a Weapon> {
    weapons
        .iter()
        .filter(|weapon| matches(weapon, token, filter))
        .collect()
}

/// Result of a weapon suggestion query.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub token: String,
    pub weapons: Vec<Weapon>,
}

impl Recommendation {
    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }
}

/// Fetches the weapon catalog and filters it.
pub struct WeaponAdvisor<C: CatalogSource> {
    catalog: Arc<C>,
    filter: GradeFilter,
}

impl<C: CatalogSource> WeaponAdvisor<C> {
    pub fn new(catalog: Arc<C>, filter: GradeFilter) -> Self {
        Self { catalog, filter }
    }

    pub fn filter(&self) -> &GradeFilter {
        &self.filter
    }

    /// Suggest weapons scaling with `token`.
    ///
    /// Zero matches is a normal, empty [`Recommendation`]. Fetch failures
    /// are logged here and returned.
    pub async fn suggest(&self, token: &str) -> Result<Recommendation, CatalogError> {
        let weapons = match self.catalog.fetch_weapons().await {
            Ok(weapons) => weapons,
            Err(err) => {
                tracing::error!(source = self.catalog.name(), token, "Failed to fetch weapons: {err}");
                return Err(err);
            }
        };

        let matched: Vec<Weapon> = recommend(&weapons, token, &self.filter)
            .into_iter()
            .cloned()
            .collect();
        tracing::info!(
            token,
            catalog = weapons.len(),
            matched = matched.len(),
            "Filtered weapon catalog"
        );

        Ok(Recommendation {
            token: token.to_string(),
            weapons: matched,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::catalog::memory::StaticCatalog;
    use crate::test_support::{sample_weapons, weapon};

    #[test]
    fn test_grade_filter_is_substring_based() {
        let filter = GradeFilter::default();
        assert!(filter.accepts("B"));
        assert!(filter.accepts("B+"));
        assert!(filter.accepts("C-"));
        assert!(!filter.accepts("A"));
        assert!(!filter.accepts("D"));
        assert!(!filter.accepts("-"));
    }

    #[test]
    fn test_empty_grade_filter_accepts_nothing() {
        let filter = GradeFilter::new(Vec::new());
        assert!(!filter.accepts("B"));
    }

    #[test]
    fn test_strength_token_finds_single_weapon() {
        let weapons = vec![
            weapon("Claymore", &[("Strength", "B")]),
            weapon("Rapier", &[("Dexterity", "D")]),
        ];
        let found = recommend(&weapons, "Str", &GradeFilter::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Claymore");
    }

    #[test]
    fn test_no_faith_weapons() {
        let weapons = vec![weapon("Claymore", &[("Strength", "B")])];
        assert!(recommend(&weapons, "Fai", &GradeFilter::default()).is_empty());
    }

    #[test]
    fn test_grade_and_token_must_match_same_relation() {
        // Str at E, Dex at B: asking for Str must not borrow Dex's grade.
        let weapons = vec![weapon("Uchigatana", &[("Str", "E"), ("Dex", "B")])];
        assert!(recommend(&weapons, "Str", &GradeFilter::default()).is_empty());
        assert_eq!(recommend(&weapons, "Dex", &GradeFilter::default()).len(), 1);
    }

    #[test]
    fn test_weapon_listed_once_when_several_relations_match() {
        let weapons = vec![weapon("Bloodhound's Fang", &[("Str", "C"), ("Strength", "B")])];
        assert_eq!(recommend(&weapons, "Str", &GradeFilter::default()).len(), 1);
    }

    #[test]
    fn test_recommend_keeps_catalog_order() {
        let weapons = sample_weapons();
        let names: Vec<&str> = recommend(&weapons, "Dex", &GradeFilter::default())
            .iter()
            .map(|w| w.name.as_str())
            .collect();
        assert_eq!(names, vec!["Uchigatana", "Rapier", "Moonveil"]);
    }

    #[tokio::test]
    async fn test_advisor_suggest_returns_matches() {
        let catalog = Arc::new(StaticCatalog::new(Vec::new(), sample_weapons()));
        let advisor = WeaponAdvisor::new(catalog, GradeFilter::default());

        let rec = advisor.suggest("Int").await.unwrap();
        assert_eq!(rec.token, "Int");
        assert_eq!(rec.weapons.len(), 1);
        assert_eq!(rec.weapons[0].name, "Moonveil");
    }

    #[tokio::test]
    async fn test_advisor_suggest_empty_is_not_an_error() {
        let catalog = Arc::new(StaticCatalog::new(Vec::new(), sample_weapons()));
        let advisor = WeaponAdvisor::new(catalog, GradeFilter::default());

        let rec = advisor.suggest("Arc").await.unwrap();
        assert!(rec.is_empty());
    }
}
