//! Playstyle registry for runtime lookup by slug.

use runeforge_types::error::PlaystyleError;
use runeforge_types::playstyle::Playstyle;

/// How far a weight table may drift from summing to 1.0 before a warning.
const WEIGHT_SUM_TOLERANCE: f64 = 0.05;

/// Ordered collection of playstyles, indexed by slug (case-insensitive).
#[derive(Debug, Clone)]
pub struct PlaystyleRegistry {
    playstyles: Vec<Playstyle>,
}

impl PlaystyleRegistry {
    /// Registry holding only the built-in playstyles.
    pub fn with_canonical() -> Self {
        Self {
            playstyles: Playstyle::canonical(),
        }
    }

    /// Built-ins plus `extra`, validating each extra entry.
    pub fn from_config(extra: &[Playstyle]) -> Result<Self, PlaystyleError> {
        let mut registry = Self::with_canonical();
        for playstyle in extra {
            registry.register(playstyle.clone())?;
        }
        Ok(registry)
    }

    /// Add a playstyle, replacing any existing one with the same slug.
    pub fn register(&mut self, playstyle: Playstyle) -> Result<(), PlaystyleError> {
        playstyle.validate()?;

        let sum = playstyle.weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            tracing::warn!(playstyle = %playstyle.slug, sum, "Playstyle weights do not sum to 1.0");
        }

        match self
            .playstyles
            .iter_mut()
            .find(|existing| existing.slug.eq_ignore_ascii_case(&playstyle.slug))
        {
            Some(existing) => {
                tracing::debug!(playstyle = %playstyle.slug, "Replacing built-in playstyle");
                *existing = playstyle;
            }
            None => self.playstyles.push(playstyle),
        }
        Ok(())
    }

    /// Look up a playstyle by slug.
    pub fn get(&self, slug: &str) -> Result<&Playstyle, PlaystyleError> {
        self.playstyles
            .iter()
            .find(|p| p.slug.eq_ignore_ascii_case(slug))
            .ok_or_else(|| PlaystyleError::Unknown(slug.to_string()))
    }

    pub fn list(&self) -> &[Playstyle] {
        &self.playstyles
    }
}

impl Default for PlaystyleRegistry {
    fn default() -> Self {
        Self::with_canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runeforge_types::stats::{Stat, StatWeights};

    fn quality() -> Playstyle {
        let mut playstyle = Playstyle::new(
            "quality",
            "Quality",
            StatWeights {
                vigor: 0.3,
                mind: 0.1,
                endurance: 0.1,
                strength: 0.25,
                dexterity: 0.25,
                ..StatWeights::default()
            },
        );
        playstyle.scaling_stat = Some(Stat::Strength);
        playstyle
    }

    #[test]
    fn test_canonical_slugs() {
        let registry = PlaystyleRegistry::default();
        let slugs: Vec<&str> = registry.list().iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(
            slugs,
            vec!["strength", "dexterity", "int-dex", "fai-int", "frost-int"]
        );
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let registry = PlaystyleRegistry::default();
        assert_eq!(registry.get("DEXTERITY").unwrap().name, "Dexterity");
    }

    #[test]
    fn test_get_unknown() {
        let registry = PlaystyleRegistry::default();
        let err = registry.get("tank").unwrap_err();
        assert!(matches!(err, PlaystyleError::Unknown(ref s) if s == "tank"));
    }

    #[test]
    fn test_from_config_appends_custom() {
        let registry = PlaystyleRegistry::from_config(&[quality()]).unwrap();
        assert_eq!(registry.list().len(), 6);
        assert_eq!(registry.get("quality").unwrap().scaling_token(), "Str");
    }

    #[test]
    fn test_from_config_replaces_builtin_with_same_slug() {
        let mut custom = quality();
        custom.slug = "Strength".to_string();
        let registry = PlaystyleRegistry::from_config(&[custom]).unwrap();
        assert_eq!(registry.list().len(), 5);
        assert_eq!(registry.get("strength").unwrap().name, "Quality");
    }

    #[test]
    fn test_register_rejects_invalid_weights() {
        let mut bad = quality();
        bad.weights.faith = f64::INFINITY;
        let mut registry = PlaystyleRegistry::default();
        assert!(registry.register(bad).is_err());
        assert!(registry.get("quality").is_err());
    }
}
