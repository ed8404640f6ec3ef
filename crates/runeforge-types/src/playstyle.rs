//! Playstyles: named stat-weighting profiles.
//!
//! A playstyle is plain data (a slug, a display name and a weight table), so
//! the canonical builds and user-defined ones from `config.toml` share one
//! type. The stat a playstyle's weapons should scale with is either set
//! explicitly or derived from the weights.

use serde::{Deserialize, Serialize};

use crate::error::PlaystyleError;
use crate::stats::{Stat, StatWeights};

/// A named per-level stat-weighting profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playstyle {
    /// Lookup key, e.g. "dexterity" or "int-dex".
    pub slug: String,
    /// Human-readable name.
    pub name: String,
    pub weights: StatWeights,
    /// Stat used to pick weapons. Derived from `weights` when absent.
    #[serde(default)]
    pub scaling_stat: Option<Stat>,
}

impl Playstyle {
    pub fn new(slug: impl Into<String>, name: impl Into<String>, weights: StatWeights) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            weights,
            scaling_stat: None,
        }
    }

    /// Stat whose weapons suit this playstyle.
    ///
    /// Returns the explicit `scaling_stat` when set, otherwise the
    /// highest-weighted stat among those weapons can scale with. Ties go to
    /// the stat that comes first in canonical order.
    pub fn scaling_stat(&self) -> Stat {
        if let Some(stat) = self.scaling_stat {
            return stat;
        }

        let mut best = Stat::Strength;
        let mut best_weight = self.weights.get(best);
        for (stat, weight) in self.weights.iter().filter(|(stat, _)| stat.is_scaling()) {
            if weight > best_weight {
                best = stat;
                best_weight = weight;
            }
        }
        best
    }

    /// Weapon filter token for this playstyle ("Str", "Dex", "Int", ...).
    pub fn scaling_token(&self) -> &'static str {
        self.scaling_stat().abbreviation()
    }

    /// Reject weights that are negative, NaN or infinite.
    pub fn validate(&self) -> Result<(), PlaystyleError> {
        for (stat, weight) in self.weights.iter() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(PlaystyleError::InvalidWeight {
                    playstyle: self.slug.clone(),
                    stat: stat.to_string(),
                    weight,
                });
            }
        }
        Ok(())
    }

    /// The five built-in playstyles.
    pub fn canonical() -> Vec<Playstyle> {
        vec![
            Playstyle::new(
                "strength",
                "Strength",
                StatWeights {
                    vigor: 0.349,
                    mind: 0.24,
                    endurance: 0.127,
                    strength: 0.07,
                    dexterity: 0.066,
                    intelligence: 0.066,
                    faith: 0.044,
                    arcane: 0.039,
                },
            ),
            Playstyle::new(
                "dexterity",
                "Dexterity",
                StatWeights {
                    vigor: 0.2620087336,
                    mind: 0.0873362445,
                    endurance: 0.1135371179,
                    strength: 0.0786026201,
                    dexterity: 0.3493449782,
                    intelligence: 0.03930131,
                    faith: 0.0349344978,
                    arcane: 0.0349344978,
                },
            ),
            Playstyle::new(
                "int-dex",
                "Intelligence/Dexterity",
                StatWeights {
                    vigor: 0.2183406114,
                    mind: 0.0873362445,
                    endurance: 0.0917030568,
                    strength: 0.0524017467,
                    dexterity: 0.2183406114,
                    intelligence: 0.2620087336,
                    faith: 0.0305676856,
                    arcane: 0.03930131,
                },
            ),
            Playstyle::new(
                "fai-int",
                "Faith/Intelligence",
                StatWeights {
                    vigor: 0.1746724891,
                    mind: 0.1091703057,
                    endurance: 0.0436681223,
                    strength: 0.0349344978,
                    dexterity: 0.0742358079,
                    intelligence: 0.2620087336,
                    faith: 0.2620087336,
                    arcane: 0.03930131,
                },
            ),
            Playstyle::new(
                "frost-int",
                "Frost/Intelligence",
                StatWeights {
                    vigor: 0.2401746725,
                    mind: 0.1091703057,
                    endurance: 0.1091703057,
                    strength: 0.0698689956,
                    dexterity: 0.0524017467,
                    intelligence: 0.3493449782,
                    faith: 0.0305676856,
                    arcane: 0.03930131,
                },
            ),
        ]
    }
}
