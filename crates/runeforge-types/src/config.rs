//! Configuration types for Runeforge.
//!
//! `AdvisorConfig` represents the optional `config.toml` in the data
//! directory. Every field has a default, and the defaults reproduce the
//! stock behavior: the public fan API and B/C weapon grades.

use serde::{Deserialize, Serialize};

use crate::playstyle::Playstyle;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvisorConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub recommendation: RecommendationConfig,

    /// Extra playstyles. An entry whose slug matches a built-in replaces it.
    #[serde(default)]
    pub playstyles: Vec<Playstyle>,
}

/// Where and how to fetch catalog data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Sent as the `limit` query parameter when set.
    #[serde(default)]
    pub limit: Option<u32>,
}

fn default_base_url() -> String {
    "https://eldenring.fanapis.com/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            limit: None,
        }
    }
}

/// Weapon suggestion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Grade letters a scaling relation must contain (substring match).
    #[serde(default = "default_accepted_grades")]
    pub accepted_grades: Vec<String>,
}

fn default_accepted_grades() -> Vec<String> {
    vec!["B".to_string(), "C".to_string()]
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            accepted_grades: default_accepted_grades(),
        }
    }
}
