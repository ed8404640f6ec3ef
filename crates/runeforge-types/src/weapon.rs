use serde::{Deserialize, Serialize};

/// A weapon from the weapon catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub attack: Vec<AttributeAmount>,
    #[serde(default)]
    pub defence: Vec<AttributeAmount>,
    #[serde(default)]
    pub required_attributes: Vec<AttributeAmount>,
    #[serde(default)]
    pub scales_with: Vec<ScalingRelation>,
}

/// A named numeric attribute, e.g. `Phy: 110` or `Str: 12`.
///
/// `amount` is `None` when the catalog has no usable value for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeAmount {
    pub name: String,
    #[serde(default)]
    pub amount: Option<f64>,
}

/// How strongly a weapon's damage benefits from one stat.
///
/// `stat` is the catalog's label ("Str", "Dex", ...) and `grade` the letter
/// rating (S/A/B/C/D/E, possibly suffixed with + or -).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalingRelation {
    pub stat: String,
    pub grade: String,
}
