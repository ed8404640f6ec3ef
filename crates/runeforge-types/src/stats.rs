//! Character attributes and the per-attribute containers built on them.
//!
//! Every character carries the same eight attributes. [`StatBlock`] holds
//! their integer values and [`StatWeights`] holds the relative investment a
//! playstyle puts into each one per level.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// One of the eight character attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Vigor,
    Mind,
    Endurance,
    Strength,
    Dexterity,
    Intelligence,
    Faith,
    Arcane,
}

impl Stat {
    /// All attributes in canonical order.
    pub const ALL: [Stat; 8] = [
        Stat::Vigor,
        Stat::Mind,
        Stat::Endurance,
        Stat::Strength,
        Stat::Dexterity,
        Stat::Intelligence,
        Stat::Faith,
        Stat::Arcane,
    ];

    /// Lowercase key used by the class catalog and in JSON output.
    pub fn key(self) -> &'static str {
        match self {
            Stat::Vigor => "vigor",
            Stat::Mind => "mind",
            Stat::Endurance => "endurance",
            Stat::Strength => "strength",
            Stat::Dexterity => "dexterity",
            Stat::Intelligence => "intelligence",
            Stat::Faith => "faith",
            Stat::Arcane => "arcane",
        }
    }

    /// Three-letter abbreviation used by the weapon catalog's scaling lists
    /// ("Str", "Dex", ...). This is the filter token for weapon suggestions.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Stat::Vigor => "Vig",
            Stat::Mind => "Min",
            Stat::Endurance => "End",
            Stat::Strength => "Str",
            Stat::Dexterity => "Dex",
            Stat::Intelligence => "Int",
            Stat::Faith => "Fai",
            Stat::Arcane => "Arc",
        }
    }

    /// Whether weapon damage can scale with this attribute.
    pub fn is_scaling(self) -> bool {
        matches!(
            self,
            Stat::Strength | Stat::Dexterity | Stat::Intelligence | Stat::Faith | Stat::Arcane
        )
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Stat {
    type Err = String;

    /// Accepts either the full key ("strength") or the abbreviation ("str"),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Stat::ALL
            .into_iter()
            .find(|stat| stat.key() == lowered || stat.abbreviation().to_lowercase() == lowered)
            .ok_or_else(|| format!("invalid stat: '{s}'"))
    }
}

/// Integer values for all eight attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub vigor: u32,
    pub mind: u32,
    pub endurance: u32,
    pub strength: u32,
    pub dexterity: u32,
    pub intelligence: u32,
    pub faith: u32,
    pub arcane: u32,
}

impl StatBlock {
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Vigor => self.vigor,
            Stat::Mind => self.mind,
            Stat::Endurance => self.endurance,
            Stat::Strength => self.strength,
            Stat::Dexterity => self.dexterity,
            Stat::Intelligence => self.intelligence,
            Stat::Faith => self.faith,
            Stat::Arcane => self.arcane,
        }
    }

    pub fn get_mut(&mut self, stat: Stat) -> &mut u32 {
        match stat {
            Stat::Vigor => &mut self.vigor,
            Stat::Mind => &mut self.mind,
            Stat::Endurance => &mut self.endurance,
            Stat::Strength => &mut self.strength,
            Stat::Dexterity => &mut self.dexterity,
            Stat::Intelligence => &mut self.intelligence,
            Stat::Faith => &mut self.faith,
            Stat::Arcane => &mut self.arcane,
        }
    }

    /// Iterate `(stat, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, u32)> + '_ {
        Stat::ALL.into_iter().map(move |stat| (stat, self.get(stat)))
    }

    /// Sum of all attribute values.
    pub fn total(&self) -> u32 {
        self.iter().map(|(_, value)| value).sum()
    }
}

/// Per-level investment weights for all eight attributes.
///
/// Weights of a well-formed table are non-negative and sum to roughly 1.0.
/// Omitted weights deserialize as 0.0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatWeights {
    pub vigor: f64,
    pub mind: f64,
    pub endurance: f64,
    pub strength: f64,
    pub dexterity: f64,
    pub intelligence: f64,
    pub faith: f64,
    pub arcane: f64,
}

impl StatWeights {
    pub fn get(&self, stat: Stat) -> f64 {
        match stat {
            Stat::Vigor => self.vigor,
            Stat::Mind => self.mind,
            Stat::Endurance => self.endurance,
            Stat::Strength => self.strength,
            Stat::Dexterity => self.dexterity,
            Stat::Intelligence => self.intelligence,
            Stat::Faith => self.faith,
            Stat::Arcane => self.arcane,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stat, f64)> + '_ {
        Stat::ALL.into_iter().map(move |stat| (stat, self.get(stat)))
    }

    pub fn sum(&self) -> f64 {
        self.iter().map(|(_, weight)| weight).sum()
    }
}
