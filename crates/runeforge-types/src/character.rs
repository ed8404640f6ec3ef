use serde::{Deserialize, Serialize};

use std::collections::BTreeMap;

use crate::stats::StatBlock;

/// A class record as the catalog reports it, before stat coercion.
///
/// Stat values arrive string-encoded ("14"); keys are the lowercase stat
/// names plus, usually, "level".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassEntry {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stats: BTreeMap<String, String>,
}

/// A playable starting class from the class catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterClass {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Level the class starts at, when the catalog reports one.
    #[serde(default)]
    pub starting_level: Option<u32>,
    pub stats: StatBlock,
}

/// Input for building a new character profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProfileRequest {
    pub name: String,
    pub level: u32,
    /// Must match a catalog class name exactly (case-sensitive).
    pub class_name: String,
}

/// A player character: a class's base stats plus any applied growth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterProfile {
    pub name: String,
    pub level: u32,
    pub class_name: String,
    pub stats: StatBlock,
}

impl CharacterProfile {
    /// One-line self introduction, e.g. "I am Li Yiu, a level 20 Hero".
    pub fn introduction(&self) -> String {
        format!(
            "I am {}, a level {} {}",
            self.name, self.level, self.class_name
        )
    }
}
