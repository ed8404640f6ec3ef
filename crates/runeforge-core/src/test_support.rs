//! Shared fixtures for unit tests.

use std::collections::BTreeMap;

use runeforge_types::character::ClassEntry;
use runeforge_types::weapon::{AttributeAmount, ScalingRelation, Weapon};

/// The "Hero" class with string-encoded stats, as the class catalog sends it.
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
        description: Some("A stalwart hero".to_string()),
        stats,
    }
}

fn amounts(pairs: &[(&str, f64)]) -> Vec<AttributeAmount> {
    pairs
        .iter()
        .map(|(name, amount)| AttributeAmount {
            name: name.to_string(),
            amount: Some(*amount),
        })
        .collect()
}

/// A weapon with the given scaling relations and fixed attack/defence.
pub fn weapon(name: &str, scaling: &[(&str, &str)]) -> Weapon {
    Weapon {
        name: name.to_string(),
        description: format!("The {name}."),
        category: None,
        attack: amounts(&[("Phy", 110.0), ("Mag", 0.0)]),
        defence: amounts(&[("Phy", 42.0)]),
        required_attributes: amounts(&[("Str", 12.0)]),
        scales_with: scaling
            .iter()
            .map(|(stat, grade)| ScalingRelation {
                stat: stat.to_string(),
                grade: grade.to_string(),
            })
            .collect(),
    }
}

/// Small weapon catalog. Dex/B-C: Uchigatana, Rapier, Moonveil. Int: Moonveil.
/// Str: Claymore, Zweihander. Nothing scales with Arc.
pub fn sample_weapons() -> Vec<Weapon> {
    vec![
        weapon("Claymore", &[("Str", "C"), ("Dex", "D")]),
        weapon("Uchigatana", &[("Str", "D"), ("Dex", "C")]),
        weapon("Zweihander", &[("Str", "C"), ("Dex", "D")]),
        weapon("Rapier", &[("Str", "E"), ("Dex", "B+")]),
        weapon("Moonveil", &[("Str", "E"), ("Dex", "C"), ("Int", "B")]),
        weapon("Club", &[("Str", "D")]),
    ]
}
