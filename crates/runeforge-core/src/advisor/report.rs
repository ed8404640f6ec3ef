//! Plain-text rendering of weapon suggestions.

use std::fmt;

use runeforge_types::weapon::{AttributeAmount, Weapon};

use super::recommend::Recommendation;

/// Printed in place of a report when no weapon matched.
pub const NO_WEAPONS_FOUND: &str = "No weapons found";

/// Shown for an amount the catalog left empty.
pub const MISSING_AMOUNT: &str = "-";

/// Multi-line report for one suggested weapon.
pub struct WeaponReport<'a>(pub &'a Weapon);

impl fmt::Display for WeaponReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weapon = self.0;
        writeln!(f, "A good weapon you can use is the {}", weapon.name)?;
        writeln!(f)?;
        writeln!(f, "Description:")?;
        writeln!(f, "{}", weapon.description)?;
        writeln!(f)?;
        writeln!(f, "Attack:")?;
        writeln!(f, "{}", join_amounts(&weapon.attack))?;
        writeln!(f)?;
        writeln!(f, "Defence:")?;
        writeln!(f, "{}", join_amounts(&weapon.defence))?;
        writeln!(f)?;
        writeln!(f, "Required attributes:")?;
        writeln!(f, "{}", join_amounts(&weapon.required_attributes))?;
        writeln!(f)?;
        writeln!(f, "Scales with:")?;
        let scaling = weapon
            .scales_with
            .iter()
            .map(|relation| format!("{}: {}", relation.stat, relation.grade))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{scaling}")
    }
}

/// Every weapon report separated by a blank line, or [`NO_WEAPONS_FOUND`].
impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.weapons.is_empty() {
            return write!(f, "{NO_WEAPONS_FOUND}");
        }
        for (i, weapon) in self.weapons.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f)?;
            }
            write!(f, "{}", WeaponReport(weapon))?;
        }
        Ok(())
    }
}

fn join_amounts(amounts: &[AttributeAmount]) -> String {
    amounts
        .iter()
        .map(|a| match a.amount {
            Some(amount) => format!("{}: {amount}", a.name),
            None => format!("{}: {MISSING_AMOUNT}", a.name),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
