//! Per-level stat growth.

use runeforge_types::character::CharacterProfile;
use runeforge_types::playstyle::Playstyle;
use runeforge_types::stats::Stat;

/// Points a stat gains at `level` under `weight`: `round(level × weight)`,
/// rounding half away from zero. Negative products count as zero.
pub fn stat_growth(level: u32, weight: f64) -> u32 {
    (f64::from(level) * weight).round() as u32
}

/// Add the playstyle's growth to every stat of `profile`, in place.
///
/// Deterministic in (level, weights, current stats). No other profile field
/// is touched.
pub fn apply_playstyle(playstyle: &Playstyle, profile: &mut CharacterProfile) {
    for stat in Stat::ALL {
        let growth = stat_growth(profile.level, playstyle.weights.get(stat));
        let value = profile.stats.get_mut(stat);
        *value = value.saturating_add(growth);
    }
    tracing::debug!(
        playstyle = %playstyle.slug,
        level = profile.level,
        total = profile.stats.total(),
        "Applied playstyle"
    );
}
