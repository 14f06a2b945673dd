use super::types::Weapon;
use crate::constants::TICKS_PER_SECOND;

/// Ranking metric for every sort and "best weapon" query.
///
/// Damage times uses per second, scaled by the crit multiplier and truncated:
/// `floor(damage / (use_time / 60) * (1 + crit / 100))`. Evaluated in
/// integer arithmetic so the truncation is exact.
pub fn calculate_dps(weapon: &Weapon) -> u32 {
    let numerator = weapon.damage as u128
        * TICKS_PER_SECOND as u128
        * (100 + weapon.critical_chance as u128);
    let denominator = weapon.use_time.get() as u128 * 100;
    (numerator / denominator).min(u32::MAX as u128) as u32
}

/// True when every required boss appears in `defeated_names`.
pub fn is_available<S: AsRef<str>>(weapon: &Weapon, defeated_names: &[S]) -> bool {
    weapon
        .requirements
        .iter()
        .all(|req| defeated_names.iter().any(|name| name.as_ref() == req.as_str()))
}

pub fn has_tag(weapon: &Weapon, tag: &str) -> bool {
    weapon.tags.iter().any(|t| t == tag)
}
