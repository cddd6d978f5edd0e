//! Defender context: what a target opposes a specific power with, read from
//! live squaddie state at calculation time.

use serde::Serialize;

use crate::data::power::PowerType;
use crate::data::repository::{PowerRepository, RepositoryError, SquaddieRepository};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefenderContext {
    pub target_id: String,
    /// Dodge against physical powers, Deflect against spells.
    pub total_to_hit_penalty: i32,
    /// 0 against spells: spell damage bypasses armor entirely.
    pub armor_resistance: i32,
    pub barrier_resistance: i32,
    pub current_hit_points: i32,
}

/// Derive the defender context for one power use. Pure read; unresolvable
/// ids propagate.
pub fn defender_context(
    target_id: &str,
    power_id: &str,
    squaddies: &SquaddieRepository,
    powers: &PowerRepository,
) -> Result<DefenderContext, RepositoryError> {
    let target = squaddies.get(target_id)?;
    let power = powers.get(power_id)?;

    let (total_to_hit_penalty, armor_resistance) = match power.power_type {
        PowerType::Physical => (target.dodge, target.armor),
        PowerType::Spell => (target.deflect, 0),
    };

    Ok(DefenderContext {
        target_id: target_id.to_string(),
        total_to_hit_penalty,
        armor_resistance,
        barrier_resistance: target.current_barrier,
        current_hit_points: target.current_hit_points,
    })
}
