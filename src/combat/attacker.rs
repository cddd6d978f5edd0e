//! Attacker context: the totals one squaddie brings to a single use of a
//! power. Computed fresh per forecast; never persisted.

use serde::Serialize;

use crate::data::power::PowerType;
use crate::data::repository::{PowerRepository, RepositoryError, SquaddieRepository};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttackerContext {
    pub user_id: String,
    pub power_id: String,
    pub damage_type: PowerType,
    pub total_to_hit_bonus: i32,
    pub raw_damage: i32,
    pub extra_barrier_burn: i32,
    pub is_counter_attack: bool,
    pub can_counter_attack: bool,
    pub counter_attack_to_hit_penalty: i32,
    pub can_critically_hit: bool,
    pub critical_hit_threshold: i32,
    /// Raw damage doubled (plus any critical bonus damage), before armor or
    /// barrier absorption. 0 when the power cannot critical.
    pub critical_raw_damage: i32,
}

/// Derive the attacker context for one power use. Pure read; unresolvable
/// ids propagate.
pub fn attacker_context(
    user_id: &str,
    power_id: &str,
    is_counter_attack: bool,
    squaddies: &SquaddieRepository,
    powers: &PowerRepository,
) -> Result<AttackerContext, RepositoryError> {
    let user = squaddies.get(user_id)?;
    let power = powers.get(power_id)?;
    let effect = power.attack.unwrap_or_default();

    let offense_stat = match power.power_type {
        PowerType::Physical => user.strength,
        PowerType::Spell => user.mind,
    };
    let raw_damage = effect.damage_bonus + offense_stat;

    let mut total_to_hit_bonus = effect.to_hit_bonus + user.aim;
    if is_counter_attack {
        // Stored as a signed modifier (typically negative), applied once.
        total_to_hit_bonus += effect.counter_attack_to_hit_penalty;
    }

    let critical_hit_threshold = power.critical_hit_threshold();
    let can_critically_hit = critical_hit_threshold != 0;
    let critical_raw_damage = if can_critically_hit {
        let bonus = effect.critical.map(|critical| critical.bonus_damage).unwrap_or(0);
        2 * raw_damage + bonus
    } else {
        0
    };

    Ok(AttackerContext {
        user_id: user_id.to_string(),
        power_id: power_id.to_string(),
        damage_type: power.power_type,
        total_to_hit_bonus,
        raw_damage,
        extra_barrier_burn: effect.extra_barrier_burn,
        is_counter_attack,
        can_counter_attack: effect.can_counter_attack,
        counter_attack_to_hit_penalty: effect.counter_attack_to_hit_penalty,
        can_critically_hit,
        critical_hit_threshold,
        critical_raw_damage,
    })
}
