//! Versus calculator: combines attacker and defender contexts into damage
//! distributions, net to-hit numbers, and expected-value summaries.
//!
//! Distribution ordering is the core invariant: barrier absorbs main damage
//! first, extra barrier burn consumes only the barrier that remains, then
//! armor (physical only), then health.

use serde::Serialize;

use crate::combat::attacker::AttackerContext;
use crate::combat::chance::{critical_hit_chance, to_hit_chance};
use crate::combat::defender::DefenderContext;

/// How one amount of raw damage splits across barrier, armor, and health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DamageDistribution {
    pub damage_absorbed_by_barrier: i32,
    pub damage_absorbed_by_armor: i32,
    /// Portion of the extra barrier burn the barrier actually paid.
    pub extra_barrier_burnt: i32,
    /// Barrier lost in total: absorbed main damage plus extra burn. Never
    /// exceeds the barrier the defender had.
    pub total_barrier_burnt: i32,
    /// Damage reaching hit points.
    pub damage_dealt: i32,
    pub is_fatal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersusContext {
    pub net_to_hit_bonus: i32,
    /// Chance out of 36 the attack lands.
    pub to_hit_chance: i32,
    pub normal_damage: DamageDistribution,
    /// Chance out of 36 a landed hit criticals. 0 when the power cannot.
    pub critical_hit_chance: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical_hit_damage: Option<DamageDistribution>,
    /// to_hit_chance x normal health damage, a numerator over 36.
    pub expected_damage: i32,
    /// to_hit_chance x normal total barrier burnt, a numerator over 36.
    pub expected_barrier_burn: i32,
}

/// Split `raw_damage` plus `extra_barrier_burn` across the defender's
/// barrier, armor, and health. The defender context already carries 0 armor
/// against spells, so armor bypass falls out of the inputs.
pub fn distribute_damage(
    raw_damage: i32,
    extra_barrier_burn: i32,
    defender: &DefenderContext,
) -> DamageDistribution {
    let barrier = defender.barrier_resistance.max(0);
    let main_damage = raw_damage.max(0);

    let damage_absorbed_by_barrier = main_damage.min(barrier);
    let extra_barrier_burnt = extra_barrier_burn
        .max(0)
        .min(barrier - damage_absorbed_by_barrier);
    let total_barrier_burnt = damage_absorbed_by_barrier + extra_barrier_burnt;

    let past_barrier = main_damage - damage_absorbed_by_barrier;
    let damage_absorbed_by_armor = past_barrier.min(defender.armor_resistance.max(0));
    let damage_dealt = past_barrier - damage_absorbed_by_armor;

    DamageDistribution {
        damage_absorbed_by_barrier,
        damage_absorbed_by_armor,
        extra_barrier_burnt,
        total_barrier_burnt,
        damage_dealt,
        is_fatal: damage_dealt >= defender.current_hit_points,
    }
}

/// Combine both contexts into the versus view the forecast carries.
pub fn versus_context(attacker: &AttackerContext, defender: &DefenderContext) -> VersusContext {
    let net_to_hit_bonus = attacker.total_to_hit_bonus - defender.total_to_hit_penalty;
    let to_hit = to_hit_chance(net_to_hit_bonus);

    let normal_damage = distribute_damage(attacker.raw_damage, attacker.extra_barrier_burn, defender);

    let (critical_chance, critical_hit_damage) = if attacker.can_critically_hit {
        (
            critical_hit_chance(attacker.critical_hit_threshold),
            Some(distribute_damage(
                attacker.critical_raw_damage,
                attacker.extra_barrier_burn,
                defender,
            )),
        )
    } else {
        (0, None)
    };

    VersusContext {
        net_to_hit_bonus,
        to_hit_chance: to_hit,
        normal_damage,
        critical_hit_chance: critical_chance,
        critical_hit_damage,
        expected_damage: to_hit * normal_damage.damage_dealt,
        expected_barrier_burn: to_hit * normal_damage.total_barrier_burnt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defender(barrier: i32, armor: i32, hit_points: i32) -> DefenderContext {
        DefenderContext {
            target_id: "target".to_string(),
            total_to_hit_penalty: 0,
            armor_resistance: armor,
            barrier_resistance: barrier,
            current_hit_points: hit_points,
        }
    }

    #[test]
    fn barrier_pays_main_damage_before_extra_burn() {
        // Barrier 7 against raw 6 with 2 extra burn: main damage consumes 6,
        // only 1 barrier remains for the burn, nothing reaches health.
        let distribution = distribute_damage(6, 2, &defender(7, 0, 5));
        assert_eq!(distribution.damage_absorbed_by_barrier, 6);
        assert_eq!(distribution.extra_barrier_burnt, 1);
        assert_eq!(distribution.total_barrier_burnt, 7);
        assert_eq!(distribution.damage_dealt, 0);
        assert!(!distribution.is_fatal);
    }

    #[test]
    fn full_absorption_deals_no_health_damage() {
        let distribution = distribute_damage(3, 2, &defender(9, 0, 5));
        assert_eq!(distribution.total_barrier_burnt, 5);
        assert_eq!(distribution.damage_dealt, 0);
    }

    #[test]
    fn spillover_passes_through_armor_to_health() {
        let distribution = distribute_damage(6, 0, &defender(2, 1, 5));
        assert_eq!(distribution.damage_absorbed_by_barrier, 2);
        assert_eq!(distribution.damage_absorbed_by_armor, 1);
        assert_eq!(distribution.damage_dealt, 3);
    }

    #[test]
    fn burnt_barrier_never_exceeds_the_pool() {
        for barrier in 0..6 {
            for extra in 0..6 {
                for raw in 0..6 {
                    let distribution = distribute_damage(raw, extra, &defender(barrier, 0, 10));
                    assert!(distribution.total_barrier_burnt <= barrier);
                    assert_eq!(
                        distribution.total_barrier_burnt,
                        distribution.damage_absorbed_by_barrier + distribution.extra_barrier_burnt
                    );
                    if raw + extra <= barrier {
                        assert_eq!(distribution.damage_dealt, 0);
                    }
                }
            }
        }
    }

    #[test]
    fn fatal_flag_tracks_snapshot_hit_points() {
        assert!(distribute_damage(5, 0, &defender(0, 0, 5)).is_fatal);
        assert!(!distribute_damage(4, 0, &defender(0, 0, 5)).is_fatal);
    }
}
