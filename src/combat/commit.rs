//! Commit engine: rolls dice against a previously computed forecast and
//! applies the outcome to live squaddie state. Uses exactly the numbers the
//! forecast previewed; the only live re-checks are counter-attacker liveness
//! and the heal cap.

use serde::Serialize;

use crate::combat::dice::DiceRoller;
use crate::combat::forecast::{ActionSetup, Calculation, Forecast};
use crate::combat::versus::DamageDistribution;
use crate::data::repository::{PowerRepository, RepositoryError, SquaddieRepository};

/// Post-dice outcome of one leg of an action (primary or counter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultPerTarget {
    pub user_id: String,
    pub power_id: String,
    pub target_id: String,
    pub is_counter_attack: bool,
    pub attack_roll: i32,
    pub defend_roll: i32,
    pub attacker_total: i32,
    pub defender_total: i32,
    pub hit: bool,
    pub critical_hit: bool,
    /// Zeroed on a miss. Heals leave it zeroed and report through
    /// `hit_points_restored`.
    pub damage: DamageDistribution,
    pub hit_points_restored: i32,
}

/// Everything that happened when one forecast was committed. Owns its
/// per-target list; mutates the live squaddies it references without owning
/// them. Counter-attack entries always follow every primary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionResult {
    pub setup: ActionSetup,
    pub per_target: Vec<ResultPerTarget>,
}

/// Resolve a forecast: all primary targets first, then each surviving
/// counter-attacker, in forecast order. Unresolvable ids propagate and abort
/// the commit.
pub fn commit_forecast(
    forecast: &Forecast,
    squaddies: &mut SquaddieRepository,
    powers: &PowerRepository,
    dice: &mut dyn DiceRoller,
) -> Result<ActionResult, RepositoryError> {
    let mut per_target = Vec::new();

    for calculation in &forecast.calculations {
        per_target.push(resolve_calculation(calculation, squaddies, powers, dice)?);
    }

    // Counter-attacks resolve only after every primary attack has been
    // applied, against live state: a counter-attacker killed above is
    // skipped with no result entry.
    for calculation in &forecast.calculations {
        let Some(counter) = &calculation.counter_attack else {
            continue;
        };
        if squaddies.get(&counter.setup.user_id)?.is_dead() {
            continue;
        }
        per_target.push(resolve_calculation(counter, squaddies, powers, dice)?);
    }

    Ok(ActionResult {
        setup: forecast.setup.clone(),
        per_target,
    })
}

fn resolve_calculation(
    calculation: &Calculation,
    squaddies: &mut SquaddieRepository,
    powers: &PowerRepository,
    dice: &mut dyn DiceRoller,
) -> Result<ResultPerTarget, RepositoryError> {
    let setup = &calculation.setup;
    let target_id = setup
        .target_ids
        .first()
        .cloned()
        .unwrap_or_default();

    attempt_equip(&setup.user_id, &setup.power_id, squaddies, powers)?;

    let mut outcome = ResultPerTarget {
        user_id: setup.user_id.clone(),
        power_id: setup.power_id.clone(),
        target_id: target_id.clone(),
        is_counter_attack: setup.is_counter_attack,
        attack_roll: 0,
        defend_roll: 0,
        attacker_total: 0,
        defender_total: 0,
        hit: false,
        critical_hit: false,
        damage: DamageDistribution::default(),
        hit_points_restored: 0,
    };

    if let Some(attack) = &calculation.attack {
        let (attack_roll, defend_roll) = dice.roll_pair();
        let attacker_total = attack_roll + attack.attacker.total_to_hit_bonus;
        let defender_total = defend_roll + attack.defender.total_to_hit_penalty;
        let hit = attacker_total >= defender_total;
        let critical_hit = hit
            && attack.attacker.can_critically_hit
            && attacker_total >= defender_total + attack.attacker.critical_hit_threshold;

        let mut damage = if critical_hit {
            attack
                .versus
                .critical_hit_damage
                .unwrap_or(attack.versus.normal_damage)
        } else if hit {
            attack.versus.normal_damage
        } else {
            DamageDistribution::default()
        };

        let target = squaddies.get_mut(&target_id)?;
        damage.is_fatal = hit && damage.damage_dealt >= target.current_hit_points;
        target.take_damage(damage.damage_dealt, damage.total_barrier_burnt);

        outcome.attack_roll = attack_roll;
        outcome.defend_roll = defend_roll;
        outcome.attacker_total = attacker_total;
        outcome.defender_total = defender_total;
        outcome.hit = hit;
        outcome.critical_hit = critical_hit;
        outcome.damage = damage;
    } else if let Some(healing) = &calculation.healing {
        // Healing never rolls and never misses; the live target caps it.
        let target = squaddies.get_mut(&target_id)?;
        outcome.hit = true;
        outcome.hit_points_restored = target.receive_healing(healing.raw_hit_points_restored);
    }

    Ok(outcome)
}

/// Pre-roll equip attempt. Failure is an expected branch, not an error: the
/// squaddie keeps its previous equipped power.
fn attempt_equip(
    user_id: &str,
    power_id: &str,
    squaddies: &mut SquaddieRepository,
    powers: &PowerRepository,
) -> Result<(), RepositoryError> {
    let power = powers.get(power_id)?;
    let user = squaddies.get_mut(user_id)?;
    user.equip_power(power);
    Ok(())
}
