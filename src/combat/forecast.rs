//! Forecast orchestrator: a pure, read-only prediction of one action,
//! including the chained counter-attack a target would answer with. Built
//! once per use and discarded after the commit engine consumes it.

use serde::Serialize;

use crate::combat::attacker::{attacker_context, AttackerContext};
use crate::combat::defender::{defender_context, DefenderContext};
use crate::combat::versus::{versus_context, VersusContext};
use crate::data::repository::{PowerRepository, RepositoryError, SquaddieRepository};

/// Who does what to whom. `is_counter_attack` applies the power's counter
/// penalty and stops further counter chaining.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionSetup {
    pub user_id: String,
    pub power_id: String,
    pub target_ids: Vec<String>,
    pub is_counter_attack: bool,
}

impl ActionSetup {
    /// Primary-action setup (not a counter-attack).
    pub fn new(user_id: &str, power_id: &str, target_ids: &[&str]) -> Self {
        ActionSetup {
            user_id: user_id.to_string(),
            power_id: power_id.to_string(),
            target_ids: target_ids.iter().map(|id| id.to_string()).collect(),
            is_counter_attack: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttackForecast {
    pub attacker: AttackerContext,
    pub defender: DefenderContext,
    pub versus: VersusContext,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealingForecast {
    /// Heal amount plus the healer's Mind adjustment, before capping.
    pub raw_hit_points_restored: i32,
    /// Raw amount capped by the target's missing hit points in the snapshot.
    pub forecasted_heal: i32,
}

/// Prediction for a single target, with the counter-attack it would answer
/// with nested one level deep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calculation {
    /// Single-target setup for this leg of the action; the commit engine
    /// reads user/power/target ids from here.
    pub setup: ActionSetup,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack: Option<AttackForecast>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub healing: Option<HealingForecast>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_attack: Option<Box<Calculation>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Forecast {
    pub setup: ActionSetup,
    pub calculations: Vec<Calculation>,
}

/// Forecast one action against a snapshot of repository state. No side
/// effects; unresolvable squaddie/power ids propagate.
pub fn forecast_action(
    setup: &ActionSetup,
    squaddies: &SquaddieRepository,
    powers: &PowerRepository,
) -> Result<Forecast, RepositoryError> {
    let power = powers.get(&setup.power_id)?.clone();
    squaddies.get(&setup.user_id)?;

    let mut calculations = Vec::with_capacity(setup.target_ids.len());
    for target_id in &setup.target_ids {
        let target_setup = ActionSetup {
            user_id: setup.user_id.clone(),
            power_id: setup.power_id.clone(),
            target_ids: vec![target_id.clone()],
            is_counter_attack: setup.is_counter_attack,
        };

        let attack = if power.is_attack() {
            let attacker = attacker_context(
                &setup.user_id,
                &setup.power_id,
                setup.is_counter_attack,
                squaddies,
                powers,
            )?;
            let defender = defender_context(target_id, &setup.power_id, squaddies, powers)?;
            let versus = versus_context(&attacker, &defender);
            Some(AttackForecast {
                attacker,
                defender,
                versus,
            })
        } else {
            None
        };

        let healing = match &power.healing {
            Some(effect) => {
                let user = squaddies.get(&setup.user_id)?;
                let target = squaddies.get(target_id)?;
                let raw = effect.hit_points_healed + effect.adjustment.mind_bonus(user.mind);
                Some(HealingForecast {
                    raw_hit_points_restored: raw,
                    forecasted_heal: raw.min(target.missing_hit_points()),
                })
            }
            None => None,
        };

        let counter_attack = if power.is_attack() && !setup.is_counter_attack {
            forecast_counter_attack(&setup.user_id, target_id, squaddies, powers)?
        } else {
            None
        };

        calculations.push(Calculation {
            setup: target_setup,
            attack,
            healing,
            counter_attack,
        });
    }

    Ok(Forecast {
        setup: setup.clone(),
        calculations,
    })
}

/// Nested counter forecast with the roles swapped, or None when the target
/// has no equipped power or its equipped power cannot counter. A dangling
/// equipped-power id is a lookup failure and propagates.
fn forecast_counter_attack(
    user_id: &str,
    target_id: &str,
    squaddies: &SquaddieRepository,
    powers: &PowerRepository,
) -> Result<Option<Box<Calculation>>, RepositoryError> {
    let target = squaddies.get(target_id)?;
    let Some(equipped_id) = target.equipped_power.clone() else {
        return Ok(None);
    };
    let equipped = powers.get(&equipped_id)?;
    if !equipped.can_counter_attack() {
        return Ok(None);
    }

    let counter_setup = ActionSetup {
        user_id: target_id.to_string(),
        power_id: equipped_id,
        target_ids: vec![user_id.to_string()],
        is_counter_attack: true,
    };
    let forecast = forecast_action(&counter_setup, squaddies, powers)?;
    Ok(forecast.calculations.into_iter().next().map(Box::new))
}
