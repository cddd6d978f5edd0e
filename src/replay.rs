//! Scripted replay driver: a fixed sequence of (user, power, targets, seed)
//! actions resolved against loaded repositories. Same script, same roster,
//! same seeds — same results.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::combat::commit::{commit_forecast, ActionResult};
use crate::combat::dice::SeededDice;
use crate::combat::forecast::{forecast_action, ActionSetup};
use crate::data::loader::LoadError;
use crate::data::repository::{PowerRepository, RepositoryError, SquaddieRepository};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedAction {
    pub user_id: String,
    pub power_id: String,
    pub target_ids: Vec<String>,
    pub seed: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Script {
    pub actions: Vec<ScriptedAction>,
}

/// Load a script from a YAML file.
pub fn load_script(path: impl AsRef<Path>) -> Result<Script, LoadError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&raw)?)
}

/// Run every scripted action in order, forecasting against live state and
/// committing with a fresh seeded roller per action. The first lookup
/// failure aborts the remainder of the script.
pub fn run_script(
    script: &Script,
    squaddies: &mut SquaddieRepository,
    powers: &PowerRepository,
) -> Result<Vec<ActionResult>, RepositoryError> {
    let mut results = Vec::with_capacity(script.actions.len());
    for action in &script.actions {
        let setup = ActionSetup {
            user_id: action.user_id.clone(),
            power_id: action.power_id.clone(),
            target_ids: action.target_ids.clone(),
            is_counter_attack: false,
        };
        let forecast = forecast_action(&setup, squaddies, powers)?;
        let mut dice = SeededDice::new(action.seed);
        results.push(commit_forecast(&forecast, squaddies, powers, &mut dice)?);
    }
    Ok(results)
}
