//! Load squaddie and power definitions from YAML or JSON files.
//! Definition records normalize into entities (hit points default to max).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::power::Power;
use crate::data::repository::{PowerRepository, SquaddieRepository};
use crate::data::squaddie::{Affiliation, Squaddie};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unable to read definition file: {0}")]
    Io(#[from] std::io::Error),
    #[error("unable to parse yaml definitions: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unable to parse json definitions: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk squaddie record. `current_hit_points` defaults to the maximum and
/// `current_barrier` to 0 when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquaddieRecord {
    pub id: String,
    pub name: String,
    pub affiliation: Affiliation,
    #[serde(default)]
    pub aim: i32,
    #[serde(default)]
    pub strength: i32,
    #[serde(default)]
    pub mind: i32,
    #[serde(default)]
    pub dodge: i32,
    #[serde(default)]
    pub deflect: i32,
    #[serde(default)]
    pub armor: i32,
    #[serde(default)]
    pub max_barrier: i32,
    #[serde(default)]
    pub current_barrier: Option<i32>,
    pub max_hit_points: i32,
    #[serde(default)]
    pub current_hit_points: Option<i32>,
    #[serde(default)]
    pub powers: Vec<String>,
    #[serde(default)]
    pub equipped_power: Option<String>,
}

impl SquaddieRecord {
    pub fn into_squaddie(self) -> Squaddie {
        Squaddie {
            current_hit_points: self.current_hit_points.unwrap_or(self.max_hit_points),
            current_barrier: self.current_barrier.unwrap_or(0),
            id: self.id,
            name: self.name,
            affiliation: self.affiliation,
            aim: self.aim,
            strength: self.strength,
            mind: self.mind,
            dodge: self.dodge,
            deflect: self.deflect,
            armor: self.armor,
            max_barrier: self.max_barrier,
            max_hit_points: self.max_hit_points,
            powers: self.powers,
            equipped_power: self.equipped_power,
        }
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Load squaddie definitions from a YAML or JSON array, chosen by extension.
pub fn load_squaddies(path: impl AsRef<Path>) -> Result<Vec<Squaddie>, LoadError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let records: Vec<SquaddieRecord> = if is_yaml(path) {
        serde_yaml::from_str(&raw)?
    } else {
        serde_json::from_str(&raw)?
    };
    Ok(records
        .into_iter()
        .map(SquaddieRecord::into_squaddie)
        .collect())
}

/// Load power definitions from a YAML or JSON array, chosen by extension.
pub fn load_powers(path: impl AsRef<Path>) -> Result<Vec<Power>, LoadError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let powers: Vec<Power> = if is_yaml(path) {
        serde_yaml::from_str(&raw)?
    } else {
        serde_json::from_str(&raw)?
    };
    Ok(powers)
}

/// Build both repositories from a squaddie file and a power file.
pub fn load_roster(
    squaddie_path: impl AsRef<Path>,
    power_path: impl AsRef<Path>,
) -> Result<(SquaddieRepository, PowerRepository), LoadError> {
    let squaddies = SquaddieRepository::from_squaddies(load_squaddies(squaddie_path)?);
    let powers = PowerRepository::from_powers(load_powers(power_path)?);
    Ok((squaddies, powers))
}
