//! In-memory repositories keyed by id. Calculators re-fetch entries by id at
//! each step boundary instead of holding references across steps.

use std::collections::HashMap;

use thiserror::Error;

use crate::data::power::Power;
use crate::data::squaddie::Squaddie;

/// Lookup failure: the referenced id is a caller/data bug, not a transient
/// condition, so it propagates immediately with no retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("squaddie '{0}' is not in the repository")]
    SquaddieNotFound(String),
    #[error("power '{0}' is not in the repository")]
    PowerNotFound(String),
}

#[derive(Debug, Clone, Default)]
pub struct SquaddieRepository {
    by_id: HashMap<String, Squaddie>,
}

impl SquaddieRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_squaddies(squaddies: impl IntoIterator<Item = Squaddie>) -> Self {
        let mut repository = Self::new();
        for squaddie in squaddies {
            repository.add(squaddie);
        }
        repository
    }

    /// Insert a squaddie, replacing any previous entry with the same id.
    pub fn add(&mut self, squaddie: Squaddie) {
        self.by_id.insert(squaddie.id.clone(), squaddie);
    }

    pub fn get(&self, id: &str) -> Result<&Squaddie, RepositoryError> {
        self.by_id
            .get(id)
            .ok_or_else(|| RepositoryError::SquaddieNotFound(id.to_string()))
    }

    pub fn get_mut(&mut self, id: &str) -> Result<&mut Squaddie, RepositoryError> {
        self.by_id
            .get_mut(id)
            .ok_or_else(|| RepositoryError::SquaddieNotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Squaddie> {
        self.by_id.values()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PowerRepository {
    by_id: HashMap<String, Power>,
}

impl PowerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_powers(powers: impl IntoIterator<Item = Power>) -> Self {
        let mut repository = Self::new();
        for power in powers {
            repository.add(power);
        }
        repository
    }

    pub fn add(&mut self, power: Power) {
        self.by_id.insert(power.id.clone(), power);
    }

    pub fn get(&self, id: &str) -> Result<&Power, RepositoryError> {
        self.by_id
            .get(id)
            .ok_or_else(|| RepositoryError::PowerNotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Power> {
        self.by_id.values()
    }
}
