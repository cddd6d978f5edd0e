//! skirmish: deterministic forecast-and-commit resolution for squaddie
//! combat actions. Forecasts are pure predictions over repository snapshots;
//! commits roll dice and mutate live squaddie state.

pub mod cli;
pub mod combat;
pub mod data;
pub mod replay;
