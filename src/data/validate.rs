//! Roster diagnostics: referential and invariant checks over loaded
//! squaddie/power definitions. Read by the CLI `validate` command.

use std::collections::HashSet;
use std::fmt;

use crate::data::power::Power;
use crate::data::squaddie::Squaddie;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.context, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }
}

/// Check a roster for definition defects. Lookup-level problems (dangling
/// power references) are errors; suspicious-but-playable definitions are
/// warnings.
pub fn validate_roster(squaddies: &[Squaddie], powers: &[Power]) -> ValidationReport {
    let mut report = ValidationReport::default();

    let mut power_ids = HashSet::new();
    for power in powers {
        let context = format!("power '{}'", power.id);
        if power.id.is_empty() {
            report.push(ValidationSeverity::Error, &context, "empty id");
        }
        if power.name.is_empty() {
            report.push(ValidationSeverity::Error, &context, "empty name");
        }
        if !power_ids.insert(power.id.clone()) {
            report.push(ValidationSeverity::Error, &context, "duplicate id");
        }
        if power.attack.is_none() && power.healing.is_none() {
            report.push(
                ValidationSeverity::Warning,
                &context,
                "has neither an attack nor a healing effect",
            );
        }
        if let Some(attack) = &power.attack {
            if attack.can_counter_attack && attack.counter_attack_to_hit_penalty >= 0 {
                report.push(
                    ValidationSeverity::Warning,
                    &context,
                    "counter-attacks without a negative to-hit penalty",
                );
            }
        }
    }

    let mut squaddie_ids = HashSet::new();
    for squaddie in squaddies {
        let context = format!("squaddie '{}'", squaddie.id);
        if squaddie.id.is_empty() {
            report.push(ValidationSeverity::Error, &context, "empty id");
        }
        if squaddie.name.is_empty() {
            report.push(ValidationSeverity::Error, &context, "empty name");
        }
        if !squaddie_ids.insert(squaddie.id.clone()) {
            report.push(ValidationSeverity::Error, &context, "duplicate id");
        }
        if squaddie.max_hit_points <= 0 {
            report.push(ValidationSeverity::Error, &context, "max hit points must be positive");
        }
        if squaddie.current_hit_points > squaddie.max_hit_points {
            report.push(
                ValidationSeverity::Error,
                &context,
                "current hit points exceed the maximum",
            );
        }
        if squaddie.current_barrier > squaddie.max_barrier {
            report.push(
                ValidationSeverity::Error,
                &context,
                "current barrier exceeds the maximum",
            );
        }
        for owned in &squaddie.powers {
            if !power_ids.contains(owned) {
                report.push(
                    ValidationSeverity::Error,
                    &context,
                    format!("owned power '{owned}' is not defined"),
                );
            }
        }
        if let Some(equipped) = &squaddie.equipped_power {
            if !power_ids.contains(equipped) {
                report.push(
                    ValidationSeverity::Error,
                    &context,
                    format!("equipped power '{equipped}' is not defined"),
                );
            } else if !squaddie.owns_power(equipped) {
                report.push(
                    ValidationSeverity::Warning,
                    &context,
                    format!("equipped power '{equipped}' is not in the owned list"),
                );
            }
        }
    }

    report
}
