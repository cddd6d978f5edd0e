pub mod loader;
pub mod power;
pub mod repository;
pub mod squaddie;
pub mod validate;

pub use loader::{load_powers, load_roster, load_squaddies, LoadError, SquaddieRecord};
pub use power::{
    AttackEffect, CriticalEffect, HealingAdjustment, HealingEffect, Power, PowerType,
    CRITICAL_HIT_THRESHOLD_BASE,
};
pub use repository::{PowerRepository, RepositoryError, SquaddieRepository};
pub use squaddie::{Affiliation, Squaddie};
pub use validate::{validate_roster, ValidationDiagnostic, ValidationReport, ValidationSeverity};
